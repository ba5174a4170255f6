//! The settings a `Reconciler` needs beyond the service graph itself, pulled
//! together from the sub-configs each collaborator crate already owns.

use leadnet_affinity::AffinityConfig;
use leadnet_metrics::PrometheusConfig;
use leadnet_scoring::ScoringConfig;

#[derive(Debug, Clone)]
pub struct ReconcilerConfig {
    /// Namespaces the workload and topology stores are queried across
    /// (§6 `namespaceSelector`).
    pub namespaces: Vec<String>,
    /// The service-identity label key shared by workloads and pods.
    pub service_label_key: String,
    pub scoring: ScoringConfig,
    pub affinity: AffinityConfig,
    pub prometheus: PrometheusConfig,
}
