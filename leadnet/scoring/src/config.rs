//! Scoring weights and penalty thresholds (§6 `scoring.*`, `affinity.bad*`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringConfig {
    pub path_length_weight: f64,
    pub pod_count_weight: f64,
    pub service_edges_weight: f64,
    pub rps_weight: f64,
    pub net_latency_weight: f64,
    pub net_drop_weight: f64,
    pub net_bandwidth_weight: f64,
    pub bad_latency_ms: f64,
    pub bad_drop_rate: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            path_length_weight: 1.0,
            pod_count_weight: 1.0,
            service_edges_weight: 1.0,
            rps_weight: 0.0,
            net_latency_weight: 1.0,
            net_drop_weight: 1.0,
            net_bandwidth_weight: 1.0,
            bad_latency_ms: 5.0,
            bad_drop_rate: 0.01,
        }
    }
}
