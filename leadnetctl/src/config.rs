//! The top-level configuration tree (§6 "Configuration"), loaded from a YAML
//! file with an environment overlay via the `config` crate.

use leadnet_affinity::AffinityConfig;
use leadnet_graph::ServiceNode;
use leadnet_metrics::PrometheusConfig;
use leadnet_scoring::ScoringConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Namespaces the workload and topology stores are queried across.
    pub namespace_selector: Vec<String>,
    pub graph: GraphConfig,
    pub prometheus: PrometheusConfig,
    /// Base URL of the `WorkloadStore`/`TopologyStore` REST adapter (§1
    /// excludes a real orchestrator client; this points at whatever speaks
    /// [`leadnet_stores::http`]'s small JSON shape on the operator's side).
    /// Not one of the distilled spec's enumerated `prometheus.*`/`scoring.*`/
    /// `affinity.*` keys — required to wire a concrete `leadnetctl` binary at
    /// all, so it gets its own top-level key.
    pub api_url: String,
    #[serde(default)]
    pub scoring: ScoringConfig,
    pub affinity: AffinityConfig,
    /// The service-identity label key shared by workloads and pods
    /// (convention `io.kompose.service`, §6 "Labels & conventions").
    #[serde(default = "default_service_label_key")]
    pub service_label_key: String,
}

fn default_service_label_key() -> String {
    leadnet_shared::DEFAULT_SERVICE_LABEL_KEY.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    pub entry: String,
    pub services: Vec<ServiceNode>,
}

impl AppConfig {
    /// Load configuration from a YAML file at `path`.
    ///
    /// Only the process options (`--config`, `--once`, `--dry-run`,
    /// `--log-level`, §6) are environment-overridable, via `clap`'s `env`
    /// feature on [`crate::cli::Cli`] — not folded in here. `config-rs`'s
    /// environment source case-folds keys before merging, which would
    /// silently stop matching this tree's `camelCase` field names; rather
    /// than fight that, the YAML file is the sole source for `AppConfig`.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::new(path, config::FileFormat::Yaml))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn loads_a_minimal_config_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            r#"
namespaceSelector: ["default"]
graph:
  entry: a
  services:
    - name: a
      dependsOn: ["b"]
    - name: b
apiUrl: "http://workload-api:8081"
prometheus:
  url: "http://prom:9090"
  nodeRTTQuery: "latency"
  nodeDropRateQuery: "drop"
  nodeBandwidthQuery: "flow"
affinity:
  topPaths: 5
  minAffinityWeight: 50
  maxAffinityWeight: 100
  badLatencyMs: 12.5
  badDropRate: 0.02
"#
        )
        .unwrap();

        let config = AppConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.graph.entry, "a");
        assert_eq!(config.graph.services.len(), 2);
        assert_eq!(config.affinity.top_paths, 5);
        assert_eq!(config.service_label_key, "io.kompose.service");
        // §6 places the badness thresholds under `affinity.*`, even though
        // only the scorer consumes them.
        assert_eq!(config.affinity.bad_latency_ms, 12.5);
        assert_eq!(config.affinity.bad_drop_rate, 0.02);
    }
}
