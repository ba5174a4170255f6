//! Metrics backend configuration (§6 `prometheus.*`).

use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrometheusConfig {
    pub url: String,
    #[serde(rename = "nodeRTTQuery")]
    pub node_rtt_query: String,
    pub node_drop_rate_query: String,
    pub node_bandwidth_query: String,
    #[serde(with = "humantime_serde_secs", default = "default_sample_window")]
    pub sample_window: Duration,
    /// Instance IPs excluded from the matrix regardless of which query
    /// surfaced them (e.g. the control-plane node). Not named in the
    /// distilled spec's config enumeration but required by §4.2's exclusion
    /// rule; kept alongside the other `prometheus.*` settings rather than as
    /// a separate top-level key since it only has meaning for this client.
    #[serde(default)]
    pub excluded_instances: Vec<String>,
}

fn default_sample_window() -> Duration {
    Duration::from_secs(60)
}

mod humantime_serde_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(d)?;
        Ok(Duration::from_secs(secs))
    }
}
