//! The `MetricsSource` contract and its Prometheus-backed implementation.

use async_trait::async_trait;

use crate::error::{MetricsError, Result};
use crate::types::Sample;

/// Issues instant (non-range) queries against a telemetry backend.
#[async_trait]
pub trait MetricsSource: Send + Sync {
    async fn query(&self, query: &str) -> Result<Vec<Sample>>;
}

/// A `MetricsSource` backed by a Prometheus-compatible instant-query HTTP
/// API (`GET {url}/api/v1/query?query=...`).
pub struct PrometheusMetricsSource {
    client: reqwest::Client,
    base_url: String,
}

impl PrometheusMetricsSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl MetricsSource for PrometheusMetricsSource {
    async fn query(&self, query: &str) -> Result<Vec<Sample>> {
        let url = format!("{}/api/v1/query", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .get(&url)
            .query(&[("query", query)])
            .send()
            .await
            .map_err(|e| MetricsError::QueryFailed {
                query: query.to_string(),
                message: e.to_string(),
            })?;

        let body: PrometheusResponse = response.json().await.map_err(|e| MetricsError::MalformedResponse {
            message: format!("query {query:?}: {e}"),
        })?;

        if body.status != "success" {
            return Err(MetricsError::QueryFailed {
                query: query.to_string(),
                message: format!("backend reported status {:?}", body.status),
            });
        }

        Ok(body
            .data
            .result
            .into_iter()
            .filter_map(|row| {
                let (timestamp, value) = row.value;
                Some(Sample {
                    metric: row.metric,
                    timestamp,
                    value,
                })
            })
            .collect())
    }
}

#[derive(serde::Deserialize)]
struct PrometheusResponse {
    status: String,
    data: PrometheusData,
}

#[derive(serde::Deserialize)]
struct PrometheusData {
    result: Vec<PrometheusResultRow>,
}

#[derive(serde::Deserialize)]
struct PrometheusResultRow {
    metric: std::collections::HashMap<String, String>,
    /// Prometheus encodes `[timestamp, "value"]` as a two-element JSON array
    /// with a mixed number/string type; deserializing through `serde_json::Value`
    /// keeps this module free of a custom `Deserialize` impl for the pair.
    #[serde(deserialize_with = "deserialize_value_pair")]
    value: (f64, String),
}

fn deserialize_value_pair<'de, D>(deserializer: D) -> std::result::Result<(f64, String), D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: (f64, String) = serde::Deserialize::deserialize(deserializer)?;
    Ok(raw)
}
