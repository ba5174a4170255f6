//! Builds a `NetworkMatrix` from three instant queries (latency, drop-rate,
//! flow-rate), merging results by resolved node identity.

use leadnet_shared::NodeIdentity;

use crate::config::PrometheusConfig;
use crate::source::MetricsSource;
use crate::types::{NetworkMatrix, Sample};

/// Which of the three configured queries a batch of samples came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Latency,
    Drop,
    Flow,
}

/// Build the network matrix. Per §4.2's failure semantics: if one or two of
/// the three queries fail, the matrix is still returned with the
/// successful fields populated and the failed fields left zero; if all
/// three fail, `None` is returned and the caller proceeds with base-only
/// scoring.
pub async fn build_network_matrix(
    source: &dyn MetricsSource,
    config: &PrometheusConfig,
) -> Option<NetworkMatrix> {
    let mut matrix = NetworkMatrix::new();
    let mut successes = 0;

    for (field, query) in [
        (Field::Latency, &config.node_rtt_query),
        (Field::Drop, &config.node_drop_rate_query),
        (Field::Flow, &config.node_bandwidth_query),
    ] {
        match source.query(query).await {
            Ok(samples) => {
                successes += 1;
                merge_field(&mut matrix, field, samples, &config.excluded_instances);
            }
            Err(err) => {
                tracing::warn!(query = %query, error = %err, "metrics query failed, field left at zero");
            }
        }
    }

    if successes == 0 {
        tracing::warn!("all metrics queries failed; proceeding with base-only scoring");
        return None;
    }

    Some(matrix)
}

fn merge_field(matrix: &mut NetworkMatrix, field: Field, samples: Vec<Sample>, excluded: &[String]) {
    for sample in samples {
        let Some(identity) = NodeIdentity::from_sample_labels(sample.label("node"), sample.label("instance"))
        else {
            tracing::debug!("metrics sample missing identity labels, dropped");
            continue;
        };

        if excluded.iter().any(|ip| ip == identity.key()) {
            continue;
        }

        let Some(value) = sample.value_as_f64() else {
            tracing::debug!(value = %sample.value, "metrics sample value unparseable, dropped");
            continue;
        };

        let entry = matrix.entry(identity.key().to_string());
        match field {
            // Latency queries return seconds; the matrix stores milliseconds.
            Field::Latency => entry.avg_latency_ms = value * 1000.0,
            Field::Drop => entry.drop_rate = value,
            Field::Flow => entry.flow_rate = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;

    use super::*;
    use crate::error::{MetricsError, Result};

    struct FixedSource {
        latency: Result<Vec<Sample>>,
        drop: Result<Vec<Sample>>,
        flow: Result<Vec<Sample>>,
        latency_q: String,
        drop_q: String,
        flow_q: String,
    }

    #[async_trait]
    impl MetricsSource for FixedSource {
        async fn query(&self, query: &str) -> Result<Vec<Sample>> {
            if query == self.latency_q {
                self.latency.as_ref().map(|v| v.clone()).map_err(clone_err)
            } else if query == self.drop_q {
                self.drop.as_ref().map(|v| v.clone()).map_err(clone_err)
            } else if query == self.flow_q {
                self.flow.as_ref().map(|v| v.clone()).map_err(clone_err)
            } else {
                panic!("unexpected query {query}")
            }
        }
    }

    fn clone_err(e: &MetricsError) -> MetricsError {
        MetricsError::QueryFailed {
            query: "test".into(),
            message: e.to_string(),
        }
    }

    fn sample(node: &str, value: &str) -> Sample {
        let mut metric = HashMap::new();
        metric.insert("node".to_string(), node.to_string());
        Sample {
            metric,
            timestamp: 0.0,
            value: value.to_string(),
        }
    }

    fn config() -> PrometheusConfig {
        PrometheusConfig {
            url: "http://prom".to_string(),
            node_rtt_query: "latency".to_string(),
            node_drop_rate_query: "drop".to_string(),
            node_bandwidth_query: "flow".to_string(),
            sample_window: std::time::Duration::from_secs(60),
            excluded_instances: vec!["202.133.88.12".to_string()],
        }
    }

    #[tokio::test]
    async fn converts_latency_seconds_to_ms() {
        let cfg = config();
        let source = FixedSource {
            latency: Ok(vec![sample("n1", "0.02")]),
            drop: Ok(vec![]),
            flow: Ok(vec![]),
            latency_q: cfg.node_rtt_query.clone(),
            drop_q: cfg.node_drop_rate_query.clone(),
            flow_q: cfg.node_bandwidth_query.clone(),
        };
        let matrix = build_network_matrix(&source, &cfg).await.unwrap();
        assert_eq!(matrix.get("n1").unwrap().avg_latency_ms, 20.0);
    }

    #[tokio::test]
    async fn excludes_configured_instance() {
        let cfg = config();
        let mut metric = HashMap::new();
        metric.insert("instance".to_string(), "202.133.88.12:9962".to_string());
        let excluded_sample = Sample {
            metric,
            timestamp: 0.0,
            value: "99".to_string(),
        };
        let source = FixedSource {
            latency: Ok(vec![excluded_sample]),
            drop: Ok(vec![]),
            flow: Ok(vec![]),
            latency_q: cfg.node_rtt_query.clone(),
            drop_q: cfg.node_drop_rate_query.clone(),
            flow_q: cfg.node_bandwidth_query.clone(),
        };
        let matrix = build_network_matrix(&source, &cfg).await.unwrap();
        assert!(matrix.is_empty());
    }

    #[tokio::test]
    async fn partial_failure_leaves_field_zero() {
        let cfg = config();
        let source = FixedSource {
            latency: Ok(vec![sample("n1", "0.01")]),
            drop: Err(MetricsError::QueryFailed {
                query: "drop".into(),
                message: "timeout".into(),
            }),
            flow: Ok(vec![sample("n1", "5")]),
            latency_q: cfg.node_rtt_query.clone(),
            drop_q: cfg.node_drop_rate_query.clone(),
            flow_q: cfg.node_bandwidth_query.clone(),
        };
        let matrix = build_network_matrix(&source, &cfg).await.unwrap();
        let n1 = matrix.get("n1").unwrap();
        assert_eq!(n1.avg_latency_ms, 10.0);
        assert_eq!(n1.drop_rate, 0.0);
        assert_eq!(n1.flow_rate, 5.0);
    }

    #[tokio::test]
    async fn all_queries_failing_yields_none() {
        let cfg = config();
        let err = || MetricsError::QueryFailed {
            query: "x".into(),
            message: "down".into(),
        };
        let source = FixedSource {
            latency: Err(err()),
            drop: Err(err()),
            flow: Err(err()),
            latency_q: cfg.node_rtt_query.clone(),
            drop_q: cfg.node_drop_rate_query.clone(),
            flow_q: cfg.node_bandwidth_query.clone(),
        };
        assert!(build_network_matrix(&source, &cfg).await.is_none());
    }
}
