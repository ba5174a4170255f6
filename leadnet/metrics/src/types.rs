//! The sample shape returned by an instant query, and the per-node matrix
//! built from it.

use std::collections::HashMap;

/// One result row from an instant query: a label set and a `(timestamp,
/// value)` pair, the value carried as the backend's string-encoded number.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub metric: HashMap<String, String>,
    pub timestamp: f64,
    pub value: String,
}

impl Sample {
    /// Parse the sample's string-encoded value as `f64`. A parse failure is
    /// a `DataQualityWarning`: the caller logs and skips the sample rather
    /// than failing the whole query.
    pub fn value_as_f64(&self) -> Option<f64> {
        self.value.parse().ok()
    }

    pub fn label(&self, key: &str) -> Option<&str> {
        self.metric.get(key).map(String::as_str)
    }
}

/// Per-node telemetry snapshot. A node absent from a particular query
/// retains zero for that field; see `NetworkMatrix` for the "absent from
/// every query" case.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NodeMetrics {
    pub avg_latency_ms: f64,
    pub drop_rate: f64,
    pub flow_rate: f64,
}

/// Aggregated per-node telemetry, built fresh per reconciliation cycle and
/// never mutated after that. Keyed by resolved node identity (§4.2): either
/// the orchestrator's node name or a bare host extracted from a scrape
/// target, whichever the sample's labels provided.
#[derive(Debug, Clone, Default)]
pub struct NetworkMatrix {
    nodes: HashMap<String, NodeMetrics>,
}

impl NetworkMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, node_key: &str) -> Option<&NodeMetrics> {
        self.nodes.get(node_key)
    }

    pub fn insert(&mut self, node_key: String, metrics: NodeMetrics) {
        self.nodes.insert(node_key, metrics);
    }

    pub fn entry(&mut self, node_key: String) -> &mut NodeMetrics {
        self.nodes.entry(node_key).or_default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }
}
