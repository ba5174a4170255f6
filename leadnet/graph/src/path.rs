//! A root-to-sink walk through the service graph, and its scores once filled
//! in by the scorer.

use serde::{Deserialize, Serialize};

/// An immutable-once-produced walk from the graph's entry to a sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub nodes: Vec<String>,
    pub base_score: f64,
    pub network_penalty: f64,
    pub final_score: f64,
}

impl Path {
    pub fn new(nodes: Vec<String>) -> Self {
        debug_assert!(!nodes.is_empty(), "a path always has at least one node");
        Self {
            nodes,
            base_score: 0.0,
            network_penalty: 0.0,
            final_score: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of service-to-service edges on this path.
    pub fn edge_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Consecutive `(upstream, downstream)` pairs along the path.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.nodes.windows(2).map(|w| (w[0].as_str(), w[1].as_str()))
    }

    /// Render as `A -> B -> C`, matching the reconciler's per-cycle log line.
    pub fn render(&self) -> String {
        self.nodes.join(" -> ")
    }
}
