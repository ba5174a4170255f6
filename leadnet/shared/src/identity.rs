//! Node identity resolution.
//!
//! The placement resolver answers "what node hosts service X" with the
//! orchestrator's node name; the metrics backend's scrape targets answer with
//! `ip:port`. `NodeIdentity` is the tagged variant that lets the rest of the
//! workspace (the network matrix, the penalty lookup) treat the two keyings
//! uniformly instead of threading a cyclic back-reference between the
//! placement resolver and the metrics client.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A node identity as it is known to one data source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeIdentity {
    /// The orchestrator's node name.
    ByName(String),
    /// A bare host (the `instance` label with its `:port` suffix stripped).
    ByIp(String),
}

impl NodeIdentity {
    /// Resolve identity from a metrics sample's `node` and `instance` labels,
    /// per the node identity rule: prefer a non-empty `node` label, otherwise
    /// strip the `:port` suffix from `instance` and use the host portion,
    /// otherwise there is no identity to resolve.
    pub fn from_sample_labels(node: Option<&str>, instance: Option<&str>) -> Option<Self> {
        if let Some(node) = node {
            if !node.is_empty() {
                return Some(NodeIdentity::ByName(node.to_string()));
            }
        }
        let instance = instance?;
        if instance.is_empty() {
            return None;
        }
        let host = instance.rsplit_once(':').map(|(host, _)| host).unwrap_or(instance);
        if host.is_empty() {
            return None;
        }
        Some(NodeIdentity::ByIp(host.to_string()))
    }

    /// The bare string key, regardless of variant, for indexing the network
    /// matrix.
    pub fn key(&self) -> &str {
        match self {
            NodeIdentity::ByName(s) => s,
            NodeIdentity::ByIp(s) => s,
        }
    }
}

impl fmt::Display for NodeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeIdentity::ByName(s) => write!(f, "name:{s}"),
            NodeIdentity::ByIp(s) => write!(f, "ip:{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_node_label() {
        let id = NodeIdentity::from_sample_labels(Some("node-a"), Some("10.0.0.5:9100")).unwrap();
        assert_eq!(id, NodeIdentity::ByName("node-a".to_string()));
    }

    #[test]
    fn falls_back_to_stripped_instance() {
        let id = NodeIdentity::from_sample_labels(Some(""), Some("10.0.0.5:9100")).unwrap();
        assert_eq!(id, NodeIdentity::ByIp("10.0.0.5".to_string()));
    }

    #[test]
    fn falls_back_to_instance_without_port() {
        let id = NodeIdentity::from_sample_labels(None, Some("10.0.0.5")).unwrap();
        assert_eq!(id, NodeIdentity::ByIp("10.0.0.5".to_string()));
    }

    #[test]
    fn no_identity_when_both_empty() {
        assert!(NodeIdentity::from_sample_labels(Some(""), Some("")).is_none());
        assert!(NodeIdentity::from_sample_labels(None, None).is_none());
    }
}
