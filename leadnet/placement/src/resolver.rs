//! The placement resolver: answers "what node currently hosts service X",
//! queried lazily during scoring so it observes topology as of the score
//! step rather than the graph-enumeration step. This is acceptable because
//! placement is soft — a race yields at worst a sub-optimal weight, never an
//! incorrect graph (§4.3).

use dashmap::DashMap;
use leadnet_stores::TopologyStore;

/// Looks up the node hosting a service's pods, and the internal/external IP
/// of a node, caching the node name → IP mapping for the life of one
/// reconciliation cycle. Construct a fresh resolver per cycle; the cache is
/// never meant to outlive it.
pub struct PlacementResolver<'a> {
    topology: &'a dyn TopologyStore,
    namespaces: Vec<String>,
    service_label_key: String,
    ip_cache: DashMap<String, String>,
}

impl<'a> PlacementResolver<'a> {
    pub fn new(topology: &'a dyn TopologyStore, namespaces: Vec<String>, service_label_key: impl Into<String>) -> Self {
        Self {
            topology,
            namespaces,
            service_label_key: service_label_key.into(),
            ip_cache: DashMap::new(),
        }
    }

    /// The node name currently hosting some pod labeled for `service_id`, or
    /// `None` if no such pod is found in any configured namespace.
    pub async fn node_for_service(&self, service_id: &str) -> Option<String> {
        let selector = format!("{}={}", self.service_label_key, service_id);
        for namespace in &self.namespaces {
            match self.topology.list_pods(namespace, &selector).await {
                Ok(pods) => {
                    if let Some(pod) = pods.into_iter().find_map(|p| p.node_name) {
                        return Some(pod);
                    }
                }
                Err(err) => {
                    tracing::debug!(service_id, namespace, error = %err, "pod lookup failed for service");
                }
            }
        }
        None
    }

    /// The node's preferred IP (internal first, then external), cached for
    /// the life of this resolver.
    pub async fn ip_for_node(&self, node_name: &str) -> Option<String> {
        if let Some(ip) = self.ip_cache.get(node_name) {
            return Some(ip.clone());
        }
        let node = match self.topology.get_node(node_name).await {
            Ok(node) => node,
            Err(err) => {
                tracing::debug!(node_name, error = %err, "node lookup failed");
                return None;
            }
        };
        let ip = node.preferred_ip()?.to_string();
        self.ip_cache.insert(node_name.to_string(), ip.clone());
        Some(ip)
    }
}
