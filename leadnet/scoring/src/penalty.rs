//! Stage B: the per-path network penalty.
//!
//! Collects the set of distinct nodes hosting a path's services, then sums a
//! per-node penalty: each of latency, drop-rate, and congestion contributes
//! only once its measurement exceeds a configured "bad" threshold, scaled by
//! how far past that threshold it is. A node with no `NetworkMatrix` entry
//! contributes zero (§4.4, §8 "missing-metric neutrality").

use std::collections::HashSet;

use leadnet_graph::Path;
use leadnet_metrics::{NetworkMatrix, NodeMetrics};
use leadnet_placement::PlacementResolver;

use crate::config::ScoringConfig;

/// The per-node penalty contribution, given its telemetry.
fn per_node_penalty(nm: &NodeMetrics, config: &ScoringConfig) -> f64 {
    let mut penalty = 0.0;

    if nm.avg_latency_ms > config.bad_latency_ms {
        penalty += config.net_latency_weight * (nm.avg_latency_ms / config.bad_latency_ms);
    }
    if nm.drop_rate > config.bad_drop_rate {
        penalty += config.net_drop_weight * (nm.drop_rate / config.bad_drop_rate);
    }
    if nm.flow_rate > 0.0 {
        penalty += config.net_bandwidth_weight * nm.flow_rate;
    }

    penalty
}

/// Look up a node's telemetry in the matrix, trying its orchestrator node
/// name first and its resolved IP second (a `NetworkMatrix` built from
/// scrape-target samples may be keyed either way — see the node identity
/// rule in `leadnet-metrics`).
async fn lookup_node_metrics(
    node_name: &str,
    matrix: &NetworkMatrix,
    resolver: &PlacementResolver<'_>,
) -> Option<NodeMetrics> {
    if let Some(nm) = matrix.get(node_name) {
        return Some(*nm);
    }
    let ip = resolver.ip_for_node(node_name).await?;
    matrix.get(&ip).copied()
}

/// Every distinct node hosting a service on `path`, resolved via the
/// placement resolver. Services whose node can't be resolved contribute no
/// entry (and so no penalty, per the reconciler's failure semantics, §4.7).
async fn distinct_hosting_nodes(path: &Path, resolver: &PlacementResolver<'_>) -> HashSet<String> {
    let services: HashSet<&str> = path.nodes.iter().map(String::as_str).collect();
    let mut nodes = HashSet::new();
    for service_id in services {
        if let Some(node) = resolver.node_for_service(service_id).await {
            nodes.insert(node);
        }
    }
    nodes
}

/// Compute the network penalty for one path.
pub async fn network_penalty(
    path: &Path,
    resolver: &PlacementResolver<'_>,
    matrix: Option<&NetworkMatrix>,
    config: &ScoringConfig,
) -> f64 {
    let Some(matrix) = matrix else {
        return 0.0;
    };

    let nodes = distinct_hosting_nodes(path, resolver).await;
    let mut total = 0.0;
    for node in nodes {
        if let Some(nm) = lookup_node_metrics(&node, matrix, resolver).await {
            total += per_node_penalty(&nm, config);
        }
    }
    total
}
