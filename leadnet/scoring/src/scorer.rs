//! End-to-end scoring: Stage A, normalize, Stage B, combine, normalize,
//! stable sort descending (§4.4).

use leadnet_graph::Path;
use leadnet_metrics::NetworkMatrix;
use leadnet_placement::PlacementResolver;

use crate::base::structural_base_score;
use crate::config::ScoringConfig;
use crate::normalize::min_max_normalize;
use crate::penalty::network_penalty;

/// Score and sort `paths` in place, descending by final score. RPS is always
/// zero until a real telemetry source for it exists (§9).
pub async fn score_and_sort(
    paths: &mut Vec<Path>,
    resolver: &PlacementResolver<'_>,
    matrix: Option<&NetworkMatrix>,
    config: &ScoringConfig,
) {
    for path in paths.iter_mut() {
        path.base_score = structural_base_score(path, config, 0.0);
    }

    let normalized_base: Vec<f64> = min_max_normalize(
        &paths.iter().map(|p| p.base_score).collect::<Vec<_>>(),
    );
    for (path, score) in paths.iter_mut().zip(normalized_base) {
        path.base_score = score;
    }

    for path in paths.iter_mut() {
        path.network_penalty = network_penalty(path, resolver, matrix, config).await;
        path.final_score = path.base_score - path.network_penalty;
    }

    let normalized_final: Vec<f64> = min_max_normalize(
        &paths.iter().map(|p| p.final_score).collect::<Vec<_>>(),
    );
    for (path, score) in paths.iter_mut().zip(normalized_final) {
        path.final_score = score;
    }

    // Rust's `sort_by` is a stable sort: paths with equal final scores keep
    // their original enumeration order. `total_cmp` gives a total order over
    // `f64` without assuming scores are never NaN.
    paths.sort_by(|a, b| b.final_score.total_cmp(&a.final_score));
}

#[cfg(test)]
mod tests {
    use leadnet_stores::FakeTopologyStore;

    use super::*;

    fn resolver_with_no_pods() -> (FakeTopologyStore, Vec<String>) {
        (FakeTopologyStore::new([], []), vec!["default".to_string()])
    }

    #[tokio::test]
    async fn single_node_graph_normalizes_to_fifty() {
        let (topo, namespaces) = resolver_with_no_pods();
        let resolver = PlacementResolver::new(&topo, namespaces, "io.kompose.service");
        let mut paths = vec![Path::new(vec!["a".to_string()])];
        let config = ScoringConfig {
            path_length_weight: 1.0,
            pod_count_weight: 1.0,
            service_edges_weight: 1.0,
            rps_weight: 0.0,
            ..ScoringConfig::default()
        };
        score_and_sort(&mut paths, &resolver, None, &config).await;
        assert_eq!(paths[0].final_score, 50.0);
        assert_eq!(paths[0].network_penalty, 0.0);
    }

    #[tokio::test]
    async fn all_equal_base_scores_preserve_enumeration_order_on_ties() {
        let (topo, namespaces) = resolver_with_no_pods();
        let resolver = PlacementResolver::new(&topo, namespaces, "io.kompose.service");
        let mut paths = vec![
            Path::new(vec!["a".to_string(), "x".to_string()]),
            Path::new(vec!["a".to_string(), "y".to_string()]),
            Path::new(vec!["a".to_string(), "z".to_string()]),
        ];
        let config = ScoringConfig::default();
        score_and_sort(&mut paths, &resolver, None, &config).await;
        assert!(paths.iter().all(|p| p.final_score == 50.0));
        assert_eq!(paths[0].nodes[1], "x");
        assert_eq!(paths[1].nodes[1], "y");
        assert_eq!(paths[2].nodes[1], "z");
    }

    #[tokio::test]
    async fn sorts_descending_by_final_score() {
        let (topo, namespaces) = resolver_with_no_pods();
        let resolver = PlacementResolver::new(&topo, namespaces, "io.kompose.service");
        // Different path lengths give different base scores even with no
        // telemetry, so the higher-scoring (longer) path should sort first.
        let mut paths = vec![
            Path::new(vec!["a".to_string()]),
            Path::new(vec!["a".to_string(), "b".to_string(), "c".to_string()]),
        ];
        let config = ScoringConfig::default();
        score_and_sort(&mut paths, &resolver, None, &config).await;
        assert_eq!(paths[0].nodes.len(), 3);
        assert!(paths[0].final_score >= paths[1].final_score);
    }
}
