//! Stage A: the structural base score.
//!
//! `base = w_pl·L + w_pc·P + w_se·E + w_rps·R` where `L` is the path length,
//! `P` a pod-count proxy (one replica-group per service, so also the path
//! length), `E` the service-edge count, and `R` the path's RPS (currently
//! always zero — see §9's note that RPS is an optional future signal).

use leadnet_graph::Path;

use crate::config::ScoringConfig;

pub fn structural_base_score(path: &Path, config: &ScoringConfig, rps: f64) -> f64 {
    let length = path.len() as f64;
    let pod_count = path.len() as f64;
    let edges = path.edge_count() as f64;

    config.path_length_weight * length
        + config.pod_count_weight * pod_count
        + config.service_edges_weight * edges
        + config.rps_weight * rps
}
