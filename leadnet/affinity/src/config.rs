//! Affinity-generation settings (§6 `affinity.*`).

use leadnet_shared::DEFAULT_TOPOLOGY_KEY;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffinityConfig {
    /// How many top-scoring paths the reconciler selects each cycle.
    pub top_paths: usize,
    /// The emitted-weight range; both ends in `[0, 100]`.
    pub min_affinity_weight: i32,
    pub max_affinity_weight: i32,
    /// The scheduler topology key for emitted terms. Not itself enumerated
    /// among the distilled `affinity.*` keys, but needed to build a
    /// well-formed `WeightedAffinityTerm` — defaults to the per-host key
    /// the rest of this workspace assumes.
    #[serde(default = "default_topology_key")]
    pub topology_key: String,
    /// Latency badness threshold handed to the scorer's Stage B penalty
    /// (§4.4). Enumerated under `affinity.*` rather than `scoring.*` in §6,
    /// even though only the scoring crate consumes it; `leadnetctl` copies
    /// this into the effective `ScoringConfig` at startup (see
    /// `ReconcilerConfig` assembly) so the config file's key placement
    /// matches §6 exactly.
    #[serde(default = "default_bad_latency_ms")]
    pub bad_latency_ms: f64,
    /// Drop-rate badness threshold; same placement rationale as
    /// `bad_latency_ms`.
    #[serde(default = "default_bad_drop_rate")]
    pub bad_drop_rate: f64,
}

fn default_topology_key() -> String {
    DEFAULT_TOPOLOGY_KEY.to_string()
}

fn default_bad_latency_ms() -> f64 {
    5.0
}

fn default_bad_drop_rate() -> f64 {
    0.01
}

impl Default for AffinityConfig {
    fn default() -> Self {
        Self {
            top_paths: 10,
            min_affinity_weight: 50,
            max_affinity_weight: 100,
            topology_key: default_topology_key(),
            bad_latency_ms: default_bad_latency_ms(),
            bad_drop_rate: default_bad_drop_rate(),
        }
    }
}
