//! The emitted artifact: a weighted, soft pod-affinity (or anti-affinity)
//! term. Lives in the shared crate because it is part of the `Workload` data
//! model (stores) as well as the thing the affinity generator produces —
//! putting it in either of those crates would make the other depend back on
//! it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single soft scheduling preference term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedAffinityTerm {
    /// Preference strength in `[1, 100]`; higher increases preference.
    pub weight: i32,
    /// The scheduler's partitioning dimension (e.g. per-host).
    pub topology_key: String,
    /// Equality label selector identifying the target pods.
    pub label_selector: BTreeMap<String, String>,
}

impl WeightedAffinityTerm {
    /// A term is well-formed iff its weight is in `[1, 100]` and it names a
    /// non-empty topology key. An empty `label_selector` is not itself
    /// disqualifying here — callers that must not emit an unconstrained
    /// selector (the edge-affinity generator) validate that separately,
    /// since a valid anti-affinity term could in principle reuse a selector
    /// built elsewhere.
    pub fn is_well_formed(&self) -> bool {
        (1..=100).contains(&self.weight) && !self.topology_key.is_empty()
    }
}
