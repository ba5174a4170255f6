//! Affinity rule generation (§4.5): mapping a path's final score to a term
//! weight, mutating workloads in memory through the per-cycle
//! [`WorkloadIndex`], and the separate anti-affinity entry point.

pub mod config;
pub mod error;
pub mod generator;
pub mod index;
pub mod weight;

pub use config::AffinityConfig;
pub use error::{AffinityError, Result};
pub use generator::AffinityGenerator;
pub use index::WorkloadIndex;
pub use weight::map_weight;
