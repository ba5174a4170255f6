//! Shared types used across the lead-net-affinity workspace: the error
//! taxonomy, node-identity resolution, and process-wide runtime options.

pub mod affinity_term;
pub mod error;
pub mod identity;
pub mod runtime;

pub use affinity_term::WeightedAffinityTerm;
pub use error::{LeadNetError, Result};
pub use identity::NodeIdentity;
pub use runtime::RuntimeOptions;

/// The service-identity label key convention (§6): the value identifies the
/// service a workload/pod belongs to.
pub const DEFAULT_SERVICE_LABEL_KEY: &str = "io.kompose.service";

/// The topology key used for emitted affinity terms: per-host placement.
pub const DEFAULT_TOPOLOGY_KEY: &str = "kubernetes.io/hostname";
