//! External interfaces the core depends on (§6): `WorkloadStore` and
//! `TopologyStore`, plus the DTOs they exchange. The real orchestrator client
//! is out of scope (§1) — this crate only defines the contract and, behind
//! `test-util`, an in-memory double pair.

pub mod error;
pub mod http;
pub mod traits;
pub mod types;

#[cfg(feature = "test-util")]
pub mod fake;

pub use error::{Result, StoreError};
pub use http::{HttpTopologyStore, HttpWorkloadStore};
pub use traits::{TopologyStore, WorkloadStore};
pub use types::{Affinity, Node, NodeAddress, NodeAddressKind, Pod, PodSpec, PodTemplate, Workload};

#[cfg(feature = "test-util")]
pub use fake::{FakeTopologyStore, FakeWorkloadStore};
