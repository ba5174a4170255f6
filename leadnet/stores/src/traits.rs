//! The collaborator contracts (§6). The core never depends on a concrete
//! orchestrator client library — only on these two small interfaces.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Node, Pod, Workload};

/// Read/write access to workload objects.
#[async_trait]
pub trait WorkloadStore: Send + Sync {
    /// List every candidate workload across the given namespaces.
    async fn list_workloads(&self, namespaces: &[String]) -> Result<Vec<Workload>>;

    /// Persist a mutated workload back to the orchestrator.
    async fn update_workload(&self, workload: &Workload) -> Result<()>;
}

/// Read access to the live pod/node topology, used by the placement resolver.
#[async_trait]
pub trait TopologyStore: Send + Sync {
    /// List pods in `namespace` matching an equality label selector
    /// (`key=value`).
    async fn list_pods(&self, namespace: &str, label_selector: &str) -> Result<Vec<Pod>>;

    /// Fetch a node by name.
    async fn get_node(&self, name: &str) -> Result<Node>;
}
