//! In-memory test doubles for `WorkloadStore`/`TopologyStore`. Used by this
//! workspace's own test suites; never wired into `leadnetctl`'s production
//! build.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::traits::{TopologyStore, WorkloadStore};
use crate::types::{Node, Pod, Workload};

/// A `WorkloadStore` backed by an in-memory map, keyed by `namespace/name`.
#[derive(Default)]
pub struct FakeWorkloadStore {
    workloads: RwLock<HashMap<String, Workload>>,
}

impl FakeWorkloadStore {
    pub fn new(workloads: impl IntoIterator<Item = Workload>) -> Self {
        let map = workloads
            .into_iter()
            .map(|w| (format!("{}/{}", w.namespace, w.name), w))
            .collect();
        Self {
            workloads: RwLock::new(map),
        }
    }

    pub async fn get(&self, namespace: &str, name: &str) -> Option<Workload> {
        self.workloads.read().await.get(&format!("{namespace}/{name}")).cloned()
    }
}

#[async_trait]
impl WorkloadStore for FakeWorkloadStore {
    async fn list_workloads(&self, _namespaces: &[String]) -> Result<Vec<Workload>> {
        Ok(self.workloads.read().await.values().cloned().collect())
    }

    async fn update_workload(&self, workload: &Workload) -> Result<()> {
        self.workloads
            .write()
            .await
            .insert(format!("{}/{}", workload.namespace, workload.name), workload.clone());
        Ok(())
    }
}

/// A `TopologyStore` backed by in-memory pod and node lists.
#[derive(Default)]
pub struct FakeTopologyStore {
    pods: Vec<Pod>,
    nodes: HashMap<String, Node>,
}

impl FakeTopologyStore {
    pub fn new(pods: impl IntoIterator<Item = Pod>, nodes: impl IntoIterator<Item = Node>) -> Self {
        Self {
            pods: pods.into_iter().collect(),
            nodes: nodes.into_iter().map(|n| (n.name.clone(), n)).collect(),
        }
    }
}

#[async_trait]
impl TopologyStore for FakeTopologyStore {
    async fn list_pods(&self, namespace: &str, label_selector: &str) -> Result<Vec<Pod>> {
        let (key, value) = label_selector
            .split_once('=')
            .unwrap_or((label_selector, ""));
        Ok(self
            .pods
            .iter()
            .filter(|p| p.namespace == namespace)
            .filter(|p| p.labels.get(key).map(String::as_str) == Some(value))
            .cloned()
            .collect())
    }

    async fn get_node(&self, name: &str) -> Result<Node> {
        self.nodes
            .get(name)
            .cloned()
            .ok_or_else(|| crate::error::StoreError::GetNode {
                name: name.to_string(),
                message: "not found".to_string(),
            })
    }
}
