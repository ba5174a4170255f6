//! DTOs mirroring the orchestrator objects this workspace reads and mutates.
//! Ownership of these objects belongs to the orchestrator; the core reads,
//! mutates in memory, and writes back as a whole object.

use std::collections::BTreeMap;

use leadnet_shared::WeightedAffinityTerm;
use serde::{Deserialize, Serialize};

/// The orchestrator's workload object (a Deployment/ReplicaSet-equivalent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workload {
    pub namespace: String,
    pub name: String,
    pub labels: BTreeMap<String, String>,
    pub pod_template: PodTemplate,
}

impl Workload {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            labels: BTreeMap::new(),
            pod_template: PodTemplate::default(),
        }
    }

    /// The value of the configured service-identity label, if present.
    pub fn service_id(&self, service_label_key: &str) -> Option<&str> {
        self.labels.get(service_label_key).map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PodTemplate {
    pub labels: BTreeMap<String, String>,
    pub spec: PodSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PodSpec {
    pub affinity: Affinity,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Affinity {
    pub preferred_pod_affinity: Vec<WeightedAffinityTerm>,
    pub preferred_pod_anti_affinity: Vec<WeightedAffinityTerm>,
}

/// A running instance of a workload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pod {
    pub namespace: String,
    pub name: String,
    pub labels: BTreeMap<String, String>,
    pub node_name: Option<String>,
}

/// A worker machine, identified by name and zero or more addresses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    pub addresses: Vec<NodeAddress>,
}

impl Node {
    /// The address the node-IP adaptor prefers: internal IP first, then
    /// external IP, per §4.3.
    pub fn preferred_ip(&self) -> Option<&str> {
        self.addresses
            .iter()
            .find(|a| a.kind == NodeAddressKind::InternalIp)
            .or_else(|| self.addresses.iter().find(|a| a.kind == NodeAddressKind::ExternalIp))
            .map(|a| a.address.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeAddressKind {
    InternalIp,
    ExternalIp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeAddress {
    pub kind: NodeAddressKind,
    pub address: String,
}
