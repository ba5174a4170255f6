//! A generic JSON/REST adapter for `WorkloadStore`/`TopologyStore`.
//!
//! The real orchestrator API client is explicitly out of scope (§1) — this
//! is not one. It is a thin, vendor-agnostic HTTP client against a small
//! REST shape (`GET/PUT /workloads`, `GET /pods`, `GET /nodes/{name}`),
//! mirroring `leadnet-metrics::PrometheusMetricsSource`'s instant-query
//! client: a generic protocol-level adaptor, not an orchestrator SDK. An
//! operator whose orchestrator doesn't speak this shape directly supplies
//! their own `WorkloadStore`/`TopologyStore` impl instead of this one.

use async_trait::async_trait;

use crate::error::{Result, StoreError};
use crate::traits::{TopologyStore, WorkloadStore};
use crate::types::{Node, Pod, Workload};

/// A `WorkloadStore` backed by a JSON HTTP API.
pub struct HttpWorkloadStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpWorkloadStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl WorkloadStore for HttpWorkloadStore {
    async fn list_workloads(&self, namespaces: &[String]) -> Result<Vec<Workload>> {
        let mut all = Vec::new();
        for namespace in namespaces {
            let url = format!("{}/workloads", self.base_url.trim_end_matches('/'));
            let response = self
                .client
                .get(&url)
                .query(&[("namespace", namespace)])
                .send()
                .await
                .map_err(|e| StoreError::ListWorkloads {
                    namespaces: namespaces.to_vec(),
                    message: e.to_string(),
                })?;
            let workloads: Vec<Workload> =
                response.json().await.map_err(|e| StoreError::ListWorkloads {
                    namespaces: namespaces.to_vec(),
                    message: e.to_string(),
                })?;
            all.extend(workloads);
        }
        Ok(all)
    }

    async fn update_workload(&self, workload: &Workload) -> Result<()> {
        let url = format!(
            "{}/workloads/{}/{}",
            self.base_url.trim_end_matches('/'),
            workload.namespace,
            workload.name
        );
        self.client
            .put(&url)
            .json(workload)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| StoreError::UpdateWorkload {
                namespace: workload.namespace.clone(),
                name: workload.name.clone(),
                message: e.to_string(),
            })?;
        Ok(())
    }
}

/// A `TopologyStore` backed by the same JSON HTTP API.
pub struct HttpTopologyStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTopologyStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl TopologyStore for HttpTopologyStore {
    async fn list_pods(&self, namespace: &str, label_selector: &str) -> Result<Vec<Pod>> {
        let url = format!("{}/pods", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .get(&url)
            .query(&[("namespace", namespace), ("labelSelector", label_selector)])
            .send()
            .await
            .map_err(|e| StoreError::ListPods {
                namespace: namespace.to_string(),
                label_selector: label_selector.to_string(),
                message: e.to_string(),
            })?;
        response.json().await.map_err(|e| StoreError::ListPods {
            namespace: namespace.to_string(),
            label_selector: label_selector.to_string(),
            message: e.to_string(),
        })
    }

    async fn get_node(&self, name: &str) -> Result<Node> {
        let url = format!("{}/nodes/{}", self.base_url.trim_end_matches('/'), name);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| StoreError::GetNode {
                name: name.to_string(),
                message: e.to_string(),
            })?;
        response.json().await.map_err(|e| StoreError::GetNode {
            name: name.to_string(),
            message: e.to_string(),
        })
    }
}
