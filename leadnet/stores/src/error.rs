//! Errors raised by the `WorkloadStore`/`TopologyStore` collaborators.

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Transient, per-cycle errors. None of these are fatal to the process.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("failed to list workloads in {namespaces:?}: {message}")]
    ListWorkloads { namespaces: Vec<String>, message: String },

    #[error("failed to update workload {namespace}/{name}: {message}")]
    UpdateWorkload {
        namespace: String,
        name: String,
        message: String,
    },

    #[error("failed to list pods in {namespace} matching {label_selector:?}: {message}")]
    ListPods {
        namespace: String,
        label_selector: String,
        message: String,
    },

    #[error("failed to get node {name}: {message}")]
    GetNode { name: String, message: String },
}
