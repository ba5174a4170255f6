//! Affinity-generation failures (§4.5 "Edge validity").

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AffinityError {
    #[error("upstream workload for service `{service_id}` not found")]
    UpstreamNotFound { service_id: String },
    #[error("downstream workload for service `{service_id}` not found")]
    DownstreamNotFound { service_id: String },
    #[error("upstream workload for service `{service_id}` has no pod-template labels")]
    EmptyUpstreamSelector { service_id: String },
    #[error("affinity term for service `{service_id}` is malformed (weight {weight}, topology key {topology_key:?})")]
    MalformedTerm {
        service_id: String,
        weight: i32,
        topology_key: String,
    },
}

pub type Result<T> = std::result::Result<T, AffinityError>;
