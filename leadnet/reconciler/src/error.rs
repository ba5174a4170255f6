//! Reconciler-level failures. Per §4.7, a failed workload listing is the
//! only failure that aborts a whole cycle; every other collaborator failure
//! degrades part of the computation and the cycle still returns success.

use leadnet_shared::LeadNetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("listing workloads failed: {0}")]
    ListWorkloads(#[source] leadnet_stores::StoreError),
}

pub type Result<T> = std::result::Result<T, ReconcileError>;

/// Converts into the cross-cutting error taxonomy at the reconciler
/// boundary, so the run loop can log a failed cycle's `category()`/
/// `is_retryable()` alongside its message. `ListWorkloads` is always a
/// `TransientExternalError` (§4.7): the cycle aborts, but the next tick
/// retries without operator intervention.
impl From<&ReconcileError> for LeadNetError {
    fn from(err: &ReconcileError) -> Self {
        match err {
            ReconcileError::ListWorkloads(source) => LeadNetError::Transient {
                message: source.to_string(),
            },
        }
    }
}
