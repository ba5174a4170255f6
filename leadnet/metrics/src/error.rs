//! Metrics client errors.

/// Result type alias for metrics operations.
pub type Result<T> = std::result::Result<T, MetricsError>;

/// A single instant-query failure. `TransientExternalError`-class: the
/// reconciler degrades to base-only scoring rather than aborting the cycle.
#[derive(thiserror::Error, Debug)]
pub enum MetricsError {
    #[error("query {query:?} failed: {message}")]
    QueryFailed { query: String, message: String },

    #[error("unexpected response shape from metrics backend: {message}")]
    MalformedResponse { message: String },
}
