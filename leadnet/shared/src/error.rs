//! Error taxonomy shared across the workspace.
//!
//! Mirrors the abstract kinds from the reconciliation design: config errors are
//! fatal at startup, transient external errors are recovered per-cycle, and the
//! rest degrade a single computation without aborting the cycle.

/// Result type alias used by shared helpers.
pub type Result<T> = std::result::Result<T, LeadNetError>;

/// Top-level error type for cross-cutting failures that don't belong to one
/// component's own error enum (graph, metrics, placement, affinity, reconcile
/// each define their own more specific type and convert into this one at the
/// reconciler boundary).
#[derive(thiserror::Error, Debug)]
pub enum LeadNetError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("transient external error: {message}")]
    Transient { message: String },

    #[error("data quality warning: {0}")]
    DataQuality(String),

    #[error("rule validation error: {0}")]
    RuleValidation(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl LeadNetError {
    /// Category label used in structured log fields.
    pub fn category(&self) -> &'static str {
        match self {
            LeadNetError::Config(_) => "config",
            LeadNetError::Transient { .. } => "transient",
            LeadNetError::DataQuality(_) => "data_quality",
            LeadNetError::RuleValidation(_) => "rule_validation",
            LeadNetError::Io(_) => "io",
        }
    }

    /// Whether the next reconciliation tick is expected to recover from this
    /// error without operator intervention.
    pub fn is_retryable(&self) -> bool {
        matches!(self, LeadNetError::Transient { .. } | LeadNetError::Io(_))
    }
}
