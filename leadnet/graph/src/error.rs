//! Graph construction errors.

/// Result type alias for graph construction.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised while building a `ServiceGraph` from configuration. All of
/// these are `ConfigError`-class failures: fatal at startup, never seen once
/// a graph has been built.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum GraphError {
    #[error("entry node {0:?} is not declared in the graph")]
    EntryNotDeclared(String),

    #[error("node {from:?} depends on undeclared node {to:?}")]
    UndeclaredDependency { from: String, to: String },

    #[error("duplicate node id {0:?}")]
    DuplicateNode(String),

    #[error("cycle detected in service graph (back-edge at {0:?})")]
    Cycle(String),
}
