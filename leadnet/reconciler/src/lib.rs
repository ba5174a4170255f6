//! Orchestrates one reconciliation cycle end-to-end (§4.6): build graph,
//! enumerate paths, list workloads, fetch telemetry, score, select, mutate
//! affinity, persist — plus the inter-cycle ticker loop and one-shot mode.

pub mod config;
pub mod error;
pub mod reconciler;
pub mod summary;

pub use config::ReconcilerConfig;
pub use error::{ReconcileError, Result};
pub use reconciler::Reconciler;
pub use summary::CycleSummary;
