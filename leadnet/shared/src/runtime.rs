//! Process-wide runtime options.
//!
//! The source this spec is drawn from reads dry-run and log verbosity as
//! implicit global state (environment lookups scattered through the
//! reconciliation path). This lifts them to a plain struct, parsed once at
//! startup and threaded explicitly into the reconciler.

use std::time::Duration;

/// Options resolved once at process startup and passed by value into the
/// reconciler. Never read from the environment again after construction.
#[derive(Debug, Clone)]
pub struct RuntimeOptions {
    /// Skip `WorkloadStore::update_workload` calls; compute everything else.
    pub dry_run: bool,
    /// Run `reconcile_once` exactly once and return instead of looping.
    pub once: bool,
    /// Interval between reconciliation cycles when not in one-shot mode.
    pub interval: Duration,
}

impl Default for RuntimeOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            once: false,
            interval: Duration::from_secs(30),
        }
    }
}
