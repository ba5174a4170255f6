//! The per-cycle structured summary (§4.6 step 8).

/// The outcome of one `reconcile_once` call, logged as a single structured
/// `tracing::info!` line rather than an interpolated string.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleSummary {
    pub paths_evaluated: usize,
    pub top_k: usize,
    /// Workloads successfully persisted; always zero on a dry run, since no
    /// `UpdateWorkload` call is made at all (§8 "dry-run safety").
    pub updated: usize,
    pub dry_run: bool,
}

impl CycleSummary {
    pub fn empty(dry_run: bool) -> Self {
        Self {
            paths_evaluated: 0,
            top_k: 0,
            updated: 0,
            dry_run,
        }
    }

    pub fn log(&self) {
        tracing::info!(
            paths_evaluated = self.paths_evaluated,
            top_k = self.top_k,
            updated = self.updated,
            dry_run = self.dry_run,
            "reconciliation cycle complete"
        );
    }
}
