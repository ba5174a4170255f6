//! `Reconciler`: the orchestration of one cycle (§4.6) plus the inter-cycle
//! ticker loop and one-shot dispatch (§4.6 "Loop", "One-shot mode").

use std::collections::HashSet;
use std::sync::Arc;

use leadnet_affinity::{AffinityGenerator, WorkloadIndex};
use leadnet_graph::{enumerate_paths, ServiceGraph};
use leadnet_metrics::{build_network_matrix, MetricsSource};
use leadnet_placement::PlacementResolver;
use leadnet_scoring::score_and_sort;
use leadnet_shared::{LeadNetError, RuntimeOptions};
use leadnet_stores::{TopologyStore, WorkloadStore};
use tokio_util::sync::CancellationToken;

use crate::config::ReconcilerConfig;
use crate::error::{ReconcileError, Result};
use crate::summary::CycleSummary;

/// Orchestrates reconciliation cycles against a fixed, already-validated
/// service graph. The graph is built once at construction rather than on
/// every cycle — its source (`graph.entry`/`graph.services`) only changes on
/// a restart, so rebuilding it per tick would just repeat a pure computation
/// already proven valid; `ServiceGraph::build`'s own validation failure is
/// still the startup-fatal `ConfigError` §4.7 describes, surfaced to the
/// caller before a `Reconciler` ever exists.
pub struct Reconciler {
    graph: ServiceGraph,
    config: ReconcilerConfig,
    runtime: RuntimeOptions,
    workload_store: Arc<dyn WorkloadStore>,
    topology_store: Arc<dyn TopologyStore>,
    metrics_source: Arc<dyn MetricsSource>,
}

impl Reconciler {
    pub fn new(
        graph: ServiceGraph,
        config: ReconcilerConfig,
        runtime: RuntimeOptions,
        workload_store: Arc<dyn WorkloadStore>,
        topology_store: Arc<dyn TopologyStore>,
        metrics_source: Arc<dyn MetricsSource>,
    ) -> Self {
        Self {
            graph,
            config,
            runtime,
            workload_store,
            topology_store,
            metrics_source,
        }
    }

    /// Every service that is the downstream end of at least one declared
    /// edge in the full graph, regardless of whether this cycle selects it.
    /// Used to reset stale affinity terms on services no longer reached by
    /// a top-scoring path (§8 "stale removal").
    fn all_downstream_ids(&self) -> Vec<String> {
        let mut ids = HashSet::new();
        for node in self.graph.nodes() {
            ids.extend(node.depends_on.iter().cloned());
        }
        ids.into_iter().collect()
    }

    /// Run one atomic reconciliation cycle (§4.6 steps 1–8).
    pub async fn reconcile_once(&self) -> Result<CycleSummary> {
        let mut paths = enumerate_paths(&self.graph);
        if paths.is_empty() {
            tracing::info!("service graph enumerated to zero paths, nothing to reconcile");
            return Ok(CycleSummary::empty(self.runtime.dry_run));
        }

        let workloads = self
            .workload_store
            .list_workloads(&self.config.namespaces)
            .await
            .map_err(ReconcileError::ListWorkloads)?;
        let mut index = WorkloadIndex::snapshot(workloads, &self.config.service_label_key);

        let matrix = build_network_matrix(self.metrics_source.as_ref(), &self.config.prometheus).await;

        let resolver = PlacementResolver::new(
            self.topology_store.as_ref(),
            self.config.namespaces.clone(),
            self.config.service_label_key.clone(),
        );
        score_and_sort(&mut paths, &resolver, matrix.as_ref(), &self.config.scoring).await;

        let top_k = self.config.affinity.top_paths.min(paths.len());
        let selected = &paths[..top_k];

        let generator = AffinityGenerator::new(&self.config.affinity);
        generator.reset_downstreams(&mut index, self.all_downstream_ids());
        for path in selected {
            tracing::info!(
                path = %path.render(),
                base = path.base_score,
                net_penalty = path.network_penalty,
                final_score = path.final_score,
                "path selected for affinity"
            );
            generator.apply_path(&mut index, path);
        }

        let updated = if self.runtime.dry_run {
            tracing::info!(candidates = index.workloads().count(), "dry run: skipping workload updates");
            0
        } else {
            index.persist_all(self.workload_store.as_ref()).await
        };

        let summary = CycleSummary {
            paths_evaluated: paths.len(),
            top_k,
            updated,
            dry_run: self.runtime.dry_run,
        };
        summary.log();
        Ok(summary)
    }

    /// Invoke [`Self::reconcile_once`] immediately, then every
    /// `runtime.interval` until `cancel` fires, unless `runtime.once` is
    /// set, in which case this runs exactly one cycle and returns.
    pub async fn run(&self, cancel: CancellationToken) -> Result<()> {
        if self.runtime.once {
            self.reconcile_once().await?;
            return Ok(());
        }

        let mut ticker = tokio::time::interval(self.runtime.interval);
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("cancellation observed, exiting reconciler loop");
                    return Ok(());
                }
                _ = ticker.tick() => {
                    if let Err(err) = self.reconcile_once().await {
                        let shared_err = LeadNetError::from(&err);
                        tracing::warn!(
                            error = %err,
                            category = shared_err.category(),
                            retryable = shared_err.is_retryable(),
                            "reconciliation cycle failed, retrying next tick"
                        );
                    }
                }
            }
        }
    }
}
