//! The workload index: a per-cycle working set of workloads keyed by
//! service id, mutated in memory by the affinity generator and persisted
//! back through a `WorkloadStore` as whole objects (§9's "workload index"
//! redesign of the reconciler's original inline map).

use std::collections::{HashMap, HashSet};

use leadnet_shared::WeightedAffinityTerm;
use leadnet_stores::{Workload, WorkloadStore};

use crate::error::{AffinityError, Result};

pub struct WorkloadIndex {
    by_service_id: HashMap<String, Workload>,
    touched_affinity: HashSet<String>,
    touched_anti_affinity: HashSet<String>,
}

impl WorkloadIndex {
    /// Build an index from a snapshot of workloads, keyed by the configured
    /// service-identity label. A workload without that label is excluded —
    /// it cannot be an endpoint of an edge-affinity term.
    pub fn snapshot(workloads: Vec<Workload>, service_label_key: &str) -> Self {
        let by_service_id = workloads
            .into_iter()
            .filter_map(|w| w.service_id(service_label_key).map(|id| (id.to_string(), w)))
            .collect();
        Self {
            by_service_id,
            touched_affinity: HashSet::new(),
            touched_anti_affinity: HashSet::new(),
        }
    }

    pub fn get(&self, service_id: &str) -> Option<&Workload> {
        self.by_service_id.get(service_id)
    }

    /// Apply `terms` to `service_id`'s preferred pod-affinity list. The list
    /// is cleared on the first touch this cycle and appended to afterward,
    /// so a workload reached by several selected paths accumulates every
    /// path's term but never carries one left over from a prior cycle.
    pub fn apply_affinity(
        &mut self,
        service_id: &str,
        terms: impl IntoIterator<Item = WeightedAffinityTerm>,
    ) -> Result<()> {
        let first_touch = !self.touched_affinity.contains(service_id);
        let workload = self
            .by_service_id
            .get_mut(service_id)
            .ok_or_else(|| AffinityError::DownstreamNotFound { service_id: service_id.to_string() })?;
        if first_touch {
            workload.pod_template.spec.affinity.preferred_pod_affinity.clear();
            self.touched_affinity.insert(service_id.to_string());
        }
        workload.pod_template.spec.affinity.preferred_pod_affinity.extend(terms);
        Ok(())
    }

    /// Same clear-then-append discipline as [`Self::apply_affinity`], for the
    /// anti-affinity list, tracked independently.
    pub fn apply_anti_affinity(
        &mut self,
        service_id: &str,
        terms: impl IntoIterator<Item = WeightedAffinityTerm>,
    ) -> Result<()> {
        let first_touch = !self.touched_anti_affinity.contains(service_id);
        let workload = self
            .by_service_id
            .get_mut(service_id)
            .ok_or_else(|| AffinityError::DownstreamNotFound { service_id: service_id.to_string() })?;
        if first_touch {
            workload.pod_template.spec.affinity.preferred_pod_anti_affinity.clear();
            self.touched_anti_affinity.insert(service_id.to_string());
        }
        workload.pod_template.spec.affinity.preferred_pod_anti_affinity.extend(terms);
        Ok(())
    }

    /// Every workload currently in the index, touched or not — the set
    /// `PersistAll` writes back.
    pub fn workloads(&self) -> impl Iterator<Item = &Workload> {
        self.by_service_id.values()
    }

    /// Write every workload in the index back through `store`. A per-workload
    /// failure is logged and does not stop the remaining writes (§4.7);
    /// returns the count that succeeded.
    pub async fn persist_all(&self, store: &dyn WorkloadStore) -> usize {
        let mut ok = 0;
        for workload in self.by_service_id.values() {
            match store.update_workload(workload).await {
                Ok(()) => ok += 1,
                Err(err) => tracing::warn!(
                    namespace = %workload.namespace,
                    name = %workload.name,
                    error = %err,
                    "failed to persist workload"
                ),
            }
        }
        ok
    }
}
