//! The affinity generator: turns a selected, scored path into edge-affinity
//! terms on the workload index, plus the separate anti-affinity entry point
//! (§4.5).

use std::collections::BTreeMap;

use leadnet_graph::Path;
use leadnet_shared::WeightedAffinityTerm;

use crate::config::AffinityConfig;
use crate::error::{AffinityError, Result};
use crate::index::WorkloadIndex;
use crate::weight::map_weight;

pub struct AffinityGenerator<'a> {
    config: &'a AffinityConfig,
}

impl<'a> AffinityGenerator<'a> {
    pub fn new(config: &'a AffinityConfig) -> Self {
        Self { config }
    }

    /// Touch every workload in `downstream_ids` once, clearing its preferred
    /// pod-affinity list without appending anything. The reconciler calls
    /// this with every downstream in the *full* service graph before
    /// applying this cycle's selected paths, so a workload that loses its
    /// only incoming edge (or whose edge no longer scores into `topPaths`)
    /// still has its stale terms removed (§8 scenario "stale removal") —
    /// without this, a workload untouched by any selected path this cycle
    /// would simply keep whatever it carried from the last one.
    pub fn reset_downstreams<I, S>(&self, index: &mut WorkloadIndex, downstream_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for service_id in downstream_ids {
            let none: [WeightedAffinityTerm; 0] = [];
            if index.apply_affinity(service_id.as_ref(), none).is_err() {
                tracing::debug!(service_id = service_id.as_ref(), "no workload to reset affinity for");
            }
        }
    }

    /// Apply every edge on `path` to `index`. Each edge is independent: one
    /// failing its validity check is skipped with a log record, and the rest
    /// of the path is still applied (§4.5 "Edge validity"). A path whose
    /// mapped weight is `<= 0` contributes nothing.
    pub fn apply_path(&self, index: &mut WorkloadIndex, path: &Path) {
        let Some(weight) = map_weight(path.final_score, self.config.min_affinity_weight, self.config.max_affinity_weight) else {
            tracing::debug!(path = %path.render(), "mapped affinity weight is non-positive, skipping path");
            return;
        };
        for (upstream_id, downstream_id) in path.edges() {
            if let Err(err) = self.apply_edge(index, upstream_id, downstream_id, weight) {
                tracing::debug!(upstream_id, downstream_id, error = %err, "skipping affinity edge");
            }
        }
    }

    fn apply_edge(&self, index: &mut WorkloadIndex, upstream_id: &str, downstream_id: &str, weight: i32) -> Result<()> {
        let upstream = index
            .get(upstream_id)
            .ok_or_else(|| AffinityError::UpstreamNotFound { service_id: upstream_id.to_string() })?;
        if upstream.pod_template.labels.is_empty() {
            return Err(AffinityError::EmptyUpstreamSelector { service_id: upstream_id.to_string() });
        }
        let selector = upstream.pod_template.labels.clone();
        if index.get(downstream_id).is_none() {
            return Err(AffinityError::DownstreamNotFound { service_id: downstream_id.to_string() });
        }
        let term = WeightedAffinityTerm {
            weight,
            topology_key: self.config.topology_key.clone(),
            label_selector: selector,
        };
        if !term.is_well_formed() {
            return Err(AffinityError::MalformedTerm {
                service_id: downstream_id.to_string(),
                weight: term.weight,
                topology_key: term.topology_key,
            });
        }
        index.apply_affinity(downstream_id, [term])
    }

    /// Steer `service_id`'s replicas away from pods matching `label_map`
    /// (e.g. a known-bad partition), under the same clear-then-append
    /// discipline as edge affinity, independent of any selected path.
    pub fn apply_anti_affinity(
        &self,
        index: &mut WorkloadIndex,
        service_id: &str,
        label_map: BTreeMap<String, String>,
        weight: i32,
    ) -> Result<()> {
        let weight = weight.clamp(0, 100);
        if weight == 0 {
            return Ok(());
        }
        let term = WeightedAffinityTerm {
            weight,
            topology_key: self.config.topology_key.clone(),
            label_selector: label_map,
        };
        if !term.is_well_formed() {
            return Err(AffinityError::MalformedTerm {
                service_id: service_id.to_string(),
                weight: term.weight,
                topology_key: term.topology_key,
            });
        }
        index.apply_anti_affinity(service_id, [term])
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use leadnet_stores::{PodTemplate, Workload};

    use super::*;

    fn workload(name: &str, service_id: &str, pod_labels: &[(&str, &str)]) -> Workload {
        let mut labels = BTreeMap::new();
        labels.insert("io.kompose.service".to_string(), service_id.to_string());
        let mut pod_template = PodTemplate::default();
        for (k, v) in pod_labels {
            pod_template.labels.insert(k.to_string(), v.to_string());
        }
        Workload {
            namespace: "default".to_string(),
            name: name.to_string(),
            labels,
            pod_template,
        }
    }

    fn term(weight: i32) -> WeightedAffinityTerm {
        WeightedAffinityTerm {
            weight,
            topology_key: "kubernetes.io/hostname".to_string(),
            label_selector: BTreeMap::new(),
        }
    }

    fn config() -> AffinityConfig {
        AffinityConfig {
            top_paths: 1,
            min_affinity_weight: 50,
            max_affinity_weight: 100,
            topology_key: "kubernetes.io/hostname".to_string(),
            ..AffinityConfig::default()
        }
    }

    #[test]
    fn scenario_one_two_node_linear() {
        let mut index = WorkloadIndex::snapshot(
            vec![
                workload("a-deploy", "a", &[("svc", "a")]),
                workload("b-deploy", "b", &[("svc", "b")]),
            ],
            "io.kompose.service",
        );
        let mut path = Path::new(vec!["a".to_string(), "b".to_string()]);
        path.final_score = 50.0;
        let generator = AffinityGenerator::new(&config());
        generator.apply_path(&mut index, &path);

        let terms = &index.get("b").unwrap().pod_template.spec.affinity.preferred_pod_affinity;
        assert_eq!(terms.len(), 1);
        assert_eq!(terms[0].weight, 75);
        assert_eq!(terms[0].topology_key, "kubernetes.io/hostname");
        assert_eq!(terms[0].label_selector.get("svc"), Some(&"a".to_string()));
    }

    #[test]
    fn single_node_path_emits_no_terms() {
        let mut index = WorkloadIndex::snapshot(
            vec![workload("a-deploy", "a", &[("svc", "a")])],
            "io.kompose.service",
        );
        let mut path = Path::new(vec!["a".to_string()]);
        path.final_score = 80.0;
        let generator = AffinityGenerator::new(&config());
        generator.apply_path(&mut index, &path);
        assert!(index.get("a").unwrap().pod_template.spec.affinity.preferred_pod_affinity.is_empty());
    }

    #[test]
    fn empty_upstream_selector_skips_the_edge_without_error() {
        let mut index = WorkloadIndex::snapshot(
            vec![workload("a-deploy", "a", &[]), workload("b-deploy", "b", &[("svc", "b")])],
            "io.kompose.service",
        );
        let mut path = Path::new(vec!["a".to_string(), "b".to_string()]);
        path.final_score = 50.0;
        let generator = AffinityGenerator::new(&config());
        generator.apply_path(&mut index, &path);
        assert!(index.get("b").unwrap().pod_template.spec.affinity.preferred_pod_affinity.is_empty());
    }

    #[test]
    fn missing_downstream_workload_skips_the_edge_without_error() {
        let mut index = WorkloadIndex::snapshot(
            vec![workload("a-deploy", "a", &[("svc", "a")])],
            "io.kompose.service",
        );
        let mut path = Path::new(vec!["a".to_string(), "b".to_string()]);
        path.final_score = 50.0;
        let generator = AffinityGenerator::new(&config());
        // Should not panic; "b" simply never gains a term.
        generator.apply_path(&mut index, &path);
        assert!(index.get("b").is_none());
    }

    #[test]
    fn out_of_range_weight_is_rejected_at_generation() {
        // maxAffinityWeight isn't itself range-checked by config loading; a
        // misconfigured 120 combined with a final score of 100 would map to
        // weight 120 (weight.rs), which is not a well-formed term (§4.5).
        // The generator must reject it rather than emit it.
        let mut index = WorkloadIndex::snapshot(
            vec![
                workload("a-deploy", "a", &[("svc", "a")]),
                workload("b-deploy", "b", &[("svc", "b")]),
            ],
            "io.kompose.service",
        );
        let mut path = Path::new(vec!["a".to_string(), "b".to_string()]);
        path.final_score = 100.0;
        let misconfigured = AffinityConfig {
            top_paths: 1,
            min_affinity_weight: 50,
            max_affinity_weight: 120,
            topology_key: "kubernetes.io/hostname".to_string(),
            ..AffinityConfig::default()
        };
        let generator = AffinityGenerator::new(&misconfigured);
        generator.apply_path(&mut index, &path);
        assert!(index.get("b").unwrap().pod_template.spec.affinity.preferred_pod_affinity.is_empty());
    }

    #[test]
    fn stale_removal_when_an_edge_drops_out_of_selection() {
        // Cycle 1 selects "a -> b" and "b" gains a term.
        let mut b = workload("b-deploy", "b", &[("svc", "b")]);
        b.pod_template.spec.affinity.preferred_pod_affinity.push(term(75));
        let generator = AffinityGenerator::new(&config());

        // Cycle 2: the store returns "b" still carrying cycle 1's term (it
        // was persisted), but "a -> b" is no longer among the selected
        // paths. The reconciler still resets every downstream in the full
        // graph before applying this cycle's selection.
        let mut index = WorkloadIndex::snapshot(vec![b], "io.kompose.service");
        generator.reset_downstreams(&mut index, ["b"]);
        assert!(index.get("b").unwrap().pod_template.spec.affinity.preferred_pod_affinity.is_empty());
    }

    #[test]
    fn anti_affinity_is_independent_of_edge_affinity() {
        let mut index = WorkloadIndex::snapshot(
            vec![workload("b-deploy", "b", &[("svc", "b")])],
            "io.kompose.service",
        );
        let generator = AffinityGenerator::new(&config());
        let mut bad_partition = BTreeMap::new();
        bad_partition.insert("zone".to_string(), "bad".to_string());
        generator.apply_anti_affinity(&mut index, "b", bad_partition, 90).unwrap();

        let affinity = &index.get("b").unwrap().pod_template.spec.affinity;
        assert_eq!(affinity.preferred_pod_anti_affinity.len(), 1);
        assert!(affinity.preferred_pod_affinity.is_empty());
    }

    #[test]
    fn non_positive_anti_affinity_weight_emits_nothing() {
        let mut index = WorkloadIndex::snapshot(
            vec![workload("b-deploy", "b", &[("svc", "b")])],
            "io.kompose.service",
        );
        let generator = AffinityGenerator::new(&config());
        generator.apply_anti_affinity(&mut index, "b", BTreeMap::new(), 0).unwrap();
        assert!(index.get("b").unwrap().pod_template.spec.affinity.preferred_pod_anti_affinity.is_empty());
    }
}
