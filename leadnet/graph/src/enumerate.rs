//! Depth-first path enumeration.
//!
//! The scorer treats paths as whole units, so enumeration order only affects
//! tie-breaks in the (stable) final sort — DFS over BFS wins on simplicity.
//! Paths are emitted in the order their sinks are discovered, left to right
//! over each node's `depends_on`.

use crate::graph::ServiceGraph;
use crate::path::Path;

/// Enumerate every root-to-sink walk of `graph` starting at its entry.
///
/// If the entry has no dependents, this yields exactly one single-node path.
/// The graph is assumed acyclic (`ServiceGraph::build` rejects cycles), so
/// this never loops.
pub fn enumerate_paths(graph: &ServiceGraph) -> Vec<Path> {
    let mut paths = Vec::new();
    let mut stack = vec![graph.entry().to_string()];
    walk(graph, &mut stack, &mut paths);
    paths
}

fn walk(graph: &ServiceGraph, stack: &mut Vec<String>, paths: &mut Vec<Path>) {
    let current = stack.last().expect("stack is never empty during walk").clone();
    let node = match graph.node(&current) {
        Some(node) => node,
        // Defensive: `ServiceGraph::build` guarantees every dependency is
        // declared, so this branch is unreachable in practice.
        None => return,
    };

    if node.is_sink() {
        paths.push(Path::new(stack.clone()));
        return;
    }

    for dep in &node.depends_on {
        stack.push(dep.clone());
        walk(graph, stack, paths);
        stack.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ServiceNode;

    #[test]
    fn single_node_graph_yields_one_path() {
        let graph = ServiceGraph::build([ServiceNode::new("a")], "a").unwrap();
        let paths = enumerate_paths(&graph);
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].nodes, vec!["a".to_string()]);
    }

    #[test]
    fn linear_chain() {
        let graph = ServiceGraph::build(
            [
                ServiceNode::new("a").depends_on(["b"]),
                ServiceNode::new("b").depends_on(["c"]),
                ServiceNode::new("c"),
            ],
            "a",
        )
        .unwrap();
        let paths = enumerate_paths(&graph);
        assert_eq!(paths.len(), 1);
        assert_eq!(
            paths[0].nodes,
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn fan_out_yields_left_to_right_order() {
        let graph = ServiceGraph::build(
            [
                ServiceNode::new("a").depends_on(["b", "c"]),
                ServiceNode::new("b"),
                ServiceNode::new("c"),
            ],
            "a",
        )
        .unwrap();
        let paths = enumerate_paths(&graph);
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].nodes, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(paths[1].nodes, vec!["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn diamond_yields_two_paths() {
        let graph = ServiceGraph::build(
            [
                ServiceNode::new("a").depends_on(["b", "c"]),
                ServiceNode::new("b").depends_on(["d"]),
                ServiceNode::new("c").depends_on(["d"]),
                ServiceNode::new("d"),
            ],
            "a",
        )
        .unwrap();
        let paths = enumerate_paths(&graph);
        assert_eq!(paths.len(), 2);
        assert!(paths
            .iter()
            .all(|p| p.nodes[0] == "a" && p.nodes.last().unwrap() == "d"));
    }

    #[test]
    fn every_path_well_formed() {
        let graph = ServiceGraph::build(
            [
                ServiceNode::new("a").depends_on(["b", "c"]),
                ServiceNode::new("b").depends_on(["d"]),
                ServiceNode::new("c"),
                ServiceNode::new("d"),
            ],
            "a",
        )
        .unwrap();
        for path in enumerate_paths(&graph) {
            assert_eq!(path.nodes[0], "a");
            for (from, to) in path.edges() {
                let node = graph.node(from).unwrap();
                assert!(node.depends_on.iter().any(|d| d == to));
            }
        }
    }
}
