//! The service dependency graph: a DAG of services rooted at a configured
//! entry point.

use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A vertex of the dependency graph: a named service and the services it
/// invokes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceNode {
    /// The service id. Config files name this field `name` (§6
    /// `graph.services: list of {name, dependsOn[], labelSelector{}}`); the
    /// alias lets `ServiceNode` deserialize directly from that shape while
    /// keeping the field named for what it is everywhere else in this
    /// workspace.
    #[serde(alias = "name")]
    pub id: String,
    #[serde(default, rename = "dependsOn")]
    pub depends_on: Vec<String>,
    #[serde(default, rename = "labelSelector")]
    pub label_selector: HashMap<String, String>,
}

impl ServiceNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            depends_on: Vec::new(),
            label_selector: HashMap::new(),
        }
    }

    pub fn depends_on(mut self, ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.depends_on = ids.into_iter().map(Into::into).collect();
        self
    }

    /// A sink has no outgoing edges.
    pub fn is_sink(&self) -> bool {
        self.depends_on.is_empty()
    }
}

/// A DAG of services rooted at `entry`. Built once per reconciliation cycle
/// from configuration and read-only thereafter.
#[derive(Debug, Clone)]
pub struct ServiceGraph {
    nodes: HashMap<String, ServiceNode>,
    entry: String,
}

impl ServiceGraph {
    /// Build a graph from its declared nodes, validating that every
    /// dependency references a declared node, that the entry is declared, and
    /// that the graph contains no cycle.
    pub fn build(
        nodes: impl IntoIterator<Item = ServiceNode>,
        entry: impl Into<String>,
    ) -> Result<Self> {
        let entry = entry.into();
        let mut by_id = HashMap::new();
        for node in nodes {
            let id = node.id.clone();
            if by_id.insert(id.clone(), node).is_some() {
                return Err(GraphError::DuplicateNode(id));
            }
        }

        if !by_id.contains_key(&entry) {
            return Err(GraphError::EntryNotDeclared(entry));
        }

        for node in by_id.values() {
            for dep in &node.depends_on {
                if !by_id.contains_key(dep) {
                    return Err(GraphError::UndeclaredDependency {
                        from: node.id.clone(),
                        to: dep.clone(),
                    });
                }
            }
        }

        let graph = Self { nodes: by_id, entry };
        graph.check_acyclic()?;
        Ok(graph)
    }

    fn check_acyclic(&self) -> Result<()> {
        #[derive(Clone, Copy, PartialEq)]
        enum Color {
            White,
            Gray,
            Black,
        }

        let mut color: HashMap<&str, Color> =
            self.nodes.keys().map(|id| (id.as_str(), Color::White)).collect();

        fn visit<'a>(
            id: &'a str,
            nodes: &'a HashMap<String, ServiceNode>,
            color: &mut HashMap<&'a str, Color>,
        ) -> Result<()> {
            color.insert(id, Color::Gray);
            if let Some(node) = nodes.get(id) {
                for dep in &node.depends_on {
                    match color.get(dep.as_str()).copied().unwrap_or(Color::White) {
                        Color::Gray => return Err(GraphError::Cycle(dep.clone())),
                        Color::White => visit(dep.as_str(), nodes, color)?,
                        Color::Black => {}
                    }
                }
            }
            color.insert(id, Color::Black);
            Ok(())
        }

        // Visit every node, not just those reachable from entry, so a cycle
        // anywhere in the declared graph is rejected at load time.
        let ids: Vec<&str> = self.nodes.keys().map(String::as_str).collect();
        for id in ids {
            if color.get(id).copied().unwrap_or(Color::White) == Color::White {
                visit(id, &self.nodes, &mut color)?;
            }
        }
        Ok(())
    }

    pub fn entry(&self) -> &str {
        &self.entry
    }

    pub fn node(&self, id: &str) -> Option<&ServiceNode> {
        self.nodes.get(id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &ServiceNode> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_undeclared_entry() {
        let err = ServiceGraph::build([ServiceNode::new("a")], "gateway").unwrap_err();
        assert_eq!(err, GraphError::EntryNotDeclared("gateway".to_string()));
    }

    #[test]
    fn rejects_undeclared_dependency() {
        let err = ServiceGraph::build(
            [ServiceNode::new("a").depends_on(["b"])],
            "a",
        )
        .unwrap_err();
        assert_eq!(
            err,
            GraphError::UndeclaredDependency {
                from: "a".to_string(),
                to: "b".to_string()
            }
        );
    }

    #[test]
    fn rejects_cycle() {
        let err = ServiceGraph::build(
            [
                ServiceNode::new("a").depends_on(["b"]),
                ServiceNode::new("b").depends_on(["a"]),
            ],
            "a",
        )
        .unwrap_err();
        assert!(matches!(err, GraphError::Cycle(_)));
    }

    #[test]
    fn builds_valid_linear_graph() {
        let graph = ServiceGraph::build(
            [ServiceNode::new("a").depends_on(["b"]), ServiceNode::new("b")],
            "a",
        )
        .unwrap();
        assert_eq!(graph.entry(), "a");
        assert_eq!(graph.len(), 2);
    }
}
