//! Evaluation-order graph for the external build engine.
//!
//! The root project is always evaluated first; declared
//! [`EvaluationConstraint`]s add further edges between subprojects.
//! Uses `petgraph` to produce a topological order.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Topo;
use std::collections::HashMap;

use crate::tree::{EvaluationConstraint, ResolvedTree};

/// Projects and the "must evaluate before" edges between them.
pub struct EvaluationGraph {
    graph: DiGraph<String, ()>,
    indices: HashMap<String, NodeIndex>,
}

impl EvaluationGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            indices: HashMap::new(),
        }
    }

    /// Build the graph for a resolved tree.
    pub fn from_tree(tree: &ResolvedTree) -> Self {
        let mut graph = Self::new();
        let root = tree.root().name.clone();
        graph.add_project(&root);
        for sub in tree.subprojects() {
            graph.add_project(&sub.name);
            graph.add_constraint(&EvaluationConstraint {
                project: sub.name.clone(),
                after: root.clone(),
            });
        }
        for constraint in tree.evaluation_order() {
            graph.add_constraint(constraint);
        }
        graph
    }

    pub fn add_project(&mut self, name: &str) {
        if !self.indices.contains_key(name) {
            let idx = self.graph.add_node(name.to_string());
            self.indices.insert(name.to_string(), idx);
        }
    }

    /// Unknown project names are ignored.
    pub fn add_constraint(&mut self, constraint: &EvaluationConstraint) {
        if constraint.project == constraint.after {
            return;
        }
        if let (Some(&from), Some(&to)) = (
            self.indices.get(&constraint.after),
            self.indices.get(&constraint.project),
        ) {
            self.graph.update_edge(from, to, ());
        }
    }

    /// Project names in evaluation order (prerequisites first).
    pub fn order(&self) -> Vec<&str> {
        let mut topo = Topo::new(&self.graph);
        let mut ordered = Vec::new();
        while let Some(idx) = topo.next(&self.graph) {
            ordered.push(self.graph[idx].as_str());
        }
        ordered
    }
}

impl Default for EvaluationGraph {
    fn default() -> Self {
        Self::new()
    }
}
