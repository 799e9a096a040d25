//! Operation: compute the configuration evaluation order.

use std::path::Path;

use cairn_core::evaluation::EvaluationGraph;

use crate::ops_resolve::{self, ResolveOptions};

/// Resolve the tree and return project names in evaluation order.
pub fn order(project_root: &Path, opts: &ResolveOptions) -> miette::Result<Vec<String>> {
    let resolved = ops_resolve::resolve(project_root, opts)?;
    let graph = EvaluationGraph::from_tree(&resolved);
    Ok(graph.order().into_iter().map(String::from).collect())
}
