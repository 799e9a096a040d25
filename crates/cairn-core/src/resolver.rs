//! Build-tree configuration resolution.
//!
//! [`ConfigResolver::resolve`] runs the passes in a fixed order on a copy of
//! the input tree:
//!
//! 1. repository setup
//! 2. output directory remap
//! 3. per-plugin toolchain injection (with namespace defaulting)
//! 4. evaluation-order declaration
//! 5. `clean` task registration
//!
//! Any failure aborts the whole resolution; the caller never sees a
//! partially configured tree. The individual passes are public so an
//! engine can drive them one by one.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use cairn_util::errors::ConfigError;

use crate::project::{PluginKind, Project};
use crate::repository::RepositoryCatalog;
use crate::toolchain::ToolchainSettings;
use crate::tree::{BuildTree, EvaluationConstraint, ResolvedTree, TaskAction, TaskRegistration};

/// Name of the task registered by [`register_clean_task`].
pub const CLEAN_TASK: &str = "clean";

/// Toolchain settings per plugin kind.
pub type ToolchainMap = BTreeMap<PluginKind, ToolchainSettings>;

/// Everything the resolver needs besides the tree itself.
#[derive(Debug, Clone)]
pub struct ResolveConfig {
    /// Repository names requested for all projects, in order.
    pub repositories: Vec<String>,
    pub catalog: RepositoryCatalog,
    /// New root output directory, relative to the root's default build dir.
    pub new_base_output_dir: PathBuf,
    pub toolchains: ToolchainMap,
    /// Subproject every other subproject is evaluated after.
    pub evaluation_depends_on: Option<String>,
}

/// Resolves a [`BuildTree`] against a [`ResolveConfig`].
pub struct ConfigResolver<'a> {
    config: &'a ResolveConfig,
}

impl<'a> ConfigResolver<'a> {
    pub fn new(config: &'a ResolveConfig) -> Self {
        Self { config }
    }

    /// Run every pass and freeze the result.
    pub fn resolve(&self, tree: &BuildTree) -> Result<ResolvedTree, ConfigError> {
        let config = self.config;

        let repositories = config.catalog.resolve(&config.repositories)?;
        tracing::debug!(
            "Repositories: {}",
            repositories
                .iter()
                .map(|r| r.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        validate_base_dir(&config.new_base_output_dir)?;
        if let Some(target) = config.evaluation_depends_on.as_deref() {
            if tree.subproject(target).is_none() {
                return Err(ConfigError::UnknownProject(target.to_string()));
            }
        }

        let mut tree = tree.clone();
        remap_output_directories(&mut tree, &config.new_base_output_dir);

        for project in &mut tree.subprojects {
            inject_toolchain(project, &config.toolchains)?;
        }

        if let Some(target) = config.evaluation_depends_on.as_deref() {
            declare_evaluation_order(&mut tree, target);
        }

        register_clean_task(&mut tree);

        tracing::info!(
            "Resolved {} ({} subprojects)",
            tree.root.name,
            tree.subprojects.len()
        );
        Ok(ResolvedTree::freeze(tree, repositories))
    }
}

/// Point the root output at `new_base_dir` and each subproject at
/// `new_base_dir/<name>`. Idempotent.
pub fn remap_output_directories(tree: &mut BuildTree, new_base_dir: &Path) {
    tree.root.output_dir = new_base_dir.to_path_buf();
    for project in &mut tree.subprojects {
        project.output_dir = new_base_dir.join(&project.name);
        tracing::debug!(
            "{} output -> {}",
            project.path(),
            project.output_dir.display()
        );
    }
}

/// Set the namespace to the project's group if it is empty.
pub fn apply_namespace_default(project: &mut Project) {
    if project.namespace.is_empty() {
        project.namespace = project.group.clone();
    }
}

/// Apply the toolchain for the project's plugin kind.
///
/// Projects without an Android plugin are left untouched. Android projects
/// also get their namespace defaulted, and must end up with a non-empty one.
pub fn inject_toolchain(project: &mut Project, settings: &ToolchainMap) -> Result<(), ConfigError> {
    let kind = match project.plugin {
        PluginKind::None => return Ok(()),
        kind => kind,
    };
    let toolchain = settings
        .get(&kind)
        .ok_or_else(|| ConfigError::UnknownPluginKind(kind.to_string()))?;
    apply_namespace_default(project);
    if project.namespace.trim().is_empty() {
        return Err(ConfigError::EmptyNamespace(project.name.clone()));
    }
    project.toolchain = Some(toolchain.clone());
    tracing::debug!(
        "{} ({kind}): namespace={}, compile-sdk={}, java={}",
        project.path(),
        project.namespace,
        toolchain.compile_sdk,
        toolchain.java.target
    );
    Ok(())
}

/// Record that every other subproject is evaluated after `target`.
pub fn declare_evaluation_order(tree: &mut BuildTree, target: &str) {
    let dependents: Vec<String> = tree
        .subprojects
        .iter()
        .filter(|p| p.name != target)
        .map(|p| p.name.clone())
        .collect();
    for project in dependents {
        tree.add_constraint(EvaluationConstraint {
            project,
            after: target.to_string(),
        });
    }
}

/// Register `clean`, deleting the root's output directory when run.
pub fn register_clean_task(tree: &mut BuildTree) {
    let paths = vec![tree.root.output_dir.clone()];
    tree.register_task(TaskRegistration {
        name: CLEAN_TASK.to_string(),
        action: TaskAction::Delete { paths },
    });
}

/// Reject an empty base directory or one containing NUL.
pub fn validate_base_dir(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.trim().is_empty() || text.contains('\0') {
        return Err(ConfigError::InvalidPath(text.into_owned()));
    }
    Ok(())
}
