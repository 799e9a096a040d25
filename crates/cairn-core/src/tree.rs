//! The build tree: root project, subprojects, ordering constraints and
//! deferred tasks.

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use cairn_util::errors::ConfigError;
use cairn_util::fs::normalize_lexically;
use cairn_util::hash::sha256_bytes;

use crate::project::{Project, DEFAULT_BUILD_DIR};
use crate::repository::Repository;

/// `project` must finish configuration evaluation after `after`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationConstraint {
    pub project: String,
    pub after: String,
}

/// A deferred action for the external build engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TaskAction {
    /// Delete the given paths, which are relative to the root's default
    /// build directory unless absolute.
    Delete { paths: Vec<PathBuf> },
}

/// A named task registered on the tree but not executed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRegistration {
    pub name: String,
    pub action: TaskAction,
}

/// A root project plus its subprojects, as mutated during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildTree {
    /// Directory holding the root project (and its manifest).
    #[serde(rename = "root-dir")]
    pub root_dir: PathBuf,
    pub root: Project,
    pub subprojects: Vec<Project>,
    #[serde(rename = "evaluation-order")]
    pub evaluation_order: Vec<EvaluationConstraint>,
    pub tasks: Vec<TaskRegistration>,
}

impl BuildTree {
    /// Assemble a tree.
    ///
    /// Subproject names must be unique and usable as a single path
    /// component, since each becomes a directory under the root output.
    pub fn new(
        root_dir: impl Into<PathBuf>,
        root: Project,
        subprojects: Vec<Project>,
    ) -> Result<Self, ConfigError> {
        let mut seen = BTreeSet::new();
        for sub in &subprojects {
            let mut components = Path::new(&sub.name).components();
            if !matches!(
                (components.next(), components.next()),
                (Some(Component::Normal(_)), None)
            ) {
                return Err(ConfigError::InvalidPath(sub.name.clone()));
            }
            if sub.name == root.name || !seen.insert(sub.name.as_str()) {
                return Err(ConfigError::DuplicateProject(sub.name.clone()));
            }
        }
        Ok(Self {
            root_dir: root_dir.into(),
            root,
            subprojects,
            evaluation_order: Vec::new(),
            tasks: Vec::new(),
        })
    }

    pub fn subproject(&self, name: &str) -> Option<&Project> {
        self.subprojects.iter().find(|p| p.name == name)
    }

    /// Root followed by subprojects in declaration order.
    pub fn projects(&self) -> impl Iterator<Item = &Project> {
        std::iter::once(&self.root).chain(self.subprojects.iter())
    }

    /// Register `task`, replacing any existing task of the same name.
    pub fn register_task(&mut self, task: TaskRegistration) {
        match self.tasks.iter_mut().find(|t| t.name == task.name) {
            Some(existing) => *existing = task,
            None => self.tasks.push(task),
        }
    }

    pub fn task(&self, name: &str) -> Option<&TaskRegistration> {
        self.tasks.iter().find(|t| t.name == name)
    }

    /// Add an ordering constraint unless it is already present.
    pub fn add_constraint(&mut self, constraint: EvaluationConstraint) {
        if !self.evaluation_order.contains(&constraint) {
            self.evaluation_order.push(constraint);
        }
    }

    /// Absolute location of an output directory on disk.
    ///
    /// Output directories are relative to the root's default build
    /// directory, so `../../build` under `/w/app/android` lands at
    /// `/w/app/build`.
    pub fn absolute_path(&self, output_dir: &Path) -> PathBuf {
        normalize_lexically(&self.root_dir.join(DEFAULT_BUILD_DIR).join(output_dir))
    }

    /// Whether deleting `path` would remove the root project directory.
    ///
    /// True for the root directory itself, any of its ancestors and any
    /// filesystem root.
    pub fn is_protected(&self, path: &Path) -> bool {
        let target = absolutize(path);
        target.parent().is_none() || absolutize(&self.root_dir).starts_with(&target)
    }
}

fn absolutize(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    normalize_lexically(&absolute)
}

/// A fully resolved tree. Read-only; handed to the build engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTree {
    #[serde(flatten)]
    tree: BuildTree,
    repositories: Vec<Repository>,
    fingerprint: String,
}

impl ResolvedTree {
    /// Freeze `tree`, computing a fingerprint over its contents.
    pub fn freeze(tree: BuildTree, repositories: Vec<Repository>) -> Self {
        let fingerprint = fingerprint_of(&tree, &repositories);
        Self {
            tree,
            repositories,
            fingerprint,
        }
    }

    pub fn root(&self) -> &Project {
        &self.tree.root
    }

    pub fn subprojects(&self) -> &[Project] {
        &self.tree.subprojects
    }

    pub fn subproject(&self, name: &str) -> Option<&Project> {
        self.tree.subproject(name)
    }

    pub fn repositories(&self) -> &[Repository] {
        &self.repositories
    }

    pub fn evaluation_order(&self) -> &[EvaluationConstraint] {
        &self.tree.evaluation_order
    }

    pub fn tasks(&self) -> &[TaskRegistration] {
        &self.tree.tasks
    }

    pub fn task(&self, name: &str) -> Option<&TaskRegistration> {
        self.tree.task(name)
    }

    /// SHA-256 over the resolved contents; stable across runs with the
    /// same inputs.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn absolute_path(&self, output_dir: &Path) -> PathBuf {
        self.tree.absolute_path(output_dir)
    }

    pub fn is_protected(&self, path: &Path) -> bool {
        self.tree.is_protected(path)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn fingerprint_of(tree: &BuildTree, repositories: &[Repository]) -> String {
    // root_dir is left out so the same tree checked out elsewhere matches.
    let payload = serde_json::json!({
        "root": tree.root,
        "subprojects": tree.subprojects,
        "evaluation-order": tree.evaluation_order,
        "tasks": tree.tasks,
        "repositories": repositories,
    });
    sha256_bytes(payload.to_string().as_bytes())
}
