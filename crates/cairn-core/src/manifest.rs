use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use cairn_util::errors::CairnError;

use crate::config::GlobalConfig;
use crate::project::{PluginKind, Project};
use crate::repository::{RepositoryCatalog, RepositoryEntry};
use crate::resolver::{ResolveConfig, ToolchainMap};
use crate::toolchain::ToolchainLayer;
use crate::tree::BuildTree;

/// The parsed representation of a `Cairn.toml` file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Repository names applied to all projects.
    #[serde(default)]
    pub repositories: Vec<String>,

    pub project: ProjectSection,

    /// Custom repositories from `[repository.<name>]`.
    #[serde(default)]
    pub repository: BTreeMap<String, RepositoryEntry>,

    #[serde(default)]
    pub toolchain: ToolchainSection,

    #[serde(default, rename = "subproject")]
    pub subprojects: Vec<SubprojectEntry>,
}

/// Root project identity and layout from `[project]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSection {
    pub name: String,
    #[serde(default)]
    pub group: String,
    /// Shared output directory, relative to the root's `build/`.
    #[serde(rename = "output-dir")]
    pub output_dir: PathBuf,
    #[serde(default, rename = "evaluation-depends-on")]
    pub evaluation_depends_on: Option<String>,
}

/// Toolchain layers from `[toolchain.*]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolchainSection {
    #[serde(default)]
    pub defaults: ToolchainLayer,
    #[serde(default)]
    pub application: Option<ToolchainLayer>,
    #[serde(default)]
    pub library: Option<ToolchainLayer>,
}

/// One `[[subproject]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubprojectEntry {
    pub name: String,
    #[serde(default)]
    pub plugin: PluginKind,
    /// Overrides the group inherited from `[project]`.
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub namespace: Option<String>,
}

impl Manifest {
    /// Load and parse a `Cairn.toml` file from the given path.
    ///
    /// Before parsing, `${env:VAR}` references in the manifest content are
    /// resolved using `.cairn.env` (if present alongside `Cairn.toml`) and
    /// process environment variables.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CairnError::Manifest {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;

        let dir = path.parent().unwrap_or(Path::new("."));
        let env_vars = crate::properties::load_env_file(&dir.join(crate::properties::ENV_FILE))
            .unwrap_or_default();
        let resolved = crate::properties::interpolate(&content, &env_vars);

        Self::parse_toml(&resolved)
    }

    /// Parse a `Cairn.toml` from a string (no interpolation).
    pub fn parse_toml(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            CairnError::Manifest {
                message: format!("Failed to parse Cairn.toml: {e}"),
            }
            .into()
        })
    }

    /// Build the unresolved project tree rooted at `root_dir`.
    pub fn build_tree(&self, root_dir: &Path) -> miette::Result<BuildTree> {
        let root = Project::root(&self.project.name, &self.project.group);
        let subprojects = self
            .subprojects
            .iter()
            .map(|entry| {
                let mut project = Project::subproject(&entry.name, &root, entry.plugin);
                if let Some(group) = &entry.group {
                    project = project.with_group(group);
                }
                if let Some(namespace) = &entry.namespace {
                    project = project.with_namespace(namespace);
                }
                project
            })
            .collect();
        BuildTree::new(root_dir, root, subprojects)
            .map_err(|e| CairnError::Config(e).into())
    }

    /// Stack global and manifest layers into a resolver configuration.
    pub fn resolve_config(&self, global: &GlobalConfig) -> miette::Result<ResolveConfig> {
        let mut catalog = RepositoryCatalog::with_well_known();
        for (name, url) in &global.repositories {
            catalog.define(name, url);
        }
        for (name, entry) in &self.repository {
            catalog.define(name, entry.url());
        }

        let shared = self.toolchain.defaults.over(&global.toolchain.defaults);
        let mut toolchains = ToolchainMap::new();
        for (kind, layer) in [
            (PluginKind::Application, &self.toolchain.application),
            (PluginKind::Library, &self.toolchain.library),
        ] {
            let Some(layer) = layer else {
                continue;
            };
            let settings = layer
                .over(&shared)
                .into_settings()
                .map_err(|field| CairnError::Manifest {
                    message: format!("[toolchain.{kind}] is missing `{field}`"),
                })?;
            toolchains.insert(kind, settings);
        }

        Ok(ResolveConfig {
            repositories: self.repositories.clone(),
            catalog,
            new_base_output_dir: self.project.output_dir.clone(),
            toolchains,
            evaluation_depends_on: self.project.evaluation_depends_on.clone(),
        })
    }
}
