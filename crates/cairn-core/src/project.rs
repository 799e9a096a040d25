use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::toolchain::ToolchainSettings;

/// Default build directory name of a project before any remapping.
pub const DEFAULT_BUILD_DIR: &str = "build";

/// Which Android plugin a project applies, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluginKind {
    /// `com.android.application`
    #[serde(alias = "com.android.application")]
    Application,
    /// `com.android.library`
    #[serde(alias = "com.android.library")]
    Library,
    #[default]
    None,
}

impl PluginKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Application => "application",
            Self::Library => "library",
            Self::None => "none",
        }
    }
}

impl fmt::Display for PluginKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A project in the build tree: the root or one of its subprojects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    /// Name of the parent project; `None` for the root.
    pub parent: Option<String>,
    pub group: String,
    pub plugin: PluginKind,
    #[serde(rename = "output-dir")]
    pub output_dir: PathBuf,
    pub namespace: String,
    pub toolchain: Option<ToolchainSettings>,
}

impl Project {
    /// Create a root project with default output directory and no plugin.
    pub fn root(name: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            group: group.into(),
            plugin: PluginKind::None,
            output_dir: PathBuf::from(DEFAULT_BUILD_DIR),
            namespace: String::new(),
            toolchain: None,
        }
    }

    /// Create a subproject of `parent`.
    ///
    /// Until remapped, its output directory is `<name>/build` relative to
    /// the root project directory. The group is inherited from `parent`;
    /// when the parent has none, the parent's name is used, as Gradle does.
    pub fn subproject(name: impl Into<String>, parent: &Project, plugin: PluginKind) -> Self {
        let name = name.into();
        let group = if parent.group.is_empty() {
            parent.name.clone()
        } else {
            parent.group.clone()
        };
        Self {
            output_dir: PathBuf::from(&name).join(DEFAULT_BUILD_DIR),
            parent: Some(parent.name.clone()),
            group,
            plugin,
            namespace: String::new(),
            toolchain: None,
            name,
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Gradle-style project path, e.g. `:app`.
    pub fn path(&self) -> String {
        if self.is_root() {
            ":".to_string()
        } else {
            format!(":{}", self.name)
        }
    }
}
