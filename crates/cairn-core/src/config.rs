use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use cairn_util::errors::CairnError;

use crate::toolchain::ToolchainLayer;

/// Global user configuration loaded from `~/.cairn/config.toml`.
///
/// Forms the lowest configurable layer: repository definitions and
/// toolchain defaults here apply to every manifest unless it overrides them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Extra named repositories, name to URL.
    #[serde(default)]
    pub repositories: BTreeMap<String, String>,

    #[serde(default)]
    pub toolchain: GlobalToolchainConfig,
}

/// Global toolchain settings from `[toolchain]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalToolchainConfig {
    #[serde(default)]
    pub defaults: ToolchainLayer,
}

impl GlobalConfig {
    /// Load the global configuration, or return defaults if the file doesn't exist.
    pub fn load() -> miette::Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load from an explicit path; a missing file yields defaults.
    pub fn load_from(path: &Path) -> miette::Result<Self> {
        if !path.is_file() {
            tracing::debug!("No global config at {}", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| CairnError::Generic {
            message: format!("Failed to read global config: {e}"),
        })?;
        toml::from_str(&content).map_err(|e| {
            CairnError::Generic {
                message: format!("Failed to parse global config {}: {e}", path.display()),
            }
            .into()
        })
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }
}

/// Returns the Cairn data directory: `$CAIRN_HOME`, else `~/.cairn/`.
pub fn dirs_path() -> PathBuf {
    if let Ok(home) = std::env::var("CAIRN_HOME") {
        return PathBuf::from(home);
    }
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".cairn")
}
