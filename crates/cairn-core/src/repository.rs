//! Artifact repositories available to every project in the tree.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use cairn_util::errors::ConfigError;

/// Maven Central base URL.
pub const MAVEN_CENTRAL_URL: &str = "https://repo.maven.apache.org/maven2";

/// Google's Maven repository.
pub const GOOGLE_MAVEN_URL: &str = "https://dl.google.com/dl/android/maven2";

/// A repository entry in `Cairn.toml`, either a URL string or a table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RepositoryEntry {
    Url(String),
    Detailed { url: String },
}

impl RepositoryEntry {
    pub fn url(&self) -> &str {
        match self {
            RepositoryEntry::Url(url) | RepositoryEntry::Detailed { url } => url,
        }
    }
}

/// A resolved repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub url: String,
}

/// Known repository names and their URLs.
///
/// Starts with the well-known registries; later definitions replace earlier
/// ones with the same name.
#[derive(Debug, Clone)]
pub struct RepositoryCatalog {
    entries: BTreeMap<String, String>,
}

impl RepositoryCatalog {
    /// A catalog containing `google` and `maven-central`.
    pub fn with_well_known() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert("google".to_string(), GOOGLE_MAVEN_URL.to_string());
        entries.insert("maven-central".to_string(), MAVEN_CENTRAL_URL.to_string());
        Self { entries }
    }

    /// Add or replace a named repository.
    pub fn define(&mut self, name: impl Into<String>, url: impl Into<String>) {
        let url: String = url.into();
        self.entries
            .insert(name.into(), url.trim_end_matches('/').to_string());
    }

    /// Resolve requested names in order, dropping duplicates.
    pub fn resolve(&self, requested: &[String]) -> Result<Vec<Repository>, ConfigError> {
        let mut resolved: Vec<Repository> = Vec::new();
        for name in requested {
            let key = canonical_name(name);
            if resolved.iter().any(|r| r.name == key) {
                continue;
            }
            let url = self
                .entries
                .get(key)
                .ok_or_else(|| ConfigError::MissingRepository(name.clone()))?;
            resolved.push(Repository {
                name: key.to_string(),
                url: url.clone(),
            });
        }
        Ok(resolved)
    }
}

impl Default for RepositoryCatalog {
    fn default() -> Self {
        Self::with_well_known()
    }
}

/// Map Gradle DSL spellings onto catalog names.
fn canonical_name(name: &str) -> &str {
    match name {
        "mavenCentral" | "mavenCentral()" => "maven-central",
        "google()" => "google",
        other => other,
    }
}
