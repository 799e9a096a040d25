//! Toolchain settings: Java language level, compile SDK, build-tools and NDK.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A Java language level such as `17` or `1.8`.
///
/// Levels up to 8 are written in the legacy `1.x` form, matching how the
/// Android toolchain reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JavaVersion(u32);

/// Failure to parse a [`JavaVersion`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid Java version '{0}' (expected e.g. \"17\", \"1.8\" or \"VERSION_17\")")]
pub struct JavaVersionParseError(String);

impl JavaVersion {
    pub const fn new(level: u32) -> Self {
        Self(level)
    }
}

impl FromStr for JavaVersion {
    type Err = JavaVersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || JavaVersionParseError(s.to_string());
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("VERSION_")
            .map(|rest| rest.replace('_', "."))
            .unwrap_or_else(|| trimmed.to_string());
        let level = match digits.strip_prefix("1.") {
            Some(legacy) => legacy.parse::<u32>().map_err(|_| err())?,
            None => digits.parse::<u32>().map_err(|_| err())?,
        };
        if level == 0 {
            return Err(err());
        }
        Ok(Self(level))
    }
}

impl fmt::Display for JavaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 <= 8 {
            write!(f, "1.{}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl TryFrom<String> for JavaVersion {
    type Error = JavaVersionParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<JavaVersion> for String {
    fn from(v: JavaVersion) -> Self {
        v.to_string()
    }
}

/// Source/target compatibility pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JavaCompatibility {
    pub source: JavaVersion,
    pub target: JavaVersion,
}

impl JavaCompatibility {
    /// Same level for both source and target.
    pub fn uniform(version: JavaVersion) -> Self {
        Self {
            source: version,
            target: version,
        }
    }
}

/// The `java` field of a toolchain table: either one level or a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JavaSpec {
    Uniform(JavaVersion),
    Pair {
        source: JavaVersion,
        target: JavaVersion,
    },
}

impl From<JavaSpec> for JavaCompatibility {
    fn from(spec: JavaSpec) -> Self {
        match spec {
            JavaSpec::Uniform(v) => JavaCompatibility::uniform(v),
            JavaSpec::Pair { source, target } => JavaCompatibility { source, target },
        }
    }
}

/// Fully resolved toolchain settings applied to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolchainSettings {
    pub java: JavaCompatibility,
    #[serde(rename = "compile-sdk")]
    pub compile_sdk: u32,
    #[serde(rename = "build-tools")]
    pub build_tools: String,
    pub ndk: String,
}

/// One layer of toolchain configuration with every field optional.
///
/// Layers stack from global config up to the per-plugin-kind table;
/// a field set in a higher layer replaces the one below it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolchainLayer {
    #[serde(default)]
    pub java: Option<JavaSpec>,
    #[serde(default, rename = "compile-sdk")]
    pub compile_sdk: Option<u32>,
    #[serde(default, rename = "build-tools")]
    pub build_tools: Option<String>,
    #[serde(default)]
    pub ndk: Option<String>,
}

impl ToolchainLayer {
    /// Stack `self` on top of `lower`.
    pub fn over(&self, lower: &ToolchainLayer) -> ToolchainLayer {
        ToolchainLayer {
            java: self.java.or(lower.java),
            compile_sdk: self.compile_sdk.or(lower.compile_sdk),
            build_tools: self.build_tools.clone().or_else(|| lower.build_tools.clone()),
            ndk: self.ndk.clone().or_else(|| lower.ndk.clone()),
        }
    }

    /// Turn a fully stacked layer into settings.
    ///
    /// On failure returns the manifest key of the first missing field.
    pub fn into_settings(self) -> Result<ToolchainSettings, &'static str> {
        Ok(ToolchainSettings {
            java: self.java.ok_or("java")?.into(),
            compile_sdk: self.compile_sdk.ok_or("compile-sdk")?,
            build_tools: self.build_tools.ok_or("build-tools")?,
            ndk: self.ndk.ok_or("ndk")?,
        })
    }
}
