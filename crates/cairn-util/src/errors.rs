use miette::Diagnostic;
use thiserror::Error;

/// Failures raised while resolving a build tree.
///
/// Every variant carries the offending identifier (plugin kind, repository
/// name, path or project name) so the caller can report it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ConfigError {
    /// A project declares a plugin kind with no toolchain entry.
    #[error("No toolchain settings configured for plugin kind '{0}'")]
    #[diagnostic(
        code(cairn::config::unknown_plugin_kind),
        help("Add a [toolchain.{0}] table to Cairn.toml")
    )]
    UnknownPluginKind(String),

    /// A requested repository is neither well-known nor defined.
    #[error("Repository '{0}' is not defined")]
    #[diagnostic(
        code(cairn::config::missing_repository),
        help("Use a well-known repository (google, maven-central) or define it under [repository.<name>]")
    )]
    MissingRepository(String),

    /// An output path is empty or malformed.
    #[error("Invalid path '{0}'")]
    #[diagnostic(code(cairn::config::invalid_path))]
    InvalidPath(String),

    /// An evaluation-order target names no subproject.
    #[error("Project '{0}' is not a subproject of this tree")]
    #[diagnostic(code(cairn::config::unknown_project))]
    UnknownProject(String),

    /// An Android project resolved to an empty namespace.
    #[error("Project '{0}' has an empty namespace")]
    #[diagnostic(
        code(cairn::config::empty_namespace),
        help("Set `group` under [project] or `namespace` on the subproject")
    )]
    EmptyNamespace(String),

    /// Two subprojects share a name and would collide on output location.
    #[error("Subproject '{0}' is declared more than once")]
    #[diagnostic(code(cairn::config::duplicate_project))]
    DuplicateProject(String),
}

impl ConfigError {
    /// The identifier this error is about.
    pub fn subject(&self) -> &str {
        match self {
            Self::UnknownPluginKind(s)
            | Self::MissingRepository(s)
            | Self::InvalidPath(s)
            | Self::UnknownProject(s)
            | Self::EmptyNamespace(s)
            | Self::DuplicateProject(s) => s,
        }
    }
}

/// Unified error type for all Cairn operations.
#[derive(Debug, Error, Diagnostic)]
pub enum CairnError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed manifest (e.g. Cairn.toml).
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check your Cairn.toml for syntax errors"))]
    Manifest { message: String },

    /// Build-tree resolution failed.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}
