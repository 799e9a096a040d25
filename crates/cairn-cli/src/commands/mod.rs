//! Command dispatch and handler modules.

mod clean;
mod init;
mod order;
mod resolve;

use std::path::{Path, PathBuf};

use miette::Result;

use cairn_core::MANIFEST_FILE;
use cairn_ops::ops_resolve::ResolveOptions;
use cairn_util::errors::CairnError;
use cairn_util::fs::find_ancestor_with;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let opts = ResolveOptions {
        global_config: cli.config.clone(),
    };
    let manifest_dir = cli.manifest_dir.as_deref();
    match cli.command {
        Command::Resolve { json, out } => {
            resolve::exec(&project_root(manifest_dir)?, &opts, json, out.as_deref())
        }
        Command::Order => order::exec(&project_root(manifest_dir)?, &opts),
        Command::Clean { dry_run } => clean::exec(&project_root(manifest_dir)?, &opts, dry_run),
        Command::Init { name, group } => init::exec(manifest_dir, name.as_deref(), group.as_deref()),
    }
}

/// Locate the directory containing `Cairn.toml`, starting from
/// `--manifest-dir` or the current directory and walking up.
fn project_root(manifest_dir: Option<&Path>) -> Result<PathBuf> {
    let start = match manifest_dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().map_err(CairnError::Io)?,
    };
    find_ancestor_with(&start, MANIFEST_FILE).ok_or_else(|| {
        CairnError::Manifest {
            message: format!("Could not find {MANIFEST_FILE} in this directory or any parent"),
        }
        .into()
    })
}
