//! Operation: run the registered `clean` task.

use std::path::{Path, PathBuf};

use cairn_core::resolver::CLEAN_TASK;
use cairn_core::tree::{ResolvedTree, TaskAction};
use cairn_util::errors::{CairnError, ConfigError};

/// Execute the tree's `clean` task: delete each path it names.
///
/// Paths are resolved against the root's default build directory. A path
/// that is the root directory, one of its ancestors or a filesystem root is
/// refused with [`ConfigError::InvalidPath`] before anything is touched,
/// dry run or not. With `dry_run` nothing is deleted; existing paths are
/// reported as [`CleanResult::WouldRemove`].
pub fn clean(resolved: &ResolvedTree, dry_run: bool) -> miette::Result<CleanResult> {
    let task = resolved.task(CLEAN_TASK).ok_or_else(|| CairnError::Generic {
        message: format!("No '{CLEAN_TASK}' task is registered"),
    })?;

    let TaskAction::Delete { paths } = &task.action;
    let targets: Vec<PathBuf> = paths.iter().map(|p| resolved.absolute_path(p)).collect();
    if let Some(path) = targets.iter().find(|p| resolved.is_protected(p)) {
        let err = ConfigError::InvalidPath(path.display().to_string());
        return Err(CairnError::Config(err).into());
    }

    let existing: Vec<PathBuf> = targets.into_iter().filter(|p| p.exists()).collect();

    if existing.is_empty() {
        return Ok(CleanResult::NothingToClean);
    }
    if dry_run {
        return Ok(CleanResult::WouldRemove(existing));
    }
    for path in &existing {
        remove_path(path)?;
        tracing::info!("Removed {}", path.display());
    }
    Ok(CleanResult::Removed(existing))
}

fn remove_path(path: &Path) -> miette::Result<()> {
    if path.is_dir() {
        std::fs::remove_dir_all(path).map_err(CairnError::Io)?;
    } else {
        std::fs::remove_file(path).map_err(CairnError::Io)?;
    }
    Ok(())
}

/// Result of a clean operation.
#[derive(Debug, PartialEq, Eq)]
pub enum CleanResult {
    Removed(Vec<PathBuf>),
    WouldRemove(Vec<PathBuf>),
    NothingToClean,
}
