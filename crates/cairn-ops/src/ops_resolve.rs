//! Operation: load `Cairn.toml` and resolve the build tree.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use cairn_core::config::GlobalConfig;
use cairn_core::manifest::Manifest;
use cairn_core::resolver::ConfigResolver;
use cairn_core::tree::{ResolvedTree, TaskAction};
use cairn_core::MANIFEST_FILE;
use cairn_util::errors::CairnError;

/// Options shared by every operation that resolves a tree.
#[derive(Debug, Default, Clone)]
pub struct ResolveOptions {
    /// Global config to use instead of `~/.cairn/config.toml`.
    pub global_config: Option<PathBuf>,
}

/// Resolve the tree whose manifest lives in `project_root`.
pub fn resolve(project_root: &Path, opts: &ResolveOptions) -> miette::Result<ResolvedTree> {
    let manifest = Manifest::from_path(&project_root.join(MANIFEST_FILE))?;
    let global = match &opts.global_config {
        Some(path) => GlobalConfig::load_from(path)?,
        None => GlobalConfig::load()?,
    };

    let tree = manifest.build_tree(project_root)?;
    let config = manifest.resolve_config(&global)?;
    let resolved = ConfigResolver::new(&config)
        .resolve(&tree)
        .map_err(CairnError::Config)?;
    tracing::debug!("Fingerprint {}", resolved.fingerprint());
    Ok(resolved)
}

/// Write the resolved tree as JSON to `out`.
pub fn write_json(resolved: &ResolvedTree, out: &Path) -> miette::Result<()> {
    let json = resolved.to_json().map_err(|e| CairnError::Generic {
        message: format!("Failed to serialize resolved tree: {e}"),
    })?;
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        cairn_util::fs::ensure_dir(parent).map_err(CairnError::Io)?;
    }
    std::fs::write(out, json + "\n").map_err(CairnError::Io)?;
    Ok(())
}

/// Human-readable summary of a resolved tree.
pub fn summary(resolved: &ResolvedTree) -> String {
    let mut out = String::new();
    let root = resolved.root();
    let _ = writeln!(
        out,
        "{} -> {}",
        root.name,
        resolved.absolute_path(&root.output_dir).display()
    );

    let repos: Vec<&str> = resolved
        .repositories()
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    if !repos.is_empty() {
        let _ = writeln!(out, "repositories: {}", repos.join(", "));
    }

    for project in resolved.subprojects() {
        let _ = write!(
            out,
            "  {} [{}] {}",
            project.path(),
            project.plugin,
            project.output_dir.display()
        );
        if let Some(toolchain) = &project.toolchain {
            let _ = write!(
                out,
                " namespace={} java={}/{} compile-sdk={} build-tools={} ndk={}",
                project.namespace,
                toolchain.java.source,
                toolchain.java.target,
                toolchain.compile_sdk,
                toolchain.build_tools,
                toolchain.ndk
            );
        }
        out.push('\n');
    }

    for constraint in resolved.evaluation_order() {
        let _ = writeln!(
            out,
            "  :{} evaluates after :{}",
            constraint.project, constraint.after
        );
    }

    for task in resolved.tasks() {
        match &task.action {
            TaskAction::Delete { paths } => {
                let paths: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
                let _ = writeln!(out, "task {}: delete {}", task.name, paths.join(", "));
            }
        }
    }
    out
}
