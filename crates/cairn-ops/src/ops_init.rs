//! Operation: scaffold a `Cairn.toml`.

use std::path::{Path, PathBuf};

use cairn_core::template::{render_manifest, TemplateContext};
use cairn_core::MANIFEST_FILE;
use cairn_util::errors::CairnError;

/// Write the default manifest into `dir`; fails if one already exists.
///
/// `name` defaults to the directory name, `group` to `com.example.<name>`.
pub fn init(dir: &Path, name: Option<&str>, group: Option<&str>) -> miette::Result<PathBuf> {
    let manifest_path = dir.join(MANIFEST_FILE);
    if manifest_path.exists() {
        return Err(CairnError::Generic {
            message: format!("{MANIFEST_FILE} already exists in this directory"),
        }
        .into());
    }

    let name = name
        .map(str::to_string)
        .or_else(|| dir.file_name().and_then(|n| n.to_str()).map(str::to_string))
        .unwrap_or_else(|| "android".to_string());
    let group = group
        .map(str::to_string)
        .unwrap_or_else(|| format!("com.example.{}", name.replace('-', "_")));

    let ctx = TemplateContext::new(&name, &group);
    std::fs::write(&manifest_path, render_manifest(&ctx)).map_err(CairnError::Io)?;
    tracing::debug!("Wrote {}", manifest_path.display());
    Ok(manifest_path)
}
