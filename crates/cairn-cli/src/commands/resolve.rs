//! Handler for `cairn resolve`.

use std::path::Path;

use miette::Result;

use cairn_ops::ops_resolve::{self, ResolveOptions};
use cairn_util::errors::CairnError;
use cairn_util::progress;

pub fn exec(
    project_root: &Path,
    opts: &ResolveOptions,
    json: bool,
    out: Option<&Path>,
) -> Result<()> {
    let resolved = ops_resolve::resolve(project_root, opts)?;

    if let Some(out) = out {
        ops_resolve::write_json(&resolved, out)?;
        progress::status("Wrote", &out.display().to_string());
    }

    if json {
        let text = resolved.to_json().map_err(|e| CairnError::Generic {
            message: format!("Failed to serialize resolved tree: {e}"),
        })?;
        println!("{text}");
    } else {
        print!("{}", ops_resolve::summary(&resolved));
    }

    progress::status(
        "Resolved",
        &format!(
            "{} project(s), fingerprint {}",
            resolved.subprojects().len() + 1,
            &resolved.fingerprint()[..12]
        ),
    );
    Ok(())
}
