use std::path::Path;

use miette::Result;

use cairn_ops::ops_clean::{self, CleanResult};
use cairn_ops::ops_resolve::{self, ResolveOptions};
use cairn_util::progress;

pub fn exec(project_root: &Path, opts: &ResolveOptions, dry_run: bool) -> Result<()> {
    let resolved = ops_resolve::resolve(project_root, opts)?;

    match ops_clean::clean(&resolved, dry_run)? {
        CleanResult::Removed(paths) => {
            for path in &paths {
                progress::status("Removed", &path.display().to_string());
            }
            println!("Cleaned build directory");
        }
        CleanResult::WouldRemove(paths) => {
            for path in &paths {
                progress::status_warn("Would remove", &path.display().to_string());
            }
        }
        CleanResult::NothingToClean => println!("Nothing to clean"),
    }

    Ok(())
}
