//! Handler for `cairn order`.

use std::path::Path;

use miette::Result;

use cairn_ops::ops_order;
use cairn_ops::ops_resolve::ResolveOptions;

pub fn exec(project_root: &Path, opts: &ResolveOptions) -> Result<()> {
    for (i, name) in ops_order::order(project_root, opts)?.iter().enumerate() {
        println!("{:>3}. {name}", i + 1);
    }
    Ok(())
}
