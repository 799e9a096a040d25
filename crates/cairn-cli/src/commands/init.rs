use std::path::Path;

use miette::Result;

use cairn_util::errors::CairnError;
use cairn_util::progress;

pub fn exec(dir: Option<&Path>, name: Option<&str>, group: Option<&str>) -> Result<()> {
    let dir = match dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().map_err(CairnError::Io)?,
    };
    let path = cairn_ops::ops_init::init(&dir, name, group)?;
    progress::status_info("Created", &path.display().to_string());
    println!("Initialized Cairn project in {}", dir.display());
    Ok(())
}
