//! Directory helpers for preparing output locations.
use crate::error::Result;
use log::debug;
use std::fs;
use std::path::Path;

pub fn dir_exists(path: &Path) -> bool {
    path.is_dir()
}

/// Create `path` and any missing parents.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !dir_exists(path) {
        fs::create_dir_all(path)?;
        debug!("created directory {}", path.display());
    }
    Ok(())
}

/// Remove `path` with everything below it, then recreate it empty.
pub fn clean_dir(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_dir_all(path)?;
    }
    fs::create_dir_all(path)?;
    debug!("cleaned directory {}", path.display());
    Ok(())
}

/// Create the parent directory of `path` when it has one.
pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent),
        _ => Ok(()),
    }
}
