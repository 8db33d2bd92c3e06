use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::AtomicFile;
use crate::error::RewriteResult;

/// `Page.tsx` → `Page.tsx.<suffix>`
pub fn backup_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}

/// Persist `original` next to `path`. An existing backup is overwritten.
pub fn write_backup(path: &Path, suffix: &str, original: &str) -> RewriteResult<PathBuf> {
    let backup = backup_path(path, suffix);
    AtomicFile::new(&backup)?.write_str(original)?;
    Ok(backup)
}
