use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::RewriteResult;

/// Files under `root` whose name ends with `.{extension}`, in sorted order.
///
/// Symlinked files are included; symlinked directories are not descended.
/// Walk failures (including a missing root) are returned as errors.
pub fn collect_files(root: &Path, extension: &str) -> RewriteResult<Vec<PathBuf>> {
    let suffix = format!(".{}", extension);
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }

        let matches = entry
            .file_name()
            .to_str()
            .map(|name| name.ends_with(&suffix))
            .unwrap_or(false);

        if matches {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
