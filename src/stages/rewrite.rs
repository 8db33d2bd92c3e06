use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::{FileChange, RunOptions, StageReport};
use crate::error::{PathContext, RewriteResult};
use crate::storage::{collect_files, AtomicFile};
use crate::transform::{brand, theme};

struct Rewritten {
    content: String,
    occurrences: Option<usize>,
}

/// Apply the theme rename table to every file under `root`
pub fn normalize_theme(
    root: &Path,
    extension: &str,
    options: RunOptions,
) -> RewriteResult<StageReport> {
    rewrite_files(root, extension, options, |content| {
        let normalized = theme::normalize(content);
        (normalized != content).then_some(Rewritten {
            content: normalized,
            occurrences: None,
        })
    })
}

/// Replace the old brand token with the new one in every file under `root`
pub fn rename_brand(root: &Path, extension: &str, options: RunOptions) -> RewriteResult<StageReport> {
    rewrite_files(root, extension, options, |content| {
        brand::rename(content).map(|renamed| Rewritten {
            content: renamed.content,
            occurrences: Some(renamed.occurrences),
        })
    })
}

/// Shared walk-and-rewrite loop. A missing `root` has nothing to rewrite;
/// any other I/O failure stops the run.
fn rewrite_files<F>(
    root: &Path,
    extension: &str,
    options: RunOptions,
    mut rewrite: F,
) -> RewriteResult<StageReport>
where
    F: FnMut(&str) -> Option<Rewritten>,
{
    let mut report = StageReport {
        dry_run: options.dry_run,
        ..StageReport::default()
    };

    if !root.is_dir() {
        debug!(root = %root.display(), "target directory missing, nothing to rewrite");
        return Ok(report);
    }

    for path in collect_files(root, extension)? {
        report.scanned += 1;
        if let Some(change) = rewrite_file(&path, options, &mut rewrite)? {
            report.modified.push(change);
        }
    }

    Ok(report)
}

fn rewrite_file<F>(path: &Path, options: RunOptions, rewrite: &mut F) -> RewriteResult<Option<FileChange>>
where
    F: FnMut(&str) -> Option<Rewritten>,
{
    let content = fs::read_to_string(path).with_path(path)?;

    let Some(rewritten) = rewrite(&content) else {
        debug!(path = %path.display(), "unchanged");
        return Ok(None);
    };

    if !options.dry_run {
        AtomicFile::new(path)?.write_str(&rewritten.content)?;
    }
    info!(path = %path.display(), dry_run = options.dry_run, "updated");

    Ok(Some(FileChange {
        path: PathBuf::from(path),
        occurrences: rewritten.occurrences,
        backup: None,
    }))
}
