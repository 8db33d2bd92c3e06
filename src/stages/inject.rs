use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::{FileChange, FileFailure, RunOptions, StageReport};
use crate::error::{PathContext, RewriteError, RewriteResult};
use crate::storage::{collect_files, write_backup, AtomicFile};
use crate::transform::VideoInjector;

/// Inject section background videos into every file under `root`.
///
/// A missing `root` aborts the run. Failures on individual files are
/// recorded in the report and the walk continues.
pub fn inject_videos(
    root: &Path,
    extension: &str,
    backup_suffix: &str,
    options: RunOptions,
) -> RewriteResult<StageReport> {
    if !root.is_dir() {
        return Err(RewriteError::MissingDirectory {
            path: root.to_path_buf(),
        });
    }

    let injector = VideoInjector::new()?;
    let mut report = StageReport {
        dry_run: options.dry_run,
        ..StageReport::default()
    };

    for path in collect_files(root, extension)? {
        report.scanned += 1;

        match inject_file(&injector, &path, backup_suffix, options) {
            Ok(Some(change)) => {
                info!(path = %path.display(), dry_run = options.dry_run, "modified");
                report.modified.push(change);
            }
            Ok(None) => debug!(path = %path.display(), "unchanged"),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to process file");
                report.failures.push(FileFailure {
                    path,
                    message: describe(&err),
                });
            }
        }
    }

    Ok(report)
}

/// Error message followed by its causes, `outer: inner: ...`
fn describe(err: &RewriteError) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = std::error::Error::source(cause);
    }
    message
}

fn inject_file(
    injector: &VideoInjector,
    path: &Path,
    backup_suffix: &str,
    options: RunOptions,
) -> RewriteResult<Option<FileChange>> {
    let original = fs::read_to_string(path).with_path(path)?;

    let Some(updated) = injector.process(&original) else {
        return Ok(None);
    };

    let backup = if options.dry_run {
        None
    } else {
        let backup = write_backup(path, backup_suffix, &original)?;
        AtomicFile::new(path)?.write_str(&updated)?;
        Some(backup)
    };

    Ok(Some(FileChange {
        path: PathBuf::from(path),
        occurrences: None,
        backup,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SECTION: &str = r#"<div ref={addToRefs} className="py-16 bg-secondary/30"><div className="max-w-5xl mx-auto"><h2 className="text-foreground">Program Objectives</h2></div></div>"#;

    #[test]
    fn test_missing_directory_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("learning");

        let err = inject_videos(&missing, "tsx", "bak", RunOptions::default()).unwrap_err();
        assert!(matches!(err, RewriteError::MissingDirectory { .. }));
    }

    #[test]
    fn test_bad_file_does_not_stop_run() -> RewriteResult<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();
        fs::write(root.join("A.tsx"), [0xffu8, 0xfe])?;
        fs::write(root.join("B.tsx"), SECTION)?;

        let report = inject_videos(root, "tsx", "bak", RunOptions::default())?;

        assert_eq!(report.scanned, 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].path, root.join("A.tsx"));
        assert!(report.failures[0].message.contains("A.tsx"));
        assert!(report.failures[0].message.contains("UTF-8"));
        assert_eq!(report.modified_count(), 1);
        assert_eq!(report.modified[0].backup, Some(root.join("B.tsx.bak")));
        Ok(())
    }

    #[test]
    fn test_dry_run_skips_backup() -> RewriteResult<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();
        fs::write(root.join("A.tsx"), SECTION)?;

        let report = inject_videos(root, "tsx", "bak", RunOptions { dry_run: true })?;

        assert_eq!(report.modified_count(), 1);
        assert_eq!(report.modified[0].backup, None);
        assert!(!root.join("A.tsx.bak").exists());
        assert_eq!(fs::read_to_string(root.join("A.tsx"))?, SECTION);
        Ok(())
    }
}
