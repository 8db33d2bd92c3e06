//! Directory-level drivers for the three rewrite stages.

pub mod inject;
pub mod rewrite;

pub use inject::inject_videos;
pub use rewrite::{normalize_theme, rename_brand};

use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Compute and report changes without writing anything
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Theme,
    Brand,
    Video,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Theme, Stage::Brand, Stage::Video];
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Theme => "theme",
            Stage::Brand => "brand",
            Stage::Video => "video",
        };
        f.write_str(name)
    }
}

/// A file whose content changed (or would change, on a dry run)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    pub path: PathBuf,
    /// Replaced token count, for stages that count occurrences
    pub occurrences: Option<usize>,
    /// Backup written before the file was replaced
    pub backup: Option<PathBuf>,
}

/// A file the injector could not process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub path: PathBuf,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageReport {
    pub scanned: usize,
    pub modified: Vec<FileChange>,
    pub failures: Vec<FileFailure>,
    pub dry_run: bool,
}

impl StageReport {
    pub fn modified_count(&self) -> usize {
        self.modified.len()
    }

    pub fn total_occurrences(&self) -> usize {
        self.modified
            .iter()
            .filter_map(|change| change.occurrences)
            .sum()
    }

    pub fn is_clean(&self) -> bool {
        self.modified.is_empty() && self.failures.is_empty()
    }
}
