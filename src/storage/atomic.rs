use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{PathContext, RewriteError, RewriteResult};

/// Write-to-temp-then-rename file replacement, so an interrupted run never
/// leaves a half-written template behind.
pub struct AtomicFile {
    path: PathBuf,
    temp_path: PathBuf,
}

impl AtomicFile {
    pub fn new<P: AsRef<Path>>(path: P) -> RewriteResult<Self> {
        let path = path.as_ref().to_path_buf();
        let temp_path = Self::temp_path(&path)?;

        Ok(Self { path, temp_path })
    }

    fn temp_path(path: &Path) -> RewriteResult<PathBuf> {
        let file_name = path.file_name().ok_or_else(|| RewriteError::FileAccess {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
        })?;

        let temp_name = format!(
            ".{}.tmp.{}",
            file_name.to_string_lossy(),
            std::process::id()
        );

        Ok(path.with_file_name(temp_name))
    }

    /// Replace the file's content, keeping the original file's permissions
    pub fn write(&self, content: &[u8]) -> RewriteResult<()> {
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.temp_path)
            .with_path(&self.temp_path)?;

        temp_file.write_all(content).with_path(&self.temp_path)?;
        temp_file.sync_all().with_path(&self.temp_path)?;
        drop(temp_file);

        if let Ok(metadata) = fs::metadata(&self.path) {
            fs::set_permissions(&self.temp_path, metadata.permissions())
                .with_path(&self.temp_path)?;
        }

        if let Err(err) = fs::rename(&self.temp_path, &self.path) {
            let _ = fs::remove_file(&self.temp_path);
            return Err(RewriteError::FileAccess {
                path: self.path.clone(),
                source: err,
            });
        }

        Ok(())
    }

    pub fn write_str(&self, content: &str) -> RewriteResult<()> {
        self.write(content.as_bytes())
    }
}
