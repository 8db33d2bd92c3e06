pub mod config;
pub mod error;
pub mod parser;
pub mod stages;
pub mod storage;
pub mod transform;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use error::{RewriteError, RewriteResult};
pub use stages::{RunOptions, Stage, StageReport};

#[derive(Debug, Clone)]
pub struct Rewriter {
    config: config::Config,
    options: RunOptions,
}

impl Rewriter {
    pub fn new(project_root: impl AsRef<Path>) -> Result<Self> {
        let config = config::Config::load_or_default(project_root)?;

        Ok(Self {
            config,
            options: RunOptions::default(),
        })
    }

    pub fn with_options(mut self, options: RunOptions) -> Self {
        self.options = options;
        self
    }

    pub fn config(&self) -> &config::Config {
        &self.config
    }

    pub fn target_dir(&self) -> PathBuf {
        self.config.target_dir()
    }

    pub fn normalize_theme(&self) -> RewriteResult<StageReport> {
        stages::normalize_theme(&self.target_dir(), self.config.extension(), self.options)
    }

    pub fn rename_brand(&self) -> RewriteResult<StageReport> {
        stages::rename_brand(&self.target_dir(), self.config.extension(), self.options)
    }

    pub fn inject_videos(&self) -> RewriteResult<StageReport> {
        stages::inject_videos(
            &self.target_dir(),
            self.config.extension(),
            self.config.backup_suffix(),
            self.options,
        )
    }

    pub fn run(&self, stage: Stage) -> RewriteResult<StageReport> {
        match stage {
            Stage::Theme => self.normalize_theme(),
            Stage::Brand => self.rename_brand(),
            Stage::Video => self.inject_videos(),
        }
    }
}
