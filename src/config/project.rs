use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::ConfigData;
use crate::error::ConfigError;

pub const CONFIG_FILE_NAME: &str = "template-rewriter.toml";

#[derive(Debug, Clone)]
pub struct Config {
    pub data: ConfigData,
    pub project_root: PathBuf,
}

impl Config {
    pub fn load_or_default(project_root: impl AsRef<Path>) -> Result<Self> {
        let project_root = project_root.as_ref().to_path_buf();
        let config_path = project_root.join(CONFIG_FILE_NAME);

        let data: ConfigData = if config_path.exists() {
            let content = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
            toml::from_str(&content).context("Failed to parse config file")?
        } else {
            ConfigData::default()
        };

        let config = Self { data, project_root };
        config.validate()?;
        Ok(config)
    }

    /// Write the default config file unless one already exists.
    ///
    /// Returns the config file path and whether it was created.
    pub fn init(project_root: impl AsRef<Path>) -> Result<(PathBuf, bool)> {
        let config_path = project_root.as_ref().join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Ok((config_path, false));
        }

        let content = toml::to_string_pretty(&ConfigData::default())
            .context("Failed to serialize default config")?;
        fs::write(&config_path, content)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;

        Ok((config_path, true))
    }

    pub fn target_dir(&self) -> PathBuf {
        self.project_root.join(&self.data.files.target_dir)
    }

    pub fn extension(&self) -> &str {
        &self.data.files.extension
    }

    pub fn backup_suffix(&self) -> &str {
        &self.data.backup.suffix
    }

    fn validate(&self) -> Result<()> {
        let extension = &self.data.files.extension;
        if extension.is_empty() || extension.starts_with('.') {
            return Err(ConfigError::InvalidValue {
                field: "files.extension".to_string(),
                value: extension.clone(),
            }
            .into());
        }

        let suffix = &self.data.backup.suffix;
        if suffix.is_empty() || suffix.contains(['/', '\\']) {
            return Err(ConfigError::InvalidValue {
                field: "backup.suffix".to_string(),
                value: suffix.clone(),
            }
            .into());
        }

        if self.data.files.target_dir.trim().is_empty() {
            return Err(ConfigError::Invalid("files.target_dir must not be empty".to_string()).into());
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: ConfigData::default(),
            project_root: PathBuf::from("."),
        }
    }
}

/// First of `start` and its ancestors that contains a `src/` directory
pub fn find_project_root(start: &Path) -> Result<PathBuf, ConfigError> {
    start
        .ancestors()
        .find(|dir| dir.join("src").is_dir())
        .map(Path::to_path_buf)
        .ok_or_else(|| ConfigError::ProjectRootNotFound {
            start: start.to_path_buf(),
        })
}
