pub mod project;

pub use project::{find_project_root, Config, CONFIG_FILE_NAME};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigData {
    pub files: FilesConfig,
    pub backup: BackupConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    /// Directory holding the templates, relative to the project root
    pub target_dir: String,
    /// File name suffix without the leading dot
    pub extension: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackupConfig {
    pub suffix: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            target_dir: "src/pages/iaiso/learning".to_string(),
            extension: "tsx".to_string(),
        }
    }
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            suffix: "bak".to_string(),
        }
    }
}
