use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_OUTPUT, DEFAULT_SOURCES};
use crate::error::{MergerError, Result};

/// Inputs and output of a merge run.
///
/// Every field may be omitted from the TOML file; omitted fields fall back to
/// the fixed default run.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct MergerConfig {
    /// Source descriptors, merged in this order
    pub sources: Vec<String>,
    /// Directory the source descriptors are resolved against
    pub data_dir: PathBuf,
    /// Destination of the merged table
    pub output: PathBuf,
    /// Enables the JSON log file when set
    pub log_dir: Option<PathBuf>,
}

impl Default for MergerConfig {
    fn default() -> Self {
        Self {
            sources: DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect(),
            data_dir: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT),
            log_dir: None,
        }
    }
}

impl MergerConfig {
    pub fn load(config_path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(config_path).map_err(|e| {
            MergerError::Config(format!(
                "Failed to read config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;

        Self::from_toml(&config_content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: MergerConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Filesystem location of a source descriptor
    pub fn source_path(&self, source: &str) -> PathBuf {
        self.data_dir.join(source)
    }
}
