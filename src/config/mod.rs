//! @acp:module "Configuration"
//! @acp:summary "Calculator configuration loading and defaults"
//! @acp:domain calculator
//! @acp:layer config

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = ".strcalc.config.json";

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_true() -> bool {
    true
}

fn default_store_path() -> PathBuf {
    PathBuf::from(".strcalc/results.json")
}

/// @acp:summary "Main calculator configuration structure"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Config format version
    #[serde(default = "default_version")]
    pub version: String,

    /// Result store settings
    #[serde(default)]
    pub store: StoreConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            store: StoreConfig::default(),
        }
    }
}

impl Config {
    /// @acp:summary "Load config from a JSON file"
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// @acp:summary "Save config to a file"
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// @acp:summary "Load config if the file exists, defaults otherwise"
    ///
    /// A config file that exists but cannot be read or parsed is an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config not found, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Result log path
    pub fn store_path(&self) -> &Path {
        &self.store.path
    }
}

/// @acp:summary "Result store configuration"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Persist prime sums at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Result log file
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: default_store_path(),
        }
    }
}
