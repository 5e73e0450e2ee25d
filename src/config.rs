//! User configuration
//!
//! Optional TOML file supplying defaults for the command-line flags.

use crate::engine::Variant;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub variant: Variant,
    /// Word list file; the embedded dictionary when absent
    #[serde(default)]
    pub wordlist: Option<PathBuf>,
    #[serde(default)]
    pub parallel: bool,
    /// Maximum number of results printed by `find`
    #[serde(default)]
    pub limit: Option<usize>,
    /// Tiles dealt for a random rack
    #[serde(default = "default_rack_size")]
    pub rack_size: usize,
}

fn default_rack_size() -> usize {
    16
}

impl Default for Config {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            wordlist: None,
            parallel: false,
            limit: None,
            rack_size: default_rack_size(),
        }
    }
}

impl Config {
    /// Load the config file
    ///
    /// An explicit `path` must exist. Without one, the platform config
    /// location is tried and defaults are used when nothing is there.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let path = Self::config_path();
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse a config file at `path`
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Default config location, e.g. `~/.config/wordrack/config.toml`
    #[must_use]
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wordrack")
            .join("config.toml")
    }
}
