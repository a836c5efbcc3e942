//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use autoparts_search::SearchConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// SQLite catalog database
    #[serde(default = "default_database")]
    pub database: PathBuf,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Search and analog settings
    #[serde(default)]
    pub search: SearchConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".autoparts").join("config.toml"))
    }

    /// Load configuration from an explicit file, or from the default location.
    ///
    /// An explicit file must exist. A missing default file means defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::Config(format!(
                        "Config file {} does not exist",
                        path.display()
                    )));
                }
                Self::load_from(path)
            }
            None => {
                let path = Self::path()?;
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    tracing::debug!(path = %path.display(), "no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load and validate configuration from a file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config
            .search
            .validate()
            .map_err(|e| CliError::Config(e.to_string()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            settings: Settings::default(),
            search: SearchConfig::default(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_database() -> PathBuf {
    PathBuf::from("autoparts.db")
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
