//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config` or the default location)
//! 3. Built-in defaults (always present)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for the showcase.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Line marker used when `fabrica demo` is run without `--line`.
    /// `None` showcases every registered line.
    pub line: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// The `config_file` parameter is the path the user passed via
    /// `--config` (or `None` to use the default location).  A missing file
    /// at the default location is fine — defaults apply; a missing or
    /// unparseable file passed explicitly is a configuration error.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        let (path, explicit) = match config_file {
            Some(p) => (p.clone(), true),
            None => (Self::config_path(), false),
        };

        if !path.exists() {
            if explicit {
                return Err(CliError::ConfigError {
                    message: format!("config file not found: {}", path.display()),
                    source: None,
                });
            }
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path).map_err(|e| CliError::ConfigError {
            message: format!("cannot read {}", path.display()),
            source: Some(Box::new(e)),
        })?;

        toml::from_str(&raw).map_err(|e| CliError::ConfigError {
            message: format!("cannot parse {}", path.display()),
            source: Some(Box::new(e)),
        })
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.fabrica.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "fabrica", "fabrica")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".fabrica.toml"))
    }
}
