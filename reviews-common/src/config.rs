//! Database location resolution
//!
//! Priority order:
//! 1. Command-line argument (highest priority)
//! 2. `REVIEWS_DATABASE` environment variable
//! 3. TOML config file (`database = "..."`)
//! 4. OS-dependent compiled default (fallback)

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::{Error, Result};

/// Environment variable naming the database file
pub const DATABASE_ENV_VAR: &str = "REVIEWS_DATABASE";

/// File name used when no location is configured
pub const DEFAULT_DATABASE_FILE: &str = "thereviews.db";

/// Contents of `config.toml`
#[derive(Debug, Default, Clone, Deserialize)]
pub struct TomlConfig {
    pub database: Option<PathBuf>,
}

/// Load and parse a TOML config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Cannot read {}: {}", path.display(), e)))?;

    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Invalid TOML in {}: {}", path.display(), e)))
}

/// Platform config file location (`~/.config/reviews/config.toml` on Linux)
pub fn default_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("reviews").join("config.toml"))
}

/// Get OS-dependent default database path
pub fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("reviews").join(DEFAULT_DATABASE_FILE))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_FILE))
}

/// Resolves the database file path from the configured sources
#[derive(Debug, Clone, Default)]
pub struct DatabasePathResolver {
    cli_arg: Option<PathBuf>,
    config_file: Option<PathBuf>,
}

impl DatabasePathResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cli_arg(mut self, path: Option<PathBuf>) -> Self {
        self.cli_arg = path;
        self
    }

    /// Override the config file location (defaults to `default_config_file()`)
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    pub fn resolve(&self) -> PathBuf {
        if let Some(path) = &self.cli_arg {
            debug!("Database path from command line: {}", path.display());
            return path.clone();
        }

        if let Ok(path) = std::env::var(DATABASE_ENV_VAR) {
            if !path.is_empty() {
                debug!("Database path from {}: {}", DATABASE_ENV_VAR, path);
                return PathBuf::from(path);
            }
        }

        let config_file = self.config_file.clone().or_else(default_config_file);
        if let Some(config_file) = config_file.filter(|p| p.exists()) {
            match load_toml_config(&config_file) {
                Ok(TomlConfig {
                    database: Some(path),
                }) => {
                    debug!("Database path from {}", config_file.display());
                    return path;
                }
                Ok(_) => {}
                Err(e) => warn!("Ignoring config file: {}", e),
            }
        }

        default_database_path()
    }
}
