use crate::core::{EmptrackError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;

/// Names a config file to use instead of the default location
pub const CONFIG_ENV: &str = "EMPTRACK_CONFIG";
/// Overrides `database.path`
pub const DATABASE_ENV: &str = "EMPTRACK_DATABASE";

const DEFAULT_DATABASE_PATH: &str = "employees.db";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Top-level configuration structure parsed from a TOML file.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

/// Where the employee database lives.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            path: DEFAULT_DATABASE_PATH.to_string(),
        }
    }
}

/// Logging verbosity.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| EmptrackError::Config(e.to_string()))?;
        config.log_level()?;
        Ok(config)
    }

    /// Resolves the configuration for this process.
    ///
    /// `EMPTRACK_CONFIG` must name a readable file when set. Otherwise the
    /// per-user file is used if present, and built-in defaults if not.
    /// `EMPTRACK_DATABASE` overrides the database path either way.
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var_os(CONFIG_ENV) {
            Some(path) => load_config(PathBuf::from(path))?,
            None => match default_config_path() {
                Some(path) if path.is_file() => load_config(path)?,
                _ => Config::default(),
            },
        };

        if let Ok(path) = std::env::var(DATABASE_ENV) {
            if !path.trim().is_empty() {
                config.database.path = path;
            }
        }
        Ok(config)
    }

    /// The configured maximum log level.
    pub fn log_level(&self) -> Result<Level> {
        self.logging.level.trim().parse::<Level>().map_err(|_| {
            EmptrackError::Config(format!("unknown log level '{}'", self.logging.level))
        })
    }
}

/// The per-user configuration file, `<config_dir>/emptrack/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("emptrack").join("config.toml"))
}

/// Loads configuration from a TOML file at the given path.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        EmptrackError::Config(format!("cannot read {}: {}", path.display(), e))
    })?;
    Config::from_toml(&content)
}
