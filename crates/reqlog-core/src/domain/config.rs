//! Application configuration loaded from an INI file
//!
//! Recognized keys (general section):
//!
//! ```ini
//! port = 8080
//! save_path = ./logs/app.log
//! ; optional, defaults to info
//! level = debug
//! ```

use ini::Ini;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::domain::level::Level;
use crate::error::ConfigError;

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "figure.ini";

pub mod keys {
    pub const PORT: &str = "port";
    pub const SAVE_PATH: &str = "save_path";
    pub const LEVEL: &str = "level";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Listen port for the service
    pub port: u16,
    /// Log file location
    pub save_path: PathBuf,
    /// Logger threshold
    #[serde(default)]
    pub level: Level,
}

impl AppConfig {
    /// Load and validate configuration from an INI file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let ini = Ini::load_from_file(path).map_err(|source| ConfigError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_ini(&ini)?;
        info!(
            "Loaded configuration from {} (port={}, save_path={}, level={})",
            path.display(),
            config.port,
            config.save_path.display(),
            config.level
        );
        Ok(config)
    }

    /// Parse configuration from INI text.
    pub fn from_ini_str(content: &str) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Self::from_ini(&ini)
    }

    fn from_ini(ini: &Ini) -> Result<Self, ConfigError> {
        let section = ini.general_section();

        let port = required(section.get(keys::PORT), keys::PORT)?;
        let port = port
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidValue {
                key: keys::PORT,
                value: port.to_string(),
                reason: e.to_string(),
            })?;

        let save_path = required(section.get(keys::SAVE_PATH), keys::SAVE_PATH)?;

        let level = match section.get(keys::LEVEL) {
            Some(raw) => raw.parse::<Level>().map_err(|e| ConfigError::InvalidValue {
                key: keys::LEVEL,
                value: raw.to_string(),
                reason: e.to_string(),
            })?,
            None => {
                debug!("No '{}' key, using default {}", keys::LEVEL, Level::default());
                Level::default()
            }
        };

        Ok(Self {
            port,
            save_path: PathBuf::from(save_path),
            level,
        })
    }
}

fn required<'a>(value: Option<&'a str>, key: &'static str) -> Result<&'a str, ConfigError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ConfigError::MissingKey(key)),
    }
}
