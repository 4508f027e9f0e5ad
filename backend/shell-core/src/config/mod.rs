use crate::APP_NAMESPACE;
use crate::error::config::ConfigError;

use common::ErrorLocation;

use std::panic::Location;
use std::path::{Path, PathBuf};

use log::{LevelFilter, info};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "shell.json";
const CONFIG_VERSION: u32 = 1;

// ============================================
// ENUMS WITH DEFAULTS
// ============================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Default for LogLevel {
    #[cfg(debug_assertions)]
    fn default() -> Self {
        LogLevel::Debug
    }

    #[cfg(not(debug_assertions))]
    fn default() -> Self {
        LogLevel::Info
    }
}

impl LogLevel {
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

// ============================================
// CONFIG STRUCTS
// ============================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub level: LogLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WindowConfig {
    /// Hide the main window at launch so the app starts in the background.
    #[serde(default = "default_start_hidden")]
    pub start_hidden: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            start_hidden: default_start_hidden(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShellConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub window: WindowConfig,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            logging: LoggingConfig::default(),
            window: WindowConfig::default(),
        }
    }
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_version() -> u32 {
    CONFIG_VERSION
}
fn default_start_hidden() -> bool {
    true
}

// ============================================
// IMPLEMENTATION
// ============================================

/// Per-user configuration directory for the shell: `{config_dir}/MouseHero`.
///
/// # Errors
///
/// Returns [`ConfigError::DirectoryNotFound`] when the platform has no config directory.
#[track_caller]
pub fn resolve_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_NAMESPACE))
        .ok_or_else(|| ConfigError::DirectoryNotFound {
            location: ErrorLocation::from(Location::caller()),
            reason: String::from("Cannot determine the per-user configuration directory"),
        })
}

impl ShellConfig {
    /// Load config from {config_dir}/shell.json.
    ///
    /// A missing file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but cannot be read, parsed or validated.
    #[track_caller]
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let location = ErrorLocation::from(Location::caller());
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            info!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| ConfigError::ReadError {
                location,
                path: config_path.clone(),
                source: e,
            })?;

        let config: ShellConfig =
            serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError {
                location,
                path: config_path.clone(),
                reason: e.to_string(),
            })?;

        config.validate()?;

        info!("Config loaded from {}", config_path.display());
        Ok(config)
    }

    /// Save config to {config_dir}/shell.json through a temp file and rename.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if validation, directory creation, serialization, write or
    /// rename fails.
    #[track_caller]
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        let location = ErrorLocation::from(Location::caller());

        self.validate()?;

        std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::WriteError {
            location,
            path: config_dir.to_path_buf(),
            source: e,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let temp_path = config_dir.join(format!("{CONFIG_FILE_NAME}.tmp"));

        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializeError {
            location,
            reason: e.to_string(),
        })?;

        std::fs::write(&temp_path, json).map_err(|e| ConfigError::WriteError {
            location,
            path: temp_path.clone(),
            source: e,
        })?;

        std::fs::rename(&temp_path, &config_path).map_err(|e| ConfigError::WriteError {
            location,
            path: config_path.clone(),
            source: e,
        })?;

        info!("Config saved to {}", config_path.display());
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    #[track_caller]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 || self.version > CONFIG_VERSION {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid version: {} (expected 1-{})",
                    self.version, CONFIG_VERSION
                ),
            });
        }

        Ok(())
    }
}
