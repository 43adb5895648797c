// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[preview]` - Full-screen preview navigation (grid row width)
//! - `[backend]` - Timeout for backend calls
//! - `[logging]` - Log level and file output
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument or `HALF_FRAME_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use half_frame::app::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.preview.row_width = Some(6);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::app::warning::StorageWarning;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Full-screen preview settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PreviewConfig {
    /// Halves per visual row, used by the up/down keys.
    #[serde(default = "default_row_width", skip_serializing_if = "Option::is_none")]
    pub row_width: Option<usize>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            row_width: default_row_width(),
        }
    }
}

/// Backend call settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendConfig {
    /// Seconds before an export call is abandoned.
    #[serde(default = "default_timeout_secs", skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LoggingConfig {
    /// `tracing` filter directive (e.g. `info`, `half_frame=debug`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Write logs to `half_frame.log` in the data directory instead of stderr.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<bool>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub preview: PreviewConfig,

    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Effective preview row width, clamped to `1..=MAX_PREVIEW_ROW_WIDTH`.
    #[must_use]
    pub fn preview_row_width(&self) -> usize {
        self.preview
            .row_width
            .unwrap_or(DEFAULT_PREVIEW_ROW_WIDTH)
            .clamp(1, MAX_PREVIEW_ROW_WIDTH)
    }

    /// Effective export timeout.
    #[must_use]
    pub fn backend_timeout(&self) -> Duration {
        let secs = self
            .backend
            .timeout_secs
            .unwrap_or(DEFAULT_BACKEND_TIMEOUT_SECS)
            .clamp(MIN_BACKEND_TIMEOUT_SECS, MAX_BACKEND_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    /// Effective log filter.
    #[must_use]
    pub fn log_level(&self) -> &str {
        self.logging.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Whether logs go to a file in the data directory.
    #[must_use]
    pub fn log_to_file(&self) -> bool {
        self.logging.file.unwrap_or(false)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_row_width() -> Option<usize> {
    Some(DEFAULT_PREVIEW_ROW_WIDTH)
}

fn default_timeout_secs() -> Option<u64> {
    Some(DEFAULT_BACKEND_TIMEOUT_SECS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning explaining what went wrong.
pub fn load() -> (Config, Option<StorageWarning>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<StorageWarning>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "invalid config, using defaults");
                    return (Config::default(), Some(StorageWarning::ConfigInvalid));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
