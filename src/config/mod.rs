// SPDX-License-Identifier: MPL-2.0
//! This module handles the widget's configuration, including loading and saving
//! preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use flash_message::config::{self, Config};
//! use flash_message::ResetPolicy;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Let every flashed message keep its own timer
//! config.reset_policy = Some(ResetPolicy::Overlapping);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::error::Result;
use crate::flash::{ResetPolicy, Severity};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub use defaults::{
    APP_NAME, CONFIG_FILE, DEFAULT_INFO_RESET_MS, DEFAULT_MESSAGE_CLASS, DEFAULT_SUCCESS_RESET_MS,
    DEFAULT_WARNING_RESET_MS,
};

/// Fields missing from the settings file take their values from
/// `Config::default()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub reset_policy: Option<ResetPolicy>,
    /// Auto-reset delays used by `FlashMessage::flash`; `0` disables the reset.
    pub info_reset_ms: Option<u64>,
    pub success_reset_ms: Option<u64>,
    pub warning_reset_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reset_policy: Some(ResetPolicy::default()),
            info_reset_ms: Some(DEFAULT_INFO_RESET_MS),
            success_reset_ms: Some(DEFAULT_SUCCESS_RESET_MS),
            warning_reset_ms: Some(DEFAULT_WARNING_RESET_MS),
        }
    }
}

impl Config {
    /// Returns the auto-reset delay for `severity`, falling back to the
    /// severity's built-in duration when the config leaves it unset.
    #[must_use]
    pub fn auto_reset_for(&self, severity: Severity) -> Option<Duration> {
        let configured = match severity {
            Severity::Info => self.info_reset_ms,
            Severity::Success => self.success_reset_ms,
            Severity::Warning => self.warning_reset_ms,
            Severity::Danger => None,
        };
        match configured {
            Some(0) => None,
            Some(ms) => Some(Duration::from_millis(ms)),
            None => severity.auto_reset(),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid settings, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
