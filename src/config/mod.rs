//! This module handles the adapter's configuration, including loading and saving
//! host preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use playdeck::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.poll_interval_ms = Some(250);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Playdeck";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub poll_interval_ms: Option<u64>,
    #[serde(default)]
    pub volume: Option<u8>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            poll_interval_ms: Some(POLL_INTERVAL_MS),
            volume: Some(DEFAULT_UI_VOLUME),
        }
    }
}

/// Position-poll period while a session is active.
pub const POLL_INTERVAL_MS: u64 = 500;

/// Delay before a rejected seek is retried, once.
pub const SEEK_RETRY_DELAY_MS: u64 = 10;

/// UI volume scale bounds (what event handlers pass in).
pub const MIN_UI_VOLUME: u8 = 0;
pub const MAX_UI_VOLUME: u8 = 100;
pub const DEFAULT_UI_VOLUME: u8 = 50;

/// The native control's volume ceiling; UI volume is rescaled linearly onto
/// `0..=NATIVE_VOLUME_MAX`.
pub const NATIVE_VOLUME_MAX: u16 = 200;

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
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
