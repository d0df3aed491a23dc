// SPDX-License-Identifier: MPL-2.0
//! Default presentation settings, loaded from and saved to a `toast.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, ToastConfig};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.duration_secs = Some(4.0);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::{DEFAULT_DURATION_SECS, DEFAULT_TAP_TO_DISMISS, MAX_DURATION_SECS};

use crate::error::Result;
use crate::toast::{Placement, PlatformLayout};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "toast.toml";
const APP_NAME: &str = "IcedToast";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToastConfig {
    #[serde(default)]
    pub duration_secs: Option<f64>,
    #[serde(default)]
    pub tap_to_dismiss: Option<bool>,
    #[serde(default)]
    pub placement: Option<Placement>,
    #[serde(default)]
    pub platform: Option<PlatformLayout>,
    #[serde(default)]
    pub bold_title: Option<bool>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_secs: Some(DEFAULT_DURATION_SECS),
            tap_to_dismiss: Some(DEFAULT_TAP_TO_DISMISS),
            placement: Some(Placement::default()),
            platform: Some(PlatformLayout::default()),
            bold_title: Some(false),
        }
    }
}

impl ToastConfig {
    /// Auto-dismiss duration, clamped to the accepted range.
    ///
    /// Non-finite values fall back to the default.
    #[must_use]
    pub fn duration_secs(&self) -> f64 {
        match self.duration_secs {
            Some(secs) if secs.is_finite() => {
                secs.clamp(defaults::MIN_DURATION_SECS, MAX_DURATION_SECS)
            }
            _ => DEFAULT_DURATION_SECS,
        }
    }

    #[must_use]
    pub fn tap_to_dismiss(&self) -> bool {
        self.tap_to_dismiss.unwrap_or(DEFAULT_TAP_TO_DISMISS)
    }

    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement.unwrap_or_default()
    }

    #[must_use]
    pub fn platform(&self) -> PlatformLayout {
        self.platform.unwrap_or_default()
    }

    #[must_use]
    pub fn bold_title(&self) -> bool {
        self.bold_title.unwrap_or(false)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<ToastConfig> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(ToastConfig::default())
}

pub fn save(config: &ToastConfig) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<ToastConfig> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid toast config, using defaults");
            Ok(ToastConfig::default())
        }
    }
}

pub fn save_to_path(config: &ToastConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
