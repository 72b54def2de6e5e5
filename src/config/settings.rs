// src/config/settings.rs
use std::path::{Path, PathBuf};
use anyhow::{Result, Context};
use config::{Config, Environment, File};
use serde::{Serialize, Deserialize};

pub const APP_NAME: &str = "aqal-explorer";
pub const DEFAULT_STORAGE_KEY: &str = "aqal-analyses";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    pub storage_key: String,
    pub log_filter: String,
    pub window: WindowSettings,
    pub history: HistorySettings,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HistorySettings {
    /// Characters of insights/action plan shown on a history card
    pub preview_chars: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            log_filter: "warn".to_string(),
            window: WindowSettings {
                width: 1024.0,
                height: 768.0,
            },
            history: HistorySettings {
                preview_chars: 180,
            },
        }
    }
}

impl Settings {
    /// Loads `settings.toml` from the user config directory (if present) and
    /// `AQAL_*` environment overrides on top of the defaults.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Self::build(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        Self::build(Some(path))
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join("settings.toml"))
    }

    fn build(path: Option<&Path>) -> Result<Self> {
        let defaults = Settings::default();

        let mut builder = Config::builder()
            .set_default("storage_key", defaults.storage_key)?
            .set_default("log_filter", defaults.log_filter)?
            .set_default("window.width", defaults.window.width as f64)?
            .set_default("window.height", defaults.window.height as f64)?
            .set_default("history.preview_chars", defaults.history.preview_chars as i64)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(false));
        }

        let settings = builder
            .add_source(
                Environment::with_prefix("AQAL")
                    .prefix_separator("_")
                    .separator("__")
            )
            .build()
            .context("Failed to read settings")?
            .try_deserialize::<Settings>()
            .context("Failed to parse settings")?;

        if settings.storage_key.trim().is_empty() {
            return Err(anyhow::anyhow!("storage_key must not be empty"));
        }

        Ok(settings)
    }
}
