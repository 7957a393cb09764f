//! Game settings and preferences
//!
//! Read once at start-up, separately from the high score table:
//! `rush_settings.json` in the working directory on native targets,
//! LocalStorage in the browser. The game never writes them back.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::persistence::HighScoreStorage;
#[cfg(not(target_arch = "wasm32"))]
use crate::persistence::FileStorage;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings are malformed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where native builds keep the high score file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighScoreLocation {
    /// `highscores.json` in the working directory
    #[default]
    Working,
    /// `highscores.json` in the per-user config directory
    Private,
}

/// User settings. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed RNG seed; `None` draws one at start-up
    pub seed: Option<u64>,
    /// Show a flavour tip every few seconds of play
    pub show_tips: bool,
    /// High score file location (native only)
    pub highscore_location: HighScoreLocation,
    /// Explicit high score file; wins over `highscore_location`
    pub highscore_path: Option<PathBuf>,
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Tick limit for the headless demo run
    pub demo_max_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            show_tips: true,
            highscore_location: HighScoreLocation::Working,
            highscore_path: None,
            log_level: "info".to_string(),
            demo_max_ticks: 20_000,
        }
    }
}

impl Settings {
    /// Settings file name (native)
    pub const FILE_NAME: &'static str = "rush_settings.json";

    /// LocalStorage key (wasm)
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "rush_settings";

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Load settings from the working directory
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match Self::load_from(Path::new(Self::FILE_NAME)) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", Self::FILE_NAME);
                settings
            }
            Err(e) => {
                log::info!("Using default settings ({e})");
                Self::default()
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// High score file these settings select
    #[cfg(not(target_arch = "wasm32"))]
    pub fn high_score_file(&self) -> FileStorage {
        match (&self.highscore_path, self.highscore_location) {
            (Some(path), _) => FileStorage::new(path.clone()),
            (None, HighScoreLocation::Working) => FileStorage::desktop(),
            (None, HighScoreLocation::Private) => FileStorage::private(),
        }
    }

    /// High score backend for this platform
    #[cfg(not(target_arch = "wasm32"))]
    pub fn high_score_storage(&self) -> Box<dyn HighScoreStorage> {
        let storage = self.high_score_file();
        log::info!("High scores at {}", storage.path().display());
        Box::new(storage)
    }

    #[cfg(target_arch = "wasm32")]
    pub fn high_score_storage(&self) -> Box<dyn HighScoreStorage> {
        Box::new(crate::persistence::LocalStorage)
    }
}
