//! Application settings persistence
//!
//! Handles loading user preferences (motion, window size, link targets and
//! the asset directory). A missing file is written with defaults on first run
//! so the links can be edited by hand.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Shortest scramble interval accepted from the settings file
const MIN_SCRAMBLE_INTERVAL_MS: u64 = 10;

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Display and motion settings
    pub display: DisplaySettings,
    /// Initial window geometry
    pub window: WindowSettings,
    /// Outbound link targets
    pub links: LinkSettings,
    /// Directory holding the screenshot assets
    pub assets_dir: PathBuf,
}

/// Display-related settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Draw a still backdrop and reveal titles instantly
    pub reduced_motion: bool,
    /// Interval between scramble frames in milliseconds
    pub scramble_interval_ms: u64,
}

/// Window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

/// Outbound link targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkSettings {
    /// Latest Mallorn installer
    pub mallorn_download: String,
    /// Mallorn source repository
    pub mallorn_repo: String,
    /// SkinGenie store listing
    pub skin_genie_store: String,
    /// Donation page
    pub donate: String,
    /// Author profile shown in the navigation bar
    pub author_profile: String,
}

impl DisplaySettings {
    /// Scramble tick interval, clamped to a sane minimum
    pub fn scramble_interval(&self) -> Duration {
        Duration::from_millis(self.scramble_interval_ms.max(MIN_SCRAMBLE_INTERVAL_MS))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display: DisplaySettings::default(),
            window: WindowSettings::default(),
            links: LinkSettings::default(),
            assets_dir: PathBuf::from("assets"),
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            scramble_interval_ms: 40,
        }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 860.0,
        }
    }
}

impl Default for LinkSettings {
    fn default() -> Self {
        Self {
            mallorn_download:
                "https://github.com/odinchev/Mallorn/releases/latest/download/Mallorn_Setup.exe"
                    .to_string(),
            mallorn_repo: "https://github.com/odinchev/Mallorn".to_string(),
            skin_genie_store:
                "https://play.google.com/store/apps/details?id=com.lightspire.skingenie"
                    .to_string(),
            donate: "https://ko-fi.com/YOUR_USERNAME".to_string(),
            author_profile: "https://github.com/odinchev".to_string(),
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Result<PathBuf, SettingsError> {
        directories::ProjectDirs::from("gg", "lightspire", "Lightspire")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or(SettingsError::NoConfigDir)
    }

    /// Load settings from file, writing defaults when none exist yet
    pub fn load() -> Self {
        let path = match Self::file_path() {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("{}, using default settings", e);
                return Self::default();
            }
        };

        match Self::load_from_file(&path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {:?}", path);
                settings
            }
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                let settings = Self::default();
                match settings.save_to_file(&path) {
                    Ok(()) => tracing::info!("Wrote default settings to {:?}", path),
                    Err(e) => tracing::warn!("Failed to write default settings: {}", e),
                }
                settings
            }
            Err(e) => {
                tracing::warn!("Failed to load settings from {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Could not determine config directory")]
    NoConfigDir,
}
