//! App settings with persistence
//!
//! Settings are saved to `~/.config/showroom/settings.toml`

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use showroom_rig::RigConfig;
use tracing::{info, warn};

/// All app settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppSettings {
    pub camera: RigConfig,
    pub assistant: AssistantSettings,
}

/// Assistant tuning
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssistantSettings {
    /// Service-side model choice; the service default when unset
    pub model: Option<String>,
}

impl AppSettings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("showroom"))
    }

    /// Get the settings file path
    fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.toml"))
    }

    /// Load settings from disk, writing the defaults on first run
    pub fn load_or_init() -> Self {
        let Some(path) = Self::settings_path() else {
            warn!("Could not determine config directory");
            return Self::default();
        };

        if !path.exists() {
            info!("No settings file found, writing defaults");
            let settings = Self::default();
            if let Err(e) = settings.save() {
                warn!("Failed to write default settings: {e}");
            }
            return settings;
        }

        match fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(settings) => {
                    info!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    warn!("Failed to parse settings: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read settings file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let Some(dir) = Self::config_dir() else {
            anyhow::bail!("Could not determine config directory");
        };

        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(dir.join("settings.toml"), content)?;
        Ok(())
    }
}
