//! Harness settings with persistence
//!
//! Settings are read from `~/.config/stride/settings.toml` unless a path is
//! given on the command line.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use stride_core::TimeConfig;
use stride_game::{LocomotionConfig, LookConfig};
use tracing::{info, warn};

use crate::script::ScriptStep;

/// All settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub locomotion: LocomotionConfig,
    pub time: TimeConfig,
    pub look: LookConfig,
    /// Extra key bindings, key identifier -> action name
    pub bindings: BTreeMap<String, String>,
    pub harness: HarnessSettings,
}

impl Settings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("stride"))
    }

    /// Get the settings file path
    fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.toml"))
    }

    /// Load settings from the config directory, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            warn!("Could not determine config directory");
            return Self::default();
        };

        if !path.exists() {
            info!("No settings file found, using defaults");
            return Self::default();
        }

        Self::load_from(&path)
    }

    /// Load settings from a specific file, falling back to defaults on error
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => match Self::parse(&content) {
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

    /// Parse settings from TOML text. Missing sections and fields take defaults.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Save settings to the config directory
    pub fn save(&self) -> anyhow::Result<()> {
        let Some(path) = Self::settings_path() else {
            anyhow::bail!("Could not determine config directory");
        };
        self.save_to(&path)
    }

    /// Save settings to a specific file, creating its directory if needed
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        info!("Saved settings to {:?}", path);
        Ok(())
    }
}

/// Headless walk settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessSettings {
    /// Number of frames to simulate
    pub frames: u32,
    /// Simulated frames per second
    pub frame_rate: f32,
    /// Seed for box placement
    pub seed: u64,
    /// Number of static boxes scattered around the spawn point
    pub box_count: usize,
    /// Log the pose every this many frames (0 disables)
    pub log_interval: u32,
    /// Write the trajectory as JSON here, if set
    pub record_path: Option<PathBuf>,
    /// Timed key and look events
    pub script: Vec<ScriptStep>,
}

impl Default for HarnessSettings {
    fn default() -> Self {
        Self {
            frames: 600,
            frame_rate: 60.0,
            seed: 1,
            box_count: 500,
            log_interval: 60,
            record_path: None,
            script: ScriptStep::default_walk(),
        }
    }
}
