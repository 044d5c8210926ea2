use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application settings persisted as settings.json in the config directory.
/// The color combinations themselves live in a separate XML file (see
/// [`super::combinations`]) that is re-read every watch cycle; these settings
/// are loaded once at startup.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    /// Path to the XML color-combination list.
    pub combinations_path: PathBuf,
    /// Directory snapshots are written into.
    pub snapshot_dir: PathBuf,
    /// Delay between watch cycles, in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Minimum gap between two alerts, in seconds.
    #[serde(default = "default_alert_cooldown_secs")]
    pub alert_cooldown_secs: u64,
    /// Gap between snapshot writes, in seconds.
    #[serde(default = "default_snapshot_interval_secs")]
    pub snapshot_interval_secs: u64,
}

fn default_poll_interval_ms() -> u64 {
    50
}

fn default_alert_cooldown_secs() -> u64 {
    30
}

fn default_snapshot_interval_secs() -> u64 {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            combinations_path: PathBuf::from("config.xml"),
            snapshot_dir: PathBuf::from("snapshots"),
            poll_interval_ms: default_poll_interval_ms(),
            alert_cooldown_secs: default_alert_cooldown_secs(),
            snapshot_interval_secs: default_snapshot_interval_secs(),
        }
    }
}

pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(app_config_dir: PathBuf) -> Self {
        Self {
            config_path: app_config_dir.join("settings.json"),
        }
    }

    pub fn load(&self) -> Settings {
        if self.config_path.exists() {
            if let Ok(content) = fs::read_to_string(&self.config_path) {
                if let Ok(settings) = serde_json::from_str(&content) {
                    return settings;
                }
            }
        }
        Settings::default()
    }

    pub fn save(&self, settings: &Settings) -> io::Result<()> {
        // Ensure directory exists
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(settings)?;
        fs::write(&self.config_path, content)
    }
}
