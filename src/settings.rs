use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    /// When enabled the application initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
    /// Install the persistent status indicator that discourages the OS
    /// from reclaiming the background host.
    #[serde(default = "default_presence")]
    pub presence_announcement: bool,
    /// Directory for rolling log files. If `None`, logs go to stderr only.
    #[serde(default)]
    pub log_dir: Option<String>,
}

fn default_presence() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            presence_announcement: true,
            log_dir: None,
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Default settings location: `<config>/hoverdock/settings.json`,
/// falling back to the working directory when no config dir exists.
pub fn default_settings_path() -> PathBuf {
    dirs_next::config_dir()
        .map(|dir| dir.join("hoverdock").join("settings.json"))
        .unwrap_or_else(|| PathBuf::from("settings.json"))
}
