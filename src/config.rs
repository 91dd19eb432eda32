use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default name of the host's virtual station interface.
pub const DEFAULT_INTERFACE: &str = "ethsta0";

/// Default path of the slave control character device.
pub const DEFAULT_CONTROL_DEVICE: &str = "/dev/esps0";

/// Host-side settings. Everything is defaulted; the file only exists for
/// deployments where the driver exposes different node names.
#[derive(Debug, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_interface")]
    pub interface: String,
    #[serde(default = "default_control_device")]
    pub control_device: String,
}

fn default_interface() -> String {
    DEFAULT_INTERFACE.to_string()
}

fn default_control_device() -> String {
    DEFAULT_CONTROL_DEVICE.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            interface: default_interface(),
            control_device: default_control_device(),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::load_from(&settings_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))
    }
}

pub fn settings_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().context("Could not determine config directory")?;
    Ok(config_dir.join("station-connect").join("config.toml"))
}
