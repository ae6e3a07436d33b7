use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Vault configuration, stored as one JSON file.
///
/// Both paths are optional: an absent `data_dir` means the platform default
/// (see [`pv_infra::app_data_dir`]), and `camera_roll` only matters when the
/// vault runs on the folder camera instead of a real device.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VaultConfig {
    /// Root directory for photos and metadata. `None` = platform default.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Image folder backing the development camera.
    #[serde(default)]
    pub camera_roll: Option<PathBuf>,
}

/// Get the vault configuration directory.
pub fn config_dir() -> Result<PathBuf> {
    let base_dir =
        dirs::config_dir().ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
    Ok(base_dir.join("photovault"))
}

/// Get the configuration file path.
///
/// The `PHOTOVAULT_CONFIG_PATH` environment variable wins when set;
/// otherwise the file lives in the platform config directory.
pub fn config_path() -> Result<PathBuf> {
    if let Ok(path) = env::var("PHOTOVAULT_CONFIG_PATH") {
        return Ok(PathBuf::from(path));
    }
    Ok(config_dir()?.join("config.json"))
}

impl VaultConfig {
    /// Load the configuration, falling back to [`config_path`] when no
    /// explicit path is given. A missing file yields the defaults.
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => config_path()?,
        };

        match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)
                .with_context(|| format!("parse config failed: {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => {
                Err(e).with_context(|| format!("read config failed: {}", path.display()))
            }
        }
    }

    /// Save the configuration, creating parent directories as needed.
    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let path = match path {
            Some(path) => path,
            None => config_path()?,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create config dir failed: {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(self).context("serialize config failed")?;
        fs::write(&path, content)
            .with_context(|| format!("write config failed: {}", path.display()))?;
        Ok(())
    }
}
