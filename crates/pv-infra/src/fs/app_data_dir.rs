use anyhow::{Context, Result};
use std::path::PathBuf;

/// Get the PhotoVault application data root directory.
///
/// # Platform-specific paths
/// - macOS: ~/Library/Application Support/PhotoVault
/// - Windows: %APPDATA%\PhotoVault
/// - Linux: $XDG_DATA_HOME/PhotoVault or ~/.local/share/PhotoVault
///
/// The directory is not created here; callers decide when to create it.
pub fn app_data_dir() -> Result<PathBuf> {
    let base_dir =
        get_platform_data_dir().context("Failed to get platform-specific data directory")?;

    Ok(base_dir.join("PhotoVault"))
}

fn get_platform_data_dir() -> Result<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        dirs::data_dir().ok_or_else(|| anyhow::anyhow!("Unable to get macOS data directory"))
    }

    #[cfg(target_os = "windows")]
    {
        dirs::data_dir().ok_or_else(|| anyhow::anyhow!("Unable to get Windows APPDATA directory"))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_DATA_HOME wins when set; dirs falls back to ~/.local/share.
        if let Some(xdg_data_home) = std::env::var_os("XDG_DATA_HOME") {
            Ok(PathBuf::from(xdg_data_home))
        } else {
            dirs::data_dir().ok_or_else(|| anyhow::anyhow!("Unable to get Linux data directory"))
        }
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
    {
        compile_error!("Unsupported platform for app_data_dir")
    }
}
