//! Composition of the real adapters into an opened gallery.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;
use pv_core::{CameraPort, GalleryDeps, PhotoGallery};
use pv_infra::{app_data_dir, FileKeyValueStore, FolderCamera, FsPhotoStore, SystemClock};

use crate::config::VaultConfig;

/// Subdirectory of the data root holding the photo files.
const PHOTOS_DIR: &str = "photos";

/// File name of the key-value store backing the metadata cache.
const PREFERENCES_FILE: &str = "preferences.json";

/// Open a gallery over the file-system adapters and the given camera.
///
/// The data root comes from the config, falling back to the platform
/// default, and is created if missing. Previously captured photos are
/// reloaded before this returns.
pub async fn open_gallery(
    config: &VaultConfig,
    camera: Arc<dyn CameraPort>,
) -> Result<PhotoGallery> {
    let data_dir = resolve_data_dir(config)?;
    tokio::fs::create_dir_all(&data_dir)
        .await
        .with_context(|| format!("create data dir failed: {}", data_dir.display()))?;
    info!("Opening photo vault at {}", data_dir.display());

    let deps = GalleryDeps {
        camera,
        files: Arc::new(FsPhotoStore::new(data_dir.join(PHOTOS_DIR))),
        cache: Arc::new(FileKeyValueStore::new(data_dir.join(PREFERENCES_FILE))),
        clock: Arc::new(SystemClock),
    };
    let gallery = PhotoGallery::open(deps).await.context("open gallery failed")?;
    Ok(gallery)
}

/// Open a gallery backed by the development folder camera.
///
/// Requires `camera_roll` to be configured; the roll may be empty, in which
/// case captures fail until images appear in it.
pub async fn open_with_folder_camera(config: &VaultConfig) -> Result<PhotoGallery> {
    let roll = config
        .camera_roll
        .clone()
        .context("no camera roll configured")?;
    open_gallery(config, Arc::new(FolderCamera::new(roll))).await
}

fn resolve_data_dir(config: &VaultConfig) -> Result<PathBuf> {
    match &config.data_dir {
        Some(dir) => Ok(dir.clone()),
        None => app_data_dir(),
    }
}
