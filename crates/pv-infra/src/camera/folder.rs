use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bytes::Bytes;
use log::debug;
use pv_core::ports::{CameraError, CameraPort, CaptureRequest, CapturedPhoto};
use tokio::fs;

const FILE_SCHEME: &str = "file://";
const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Development camera that serves image files from a folder.
///
/// Each capture hands out the next image in the folder as a `file://`
/// reference, cycling in name order. `fetch` only resolves references this
/// camera issued. Real devices ship their own [`CameraPort`] implementation.
pub struct FolderCamera {
    roll: PathBuf,
    next: AtomicUsize,
}

impl FolderCamera {
    pub fn new(roll: impl Into<PathBuf>) -> Self {
        Self {
            roll: roll.into(),
            next: AtomicUsize::new(0),
        }
    }

    async fn list_images(&self) -> Result<Vec<PathBuf>, CameraError> {
        let mut entries = fs::read_dir(&self.roll).await.map_err(|e| {
            CameraError::Failed(format!(
                "read camera roll failed: {}: {e}",
                self.roll.display()
            ))
        })?;

        let mut images = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| CameraError::Failed(format!("read camera roll failed: {e}")))?
        {
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| CameraError::Failed(format!("read camera roll failed: {e}")))?;
            if !file_type.is_file() {
                continue;
            }
            let path = entry.path();
            let is_image = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
                .unwrap_or(false);
            if is_image {
                images.push(path);
            }
        }
        images.sort();
        Ok(images)
    }
}

#[async_trait]
impl CameraPort for FolderCamera {
    async fn capture(&self, request: CaptureRequest) -> Result<CapturedPhoto, CameraError> {
        let images = self.list_images().await?;
        if images.is_empty() {
            return Err(CameraError::Failed(format!(
                "no images in camera roll: {}",
                self.roll.display()
            )));
        }
        let index = self.next.fetch_add(1, Ordering::Relaxed) % images.len();
        let path = &images[index];
        debug!(
            "Folder camera serving {} (quality {})",
            path.display(),
            request.quality
        );
        Ok(CapturedPhoto {
            web_path: format!("{}{}", FILE_SCHEME, path.display()),
        })
    }

    async fn fetch(&self, web_path: &str) -> Result<Bytes, CameraError> {
        let raw = web_path
            .strip_prefix(FILE_SCHEME)
            .ok_or_else(|| CameraError::Failed(format!("not a file reference: {web_path}")))?;
        let path = Path::new(raw);
        if !path.starts_with(&self.roll) {
            return Err(CameraError::Failed(format!(
                "unknown reference: {web_path}"
            )));
        }
        let bytes = fs::read(path)
            .await
            .map_err(|e| CameraError::Failed(format!("read {raw} failed: {e}")))?;
        Ok(Bytes::from(bytes))
    }
}
