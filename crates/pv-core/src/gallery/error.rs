use thiserror::Error;

use crate::ports::CameraError;

/// Errors surfaced by gallery operations.
///
/// Mirroring the list into the metadata cache is fire-and-forget and never
/// appears here; these cover the capture path and the startup reload.
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error(transparent)]
    Camera(#[from] CameraError),

    #[error("file store error: {0}")]
    FileStore(String),

    #[error("metadata cache error: {0}")]
    Cache(String),

    #[error("corrupt photo metadata: {0}")]
    Metadata(#[from] serde_json::Error),
}
