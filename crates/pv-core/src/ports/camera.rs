use async_trait::async_trait;
use bytes::Bytes;

use super::errors::CameraError;

/// Where a capture sources its image from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureSource {
    /// The device camera.
    Camera,
    /// The photo library picker.
    PhotoLibrary,
}

/// Parameters for a single capture.
#[derive(Debug, Clone)]
pub struct CaptureRequest {
    pub source: CaptureSource,
    /// JPEG quality, 0-100.
    pub quality: u8,
}

/// A captured image, handed back by reference rather than by value.
///
/// `web_path` is only resolvable during the session that captured it.
/// Callers that need the bytes later must [`CameraPort::fetch`] and persist
/// them before the session ends.
#[derive(Debug, Clone)]
pub struct CapturedPhoto {
    pub web_path: String,
}

#[async_trait]
pub trait CameraPort: Send + Sync {
    /// Request one still image, returning a transient reference to it.
    async fn capture(&self, request: CaptureRequest) -> Result<CapturedPhoto, CameraError>;

    /// Resolve a transient reference this port issued into raw image bytes.
    async fn fetch(&self, web_path: &str) -> Result<Bytes, CameraError>;
}
