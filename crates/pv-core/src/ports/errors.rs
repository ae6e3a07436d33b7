use thiserror::Error;

/// Failure modes of the camera capability.
#[derive(Debug, Error)]
pub enum CameraError {
    /// The user left the capture flow without taking a photo.
    #[error("capture declined")]
    Declined,

    #[error("camera error: {0}")]
    Failed(String),
}
