//! # pv-core
//!
//! Core gallery model and capability ports for PhotoVault.
//!
//! This crate contains the gallery logic free of platform dependencies:
//! everything it needs from the host arrives through the traits in [`ports`].

pub mod gallery;
pub mod ports;

// Re-export commonly used types at the crate root
pub use gallery::{GalleryDeps, GalleryError, PhotoGallery, PhotoRecord};
pub use ports::{
    CameraError, CameraPort, CaptureRequest, CaptureSource, CapturedPhoto, ClockPort,
    FileStorePort, KeyValueStorePort,
};
