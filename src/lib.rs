//! # PhotoVault
//!
//! A captured-photo gallery over pluggable host capabilities.
//!
//! The gallery logic lives in [`pv_core`]; file-system adapters for its
//! ports live in [`pv_infra`]. This crate ties them together: it loads the
//! vault configuration and composes the adapters into an opened
//! [`PhotoGallery`]. Embedders with a real camera inject their own
//! [`CameraPort`]; development setups can run on a folder of images.

pub mod bootstrap;
pub mod config;

pub use config::VaultConfig;
pub use pv_core::{
    CameraError, CameraPort, CaptureRequest, CaptureSource, CapturedPhoto, ClockPort,
    FileStorePort, GalleryDeps, GalleryError, KeyValueStorePort, PhotoGallery, PhotoRecord,
};
