//! # pv-infra
//!
//! Platform adapters behind the PhotoVault capability ports.

pub mod camera;
pub mod fs;
pub mod kv;
pub mod time;

pub use camera::FolderCamera;
pub use fs::{app_data_dir, FsPhotoStore};
pub use kv::FileKeyValueStore;
pub use time::SystemClock;
