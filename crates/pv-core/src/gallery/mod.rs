//! The photo gallery: an ordered, reactive list of captured photos.

mod error;
mod manager;
mod observer;
mod photo;

pub use error::GalleryError;
pub use manager::{GalleryDeps, PhotoGallery};
pub use photo::PhotoRecord;
