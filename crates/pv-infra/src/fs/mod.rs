mod app_data_dir;
mod photo_store;

pub use app_data_dir::app_data_dir;
pub use photo_store::FsPhotoStore;
