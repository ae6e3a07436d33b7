mod folder;

pub use folder::FolderCamera;
