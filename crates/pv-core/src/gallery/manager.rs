use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use log::info;
use tokio::sync::{watch, Mutex};

use crate::ports::{
    CameraPort, CaptureRequest, CaptureSource, CapturedPhoto, ClockPort, FileStorePort,
    KeyValueStorePort,
};

use super::error::GalleryError;
use super::observer::{PhotoCacheObserver, PhotosObserver};
use super::photo::{PhotoRecord, DATA_URI_PREFIX, PHOTO_EXT};

/// Key the serialized photo list lives under in the key-value store.
pub(crate) const PHOTO_CACHE_KEY: &str = "photos";

/// Quality requested for every capture.
const CAPTURE_QUALITY: u8 = 100;

/// Capability handles the gallery is built from.
pub struct GalleryDeps {
    pub camera: Arc<dyn CameraPort>,
    pub files: Arc<dyn FileStorePort>,
    pub cache: Arc<dyn KeyValueStorePort>,
    pub clock: Arc<dyn ClockPort>,
}

/// An ordered list of captured photos, newest first.
///
/// Opening the gallery reloads previously captured photos from the injected
/// stores. Every change to the list afterwards is mirrored back into the
/// key-value store by a built-in observer; callers never manage persistence
/// themselves.
pub struct PhotoGallery {
    camera: Arc<dyn CameraPort>,
    files: Arc<dyn FileStorePort>,
    cache: Arc<dyn KeyValueStorePort>,
    clock: Arc<dyn ClockPort>,
    photos: watch::Sender<Vec<PhotoRecord>>,
    observers: Vec<Arc<dyn PhotosObserver>>,
    /// Serializes list read-modify-write. Capability calls stay outside it.
    mutate: Mutex<()>,
}

impl PhotoGallery {
    /// Open the gallery, reloading any previously captured photos.
    ///
    /// The reload always runs: a missing cache entry yields an empty list,
    /// while a corrupt entry or an unreadable photo file fails the open.
    pub async fn open(deps: GalleryDeps) -> Result<Self, GalleryError> {
        let (photos, _) = watch::channel(Vec::new());
        let observers: Vec<Arc<dyn PhotosObserver>> =
            vec![Arc::new(PhotoCacheObserver::spawn(deps.cache.clone()))];
        let gallery = Self {
            camera: deps.camera,
            files: deps.files,
            cache: deps.cache,
            clock: deps.clock,
            photos,
            observers,
            mutate: Mutex::new(()),
        };
        gallery.load_saved().await?;
        Ok(gallery)
    }

    /// Capture one still photo, persist its bytes, and prepend the new
    /// record to the list.
    ///
    /// Any camera, fetch, or file-store failure aborts before the list is
    /// touched; the failed capture leaves no record behind.
    pub async fn take_photo(&self) -> Result<PhotoRecord, GalleryError> {
        let shot = self
            .camera
            .capture(CaptureRequest {
                source: CaptureSource::Camera,
                quality: CAPTURE_QUALITY,
            })
            .await?;
        let file_name = format!("{}{}", self.clock.now_ms(), PHOTO_EXT);
        let record = self.save_picture(&shot, file_name).await?;

        {
            let _guard = self.mutate.lock().await;
            let mut next = self.photos.borrow().clone();
            next.insert(0, record.clone());
            self.replace_photos(next);
        }
        info!("Captured photo {}", record.filepath);
        Ok(record)
    }

    /// Snapshot of the current list, newest first.
    pub fn photos(&self) -> Vec<PhotoRecord> {
        self.photos.borrow().clone()
    }

    /// Subscribe to list changes. The receiver yields the full list on
    /// every reassignment.
    pub fn subscribe(&self) -> watch::Receiver<Vec<PhotoRecord>> {
        self.photos.subscribe()
    }

    /// Fetch the captured bytes, store them base64-encoded, and build the
    /// record representing them. The record keeps the transient reference
    /// for display; data URIs only appear after a reload.
    async fn save_picture(
        &self,
        shot: &CapturedPhoto,
        file_name: String,
    ) -> Result<PhotoRecord, GalleryError> {
        let data = self.camera.fetch(&shot.web_path).await?;
        let encoded = BASE64.encode(&data);
        self.files
            .write(&file_name, &encoded)
            .await
            .map_err(|e| GalleryError::FileStore(e.to_string()))?;
        Ok(PhotoRecord {
            filepath: file_name,
            webview_path: Some(shot.web_path.clone()),
        })
    }

    /// Rebuild the list from the key-value store, reading each photo back
    /// from the file store and swapping its display reference to a data URI.
    /// Nothing is applied unless every photo loads.
    async fn load_saved(&self) -> Result<(), GalleryError> {
        let cached = self
            .cache
            .get(PHOTO_CACHE_KEY)
            .await
            .map_err(|e| GalleryError::Cache(e.to_string()))?;
        let mut photos: Vec<PhotoRecord> = match cached {
            Some(json) => serde_json::from_str(&json)?,
            None => Vec::new(),
        };
        for photo in &mut photos {
            let data = self
                .files
                .read(&photo.filepath)
                .await
                .map_err(|e| GalleryError::FileStore(e.to_string()))?;
            photo.webview_path = Some(format!("{}{}", DATA_URI_PREFIX, data));
        }
        info!("Reloaded {} photos from storage", photos.len());

        let _guard = self.mutate.lock().await;
        self.replace_photos(photos);
        Ok(())
    }

    /// Apply a whole new list, then notify observers with it.
    fn replace_photos(&self, photos: Vec<PhotoRecord>) {
        self.photos.send_replace(photos.clone());
        for observer in &self.observers {
            observer.photos_changed(&photos);
        }
    }
}
