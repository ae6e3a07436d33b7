use std::sync::Arc;

use log::warn;
use tokio::sync::mpsc;

use crate::ports::KeyValueStorePort;

use super::manager::PHOTO_CACHE_KEY;
use super::photo::PhotoRecord;

/// Callback invoked synchronously after every reassignment of the photo list.
pub(crate) trait PhotosObserver: Send + Sync {
    fn photos_changed(&self, photos: &[PhotoRecord]);
}

/// Mirrors every photo-list change into the key-value store.
///
/// The list is serialized at notification time and the snapshot queued for a
/// single writer task, so persisted states land in change order. A failed
/// write is logged and dropped; the in-memory list stays the source of truth.
pub(crate) struct PhotoCacheObserver {
    tx: mpsc::UnboundedSender<String>,
}

impl PhotoCacheObserver {
    /// Start the writer task and return the observer feeding it. The task
    /// exits once the observer is dropped and the queue drains.
    pub(crate) fn spawn(store: Arc<dyn KeyValueStorePort>) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<String>();
        tokio::spawn(async move {
            while let Some(snapshot) = rx.recv().await {
                if let Err(e) = store.set(PHOTO_CACHE_KEY, &snapshot).await {
                    warn!("Failed to cache photo metadata: {:?}", e);
                }
            }
        });
        Self { tx }
    }
}

impl PhotosObserver for PhotoCacheObserver {
    fn photos_changed(&self, photos: &[PhotoRecord]) {
        let snapshot = match serde_json::to_string(photos) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("Failed to serialize photo metadata: {:?}", e);
                return;
            }
        };
        if self.tx.send(snapshot).is_err() {
            warn!("Photo cache writer is gone, dropping snapshot");
        }
    }
}
