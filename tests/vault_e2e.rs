//! End-to-end tests over the real file-system adapters.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use photovault::{bootstrap, PhotoGallery, VaultConfig};
use pv_infra::FolderCamera;
use tokio::time::{timeout, Duration};

fn vault_config(dir: &Path, roll: Option<PathBuf>) -> VaultConfig {
    VaultConfig {
        data_dir: Some(dir.join("vault")),
        camera_roll: roll,
    }
}

fn seed_roll(dir: &Path) -> PathBuf {
    let roll = dir.join("roll");
    std::fs::create_dir_all(&roll).unwrap();
    std::fs::write(roll.join("a.jpg"), b"first image").unwrap();
    std::fs::write(roll.join("b.jpg"), b"second image").unwrap();
    roll
}

/// The metadata cache is written by a background task; poll the preferences
/// file until the expected snapshot lands.
async fn wait_for_cached_photos(dir: &Path, count: usize) {
    let path = dir.join("vault").join("preferences.json");
    timeout(Duration::from_secs(5), async {
        loop {
            if let Ok(content) = std::fs::read_to_string(&path) {
                if let Ok(map) =
                    serde_json::from_str::<std::collections::HashMap<String, String>>(&content)
                {
                    if let Some(photos) = map.get("photos") {
                        let records: Vec<serde_json::Value> =
                            serde_json::from_str(photos).unwrap();
                        if records.len() == count {
                            return;
                        }
                    }
                }
            }
            tokio::task::yield_now().await;
        }
    })
    .await
    .expect("cache writer did not persist the expected snapshot");
}

#[tokio::test]
async fn fresh_vault_opens_empty() {
    let dir = tempfile::tempdir().unwrap();
    let roll = seed_roll(dir.path());
    let config = vault_config(dir.path(), Some(roll));

    let gallery = bootstrap::open_with_folder_camera(&config).await.unwrap();

    assert!(gallery.photos().is_empty());
}

#[tokio::test]
async fn capture_stores_the_image_under_the_photos_dir() {
    let dir = tempfile::tempdir().unwrap();
    let roll = seed_roll(dir.path());
    let config = vault_config(dir.path(), Some(roll));

    let gallery = bootstrap::open_with_folder_camera(&config).await.unwrap();
    let record = gallery.take_photo().await.unwrap();

    assert!(record.filepath.ends_with(".jpeg"));
    let stored = dir.path().join("vault").join("photos").join(&record.filepath);
    assert_eq!(std::fs::read(stored).unwrap(), b"first image");
    // Display keeps the camera's transient reference.
    assert!(record.webview_path.unwrap().starts_with("file://"));
}

#[tokio::test]
async fn captures_survive_a_restart_as_data_uris() {
    let dir = tempfile::tempdir().unwrap();
    let roll = seed_roll(dir.path());
    let config = vault_config(dir.path(), Some(roll));

    {
        let gallery = bootstrap::open_with_folder_camera(&config).await.unwrap();
        gallery.take_photo().await.unwrap();
        // File names derive from the clock's millisecond reading; keep the
        // captures from sharing one.
        tokio::time::sleep(Duration::from_millis(5)).await;
        gallery.take_photo().await.unwrap();
        wait_for_cached_photos(dir.path(), 2).await;
    }

    let reopened = bootstrap::open_with_folder_camera(&config).await.unwrap();
    let photos = reopened.photos();

    assert_eq!(photos.len(), 2);
    // Newest first, and each display reference rebuilt from disk.
    let newest = photos[0].webview_path.as_deref().unwrap();
    let oldest = photos[1].webview_path.as_deref().unwrap();
    assert_eq!(
        newest,
        format!("data:image/jpeg;base64,{}", BASE64.encode(b"second image"))
    );
    assert_eq!(
        oldest,
        format!("data:image/jpeg;base64,{}", BASE64.encode(b"first image"))
    );
}

#[tokio::test]
async fn restart_preserves_filepaths_and_order() {
    let dir = tempfile::tempdir().unwrap();
    let roll = seed_roll(dir.path());
    let config = vault_config(dir.path(), Some(roll));

    let before: Vec<String> = {
        let gallery = bootstrap::open_with_folder_camera(&config).await.unwrap();
        for _ in 0..3 {
            gallery.take_photo().await.unwrap();
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        wait_for_cached_photos(dir.path(), 3).await;
        gallery.photos().iter().map(|p| p.filepath.clone()).collect()
    };

    let reopened = bootstrap::open_with_folder_camera(&config).await.unwrap();
    let after: Vec<String> = reopened
        .photos()
        .iter()
        .map(|p| p.filepath.clone())
        .collect();

    assert_eq!(after, before);
}

#[tokio::test]
async fn missing_camera_roll_config_fails_folder_bootstrap() {
    let dir = tempfile::tempdir().unwrap();
    let config = vault_config(dir.path(), None);

    assert!(bootstrap::open_with_folder_camera(&config).await.is_err());
}

#[tokio::test]
async fn empty_roll_fails_capture_but_not_open() {
    let dir = tempfile::tempdir().unwrap();
    let roll = dir.path().join("roll");
    std::fs::create_dir_all(&roll).unwrap();
    let config = vault_config(dir.path(), Some(roll));

    let gallery = bootstrap::open_with_folder_camera(&config).await.unwrap();

    assert!(gallery.take_photo().await.is_err());
    assert!(gallery.photos().is_empty());
}

#[tokio::test]
async fn open_fails_when_a_stored_photo_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    let roll = seed_roll(dir.path());
    let config = vault_config(dir.path(), Some(roll));

    let record = {
        let gallery = bootstrap::open_with_folder_camera(&config).await.unwrap();
        let record = gallery.take_photo().await.unwrap();
        wait_for_cached_photos(dir.path(), 1).await;
        record
    };
    std::fs::remove_file(
        dir.path()
            .join("vault")
            .join("photos")
            .join(&record.filepath),
    )
    .unwrap();

    assert!(bootstrap::open_with_folder_camera(&config).await.is_err());
}

#[tokio::test]
async fn gallery_accepts_any_injected_camera() {
    // open_gallery, as opposed to the folder-camera shortcut, takes the
    // embedder's own CameraPort implementation.
    let dir = tempfile::tempdir().unwrap();
    let roll = seed_roll(dir.path());
    let config = vault_config(dir.path(), None);

    let camera = Arc::new(FolderCamera::new(roll));
    let gallery: PhotoGallery = bootstrap::open_gallery(&config, camera).await.unwrap();

    let record = gallery.take_photo().await.unwrap();
    assert_eq!(gallery.photos()[0], record);
}
