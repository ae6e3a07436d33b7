use anyhow::{Context, Result};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use pv_core::ports::FileStorePort;
use std::path::PathBuf;
use tokio::fs;

/// Photo file store over a plain directory.
///
/// Data crosses the port base64-encoded; on disk each file holds the raw
/// image bytes, so the directory stays browsable with ordinary tools.
pub struct FsPhotoStore {
    root: PathBuf,
}

impl FsPhotoStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, name: &str) -> Result<PathBuf> {
        validate_name(name)?;
        Ok(self.root.join(name))
    }
}

/// Names are bare file names; anything that could leave the root is refused.
fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || name.contains('/') || name.contains('\\') || name.contains("..") {
        anyhow::bail!("invalid photo file name: {name}");
    }
    Ok(())
}

#[async_trait]
impl FileStorePort for FsPhotoStore {
    async fn write(&self, name: &str, base64_data: &str) -> Result<()> {
        let path = self.path_for(name)?;
        let bytes = BASE64
            .decode(base64_data)
            .with_context(|| format!("decode photo data for {name} failed"))?;
        fs::create_dir_all(&self.root)
            .await
            .with_context(|| format!("create photo dir failed: {}", self.root.display()))?;
        fs::write(&path, bytes)
            .await
            .with_context(|| format!("write photo failed: {}", path.display()))?;
        Ok(())
    }

    async fn read(&self, name: &str) -> Result<String> {
        let path = self.path_for(name)?;
        let bytes = fs::read(&path)
            .await
            .with_context(|| format!("read photo failed: {}", path.display()))?;
        Ok(BASE64.encode(bytes))
    }
}
