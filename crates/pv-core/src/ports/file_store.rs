use anyhow::Result;
use async_trait::async_trait;

/// Persistent storage for photo files, keyed by bare file name.
///
/// Implementations root themselves at an application-private directory.
/// Names never carry path components.
#[async_trait]
pub trait FileStorePort: Send + Sync {
    /// Write base64-encoded image data under `name`, replacing any previous
    /// file with that name.
    async fn write(&self, name: &str, base64_data: &str) -> Result<()>;

    /// Read the file back as base64-encoded data.
    async fn read(&self, name: &str) -> Result<String>;
}
