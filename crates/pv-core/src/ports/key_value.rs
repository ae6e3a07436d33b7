use anyhow::Result;
use async_trait::async_trait;

/// Small string key-value store for gallery metadata.
#[async_trait]
pub trait KeyValueStorePort: Send + Sync {
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Returns `None` when the key has never been written.
    async fn get(&self, key: &str) -> Result<Option<String>>;
}
