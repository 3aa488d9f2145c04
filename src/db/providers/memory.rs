use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use super::registry::{StorageProvider, StorageProviderId};
use crate::{
    config::StorageConfig,
    db::kv::{KeyValueStore, MemoryStore},
};

pub struct MemoryStorageProvider;

#[async_trait]
impl StorageProvider for MemoryStorageProvider {
    fn id(&self) -> StorageProviderId {
        StorageProviderId::Memory
    }

    fn supports_url(&self, url: &str) -> bool {
        url.trim().to_ascii_lowercase().starts_with("memory:")
    }

    async fn open(&self, _cfg: &StorageConfig) -> Result<Arc<dyn KeyValueStore>> {
        tracing::warn!("using in-memory storage; data is lost on shutdown");
        Ok(Arc::new(MemoryStore::default()))
    }
}
