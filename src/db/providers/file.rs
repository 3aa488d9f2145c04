use std::sync::Arc;

use anyhow::{Result, bail};
use async_trait::async_trait;

use super::registry::{StorageProvider, StorageProviderId};
use crate::{
    config::StorageConfig,
    db::kv::{JsonFileStore, KeyValueStore},
};

const SCHEME: &str = "file://";

pub struct FileStorageProvider;

#[async_trait]
impl StorageProvider for FileStorageProvider {
    fn id(&self) -> StorageProviderId {
        StorageProviderId::File
    }

    fn supports_url(&self, url: &str) -> bool {
        url.trim().to_ascii_lowercase().starts_with(SCHEME)
    }

    async fn open(&self, cfg: &StorageConfig) -> Result<Arc<dyn KeyValueStore>> {
        let path = cfg.url.trim().get(SCHEME.len()..).unwrap_or_default();
        if path.is_empty() {
            bail!("file storage url must include a path, e.g. file://./shopping.json");
        }
        tracing::info!(path, "using json file storage");
        Ok(Arc::new(JsonFileStore::new(path)))
    }
}
