use std::{collections::HashMap, sync::Arc};

use anyhow::{Result, bail};
use async_trait::async_trait;

use crate::{config::StorageConfig, db::kv::KeyValueStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageProviderId {
    Memory,
    File,
    Sqlite,
    Postgres,
}

impl StorageProviderId {
    pub fn as_str(self) -> &'static str {
        match self {
            StorageProviderId::Memory => "memory",
            StorageProviderId::File => "file",
            StorageProviderId::Sqlite => "sqlite",
            StorageProviderId::Postgres => "postgres",
        }
    }
}

#[async_trait]
pub trait StorageProvider: Send + Sync {
    fn id(&self) -> StorageProviderId;
    fn supports_url(&self, url: &str) -> bool;
    async fn open(&self, cfg: &StorageConfig) -> Result<Arc<dyn KeyValueStore>>;
}

pub struct StorageProviders {
    providers: HashMap<StorageProviderId, Arc<dyn StorageProvider>>,
}

impl StorageProviders {
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    pub fn with_provider(mut self, provider: Arc<dyn StorageProvider>) -> Result<Self> {
        self.add(provider)?;
        Ok(self)
    }

    pub fn add(&mut self, provider: Arc<dyn StorageProvider>) -> Result<()> {
        let id = provider.id();
        if self.providers.contains_key(&id) {
            bail!("storage provider already registered: {}", id.as_str());
        }
        self.providers.insert(id, provider);
        Ok(())
    }

    pub fn provider_for_url(&self, url: &str) -> Result<Arc<dyn StorageProvider>> {
        self.providers
            .values()
            .find(|provider| provider.supports_url(url))
            .cloned()
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "unsupported storage url '{}'; expected memory://, file://, sqlite: or postgres://",
                    redact_url(url)
                )
            })
    }
}

impl Default for StorageProviders {
    fn default() -> Self {
        Self::new()
    }
}

fn redact_url(url: &str) -> String {
    let trimmed = url.trim();
    if let Some((scheme, _)) = trimmed.split_once("://") {
        format!("{scheme}://<redacted>")
    } else if let Some((scheme, _)) = trimmed.split_once(':') {
        format!("{scheme}:<redacted>")
    } else {
        "<invalid-url>".to_string()
    }
}
