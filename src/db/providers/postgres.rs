use std::{sync::Arc, time::Duration};

use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{ConnectOptions, Database};

use super::registry::{StorageProvider, StorageProviderId};
use crate::{
    config::StorageConfig,
    db::{
        connection::sync_schema,
        kv::{KeyValueStore, SqlStore},
    },
};

pub struct PostgresStorageProvider;

#[async_trait]
impl StorageProvider for PostgresStorageProvider {
    fn id(&self) -> StorageProviderId {
        StorageProviderId::Postgres
    }

    fn supports_url(&self, url: &str) -> bool {
        let normalized = url.trim().to_ascii_lowercase();
        normalized.starts_with("postgres://") || normalized.starts_with("postgresql://")
    }

    async fn open(&self, cfg: &StorageConfig) -> Result<Arc<dyn KeyValueStore>> {
        let mut options = ConnectOptions::new(cfg.url.clone());
        options
            .max_connections(cfg.max_connections)
            .connect_timeout(Duration::from_secs(5))
            .sqlx_logging(false);

        let db = Database::connect(options).await?;
        sync_schema(&db).await?;
        Ok(Arc::new(SqlStore::new(&db)))
    }
}
