use std::{sync::Arc, time::Duration};

use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{ConnectOptions, ConnectionTrait, Database};

use super::registry::{StorageProvider, StorageProviderId};
use crate::{
    config::StorageConfig,
    db::{
        connection::sync_schema,
        kv::{KeyValueStore, SqlStore},
    },
};

const SQLITE_BUSY_TIMEOUT_MS: u64 = 5_000;

pub struct SqliteStorageProvider;

#[async_trait]
impl StorageProvider for SqliteStorageProvider {
    fn id(&self) -> StorageProviderId {
        StorageProviderId::Sqlite
    }

    fn supports_url(&self, url: &str) -> bool {
        url.trim().to_ascii_lowercase().starts_with("sqlite:")
    }

    async fn open(&self, cfg: &StorageConfig) -> Result<Arc<dyn KeyValueStore>> {
        let mut options = ConnectOptions::new(cfg.url.clone());
        options
            .max_connections(cfg.max_connections)
            .connect_timeout(Duration::from_secs(5))
            .sqlx_logging(false);

        let db = Database::connect(options).await?;
        db.execute_unprepared(&format!("PRAGMA busy_timeout = {SQLITE_BUSY_TIMEOUT_MS}"))
            .await?;
        sync_schema(&db).await?;
        Ok(Arc::new(SqlStore::new(&db)))
    }
}
