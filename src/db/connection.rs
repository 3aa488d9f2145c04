use anyhow::Context;
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::{
    config::StorageConfig,
    db::{kv::Storage, providers::default_registry},
};

/// Opens the backend named by the storage url.
pub async fn open(cfg: &StorageConfig) -> anyhow::Result<Storage> {
    let registry = default_registry()?;
    let provider = registry.provider_for_url(&cfg.url)?;
    info!(provider = provider.id().as_str(), "opening storage");
    let kv = provider
        .open(cfg)
        .await
        .with_context(|| format!("failed to open {} storage", provider.id().as_str()))?;
    Ok(Storage::new(kv))
}

pub(crate) async fn sync_schema(db: &DatabaseConnection) -> anyhow::Result<()> {
    info!("syncing database schema from entities");
    db.get_schema_registry("shopping_list::db::entities::*")
        .sync(db)
        .await?;
    Ok(())
}
