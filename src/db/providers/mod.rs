mod file;
mod memory;
mod postgres;
mod registry;
mod sqlite;

use std::sync::Arc;

pub use registry::{StorageProvider, StorageProviderId, StorageProviders};

use self::{
    file::FileStorageProvider, memory::MemoryStorageProvider, postgres::PostgresStorageProvider,
    sqlite::SqliteStorageProvider,
};

pub fn default_registry() -> anyhow::Result<StorageProviders> {
    StorageProviders::new()
        .with_provider(Arc::new(MemoryStorageProvider))?
        .with_provider(Arc::new(FileStorageProvider))?
        .with_provider(Arc::new(SqliteStorageProvider))?
        .with_provider(Arc::new(PostgresStorageProvider))
}
