mod json_file;
mod memory;
mod sql;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::{Mutex, MutexGuard};

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use sql::SqlStore;

#[derive(Debug, Error)]
pub enum KvError {
    #[error("database error: {0}")]
    Db(#[from] sea_orm::DbErr),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed storage document: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub type KvResult<T> = Result<T, KvError>;

/// Durable string storage addressed by fixed keys. Values are JSON documents.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> KvResult<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> KvResult<()>;
    async fn remove(&self, key: &str) -> KvResult<()>;
}

/// Shared handle to the backing store plus the writer lock that serializes every
/// read-modify-write cycle.
#[derive(Clone)]
pub struct Storage {
    kv: Arc<dyn KeyValueStore>,
    writer: Arc<Mutex<()>>,
}

impl Storage {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            kv,
            writer: Arc::new(Mutex::new(())),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::default()))
    }

    pub fn kv(&self) -> &dyn KeyValueStore {
        self.kv.as_ref()
    }

    /// Held for the duration of one store operation. Not reentrant.
    pub async fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.writer.lock().await
    }
}
