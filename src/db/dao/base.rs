use serde::{Serialize, de::DeserializeOwned};
use uuid::Uuid;

use super::base_traits::HasId;
use super::error::{DaoLayerError, DaoResult};
use crate::db::kv::Storage;

/// A JSON array persisted under one fixed key.
///
/// Every mutation reads the whole array, changes it and writes it back. Callers that
/// mutate hold [`Storage::lock_writes`] so cycles never interleave.
pub trait CollectionDao: Clone + Send + Sync + Sized {
    type Record: HasId + Serialize + DeserializeOwned + Clone + Send + Sync;
    const KEY: &'static str;

    fn from_storage(storage: Storage) -> Self;

    fn new(storage: &Storage) -> Self {
        Self::from_storage(storage.clone())
    }

    fn storage(&self) -> &Storage;

    async fn load_all(&self) -> DaoResult<Vec<Self::Record>> {
        let Some(raw) = self.storage().kv().get(Self::KEY).await? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(|source| DaoLayerError::Decode {
            key: Self::KEY,
            source,
        })
    }

    async fn save_all(&self, records: &[Self::Record]) -> DaoResult<()> {
        let raw = serde_json::to_string(records).map_err(|source| DaoLayerError::Encode {
            key: Self::KEY,
            source,
        })?;
        self.storage().kv().set(Self::KEY, &raw).await?;
        Ok(())
    }

    async fn insert(&self, record: Self::Record) -> DaoResult<Self::Record> {
        let mut records = self.load_all().await?;
        records.push(record.clone());
        self.save_all(&records).await?;
        Ok(record)
    }

    async fn find_by_id(&self, id: Uuid) -> DaoResult<Option<Self::Record>> {
        let records = self.load_all().await?;
        Ok(records.into_iter().find(|record| record.id() == id))
    }

    async fn filter(
        &self,
        matches: impl Fn(&Self::Record) -> bool + Send,
    ) -> DaoResult<Vec<Self::Record>> {
        let records = self.load_all().await?;
        Ok(records.into_iter().filter(|record| matches(record)).collect())
    }

    /// Applies `apply` to the record with `id`. Nothing is written when the id is
    /// unknown.
    async fn update(
        &self,
        id: Uuid,
        apply: impl FnOnce(&mut Self::Record) + Send,
    ) -> DaoResult<Option<Self::Record>> {
        let mut records = self.load_all().await?;
        let Some(record) = records.iter_mut().find(|record| record.id() == id) else {
            return Ok(None);
        };
        apply(record);
        let updated = record.clone();
        self.save_all(&records).await?;
        Ok(Some(updated))
    }

    /// Removes every matching record and returns how many were dropped.
    async fn delete_where(
        &self,
        matches: impl Fn(&Self::Record) -> bool + Send,
    ) -> DaoResult<usize> {
        let mut records = self.load_all().await?;
        let before = records.len();
        records.retain(|record| !matches(record));
        let removed = before - records.len();
        if removed > 0 {
            self.save_all(&records).await?;
        }
        Ok(removed)
    }

    async fn delete(&self, id: Uuid) -> DaoResult<bool> {
        let removed = self.delete_where(|record| record.id() == id).await?;
        Ok(removed > 0)
    }
}
