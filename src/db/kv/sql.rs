use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{DatabaseConnection, EntityTrait, Set, sea_query::OnConflict};

use super::{KeyValueStore, KvResult};
use crate::db::entities::{kv_entry, prelude::KvEntry};

/// Stores each key as one row of `kv_entries`.
#[derive(Clone)]
pub struct SqlStore {
    db: DatabaseConnection,
}

impl SqlStore {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }
}

#[async_trait]
impl KeyValueStore for SqlStore {
    async fn get(&self, key: &str) -> KvResult<Option<String>> {
        let entry = KvEntry::find_by_id(key.to_string()).one(&self.db).await?;
        Ok(entry.map(|entry| entry.payload))
    }

    async fn set(&self, key: &str, value: &str) -> KvResult<()> {
        let entry = kv_entry::ActiveModel {
            storage_key: Set(key.to_string()),
            payload: Set(value.to_string()),
            updated_at: Set(Utc::now().fixed_offset()),
        };
        KvEntry::insert(entry)
            .on_conflict(
                OnConflict::column(kv_entry::Column::StorageKey)
                    .update_columns([kv_entry::Column::Payload, kv_entry::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> KvResult<()> {
        KvEntry::delete_by_id(key.to_string())
            .exec(&self.db)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    use super::SqlStore;
    use crate::db::entities::kv_entry;
    use crate::db::kv::{KeyValueStore, KvError};

    fn ts() -> chrono::DateTime<chrono::FixedOffset> {
        FixedOffset::east_opt(0)
            .expect("offset should be valid")
            .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
            .single()
            .expect("timestamp should be valid")
    }

    #[tokio::test]
    async fn get_returns_payload_when_present() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_results([[kv_entry::Model {
                storage_key: "lists".to_string(),
                payload: "[]".to_string(),
                updated_at: ts(),
            }]])
            .into_connection();
        let store = SqlStore::new(&db);

        let payload = store.get("lists").await.expect("query should succeed");
        assert_eq!(payload.as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn get_returns_none_when_missing() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_results([Vec::<kv_entry::Model>::new()])
            .into_connection();
        let store = SqlStore::new(&db);

        assert!(store.get("items").await.expect("query should succeed").is_none());
    }

    #[tokio::test]
    async fn set_upserts_one_row() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let store = SqlStore::new(&db);

        store.set("items", "[]").await.expect("upsert should succeed");
    }

    #[tokio::test]
    async fn maps_database_errors() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_errors([DbErr::Custom("disk full".to_string())])
            .into_connection();
        let store = SqlStore::new(&db);

        let err = store.get("lists").await.expect_err("query should fail");
        assert!(matches!(err, KvError::Db(_)));
    }
}
