use chrono::Utc;
use uuid::Uuid;

use super::{CollectionDao, DaoResult};
use crate::db::kv::Storage;
use crate::models::{Item, NewItem};

#[derive(Clone)]
pub struct ItemDao {
    storage: Storage,
}

impl CollectionDao for ItemDao {
    type Record = Item;
    const KEY: &'static str = "items";

    fn from_storage(storage: Storage) -> Self {
        Self { storage }
    }

    fn storage(&self) -> &Storage {
        &self.storage
    }
}

impl ItemDao {
    pub async fn create_item(&self, list_id: Uuid, fields: NewItem) -> DaoResult<Item> {
        self.insert(fields.into_item(list_id)).await
    }

    /// Items of one list in insertion order.
    pub async fn items_for(&self, list_id: Uuid) -> DaoResult<Vec<Item>> {
        self.filter(|item| item.list_id == list_id).await
    }

    pub async fn delete_for_list(&self, list_id: Uuid) -> DaoResult<usize> {
        self.delete_where(|item| item.list_id == list_id).await
    }

    /// Flips `completed`; a purchase is stamped when it becomes true and cleared
    /// when it becomes false.
    pub async fn toggle(&self, id: Uuid) -> DaoResult<Option<Item>> {
        self.update(id, |item| {
            item.completed = !item.completed;
            item.purchased_at = item.completed.then(Utc::now);
        })
        .await
    }
}
