use chrono::Utc;
use uuid::Uuid;

use super::{CollectionDao, DaoResult};
use crate::db::kv::Storage;
use crate::models::{ListStatus, ShoppingList};

#[derive(Clone)]
pub struct ListDao {
    storage: Storage,
}

impl CollectionDao for ListDao {
    type Record = ShoppingList;
    const KEY: &'static str = "lists";

    fn from_storage(storage: Storage) -> Self {
        Self { storage }
    }

    fn storage(&self) -> &Storage {
        &self.storage
    }
}

impl ListDao {
    pub async fn create_list(&self, user_id: &str, name: &str) -> DaoResult<ShoppingList> {
        let list = ShoppingList {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            name: name.to_string(),
            created_at: Utc::now(),
            status: ListStatus::Active,
            completed_at: None,
        };
        self.insert(list).await
    }

    /// Lists owned by `user_id`, newest first.
    pub async fn lists_for(&self, user_id: &str) -> DaoResult<Vec<ShoppingList>> {
        let mut lists = self.filter(|list| list.user_id == user_id).await?;
        lists.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(lists)
    }

    pub async fn archive(&self, id: Uuid) -> DaoResult<Option<ShoppingList>> {
        self.update(id, |list| {
            list.status = ListStatus::Archived;
            list.completed_at = Some(Utc::now());
        })
        .await
    }

    pub async fn unarchive(&self, id: Uuid) -> DaoResult<Option<ShoppingList>> {
        self.update(id, |list| {
            list.status = ListStatus::Active;
            list.completed_at = None;
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::ListDao;
    use crate::db::dao::CollectionDao;
    use crate::db::kv::Storage;
    use crate::models::ListStatus;

    #[tokio::test]
    async fn lists_for_filters_by_owner_newest_first() {
        let storage = Storage::in_memory();
        let dao = ListDao::new(&storage);

        let first = dao.create_list("u1", "Feira").await.expect("create");
        dao.create_list("u2", "Outro").await.expect("create");
        let second = dao.create_list("u1", "Mercado").await.expect("create");

        let lists = dao.lists_for("u1").await.expect("lists");
        let ids: Vec<_> = lists.iter().map(|list| list.id).collect();
        assert_eq!(ids.len(), 2);
        assert!(lists[0].created_at >= lists[1].created_at);
        assert!(ids.contains(&first.id) && ids.contains(&second.id));
    }

    #[tokio::test]
    async fn archive_of_unknown_id_writes_nothing() {
        let storage = Storage::in_memory();
        let dao = ListDao::new(&storage);

        let result = dao.archive(uuid::Uuid::new_v4()).await.expect("archive");
        assert!(result.is_none());
        assert!(storage.kv().get(ListDao::KEY).await.expect("get").is_none());
    }

    #[tokio::test]
    async fn legacy_records_default_to_active() {
        let storage = Storage::in_memory();
        storage
            .kv()
            .set(
                ListDao::KEY,
                r#"[{"id":"0d8a1b9e-3c1f-4e4e-9a2b-5b8e6c3d2f10","userId":"u1","name":"Antiga","createdAt":1600000000000}]"#,
            )
            .await
            .expect("seed");
        let dao = ListDao::new(&storage);

        let lists = dao.lists_for("u1").await.expect("lists");
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].status, ListStatus::Active);
    }
}
