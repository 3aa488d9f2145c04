use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    db::dao::{CollectionDao, ItemDao, ListDao},
    error::AppError,
    models::{Item, ShoppingList},
    pricing::{MonthlyGroup, group_by_month},
};

/// A purchased item joined with the list it was bought from.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    #[serde(flatten)]
    pub item: Item,
    pub list_name: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub list_date: DateTime<Utc>,
}

impl HistoryEntry {
    fn new(mut item: Item, list: &ShoppingList) -> Self {
        // purchases recorded before timestamps existed fall back to the list date
        item.purchased_at = Some(item.purchased_at.unwrap_or(list.created_at));
        Self {
            item,
            list_name: list.name.clone(),
            list_date: list.created_at,
        }
    }

    pub fn purchased_at(&self) -> DateTime<Utc> {
        self.item.purchased_at.unwrap_or(self.list_date)
    }
}

#[derive(Clone)]
pub struct HistoryService {
    list_dao: ListDao,
    item_dao: ItemDao,
}

impl HistoryService {
    pub fn new(list_dao: ListDao, item_dao: ItemDao) -> Self {
        Self { list_dao, item_dao }
    }

    /// Completed items across every list the user owns, active or archived, newest
    /// purchase first.
    pub async fn purchases(&self, user_id: &str) -> Result<Vec<HistoryEntry>, AppError> {
        let lists: HashMap<Uuid, ShoppingList> = self
            .list_dao
            .lists_for(user_id)
            .await?
            .into_iter()
            .map(|list| (list.id, list))
            .collect();

        let items = self.item_dao.filter(|item| item.completed).await?;
        let mut entries: Vec<HistoryEntry> = items
            .into_iter()
            .filter_map(|item| {
                let list = lists.get(&item.list_id)?;
                Some(HistoryEntry::new(item, list))
            })
            .collect();

        entries.sort_by(|a, b| b.purchased_at().cmp(&a.purchased_at()));
        Ok(entries)
    }

    pub async fn monthly(
        &self,
        user_id: &str,
    ) -> Result<Vec<MonthlyGroup<HistoryEntry>>, AppError> {
        let entries = self.purchases(user_id).await?;
        Ok(group_by_month(
            entries,
            HistoryEntry::purchased_at,
            |entry| &entry.item,
        ))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use uuid::Uuid;

    use crate::{
        db::{
            dao::{CollectionDao, ItemDao, ListDao},
            kv::Storage,
        },
        models::{Item, ListStatus, ShoppingList},
        pricing::MonthKey,
        services::ServiceContext,
    };

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 10, 0, 0)
            .single()
            .expect("valid date")
    }

    fn list(user_id: &str, name: &str, created_at: DateTime<Utc>) -> ShoppingList {
        ShoppingList {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            name: name.to_string(),
            created_at,
            status: ListStatus::Active,
            completed_at: None,
        }
    }

    fn item(
        list: &ShoppingList,
        name: &str,
        price: f64,
        completed: bool,
        purchased_at: Option<DateTime<Utc>>,
    ) -> Item {
        Item {
            id: Uuid::new_v4(),
            list_id: list.id,
            name: name.to_string(),
            quantity: None,
            category: None,
            estimated_price: Some(price),
            barcode: None,
            completed,
            purchased_at,
        }
    }

    async fn seeded() -> (Storage, ShoppingList, ShoppingList) {
        let storage = Storage::in_memory();
        let lists = ListDao::new(&storage);
        let items = ItemDao::new(&storage);

        let mut january = list("u1", "Janeiro", at(2025, 1, 5));
        january.status = ListStatus::Archived;
        let march = list("u1", "Março", at(2025, 3, 1));
        let foreign = list("u2", "Vizinho", at(2025, 3, 2));
        for record in [&january, &march, &foreign] {
            lists.insert(record.clone()).await.expect("seed list");
        }

        for record in [
            item(&january, "Arroz", 20.0, true, Some(at(2025, 1, 6))),
            item(&january, "Legado", 5.0, true, None),
            item(&march, "Café", 15.0, true, Some(at(2025, 3, 3))),
            item(&march, "Pendente", 99.0, false, None),
            item(&foreign, "Alheio", 1.0, true, Some(at(2025, 3, 4))),
        ] {
            items.insert(record).await.expect("seed item");
        }

        (storage, january, march)
    }

    #[tokio::test]
    async fn purchases_are_the_users_completed_items_newest_first() {
        let (storage, january, march) = seeded().await;
        let history = ServiceContext::new(&storage).history();

        let entries = history.purchases("u1").await.expect("history");
        let names: Vec<&str> = entries.iter().map(|e| e.item.name.as_str()).collect();
        assert_eq!(names, vec!["Café", "Arroz", "Legado"]);

        assert_eq!(entries[0].list_name, march.name);
        let legacy = &entries[2];
        assert_eq!(legacy.list_date, january.created_at);
        assert_eq!(legacy.purchased_at(), january.created_at);
        assert_eq!(legacy.item.purchased_at, Some(january.created_at));
    }

    #[tokio::test]
    async fn monthly_groups_sum_each_month() {
        let (storage, _, _) = seeded().await;
        let history = ServiceContext::new(&storage).history();

        let groups = history.monthly("u1").await.expect("groups");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].month, MonthKey { year: 2025, month: 3 });
        assert_eq!(groups[0].total, 15.0);
        assert_eq!(groups[1].month, MonthKey { year: 2025, month: 1 });
        assert_eq!(groups[1].total, 25.0);
        assert_eq!(groups[1].entries.len(), 2);
    }

    #[tokio::test]
    async fn user_without_lists_has_no_history() {
        let (storage, _, _) = seeded().await;
        let history = ServiceContext::new(&storage).history();
        assert!(history.purchases("nobody").await.expect("history").is_empty());
    }
}
