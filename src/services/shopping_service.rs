use uuid::Uuid;

use crate::{
    db::{
        dao::{CollectionDao, ItemDao, ListDao},
        kv::Storage,
    },
    error::AppError,
    models::{
        Item, NewItem, Product, ShoppingList,
        product::DEFAULT_CATEGORY,
    },
    services::catalog_service::CatalogService,
};

/// Lists and their items.
///
/// Mutations on unknown ids change nothing and report it through `false` / `None`
/// rather than an error. Every mutation runs under the storage writer lock.
#[derive(Clone)]
pub struct ShoppingService {
    storage: Storage,
    list_dao: ListDao,
    item_dao: ItemDao,
    catalog: CatalogService,
}

impl ShoppingService {
    pub fn new(
        storage: &Storage,
        list_dao: ListDao,
        item_dao: ItemDao,
        catalog: CatalogService,
    ) -> Self {
        Self {
            storage: storage.clone(),
            list_dao,
            item_dao,
            catalog,
        }
    }

    /// Name validation happens at the API boundary; the store accepts what it is given.
    pub async fn create_list(&self, user_id: &str, name: &str) -> Result<ShoppingList, AppError> {
        let _writes = self.storage.lock_writes().await;
        let list = self.list_dao.create_list(user_id, name).await?;
        tracing::info!(list_id = %list.id, user_id, "list created");
        Ok(list)
    }

    pub async fn lists_for(&self, user_id: &str) -> Result<Vec<ShoppingList>, AppError> {
        Ok(self.list_dao.lists_for(user_id).await?)
    }

    pub async fn find_list(&self, list_id: Uuid) -> Result<Option<ShoppingList>, AppError> {
        Ok(self.list_dao.find_by_id(list_id).await?)
    }

    /// Removes the list and every item under it. Returns whether the list existed.
    pub async fn delete_list(&self, list_id: Uuid) -> Result<bool, AppError> {
        let _writes = self.storage.lock_writes().await;
        let existed = self.list_dao.delete(list_id).await?;
        let removed_items = self.item_dao.delete_for_list(list_id).await?;
        tracing::info!(%list_id, existed, removed_items, "list deleted");
        Ok(existed)
    }

    pub async fn archive_list(&self, list_id: Uuid) -> Result<Option<ShoppingList>, AppError> {
        let _writes = self.storage.lock_writes().await;
        Ok(self.list_dao.archive(list_id).await?)
    }

    pub async fn unarchive_list(&self, list_id: Uuid) -> Result<Option<ShoppingList>, AppError> {
        let _writes = self.storage.lock_writes().await;
        Ok(self.list_dao.unarchive(list_id).await?)
    }

    pub async fn items_for(&self, list_id: Uuid) -> Result<Vec<Item>, AppError> {
        Ok(self.item_dao.items_for(list_id).await?)
    }

    pub async fn find_item(&self, item_id: Uuid) -> Result<Option<Item>, AppError> {
        Ok(self.item_dao.find_by_id(item_id).await?)
    }

    /// Adds an item to an existing list. A barcode the catalog has never seen is
    /// remembered as a new product.
    pub async fn add_item(&self, list_id: Uuid, fields: NewItem) -> Result<Item, AppError> {
        let _writes = self.storage.lock_writes().await;
        if self.list_dao.find_by_id(list_id).await?.is_none() {
            return Err(AppError::not_found("Shopping list not found"));
        }

        let item = self.item_dao.create_item(list_id, fields).await?;

        if let Some(barcode) = item.barcode.clone() {
            if self.catalog.lookup_by_barcode(&barcode).await?.is_none() {
                let product = Product {
                    id: Uuid::new_v4(),
                    name: item.name.clone(),
                    category: item
                        .category
                        .clone()
                        .filter(|category| !category.trim().is_empty())
                        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
                    average_price: item.estimated_price.unwrap_or(0.0),
                    barcode,
                    image: None,
                };
                self.catalog.save_locked(product).await?;
                tracing::debug!(item_id = %item.id, "learned product from barcode");
            }
        }

        Ok(item)
    }

    pub async fn toggle_item(&self, item_id: Uuid) -> Result<Option<Item>, AppError> {
        let _writes = self.storage.lock_writes().await;
        Ok(self.item_dao.toggle(item_id).await?)
    }

    pub async fn delete_item(&self, item_id: Uuid) -> Result<bool, AppError> {
        let _writes = self.storage.lock_writes().await;
        Ok(self.item_dao.delete(item_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use uuid::Uuid;

    use crate::{
        db::kv::Storage,
        error::AppError,
        models::{ListStatus, NewItem},
        pricing::summarize,
        services::ServiceContext,
    };

    fn services() -> ServiceContext {
        ServiceContext::new(&Storage::in_memory())
    }

    fn priced(name: &str, quantity: &str, price: f64) -> NewItem {
        NewItem {
            name: name.to_string(),
            quantity: Some(quantity.to_string()),
            estimated_price: Some(price),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_list_starts_active() {
        let shopping = services().shopping();
        let list = shopping.create_list("u1", "Mercado").await.expect("create");

        assert_eq!(list.status, ListStatus::Active);
        assert!(list.completed_at.is_none());
        assert_eq!(shopping.lists_for("u1").await.expect("lists").len(), 1);
        assert!(shopping.lists_for("u2").await.expect("lists").is_empty());
    }

    #[tokio::test]
    async fn delete_list_cascades_to_its_items_only() {
        let shopping = services().shopping();
        let doomed = shopping.create_list("u1", "Feira").await.expect("create");
        let kept = shopping.create_list("u1", "Farmácia").await.expect("create");
        shopping
            .add_item(doomed.id, NewItem::named("Alface"))
            .await
            .expect("add");
        shopping
            .add_item(doomed.id, NewItem::named("Tomate"))
            .await
            .expect("add");
        let survivor = shopping
            .add_item(kept.id, NewItem::named("Dipirona"))
            .await
            .expect("add");

        assert!(shopping.delete_list(doomed.id).await.expect("delete"));

        assert!(shopping.find_list(doomed.id).await.expect("find").is_none());
        assert!(shopping.items_for(doomed.id).await.expect("items").is_empty());
        let remaining = shopping.items_for(kept.id).await.expect("items");
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, survivor.id);
    }

    #[tokio::test]
    async fn mutations_on_unknown_ids_are_no_ops() {
        let shopping = services().shopping();
        let missing = Uuid::new_v4();

        assert!(!shopping.delete_list(missing).await.expect("delete list"));
        assert!(shopping.archive_list(missing).await.expect("archive").is_none());
        assert!(shopping.unarchive_list(missing).await.expect("unarchive").is_none());
        assert!(shopping.toggle_item(missing).await.expect("toggle").is_none());
        assert!(!shopping.delete_item(missing).await.expect("delete item"));
    }

    #[tokio::test]
    async fn add_item_requires_an_existing_list() {
        let shopping = services().shopping();
        let err = shopping
            .add_item(Uuid::new_v4(), NewItem::named("Órfão"))
            .await
            .expect_err("orphan items are rejected");
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn archive_and_unarchive() {
        let shopping = services().shopping();
        let list = shopping.create_list("u1", "Mercado").await.expect("create");

        let archived = shopping
            .archive_list(list.id)
            .await
            .expect("archive")
            .expect("list exists");
        assert_eq!(archived.status, ListStatus::Archived);
        assert!(archived.completed_at.is_some());

        let restored = shopping
            .unarchive_list(list.id)
            .await
            .expect("unarchive")
            .expect("list exists");
        assert_eq!(restored.status, ListStatus::Active);
        assert!(restored.completed_at.is_none());
    }

    #[tokio::test]
    async fn toggling_twice_restores_the_item() {
        let shopping = services().shopping();
        let list = shopping.create_list("u1", "Mercado").await.expect("create");
        let item = shopping
            .add_item(list.id, NewItem::named("Café"))
            .await
            .expect("add");
        assert!(!item.completed);

        let bought = shopping.toggle_item(item.id).await.expect("toggle").expect("exists");
        assert!(bought.completed && bought.purchased_at.is_some());

        let undone = shopping.toggle_item(item.id).await.expect("toggle").expect("exists");
        assert!(!undone.completed);
        assert!(undone.purchased_at.is_none());
    }

    #[tokio::test]
    async fn market_list_summary() {
        let shopping = services().shopping();
        let list = shopping.create_list("u1", "Mercado").await.expect("create");
        shopping
            .add_item(list.id, priced("Leite", "2", 4.5))
            .await
            .expect("add");
        let bread = shopping
            .add_item(list.id, priced("Pão", "1kg", 6.0))
            .await
            .expect("add");
        shopping.toggle_item(bread.id).await.expect("toggle");

        let items = shopping.items_for(list.id).await.expect("items");
        let summary = summarize(&items);
        assert_eq!(summary.pending_total, 9.0);
        assert_eq!(summary.completed_total, 6.0);
        assert_eq!(summary.total, 15.0);
    }

    #[tokio::test]
    async fn new_barcode_is_learned_once() {
        let services = services();
        let shopping = services.shopping();
        let catalog = services.catalog();
        let list = shopping.create_list("u1", "Mercado").await.expect("create");

        let scanned = NewItem {
            name: "Biscoito Recheado".to_string(),
            barcode: Some("123".to_string()),
            ..Default::default()
        };
        shopping.add_item(list.id, scanned.clone()).await.expect("add");
        shopping.add_item(list.id, scanned).await.expect("add again");

        let found = catalog.search("biscoito").await.expect("search");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].barcode, "123");
        assert_eq!(found[0].category, "Geral");
        assert_eq!(found[0].average_price, 0.0);
    }

    #[tokio::test]
    async fn padded_barcode_is_stored_trimmed_on_item_and_product() {
        let services = services();
        let shopping = services.shopping();
        let list = shopping.create_list("u1", "Mercado").await.expect("create");

        let item = shopping
            .add_item(
                list.id,
                NewItem {
                    name: "Suco de Uva".to_string(),
                    barcode: Some(" 123 ".to_string()),
                    ..Default::default()
                },
            )
            .await
            .expect("add");
        assert_eq!(item.barcode.as_deref(), Some("123"));

        let stored = item.barcode.as_deref().expect("barcode kept");
        let product = services
            .catalog()
            .lookup_by_barcode(stored)
            .await
            .expect("lookup")
            .expect("learned product");
        assert_eq!(product.name, "Suco de Uva");

        let blank = shopping
            .add_item(
                list.id,
                NewItem {
                    name: "Água".to_string(),
                    barcode: Some("   ".to_string()),
                    ..Default::default()
                },
            )
            .await
            .expect("add");
        assert!(blank.barcode.is_none());
    }

    #[tokio::test]
    async fn seed_barcodes_are_not_learned_again() {
        let services = services();
        let shopping = services.shopping();
        let list = shopping.create_list("u1", "Mercado").await.expect("create");

        shopping
            .add_item(
                list.id,
                NewItem {
                    name: "Leite".to_string(),
                    barcode: Some("7891000100103".to_string()),
                    ..Default::default()
                },
            )
            .await
            .expect("add");

        let found = services.catalog().search("leite").await.expect("search");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Leite Integral");
    }

    #[tokio::test]
    async fn concurrent_adds_are_not_lost() {
        let services = services();
        let shopping = services.shopping();
        let list = shopping.create_list("u1", "Mercado").await.expect("create");

        let shopping = Arc::new(shopping);
        let mut handles = Vec::new();
        for n in 0..16 {
            let shopping = Arc::clone(&shopping);
            handles.push(tokio::spawn(async move {
                shopping
                    .add_item(list.id, NewItem::named(format!("item {n}")))
                    .await
                    .expect("add");
            }));
        }
        for handle in handles {
            handle.await.expect("task should finish");
        }

        assert_eq!(shopping.items_for(list.id).await.expect("items").len(), 16);
    }
}
