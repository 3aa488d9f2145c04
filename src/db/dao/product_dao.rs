use super::{CollectionDao, DaoResult};
use crate::db::kv::Storage;
use crate::models::Product;

/// Products learned from items; the built-in seed catalog is not stored here.
#[derive(Clone)]
pub struct ProductDao {
    storage: Storage,
}

impl CollectionDao for ProductDao {
    type Record = Product;
    const KEY: &'static str = "products";

    fn from_storage(storage: Storage) -> Self {
        Self { storage }
    }

    fn storage(&self) -> &Storage {
        &self.storage
    }
}

impl ProductDao {
    pub async fn find_by_barcode(&self, barcode: &str) -> DaoResult<Option<Product>> {
        let products = self.load_all().await?;
        Ok(products.into_iter().find(|product| product.barcode == barcode))
    }
}
