use crate::{
    db::{
        dao::{CollectionDao, ProductDao},
        kv::Storage,
    },
    error::AppError,
    models::{Product, product::seed_products},
};

pub const SEARCH_LIMIT: usize = 5;

/// Known products: the built-in seed set plus everything learned from scanned items.
#[derive(Clone)]
pub struct CatalogService {
    storage: Storage,
    product_dao: ProductDao,
}

impl CatalogService {
    pub fn new(storage: &Storage, product_dao: ProductDao) -> Self {
        Self {
            storage: storage.clone(),
            product_dao,
        }
    }

    /// Saved products shadow seed products with the same barcode.
    pub async fn lookup_by_barcode(&self, barcode: &str) -> Result<Option<Product>, AppError> {
        if let Some(saved) = self.product_dao.find_by_barcode(barcode).await? {
            return Ok(Some(saved));
        }
        Ok(seed_products()
            .iter()
            .find(|product| product.barcode == barcode)
            .cloned())
    }

    /// Case-insensitive name search, seed products first, at most [`SEARCH_LIMIT`].
    pub async fn search(&self, query: &str) -> Result<Vec<Product>, AppError> {
        let needle = query.to_lowercase();
        let saved = self.product_dao.load_all().await?;
        Ok(seed_products()
            .iter()
            .cloned()
            .chain(saved)
            .filter(|product| product.name.to_lowercase().contains(&needle))
            .take(SEARCH_LIMIT)
            .collect())
    }

    /// Appends unconditionally; duplicate barcodes are the caller's concern.
    pub async fn save(&self, product: Product) -> Result<Product, AppError> {
        let _writes = self.storage.lock_writes().await;
        self.save_locked(product).await
    }

    /// Same as [`save`](Self::save) for callers already holding the writer lock.
    pub(crate) async fn save_locked(&self, product: Product) -> Result<Product, AppError> {
        Ok(self.product_dao.insert(product).await?)
    }
}
