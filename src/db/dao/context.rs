use super::{CollectionDao, ItemDao, ListDao, ProductDao, SessionDao};
use crate::db::kv::Storage;

#[derive(Clone)]
pub struct DaoContext {
    storage: Storage,
}

impl DaoContext {
    pub fn new(storage: &Storage) -> Self {
        Self {
            storage: storage.clone(),
        }
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn list(&self) -> ListDao {
        ListDao::new(&self.storage)
    }

    pub fn item(&self) -> ItemDao {
        ItemDao::new(&self.storage)
    }

    pub fn product(&self) -> ProductDao {
        ProductDao::new(&self.storage)
    }

    pub fn session(&self) -> SessionDao {
        SessionDao::new(&self.storage)
    }
}
