use uuid::Uuid;

use crate::models::{Item, Product, ShoppingList};

/// Records stored in a collection are addressed by a generated id.
pub trait HasId {
    fn id(&self) -> Uuid;
}

impl HasId for ShoppingList {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl HasId for Item {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl HasId for Product {
    fn id(&self) -> Uuid {
        self.id
    }
}
