pub mod item;
pub mod product;
pub mod shopping_list;
pub mod user;

pub use item::{Item, NewItem};
pub use product::Product;
pub use shopping_list::{ListStatus, ShoppingList};
pub use user::User;
