pub mod base;
pub mod base_traits;
mod context;
pub mod error;
pub mod item_dao;
pub mod list_dao;
pub mod product_dao;
pub mod session_dao;

pub use base::CollectionDao;
pub use base_traits::HasId;
pub use context::DaoContext;
pub use error::{DaoLayerError, DaoResult};
pub use item_dao::ItemDao;
pub use list_dao::ListDao;
pub use product_dao::ProductDao;
pub use session_dao::SessionDao;
