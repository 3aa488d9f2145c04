pub mod assistant_service;
pub mod catalog_service;
pub mod context;
pub mod history_service;
pub mod session_service;
pub mod shopping_service;

pub use context::ServiceContext;
