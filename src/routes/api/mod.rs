pub mod assistant;
pub mod history;
pub mod items;
pub mod lists;
pub mod products;
pub mod public;
mod router;
pub mod session;

pub use router::router;
