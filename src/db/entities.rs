#[allow(unused_imports)]
pub mod prelude {
    pub use super::kv_entry::Entity as KvEntry;
}

pub mod kv_entry;
