use super::{DaoLayerError, DaoResult};
use crate::db::kv::Storage;
use crate::models::User;

const KEY: &str = "currentUser";

/// The single signed-in user record.
#[derive(Clone)]
pub struct SessionDao {
    storage: Storage,
}

impl SessionDao {
    pub fn new(storage: &Storage) -> Self {
        Self {
            storage: storage.clone(),
        }
    }

    pub async fn current(&self) -> DaoResult<Option<User>> {
        let Some(raw) = self.storage.kv().get(KEY).await? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| DaoLayerError::Decode { key: KEY, source })
    }

    pub async fn store(&self, user: &User) -> DaoResult<()> {
        let raw = serde_json::to_string(user)
            .map_err(|source| DaoLayerError::Encode { key: KEY, source })?;
        self.storage.kv().set(KEY, &raw).await?;
        Ok(())
    }

    pub async fn clear(&self) -> DaoResult<()> {
        self.storage.kv().remove(KEY).await?;
        Ok(())
    }
}
