use crate::{db::dao::SessionDao, error::AppError, models::User};

#[derive(Clone)]
pub struct SessionService {
    session_dao: SessionDao,
}

impl SessionService {
    pub fn new(session_dao: SessionDao) -> Self {
        Self { session_dao }
    }

    /// Signs `user` in by persisting it as the current user.
    pub async fn login(&self, user: User) -> Result<User, AppError> {
        self.session_dao.store(&user).await?;
        tracing::info!(user_id = %user.id, "user signed in");
        Ok(user)
    }

    pub async fn current_user(&self) -> Result<Option<User>, AppError> {
        Ok(self.session_dao.current().await?)
    }

    pub async fn require_user(&self) -> Result<User, AppError> {
        self.current_user()
            .await?
            .ok_or_else(|| AppError::unauthorized("Not signed in"))
    }

    pub async fn logout(&self) -> Result<(), AppError> {
        self.session_dao.clear().await?;
        Ok(())
    }
}
