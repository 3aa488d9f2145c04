use std::sync::Arc;

use axum::extract::FromRequestParts;

use crate::{error::AppError, models::User, services::ServiceContext, state::AppState};

/// The signed-in user. Rejects with 401 when nobody is signed in.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub User);

impl FromRequestParts<Arc<AppState>> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<CurrentUser>().cloned() {
            return Ok(user);
        }

        let user = ServiceContext::from_state(state.as_ref())
            .session()
            .require_user()
            .await?;
        let current = CurrentUser(user);
        parts.extensions.insert(current.clone());
        Ok(current)
    }
}
