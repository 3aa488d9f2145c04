use std::sync::Arc;

use axum::{Router, extract::State, http::StatusCode, routing::post};

use crate::{
    models::User,
    response::{ApiResult, JsonApiResponse},
    services::{ServiceContext, session_service::SessionService},
    state::AppState,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/session", post(login).get(current).delete(logout))
        .with_state(state)
}

/// Mock sign-in: there are no credentials, the configured user is always accepted.
async fn login(State(state): State<Arc<AppState>>) -> ApiResult<User> {
    let service = session_service_from_state(state.as_ref());
    let user = service.login(state.config.session.mock_user()).await?;
    JsonApiResponse::with_status(StatusCode::CREATED, "signed in", user)
}

async fn current(State(state): State<Arc<AppState>>) -> ApiResult<User> {
    let service = session_service_from_state(state.as_ref());
    JsonApiResponse::ok(service.require_user().await?)
}

async fn logout(State(state): State<Arc<AppState>>) -> ApiResult<serde_json::Value> {
    let service = session_service_from_state(state.as_ref());
    service.logout().await?;
    JsonApiResponse::with_status(StatusCode::OK, "signed out", serde_json::Value::Null)
}

fn session_service_from_state(state: &AppState) -> SessionService {
    ServiceContext::from_state(state).session()
}
