use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, post},
};
use uuid::Uuid;

use crate::{
    error::AppError,
    middleware::CurrentUser,
    models::Item,
    response::{ApiResult, JsonApiResponse},
    services::shopping_service::ShoppingService,
    state::AppState,
};

use super::lists::shopping_service_from_state;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/items/{item_id}/toggle", post(toggle_item))
        .route("/items/{item_id}", delete(delete_item))
        .with_state(state)
}

async fn toggle_item(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(item_id): Path<Uuid>,
) -> ApiResult<Item> {
    let service = shopping_service_from_state(state.as_ref());
    require_owned_item(&service, &user.id, item_id).await?;
    let item = service
        .toggle_item(item_id)
        .await?
        .ok_or_else(item_not_found)?;
    JsonApiResponse::ok(item)
}

async fn delete_item(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(item_id): Path<Uuid>,
) -> ApiResult<serde_json::Value> {
    let service = shopping_service_from_state(state.as_ref());
    require_owned_item(&service, &user.id, item_id).await?;
    service.delete_item(item_id).await?;
    JsonApiResponse::with_status(StatusCode::OK, "deleted", serde_json::Value::Null)
}

async fn require_owned_item(
    service: &ShoppingService,
    user_id: &str,
    item_id: Uuid,
) -> Result<Item, AppError> {
    let item = service.find_item(item_id).await?.ok_or_else(item_not_found)?;
    service
        .find_list(item.list_id)
        .await?
        .filter(|list| list.user_id == user_id)
        .ok_or_else(item_not_found)?;
    Ok(item)
}

fn item_not_found() -> AppError {
    AppError::not_found("Item not found")
}
