use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    error::AppError,
    middleware::CurrentUser,
    models::{Item, NewItem, ShoppingList},
    pricing::{ListSummary, summarize},
    response::{ApiResult, JsonApiResponse},
    services::{ServiceContext, shopping_service::ShoppingService},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct CreateListRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct ListDetailResponse {
    pub list: ShoppingList,
    pub items: Vec<Item>,
    pub summary: ListSummary,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/lists", post(create_list).get(list_lists))
        .route("/lists/{list_id}", get(get_list).delete(delete_list))
        .route("/lists/{list_id}/archive", post(archive_list))
        .route("/lists/{list_id}/unarchive", post(unarchive_list))
        .route("/lists/{list_id}/items", post(add_item).get(list_items))
        .route("/lists/{list_id}/summary", get(list_summary))
        .with_state(state)
}

async fn create_list(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Json(body): Json<CreateListRequest>,
) -> ApiResult<ShoppingList> {
    let name = normalize_name(&body.name)?;
    let service = shopping_service_from_state(state.as_ref());
    let list = service.create_list(&user.id, name).await?;
    JsonApiResponse::created(list)
}

async fn list_lists(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Vec<ShoppingList>> {
    let service = shopping_service_from_state(state.as_ref());
    JsonApiResponse::ok(service.lists_for(&user.id).await?)
}

async fn get_list(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(list_id): Path<Uuid>,
) -> ApiResult<ListDetailResponse> {
    let service = shopping_service_from_state(state.as_ref());
    let list = require_owned_list(&service, &user.id, list_id).await?;
    let items = service.items_for(list_id).await?;
    let summary = summarize(&items);
    JsonApiResponse::ok(ListDetailResponse {
        list,
        items,
        summary,
    })
}

async fn delete_list(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(list_id): Path<Uuid>,
) -> ApiResult<serde_json::Value> {
    let service = shopping_service_from_state(state.as_ref());
    require_owned_list(&service, &user.id, list_id).await?;
    service.delete_list(list_id).await?;
    JsonApiResponse::with_status(StatusCode::OK, "deleted", serde_json::Value::Null)
}

async fn archive_list(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(list_id): Path<Uuid>,
) -> ApiResult<ShoppingList> {
    let service = shopping_service_from_state(state.as_ref());
    require_owned_list(&service, &user.id, list_id).await?;
    let list = service
        .archive_list(list_id)
        .await?
        .ok_or_else(list_not_found)?;
    JsonApiResponse::ok(list)
}

async fn unarchive_list(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(list_id): Path<Uuid>,
) -> ApiResult<ShoppingList> {
    let service = shopping_service_from_state(state.as_ref());
    require_owned_list(&service, &user.id, list_id).await?;
    let list = service
        .unarchive_list(list_id)
        .await?
        .ok_or_else(list_not_found)?;
    JsonApiResponse::ok(list)
}

async fn add_item(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(list_id): Path<Uuid>,
    Json(mut body): Json<NewItem>,
) -> ApiResult<Item> {
    body.name = normalize_name(&body.name)?.to_string();
    let service = shopping_service_from_state(state.as_ref());
    require_owned_list(&service, &user.id, list_id).await?;
    let item = service.add_item(list_id, body).await?;
    JsonApiResponse::created(item)
}

async fn list_items(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(list_id): Path<Uuid>,
) -> ApiResult<Vec<Item>> {
    let service = shopping_service_from_state(state.as_ref());
    require_owned_list(&service, &user.id, list_id).await?;
    JsonApiResponse::ok(service.items_for(list_id).await?)
}

async fn list_summary(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(list_id): Path<Uuid>,
) -> ApiResult<ListSummary> {
    let service = shopping_service_from_state(state.as_ref());
    require_owned_list(&service, &user.id, list_id).await?;
    let items = service.items_for(list_id).await?;
    JsonApiResponse::ok(summarize(&items))
}

/// Lists owned by someone else are reported exactly like missing ones.
async fn require_owned_list(
    service: &ShoppingService,
    user_id: &str,
    list_id: Uuid,
) -> Result<ShoppingList, AppError> {
    service
        .find_list(list_id)
        .await?
        .filter(|list| list.user_id == user_id)
        .ok_or_else(list_not_found)
}

fn list_not_found() -> AppError {
    AppError::not_found("Shopping list not found")
}

fn normalize_name(name: &str) -> Result<&str, AppError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::bad_request("Name required"));
    }
    Ok(trimmed)
}

pub(super) fn shopping_service_from_state(state: &AppState) -> ShoppingService {
    ServiceContext::from_state(state).shopping()
}
