use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde::Deserialize;

use crate::{
    error::AppError,
    middleware::CurrentUser,
    models::Product,
    response::{ApiResult, JsonApiResponse},
    services::ServiceContext,
    state::AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/products", get(search_products))
        .route("/products/barcode/{code}", get(product_by_barcode))
        .with_state(state)
}

async fn search_products(
    State(state): State<Arc<AppState>>,
    _user: CurrentUser,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Vec<Product>> {
    let catalog = ServiceContext::from_state(state.as_ref()).catalog();
    JsonApiResponse::ok(catalog.search(&query.q).await?)
}

async fn product_by_barcode(
    State(state): State<Arc<AppState>>,
    _user: CurrentUser,
    Path(code): Path<String>,
) -> ApiResult<Product> {
    let catalog = ServiceContext::from_state(state.as_ref()).catalog();
    let product = catalog
        .lookup_by_barcode(&code)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))?;
    JsonApiResponse::ok(product)
}
