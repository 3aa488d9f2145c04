use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};

use crate::{
    middleware::CurrentUser,
    response::{ApiResult, JsonApiResponse},
    services::{ServiceContext, assistant_service::ProductDraft},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub category: String,
}

#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub barcode: String,
    pub product: Option<ProductDraft>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/assistant/category", post(suggest_category))
        .route("/scanner/scan", post(scan))
        .with_state(state)
}

/// Always succeeds; an empty category means "ask the user".
async fn suggest_category(
    State(state): State<Arc<AppState>>,
    _user: CurrentUser,
    Json(body): Json<CategoryRequest>,
) -> ApiResult<CategoryResponse> {
    let service = ServiceContext::from_state(state.as_ref()).assistant();
    let category = service.suggest_category(&body.name).await;
    JsonApiResponse::ok(CategoryResponse { category })
}

async fn scan(State(state): State<Arc<AppState>>, _user: CurrentUser) -> ApiResult<ScanResponse> {
    let barcode = state.scanner.scan().await;
    tracing::debug!(%barcode, "scanned barcode");
    let service = ServiceContext::from_state(state.as_ref()).assistant();
    let product = service.resolve_barcode(&barcode).await?;
    JsonApiResponse::ok(ScanResponse { barcode, product })
}
