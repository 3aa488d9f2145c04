use std::sync::Arc;

use axum::{Router, extract::State, routing::get};
use serde::Serialize;

use crate::{
    middleware::CurrentUser,
    pricing::MonthlyGroup,
    response::{ApiResult, JsonApiResponse},
    services::{ServiceContext, history_service::HistoryEntry},
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub entries: Vec<HistoryEntry>,
    pub months: Vec<MonthlyGroup<HistoryEntry>>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/history", get(purchase_history))
        .with_state(state)
}

async fn purchase_history(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<HistoryResponse> {
    let service = ServiceContext::from_state(state.as_ref()).history();
    let months = service.monthly(&user.id).await?;
    let entries = months
        .iter()
        .flat_map(|group| group.entries.iter().cloned())
        .collect();
    JsonApiResponse::ok(HistoryResponse { entries, months })
}
