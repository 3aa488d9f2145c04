use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

use super::{assistant, history, items, lists, products, public, session};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(public::router())
        .merge(session::router(state.clone()))
        .merge(lists::router(state.clone()))
        .merge(items::router(state.clone()))
        .merge(history::router(state.clone()))
        .merge(products::router(state.clone()))
        .merge(assistant::router(state))
}
