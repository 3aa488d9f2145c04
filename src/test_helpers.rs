use std::sync::Arc;

use axum::{Router, middleware};

use crate::{
    assistant::{DisabledAssistant, ProductAssistant},
    config::AppConfig,
    db::kv::Storage,
    middleware::{catch_panic_layer, json_error_middleware},
    routes::router,
    state::AppState,
};

/// Full API over volatile storage with the assistant disabled and an instant scanner.
pub fn test_router() -> Router {
    test_router_with(Storage::in_memory(), Arc::new(DisabledAssistant))
}

pub fn test_router_with(storage: Storage, assistant: Arc<dyn ProductAssistant>) -> Router {
    let mut cfg = AppConfig::in_memory();
    cfg.scanner.delay_ms = 0;
    let state = AppState::new(cfg, storage, assistant);
    router(Arc::clone(&state))
        .layer(middleware::from_fn(json_error_middleware))
        .layer(catch_panic_layer())
}
