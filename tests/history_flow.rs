mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;

use common::{add_item, call, create_list, sign_in};
use shopping_list::{
    assistant::DisabledAssistant,
    db::{
        dao::{CollectionDao, ListDao},
        kv::Storage,
    },
    models::{ListStatus, ShoppingList},
    test_helpers::{test_router, test_router_with},
};

#[tokio::test]
async fn history_lists_only_purchased_items() {
    let app = test_router();
    sign_in(&app).await;
    let list_id = create_list(&app, "Mercado").await;

    let rice = add_item(&app, &list_id, json!({ "name": "Arroz", "estimatedPrice": 20.0 })).await;
    add_item(&app, &list_id, json!({ "name": "Feijão", "estimatedPrice": 8.0 })).await;
    let rice_id = rice["id"].as_str().expect("item id");
    call(&app, "POST", &format!("/api/v1/items/{rice_id}/toggle"), None).await;

    // archived lists still contribute
    call(&app, "POST", &format!("/api/v1/lists/{list_id}/archive"), None).await;

    let (status, body) = call(&app, "GET", "/api/v1/history", None).await;
    assert_eq!(status, StatusCode::OK);

    let entries = body["data"]["entries"].as_array().expect("entries");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["name"], "Arroz");
    assert_eq!(entries[0]["listName"], "Mercado");
    assert!(entries[0]["purchasedAt"].is_i64());

    let months = body["data"]["months"].as_array().expect("months");
    assert_eq!(months.len(), 1);
    assert_eq!(months[0]["total"], 20.0);
}

#[tokio::test]
async fn history_ignores_other_users() {
    let storage = Storage::in_memory();
    let foreign = ShoppingList {
        id: uuid::Uuid::new_v4(),
        user_id: "someone-else".to_string(),
        name: "Vizinho".to_string(),
        created_at: chrono::Utc::now(),
        status: ListStatus::Active,
        completed_at: None,
    };
    ListDao::new(&storage)
        .insert(foreign.clone())
        .await
        .expect("seed list");

    let app = test_router_with(storage, Arc::new(DisabledAssistant));
    sign_in(&app).await;

    let (status, _) = call(&app, "GET", &format!("/api/v1/lists/{}", foreign.id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = call(&app, "GET", "/api/v1/lists", None).await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(0));

    let (_, body) = call(&app, "GET", "/api/v1/history", None).await;
    assert_eq!(body["data"]["entries"].as_array().map(Vec::len), Some(0));
}
