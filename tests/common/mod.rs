#![allow(dead_code)]

use axum::{
    Router,
    body::{self, Body},
    http::{Request, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt;

pub async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("build request");

    let response = app.clone().oneshot(request).await.expect("router responds");
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub async fn sign_in(app: &Router) -> Value {
    let (status, body) = call(app, "POST", "/api/v1/session", None).await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"].clone()
}

pub async fn create_list(app: &Router, name: &str) -> String {
    let (status, body) = call(
        app,
        "POST",
        "/api/v1/lists",
        Some(serde_json::json!({ "name": name })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["data"]["id"].as_str().expect("list id").to_string()
}

pub async fn add_item(app: &Router, list_id: &str, item: Value) -> Value {
    let (status, body) = call(
        app,
        "POST",
        &format!("/api/v1/lists/{list_id}/items"),
        Some(item),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["data"].clone()
}
