use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use std::time::Duration;
use test_utils::builder::TestBuilder;
use tower::ServiceExt;

use crate::server::{config::StatusTaxonomy, router::router, state::AppState};


/// Builds the full router over an in-memory database holding every roster table.
async fn setup() -> (Router, DatabaseConnection) {
    let mut test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db_owned().await.unwrap();

    let state = AppState::new(db.clone(), Duration::from_secs(5), StatusTaxonomy::default());

    (router(state), db)
}

/// Sends one request through the router and decodes the JSON envelope.
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = match body {
        Some(json) => Body::from(json.to_string()),
        None => Body::empty(),
    };
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .unwrap();

    send_request(app, request).await
}

async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();

    (status, json)
}
