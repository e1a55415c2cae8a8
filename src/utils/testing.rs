use crate::{
    app,
    modules::{dish::repository::Dish, order::repository::Order},
    types::{AppContext, AppEnvironment, Context},
    utils::repository::InMemoryRepository,
};
use axum::{
    body::{self, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub fn router(dishes: Vec<Dish>, orders: Vec<Order>) -> Router {
    app::get_router(Arc::new(Context {
        app: AppContext {
            host: String::from("127.0.0.1"),
            environment: AppEnvironment::Development,
            port: 5000,
            url: String::from("http://127.0.0.1:5000"),
        },
        dishes: Arc::new(InMemoryRepository::new(dishes)),
        orders: Arc::new(InMemoryRepository::new(orders)),
    }))
}

/// Sends one request through `router`, returning the status and the parsed
/// JSON body (`Value::Null` when the body is empty).
pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    if bytes.is_empty() {
        (status, Value::Null)
    } else {
        (status, serde_json::from_slice(&bytes).unwrap())
    }
}
