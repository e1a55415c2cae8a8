use super::{dish, order};
use crate::{types::Context, utils::response};
use axum::{
    http::{StatusCode, Uri},
    response::IntoResponse,
    Router,
};
use std::sync::Arc;

async fn not_found(uri: Uri) -> impl IntoResponse {
    response::error(StatusCode::NOT_FOUND, format!("Path not found: {}", uri.path()))
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .nest("/dishes", dish::get_router())
        .nest("/orders", order::get_router())
        .fallback(not_found)
}
