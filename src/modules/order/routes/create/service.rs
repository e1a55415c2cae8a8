use super::types::{request, response};
use crate::{
    modules::order::{repository, validation},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let order = validation::validate_create(&payload.body).map_err(|rejection| {
        tracing::warn!("Rejected order: {}", rejection.message);
        response::Error::InvalidOrder(rejection)
    })?;

    repository::create(ctx.orders.as_ref(), order)
        .await
        .map_err(|_| response::Error::FailedToCreateOrder)
        .map(response::Success::OrderCreated)
}
