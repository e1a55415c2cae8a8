use super::types::{request, response};
use crate::{
    modules::order::{repository, validation},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::find_by_id(ctx.orders.as_ref(), payload.id.clone())
        .await
        .map_err(|_| response::Error::FailedToUpdateOrder)?
        .ok_or_else(|| response::Error::OrderNotFound(payload.id.clone()))?;

    let order = validation::validate_update(&payload.body, &payload.id).map_err(|rejection| {
        tracing::warn!("Rejected update of order {}: {}", payload.id, rejection.message);
        response::Error::InvalidOrder(rejection)
    })?;

    repository::update_by_id(ctx.orders.as_ref(), payload.id.clone(), order)
        .await
        .map_err(|_| response::Error::FailedToUpdateOrder)?
        .ok_or(response::Error::OrderNotFound(payload.id))
        .map(response::Success::OrderUpdated)
}
