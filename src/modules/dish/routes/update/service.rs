use super::types::{request, response};
use crate::{
    modules::dish::{repository, validation},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::find_by_id(ctx.dishes.as_ref(), payload.id.clone())
        .await
        .map_err(|_| response::Error::FailedToUpdateDish)?
        .ok_or_else(|| response::Error::DishNotFound(payload.id.clone()))?;

    let dish = validation::validate_update(&payload.body, &payload.id).map_err(|rejection| {
        tracing::warn!("Rejected update of dish {}: {}", payload.id, rejection.message);
        response::Error::InvalidDish(rejection)
    })?;

    repository::update_by_id(ctx.dishes.as_ref(), payload.id.clone(), dish)
        .await
        .map_err(|_| response::Error::FailedToUpdateDish)?
        .ok_or(response::Error::DishNotFound(payload.id))
        .map(response::Success::DishUpdated)
}
