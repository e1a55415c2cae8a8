use super::types::{request, response};
use crate::{
    modules::dish::{repository, validation},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let dish = validation::validate(&payload.body).map_err(|rejection| {
        tracing::warn!("Rejected dish: {}", rejection.message);
        response::Error::InvalidDish(rejection)
    })?;

    repository::create(ctx.dishes.as_ref(), dish)
        .await
        .map_err(|_| response::Error::FailedToCreateDish)
        .map(response::Success::DishCreated)
}
