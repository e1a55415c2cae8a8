use super::types::{request, response};
use crate::{modules::dish::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::find_by_id(ctx.dishes.as_ref(), payload.id.clone())
        .await
        .map_err(|_| response::Error::FailedToFetchDish)?
        .ok_or(response::Error::DishNotFound(payload.id))
        .map(response::Success::Dish)
}
