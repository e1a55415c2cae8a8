use super::types::{request, response};
use crate::{modules::order::repository, types::Context, utils::repository::Deletion};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    match repository::delete_by_id(ctx.orders.as_ref(), payload.id.clone())
        .await
        .map_err(|_| response::Error::FailedToDeleteOrder)?
    {
        Deletion::Deleted(_) => Ok(response::Success::OrderDeleted),
        Deletion::NotFound => Err(response::Error::OrderNotFound(payload.id)),
        Deletion::Refused(order) => {
            tracing::warn!(
                "Refused to delete order {} with status {}",
                order.id,
                order.status
            );
            Err(response::Error::OrderNotPending)
        }
    }
}
