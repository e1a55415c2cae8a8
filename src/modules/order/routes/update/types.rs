pub mod request {
    use crate::modules::order::validation::RawOrder;

    pub type Body = RawOrder;

    pub struct Payload {
        pub id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::{
        modules::order::repository::Order,
        utils::{response, validation::Rejection},
    };
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        OrderUpdated(Order),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderUpdated(order) => {
                    (StatusCode::OK, Json(json!({ "data": order }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        OrderNotFound(String),
        InvalidOrder(Rejection),
        FailedToUpdateOrder,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderNotFound(id) => response::error(
                    StatusCode::NOT_FOUND,
                    format!("Order id not found: {}", id),
                ),
                Self::InvalidOrder(rejection) => rejection.into_response(),
                Self::FailedToUpdateOrder => response::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to update order",
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
