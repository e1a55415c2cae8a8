pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use crate::{modules::order::repository::Order, utils::response};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Order(Order),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Order(order) => {
                    (StatusCode::OK, Json(json!({ "data": order }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToFetchOrder,
        OrderNotFound(String),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderNotFound(id) => response::error(
                    StatusCode::NOT_FOUND,
                    format!("Order id not found: {}", id),
                ),
                Self::FailedToFetchOrder => response::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch order",
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
