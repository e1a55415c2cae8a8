pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use crate::utils::response;
    use axum::{http::StatusCode, response::IntoResponse};

    pub enum Success {
        OrderDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderDeleted => StatusCode::NO_CONTENT.into_response(),
            }
        }
    }

    pub enum Error {
        OrderNotFound(String),
        OrderNotPending,
        FailedToDeleteOrder,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderNotFound(id) => response::error(
                    StatusCode::NOT_FOUND,
                    format!("Order id not found: {}", id),
                ),
                Self::OrderNotPending => response::error(
                    StatusCode::BAD_REQUEST,
                    "An order cannot be deleted unless it is pending",
                ),
                Self::FailedToDeleteOrder => response::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to delete order",
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
