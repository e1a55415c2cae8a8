pub mod request {
    use crate::modules::order::validation::RawOrder;

    pub type Body = RawOrder;

    pub struct Payload {
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
        OrderCreated(Order),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderCreated(order) => {
                    (StatusCode::CREATED, Json(json!({ "data": order }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        InvalidOrder(Rejection),
        FailedToCreateOrder,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidOrder(rejection) => rejection.into_response(),
                Self::FailedToCreateOrder => response::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to create order",
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
