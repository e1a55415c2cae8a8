pub mod request {
    use crate::modules::dish::validation::RawDish;

    pub type Body = RawDish;

    pub struct Payload {
        pub id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::{
        modules::dish::repository::Dish,
        utils::{response, validation::Rejection},
    };
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        DishUpdated(Dish),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DishUpdated(dish) => {
                    (StatusCode::OK, Json(json!({ "data": dish }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        DishNotFound(String),
        InvalidDish(Rejection),
        FailedToUpdateDish,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DishNotFound(id) => response::error(
                    StatusCode::NOT_FOUND,
                    format!("Dish id not found: {}", id),
                ),
                Self::InvalidDish(rejection) => rejection.into_response(),
                Self::FailedToUpdateDish => response::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to update dish",
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
