pub mod request {
    use crate::modules::dish::validation::RawDish;

    pub type Body = RawDish;

    pub struct Payload {
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
        DishCreated(Dish),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DishCreated(dish) => {
                    (StatusCode::CREATED, Json(json!({ "data": dish }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        InvalidDish(Rejection),
        FailedToCreateDish,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidDish(rejection) => rejection.into_response(),
                Self::FailedToCreateDish => response::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to create dish",
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
