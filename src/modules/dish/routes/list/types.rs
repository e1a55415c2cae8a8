pub mod response {
    use crate::{modules::dish::repository::Dish, utils::response};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Dishes(Vec<Dish>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Dishes(dishes) => {
                    (StatusCode::OK, Json(json!({ "data": dishes }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToFetchDishes,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchDishes => response::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch dishes",
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
