pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use crate::{modules::dish::repository::Dish, utils::response};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Dish(Dish),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Dish(dish) => (StatusCode::OK, Json(json!({ "data": dish }))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchDish,
        DishNotFound(String),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DishNotFound(id) => response::error(
                    StatusCode::NOT_FOUND,
                    format!("Dish id not found: {}", id),
                ),
                Self::FailedToFetchDish => response::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch dish",
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
