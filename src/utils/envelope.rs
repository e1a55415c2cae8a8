use super::response;
use axum::{
    async_trait,
    extract::{FromRequest, Json, Request},
    http::StatusCode,
    response::Response,
};
use serde::{de::DeserializeOwned, Deserialize};

#[derive(Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    data: Option<T>,
}

/// Extracts the attributes nested under the `data` key of a JSON body.
/// A body without `data` (or with `"data": null`) yields `T::default()`.
pub struct Data<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for Data<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Envelope<T>>::from_request(req, state).await {
            Ok(Json(envelope)) => Ok(Self(envelope.data.unwrap_or_default())),
            Err(rejection) => {
                tracing::warn!("Rejected request body: {}", rejection.body_text());
                Err(response::error(
                    StatusCode::BAD_REQUEST,
                    rejection.body_text(),
                ))
            }
        }
    }
}
