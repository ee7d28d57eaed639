//! JSON body extractor whose rejection renders as `{"msg": ...}` with 400.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;

/// Like [`axum::Json`], but missing or malformed bodies become [`AppError::BadRequest`].
#[derive(Clone, Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => Err(
                AppError::status(StatusCode::PAYLOAD_TOO_LARGE, "Cuerpo de la petición demasiado grande"),
            ),
            Err(rejection) => Err(AppError::BadRequest(format!(
                "Cuerpo de la petición inválido: {}",
                rejection.body_text()
            ))),
        }
    }
}
