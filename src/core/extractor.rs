use axum::{
    body::{Body, Bytes},
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;

/// Custom JSON extractor that provides consistent error responses.
///
/// An absent body (or a literal `null`) is reported as a validation error
/// rather than a parse failure. A non-empty body must be sent as JSON.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppJsonRejection::Body(e.body_text()))?;

        if is_blank(&bytes) {
            return Err(AppJsonRejection::Empty);
        }
        if !is_json {
            return Err(AppJsonRejection::MissingContentType);
        }

        match Json::<T>::from_bytes(&bytes) {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppJsonRejection::Json(rejection)),
        }
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| mime.trim().to_ascii_lowercase())
        .is_some_and(|mime| {
            mime == "application/json"
                || (mime.starts_with("application/") && mime.ends_with("+json"))
        })
}

fn is_blank(bytes: &[u8]) -> bool {
    let trimmed = bytes.trim_ascii();
    trimmed.is_empty() || trimmed == b"null"
}

pub enum AppJsonRejection {
    Empty,
    MissingContentType,
    Body(String),
    Json(JsonRejection),
}

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        let error = match self {
            AppJsonRejection::Empty => AppError::Validation("No data provided".to_string()),
            AppJsonRejection::MissingContentType => AppError::BadRequest(
                "Missing JSON content type: Expected request with `Content-Type: application/json`"
                    .to_string(),
            ),
            AppJsonRejection::Body(text) => {
                AppError::BadRequest(format!("Failed to read request body: {}", text))
            }
            AppJsonRejection::Json(rejection) => {
                let message = match rejection {
                    JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err),
                    JsonRejection::JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err),
                    _ => "Failed to parse JSON body".to_string(),
                };
                AppError::BadRequest(message)
            }
        };

        error.into_response()
    }
}
