//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use catalogo_domain::error::{CatalogoError, NotFoundError, ValidationError};

use crate::envelope::Envelope;

/// Maps [`CatalogoError`] to an HTTP response with appropriate status code.
///
/// The body is always an [`Envelope`] carrying only the error message.
#[derive(Debug)]
pub struct ApiError(CatalogoError);

impl From<CatalogoError> for ApiError {
    fn from(err: CatalogoError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl From<NotFoundError> for ApiError {
    fn from(err: NotFoundError) -> Self {
        Self(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ValidationError::MalformedBody(rejection.body_text()).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            CatalogoError::Validation(_) => StatusCode::BAD_REQUEST,
            CatalogoError::NotFound(_) => StatusCode::NOT_FOUND,
            CatalogoError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(Envelope::message(self.0.to_string()))).into_response()
    }
}
