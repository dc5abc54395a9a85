//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use roster_domain::error::{NotFoundError, RosterError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`RosterError`] to an HTTP response with appropriate status code.
///
/// The body carries the error's display message verbatim, so the domain
/// error strings are the wire contract.
pub struct ApiError(RosterError);

impl From<RosterError> for ApiError {
    fn from(err: RosterError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(RosterError::Validation(err))
    }
}

impl From<NotFoundError> for ApiError {
    fn from(err: NotFoundError) -> Self {
        Self(RosterError::NotFound(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            RosterError::Validation(_) => StatusCode::BAD_REQUEST,
            RosterError::NotFound(_) => StatusCode::NOT_FOUND,
            RosterError::Storage(err) => {
                tracing::error!(
                    error = %err,
                    source = ?std::error::Error::source(err),
                    "storage error"
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
            RosterError::IdsExhausted => {
                tracing::error!("no user id left to assign");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (
            status,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

/// Fallback for any method/path combination without a matching route.
pub(crate) async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorBody {
            error: "Method Not Allowed".to_string(),
        }),
    )
        .into_response()
}
