use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

/// Application error type mapped onto HTTP status codes.
///
/// Every fallible operation in the crate surfaces one of these kinds;
/// handlers never construct status codes by hand. Internal errors keep
/// their source for server-side logging but render a generic message so
/// driver detail never reaches the response body.
#[derive(Debug)]
pub enum AppError {
    /// Missing or malformed request data, including duplicate email at signup.
    BadRequest(String),
    /// Missing credentials or an identity that no longer resolves.
    Unauthorized(String),
    /// A credential that fails verification, or a role/ownership mismatch.
    Forbidden(String),
    NotFound(String),
    Internal(Error),
}

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::Internal(err.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match self {
            Self::BadRequest(msg)
            | Self::Unauthorized(msg)
            | Self::Forbidden(msg)
            | Self::NotFound(msg) => msg,
            Self::Internal(err) => {
                error!(error = %err, "Internal server error");
                "Internal server error".to_string()
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}
