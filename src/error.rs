/*
 * Responsibility
 * - Application-wide AppError definition
 * - IntoResponse implementation (HTTP status / JSON error body)
 * - Conversions from repo / auth service errors
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::repos::error::RepoError;
use crate::services::auth::AuthError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Login failure. Unknown email and wrong senha both collapse into this
    /// variant so the response cannot be used to enumerate accounts.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("unauthorized")]
    Unauthorized,

    #[error("forbidden")]
    Forbidden,

    #[error("not found")]
    NotFound,

    #[error("internal server error")]
    Internal,
}

#[derive(Serialize)]
struct ErrorResponseBody {
    error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS"),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            AppError::Forbidden => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            AppError::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL"),
        };

        let body = ErrorResponseBody {
            error: ErrorBody {
                code,
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        tracing::error!(error = %e, "repository failure");
        AppError::Internal
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            // One outward signal for both causes (no account enumeration).
            AuthError::UnknownIdentity | AuthError::BadSecret => AppError::InvalidCredentials,
            // A store or hashing fault is an operational error, not a login
            // failure; masking it as 401 would hide an outage.
            AuthError::Store(e) => AppError::from(e),
            AuthError::Password(e) => {
                tracing::error!(error = %e, "senha verification failure");
                AppError::Internal
            }
            AuthError::Sign(e) => {
                tracing::error!(error = %e, "token issuance failure");
                AppError::Internal
            }
        }
    }
}
