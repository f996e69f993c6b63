use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// JSON body shared by every failing endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    #[serde(rename = "errorMessage")]
    pub error_message: String,
}

/// Errors surfaced by the account endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bearer token missing, unparseable, or failing verification.
    #[error("Unauthrized request")]
    Unauthorized,

    /// First signup field rule that failed.
    #[error("{0}")]
    Validation(&'static str),

    /// Signup email already has an account.
    #[error("Email is associated with another account")]
    EmailTaken,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Validation(_) | ApiError::EmailTaken => StatusCode::BAD_REQUEST,
            ApiError::Database(_) | ApiError::Hash(_) | ApiError::Token(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn log(&self) {
        match self {
            ApiError::Database(e) => tracing::error!(error = %e, "store query failed"),
            ApiError::Hash(e) => tracing::error!(error = %e, "password hashing failed"),
            ApiError::Token(e) => tracing::error!(error = %e, "token signing failed"),
            _ => tracing::warn!(error = %self, "request rejected"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        // Internal failures keep their detail in the logs only
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            "Internal server error".to_string()
        } else {
            self.to_string()
        };
        (
            status,
            Json(ErrorBody {
                error_message: message,
            }),
        )
            .into_response()
    }
}
