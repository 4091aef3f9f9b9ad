use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::services::article_service::ArticleServiceError;
use crate::services::auth_service::AuthServiceError;
use crate::services::user_service::UserServiceError;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Authentication required")]
    AuthenticationRequired,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error")]
    InternalError,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::AuthenticationRequired => (
                StatusCode::UNAUTHORIZED,
                "Authentication required".to_string(),
            ),
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Invalid username or password".to_string(),
            ),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            // Storage details never reach the end user.
            AppError::Database(_) | AppError::InternalError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        (status, Json(json!({ "error": error_message }))).into_response()
    }
}

impl From<UserServiceError> for AppError {
    fn from(err: UserServiceError) -> Self {
        match err {
            UserServiceError::UsernameTaken => AppError::Conflict(err.to_string()),
            UserServiceError::InvalidInput(_)
            | UserServiceError::WeakPassword
            | UserServiceError::PasswordMismatch => AppError::Validation(err.to_string()),
            UserServiceError::UserNotFound => AppError::Validation(err.to_string()),
            UserServiceError::Hashing(_) | UserServiceError::Repository(_) => {
                tracing::error!(error = %err, "user service failure");
                AppError::InternalError
            }
        }
    }
}

impl From<AuthServiceError> for AppError {
    fn from(err: AuthServiceError) -> Self {
        match err {
            AuthServiceError::InvalidCredentials => AppError::InvalidCredentials,
            AuthServiceError::InvalidInput(_) => AppError::Validation(err.to_string()),
            AuthServiceError::Repository(_) => {
                tracing::error!(error = %err, "auth service failure");
                AppError::InternalError
            }
        }
    }
}

impl From<ArticleServiceError> for AppError {
    fn from(err: ArticleServiceError) -> Self {
        match err {
            ArticleServiceError::InvalidInput(_) => AppError::Validation(err.to_string()),
            ArticleServiceError::Repository(_) => {
                tracing::error!(error = %err, "article service failure");
                AppError::InternalError
            }
        }
    }
}
