use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_sessions::Session;

use crate::error::AppError;

/// Session key holding the authenticated username. Set on login, cleared
/// on logout; its presence is what makes a request authenticated.
pub const SESSION_USERNAME_KEY: &str = "username";

pub async fn require_auth(session: Session, request: Request, next: Next) -> Response {
    if let Ok(Some(_username)) = session.get::<String>(SESSION_USERNAME_KEY).await {
        next.run(request).await
    } else {
        AppError::AuthenticationRequired.into_response()
    }
}

/// Resolves the authenticated username for a handler behind
/// `require_auth`. The middleware already gated the request, so a missing
/// value only occurs if the session expired mid-flight.
pub async fn current_username(session: &Session) -> Result<String, AppError> {
    session
        .get::<String>(SESSION_USERNAME_KEY)
        .await
        .map_err(|_| AppError::InternalError)?
        .ok_or(AppError::AuthenticationRequired)
}
