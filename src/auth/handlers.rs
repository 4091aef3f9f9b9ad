use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::info;

use crate::auth::middleware::SESSION_USERNAME_KEY;
use crate::error::{AppError, Result};
use crate::services::auth_service::LoginRequest;
use crate::services::user_service::CreateUserRequest;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterBody {
    pub username: String,
    pub password: String,
    pub password_confirm: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub username: String,
    pub last_login: Option<String>,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterBody>,
) -> Result<impl IntoResponse> {
    let user = state
        .user_service
        .create_user(CreateUserRequest {
            username: body.username,
            password: body.password,
            password_confirm: body.password_confirm,
            email: body.email,
        })
        .await?;

    info!(username = %user.username, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "username": user.username })),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<LoginBody>,
) -> Result<Json<LoginResponse>> {
    let user = state
        .auth_service
        .authenticate(LoginRequest {
            username: body.username,
            password: body.password,
        })
        .await?;

    // Rotate the session id on privilege change.
    session
        .cycle_id()
        .await
        .map_err(|_| AppError::InternalError)?;
    session
        .insert(SESSION_USERNAME_KEY, user.username.clone())
        .await
        .map_err(|_| AppError::InternalError)?;

    info!(username = %user.username, "user logged in");

    Ok(Json(LoginResponse {
        username: user.username,
        last_login: user.last_login,
    }))
}

pub async fn logout(session: Session) -> Result<Json<serde_json::Value>> {
    session.flush().await.map_err(|_| AppError::InternalError)?;
    Ok(Json(serde_json::json!({ "status": "logged_out" })))
}
