use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::auth::current_username;
use crate::error::Result;
use crate::models::article::SavedArticle;
use crate::services::article_service::{SaveArticleRequest, SaveOutcome};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SaveArticleBody {
    pub title: Option<String>,
    pub link: Option<String>,
    pub published_at: Option<String>,
    pub image_url: Option<String>,
    pub source: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SaveArticleResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article: Option<SavedArticle>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    pub link: String,
}

pub async fn list_articles(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<Vec<SavedArticle>>> {
    let username = current_username(&session).await?;
    let articles = state.article_service.list(&username).await?;
    Ok(Json(articles))
}

pub async fn count_articles(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<serde_json::Value>> {
    let username = current_username(&session).await?;
    let count = state.article_service.count(&username).await?;
    Ok(Json(serde_json::json!({ "count": count })))
}

pub async fn save_article(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<SaveArticleBody>,
) -> Result<impl IntoResponse> {
    let username = current_username(&session).await?;

    let outcome = state
        .article_service
        .save(SaveArticleRequest {
            username,
            title: body.title,
            link: body.link,
            published_at: body.published_at,
            image_url: body.image_url,
            source: body.source,
            category: body.category,
        })
        .await?;

    let response = match outcome {
        SaveOutcome::Saved(article) => (
            StatusCode::CREATED,
            Json(SaveArticleResponse {
                status: "saved",
                article: Some(article),
            }),
        ),
        SaveOutcome::AlreadyExists => (
            StatusCode::OK,
            Json(SaveArticleResponse {
                status: "already_saved",
                article: None,
            }),
        ),
    };

    Ok(response)
}

pub async fn delete_article(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<DeleteParams>,
) -> Result<Json<serde_json::Value>> {
    let username = current_username(&session).await?;
    let deleted = state.article_service.delete(&username, &params.link).await;
    Ok(Json(serde_json::json!({ "deleted": deleted })))
}
