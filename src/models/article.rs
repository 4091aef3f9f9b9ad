use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A bookmarked article, owned by exactly one user. Rows are insert-only:
/// created by a save, removed by a delete, never updated in place.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SavedArticle {
    pub id: i64,
    pub username: String,
    pub title: String,
    pub link: String,
    pub published_at: String,
    pub image_url: String,
    pub source: String,
    pub category: String,
    pub saved_at: String,
}

/// Fully-resolved insert payload. Field defaults are applied by the
/// service before this struct is built, so every field is concrete here.
#[derive(Debug, Clone)]
pub struct NewSavedArticle {
    pub username: String,
    pub title: String,
    pub link: String,
    pub published_at: String,
    pub image_url: String,
    pub source: String,
    pub category: String,
    pub saved_at: String,
}
