use crate::models::article::{NewSavedArticle, SavedArticle};
use crate::repositories::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use sqlx::SqlitePool;

#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait ArticleRepository: Send + Sync {
    async fn insert(&self, article: NewSavedArticle) -> RepositoryResult<SavedArticle>;
    async fn list_for_user(&self, username: &str) -> RepositoryResult<Vec<SavedArticle>>;
    async fn count_for_user(&self, username: &str) -> RepositoryResult<i64>;
    async fn delete_by_link(&self, username: &str, link: &str) -> RepositoryResult<bool>;
}

pub struct SqliteArticleRepository {
    pool: SqlitePool,
}

impl SqliteArticleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<SavedArticle>> {
        let article = sqlx::query_as::<_, SavedArticle>(
            "SELECT id, username, title, link, published_at, image_url, source, category, saved_at \
             FROM articles WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(article)
    }
}

#[async_trait]
impl ArticleRepository for SqliteArticleRepository {
    async fn insert(&self, article: NewSavedArticle) -> RepositoryResult<SavedArticle> {
        let result = sqlx::query(
            "INSERT INTO articles \
             (username, title, link, published_at, image_url, source, category, saved_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&article.username)
        .bind(&article.title)
        .bind(&article.link)
        .bind(&article.published_at)
        .bind(&article.image_url)
        .bind(&article.source)
        .bind(&article.category)
        .bind(&article.saved_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(res) => {
                let id = res.last_insert_rowid();
                self.find_by_id(id).await?.ok_or(RepositoryError::NotFound)
            }
            Err(e) => {
                // The unique (username, link) index decides duplicates;
                // a concurrent save that loses the race lands here.
                if e.to_string().contains("UNIQUE") {
                    Err(RepositoryError::AlreadyExists)
                } else {
                    Err(RepositoryError::Database(e))
                }
            }
        }
    }

    async fn list_for_user(&self, username: &str) -> RepositoryResult<Vec<SavedArticle>> {
        let articles = sqlx::query_as::<_, SavedArticle>(
            "SELECT id, username, title, link, published_at, image_url, source, category, saved_at \
             FROM articles WHERE username = ? ORDER BY id DESC",
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await?;

        Ok(articles)
    }

    async fn count_for_user(&self, username: &str) -> RepositoryResult<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM articles WHERE username = ?")
            .bind(username)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }

    async fn delete_by_link(&self, username: &str, link: &str) -> RepositoryResult<bool> {
        let result = sqlx::query("DELETE FROM articles WHERE username = ? AND link = ?")
            .bind(username)
            .bind(link)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
