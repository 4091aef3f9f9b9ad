use crate::models::article::{NewSavedArticle, SavedArticle};
use crate::repositories::{ArticleRepository, RepositoryError};
use std::sync::Arc;
use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum ArticleServiceError {
    #[error("Invalid input: {0}")]
    InvalidInput(&'static str),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Result of a save. A duplicate is an expected outcome, not an error.
#[derive(Debug)]
pub enum SaveOutcome {
    Saved(SavedArticle),
    AlreadyExists,
}

pub struct SaveArticleRequest {
    pub username: String,
    pub title: Option<String>,
    pub link: Option<String>,
    pub published_at: Option<String>,
    pub image_url: Option<String>,
    pub source: Option<String>,
    pub category: Option<String>,
}

pub struct ArticleService {
    repository: Arc<dyn ArticleRepository>,
}

impl ArticleService {
    pub fn new(repository: Arc<dyn ArticleRepository>) -> Self {
        Self { repository }
    }

    /// Saves an article for a user. The unique (username, link) index is
    /// the dedup authority: a racing duplicate insert surfaces as
    /// `AlreadyExists` from the constraint, never as a second row.
    ///
    /// An empty link is accepted but degenerate: all link-less saves for
    /// a user collapse onto the same dedup key.
    pub async fn save(&self, request: SaveArticleRequest) -> Result<SaveOutcome, ArticleServiceError> {
        if request.username.is_empty() {
            return Err(ArticleServiceError::InvalidInput("username must not be empty"));
        }

        let article = NewSavedArticle {
            username: request.username,
            title: or_default(request.title, "No Title"),
            link: or_default(request.link, ""),
            published_at: or_default(request.published_at, "Unknown"),
            image_url: or_default(request.image_url, ""),
            source: or_default(request.source, "Unknown"),
            category: or_default(request.category, "General"),
            saved_at: super::now_timestamp(),
        };

        match self.repository.insert(article).await {
            Ok(saved) => Ok(SaveOutcome::Saved(saved)),
            Err(RepositoryError::AlreadyExists) => Ok(SaveOutcome::AlreadyExists),
            Err(e) => Err(ArticleServiceError::Repository(e)),
        }
    }

    /// All saved articles for a user, newest first. Unknown or empty
    /// usernames read as an empty collection.
    pub async fn list(&self, username: &str) -> Result<Vec<SavedArticle>, ArticleServiceError> {
        if username.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.repository.list_for_user(username).await?)
    }

    pub async fn count(&self, username: &str) -> Result<i64, ArticleServiceError> {
        if username.is_empty() {
            return Ok(0);
        }
        Ok(self.repository.count_for_user(username).await?)
    }

    /// Removes the user's saved copy of a link. Returns true iff a row
    /// was removed. Storage faults are swallowed to false after logging;
    /// delete is deliberately a soft-failure operation.
    pub async fn delete(&self, username: &str, link: &str) -> bool {
        if username.is_empty() {
            return false;
        }
        match self.repository.delete_by_link(username, link).await {
            Ok(deleted) => deleted,
            Err(e) => {
                warn!(
                    operation = "delete_saved_article",
                    username, error = %e,
                    "saved-article delete failed"
                );
                false
            }
        }
    }
}

fn or_default(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::article_repository::MockArticleRepository;
    use mockall::predicate::*;

    #[tokio::test]
    async fn test_save_applies_defaults() {
        let mut mock_repo = MockArticleRepository::new();

        mock_repo
            .expect_insert()
            .withf(|a: &NewSavedArticle| {
                a.title == "No Title"
                    && a.published_at == "Unknown"
                    && a.image_url.is_empty()
                    && a.source == "Unknown"
                    && a.category == "General"
            })
            .times(1)
            .returning(|a| {
                Box::pin(async move {
                    Ok(SavedArticle {
                        id: 1,
                        username: a.username,
                        title: a.title,
                        link: a.link,
                        published_at: a.published_at,
                        image_url: a.image_url,
                        source: a.source,
                        category: a.category,
                        saved_at: a.saved_at,
                    })
                })
            });

        let service = ArticleService::new(Arc::new(mock_repo));

        let outcome = service
            .save(SaveArticleRequest {
                username: "alice".to_string(),
                title: None,
                link: Some("http://x/1".to_string()),
                published_at: Some("".to_string()),
                image_url: None,
                source: None,
                category: None,
            })
            .await
            .unwrap();

        assert!(matches!(outcome, SaveOutcome::Saved(_)));
    }

    #[tokio::test]
    async fn test_save_duplicate_is_not_an_error() {
        let mut mock_repo = MockArticleRepository::new();

        mock_repo
            .expect_insert()
            .times(1)
            .returning(|_| Box::pin(async { Err(RepositoryError::AlreadyExists) }));

        let service = ArticleService::new(Arc::new(mock_repo));

        let outcome = service
            .save(SaveArticleRequest {
                username: "alice".to_string(),
                title: Some("A".to_string()),
                link: Some("http://x/1".to_string()),
                published_at: None,
                image_url: None,
                source: None,
                category: None,
            })
            .await
            .unwrap();

        assert!(matches!(outcome, SaveOutcome::AlreadyExists));
    }

    #[tokio::test]
    async fn test_delete_swallows_storage_fault() {
        let mut mock_repo = MockArticleRepository::new();

        mock_repo
            .expect_delete_by_link()
            .with(eq("alice"), eq("http://x/1"))
            .times(1)
            .returning(|_, _| {
                Box::pin(async { Err(RepositoryError::Database(sqlx::Error::PoolClosed)) })
            });

        let service = ArticleService::new(Arc::new(mock_repo));

        assert!(!service.delete("alice", "http://x/1").await);
    }

    #[tokio::test]
    async fn test_empty_username_reads_as_empty() {
        let mock_repo = MockArticleRepository::new();
        let service = ArticleService::new(Arc::new(mock_repo));

        assert!(service.list("").await.unwrap().is_empty());
        assert_eq!(service.count("").await.unwrap(), 0);
        assert!(!service.delete("", "http://x/1").await);
    }
}
