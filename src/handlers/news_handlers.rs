use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::auth::current_username;
use crate::error::Result;
use crate::models::news::{NewsArticle, TimeWindow};
use crate::sentiment::{self, SentimentLabel, SentimentTally};
use crate::AppState;

const DEFAULT_QUERY: &str = "technology";
const DEFAULT_MAX_RESULTS: u32 = 10;
const MAX_RESULTS_CAP: u32 = 50;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    #[serde(default)]
    pub window: TimeWindow,
    pub max: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct AnnotatedArticle {
    #[serde(flatten)]
    pub article: NewsArticle,
    pub sentiment: SentimentLabel,
    pub score: f64,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub articles: Vec<AnnotatedArticle>,
    pub sentiment: SentimentTally,
}

/// Searches the news source and annotates each result with a sentiment
/// label derived from its title and description.
pub async fn search_news(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>> {
    current_username(&session).await?;

    let query = params
        .q
        .filter(|q| !q.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_QUERY.to_string());
    let max = params
        .max
        .unwrap_or(DEFAULT_MAX_RESULTS)
        .clamp(1, MAX_RESULTS_CAP);

    let results = state.news_client.search(&query, params.window, max).await;

    let mut counts = SentimentTally::default();
    let articles = results
        .into_iter()
        .map(|article| {
            let text = match article.description.as_deref() {
                Some(description) => format!("{} {}", article.title, description),
                None => article.title.clone(),
            };
            let (label, score) = sentiment::classify(&text);
            counts.record(label);
            AnnotatedArticle {
                article,
                sentiment: label,
                score,
            }
        })
        .collect();

    Ok(Json(SearchResponse {
        query,
        articles,
        sentiment: counts,
    }))
}
