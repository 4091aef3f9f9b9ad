use crate::models::news::{NewsArticle, NewsResponse, TimeWindow};
use chrono::{Duration as ChronoDuration, Utc};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::warn;

const DEFAULT_BASE_URL: &str = "https://gnews.io/api/v4";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Results are memoized per argument tuple for this long, so repeated
/// dashboard refreshes do not burn through the API quota.
const CACHE_TTL: Duration = Duration::from_secs(300);

type CacheKey = (String, TimeWindow, u32);

struct CacheEntry {
    fetched_at: Instant,
    articles: Vec<NewsArticle>,
}

/// Thin client for the GNews search API with a time-boxed in-process
/// cache. The boundary is deliberately lossy: transport failures, non-200
/// responses and undecodable payloads all read as "no results".
pub struct NewsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    cache: Mutex<HashMap<CacheKey, CacheEntry>>,
}

impl NewsClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn from_env() -> Self {
        let api_key = std::env::var("GNEWS_API_KEY").unwrap_or_default();
        if api_key.is_empty() {
            warn!("GNEWS_API_KEY not set; news searches will return no results");
        }
        Self::new(api_key)
    }

    /// Searches for news articles. Cached per (query, window, max) for
    /// five minutes; an empty vec on any failure path.
    pub async fn search(
        &self,
        query: &str,
        window: TimeWindow,
        max_results: u32,
    ) -> Vec<NewsArticle> {
        let key = (query.to_string(), window, max_results);

        {
            let cache = self.cache.lock().await;
            if let Some(entry) = cache.get(&key) {
                if entry.fetched_at.elapsed() < CACHE_TTL {
                    return entry.articles.clone();
                }
            }
        }

        let articles = self.fetch(query, window, max_results).await;

        let mut cache = self.cache.lock().await;
        cache.insert(
            key,
            CacheEntry {
                fetched_at: Instant::now(),
                articles: articles.clone(),
            },
        );

        articles
    }

    async fn fetch(&self, query: &str, window: TimeWindow, max_results: u32) -> Vec<NewsArticle> {
        let mut url = format!(
            "{}/search?q={}&lang=en&max={}&token={}",
            self.base_url,
            urlencoding::encode(query),
            max_results,
            self.api_key
        );

        if let Some(from) = window_start(window) {
            url.push_str(&format!("&from={}", from));
        }

        let response = match self.http.get(&url).timeout(REQUEST_TIMEOUT).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(query, error = %e, "news search request failed");
                return Vec::new();
            }
        };

        if !response.status().is_success() {
            warn!(query, status = %response.status(), "news search returned an error status");
            return Vec::new();
        }

        match response.json::<NewsResponse>().await {
            Ok(body) => body.articles,
            Err(e) => {
                warn!(query, error = %e, "news search response was not decodable");
                Vec::new()
            }
        }
    }
}

fn window_start(window: TimeWindow) -> Option<String> {
    let days = match window {
        TimeWindow::Anytime => return None,
        TimeWindow::Past24h => 1,
        TimeWindow::PastWeek => 7,
    };
    let from = Utc::now() - ChronoDuration::days(days);
    Some(from.format("%Y-%m-%dT%H:%M:%SZ").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_start() {
        assert!(window_start(TimeWindow::Anytime).is_none());
        let from = window_start(TimeWindow::Past24h).unwrap();
        assert!(from.ends_with('Z'));
        assert!(from.contains('T'));
    }
}
