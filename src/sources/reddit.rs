//! Reddit adapter
//!
//! Queries the public search listing. A post's content is its title plus
//! self-text; posts whose combined content is 50 characters or shorter are
//! discarded as insubstantial before normalization.

use crate::sources::{SearchError, SourceAdapter};
use crate::types::{RawResult, ResultKind};
use crate::utils::truncate_chars;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, warn};

const SOURCE_NAME: &str = "Reddit";
// Reddit rejects default library user agents
const USER_AGENT: &str = "ResearchBot/1.0";
/// Posts must exceed this combined length to be kept.
const MIN_POST_LEN: usize = 50;
const CONTENT_MAX_LEN: usize = 800;

pub struct RedditAdapter {
    http: Client,
    base_url: String,
}

impl RedditAdapter {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    async fn fetch(&self, query: &str, max_results: usize) -> Result<Vec<RawResult>, SearchError> {
        let url = format!(
            "{}/search.json?q={}&sort=relevance&limit={}",
            self.base_url,
            urlencoding::encode(query),
            max_results
        );

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(SearchError::Status(response.status()));
        }

        let data: serde_json::Value = response.json().await?;
        let empty = Vec::new();
        let posts = data
            .get("data")
            .and_then(|v| v.get("children"))
            .and_then(|v| v.as_array())
            .unwrap_or(&empty);

        let mut results = Vec::new();
        for post in posts {
            let Some(post_data) = post.get("data") else {
                continue;
            };
            let title = post_data
                .get("title")
                .and_then(|v| v.as_str())
                .unwrap_or("");
            let selftext = post_data
                .get("selftext")
                .and_then(|v| v.as_str())
                .unwrap_or("");
            let permalink = post_data
                .get("permalink")
                .and_then(|v| v.as_str())
                .unwrap_or("");

            let content = if selftext.is_empty() {
                title.to_string()
            } else {
                format!("{title}\n\n{selftext}")
            };

            // Only include substantial posts
            if content.chars().count() <= MIN_POST_LEN {
                continue;
            }

            let mut record = RawResult::new(
                title,
                format!("https://reddit.com{permalink}"),
                truncate_chars(&content, CONTENT_MAX_LEN),
                SOURCE_NAME,
                ResultKind::Discussion,
            );
            record.subreddit = post_data
                .get("subreddit")
                .and_then(|v| v.as_str())
                .map(String::from);
            results.push(record);
        }

        Ok(results)
    }
}

#[async_trait]
impl SourceAdapter for RedditAdapter {
    fn name(&self) -> &'static str {
        SOURCE_NAME
    }

    async fn search(&self, query: &str, max_results: usize) -> Vec<RawResult> {
        info!(query = %query, "Searching Reddit");
        match self.fetch(query, max_results).await {
            Ok(results) => {
                info!(count = results.len(), "Reddit search completed");
                results
            }
            Err(e) => {
                warn!(error = %e, "Reddit search failed");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(posts: &[serde_json::Value]) -> String {
        serde_json::json!({"data": {"children": posts}}).to_string()
    }

    fn post(title: &str, selftext: &str) -> serde_json::Value {
        serde_json::json!({
            "data": {
                "title": title,
                "selftext": selftext,
                "permalink": "/r/rust/comments/abc/post/",
                "subreddit": "rust"
            }
        })
    }

    #[tokio::test]
    async fn test_short_posts_are_discarded_at_the_boundary() {
        // title + "\n\n" + selftext: 24 + 2 + 24 = 50 chars (dropped),
        // second post is 51 chars (kept)
        let body = listing(&[
            post(&"a".repeat(24), &"b".repeat(24)),
            post(&"a".repeat(24), &"b".repeat(25)),
        ]);

        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/search.json")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;

        let adapter = RedditAdapter::new(Client::new(), server.url());
        let results = adapter.search("rust", 5).await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].content.chars().count(), 51);
    }

    #[tokio::test]
    async fn test_content_falls_back_to_title_without_selftext() {
        let title = "A discussion title that is definitely longer than fifty characters";
        let body = listing(&[post(title, "")]);

        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/search.json")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;

        let adapter = RedditAdapter::new(Client::new(), server.url());
        let results = adapter.search("rust", 5).await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].content, title);
        assert_eq!(results[0].subreddit.as_deref(), Some("rust"));
        assert_eq!(
            results[0].url,
            "https://reddit.com/r/rust/comments/abc/post/"
        );
        assert_eq!(results[0].kind, ResultKind::Discussion);
    }

    #[tokio::test]
    async fn test_long_content_is_truncated() {
        let body = listing(&[post("Title", &"x".repeat(2000))]);

        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/search.json")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;

        let adapter = RedditAdapter::new(Client::new(), server.url());
        let results = adapter.search("rust", 5).await;
        assert_eq!(results[0].content.chars().count(), 800);
    }

    #[tokio::test]
    async fn test_search_swallows_http_errors() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/search.json")
            .match_query(mockito::Matcher::Any)
            .with_status(429)
            .create_async()
            .await;

        let adapter = RedditAdapter::new(Client::new(), server.url());
        assert!(adapter.search("rust", 5).await.is_empty());
    }
}
