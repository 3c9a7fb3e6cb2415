//! GitHub adapter
//!
//! Searches repositories ranked by stars, then fetches each repository's
//! README as a secondary lookup. The README arrives base64-encoded; it is
//! decoded, stripped of markdown control characters, and concatenated with
//! the repository description to form the record content. A failed README
//! fetch degrades the record to description-only rather than dropping it.

use crate::sources::{SearchError, SourceAdapter};
use crate::types::{RawResult, ResultKind};
use crate::utils::truncate_chars;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

const SOURCE_NAME: &str = "GitHub";
/// Secondary lookups get a tighter budget than the primary search.
const README_TIMEOUT: Duration = Duration::from_secs(5);
const README_MAX_LEN: usize = 500;
const CONTENT_MAX_LEN: usize = 1000;

pub struct GitHubAdapter {
    http: Client,
    base_url: String,
}

impl GitHubAdapter {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    async fn fetch(&self, query: &str, max_results: usize) -> Result<Vec<RawResult>, SearchError> {
        let url = format!(
            "{}/search/repositories?q={}&sort=stars&order=desc&per_page={}",
            self.base_url,
            urlencoding::encode(query),
            max_results
        );

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(SearchError::Status(response.status()));
        }

        let data: serde_json::Value = response.json().await?;
        let empty = Vec::new();
        let repos = data
            .get("items")
            .and_then(|v| v.as_array())
            .unwrap_or(&empty);

        let mut results = Vec::new();
        for repo in repos {
            let name = repo.get("name").and_then(|v| v.as_str()).unwrap_or("No name");
            let full_name = repo
                .get("full_name")
                .and_then(|v| v.as_str())
                .unwrap_or("");
            let description = repo
                .get("description")
                .and_then(|v| v.as_str())
                .unwrap_or("");
            let html_url = repo
                .get("html_url")
                .and_then(|v| v.as_str())
                .unwrap_or("");
            let stars = repo
                .get("stargazers_count")
                .and_then(|v| v.as_u64())
                .unwrap_or(0);

            let readme = self.fetch_readme(full_name).await;
            let content = match &readme {
                Some(readme) if !readme.is_empty() => format!("{description}\n\n{readme}"),
                _ => description.to_string(),
            };

            let mut record = RawResult::new(
                format!("{name} - {full_name}"),
                html_url,
                truncate_chars(&content, CONTENT_MAX_LEN),
                SOURCE_NAME,
                ResultKind::Repository,
            );
            record.stars = Some(stars);
            results.push(record);
        }

        Ok(results)
    }

    /// Best-effort README fetch: any failure yields `None` and the record is
    /// built from the description alone.
    async fn fetch_readme(&self, full_name: &str) -> Option<String> {
        if full_name.is_empty() {
            return None;
        }
        let url = format!("{}/repos/{}/readme", self.base_url, full_name);

        let response = self
            .http
            .get(&url)
            .timeout(README_TIMEOUT)
            .send()
            .await
            .ok()?;
        if !response.status().is_success() {
            debug!(repo = %full_name, status = %response.status(), "README fetch failed");
            return None;
        }

        let data: serde_json::Value = response.json().await.ok()?;
        let encoded = data.get("content").and_then(|v| v.as_str())?;
        // The API wraps base64 content with newlines
        let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
        let bytes = BASE64.decode(compact).ok()?;
        let text = String::from_utf8_lossy(&bytes);

        Some(truncate_chars(&strip_markup(&text), README_MAX_LEN).to_string())
    }
}

/// Drop markdown control characters and collapse blank-line runs so the
/// README reads as plain text.
fn strip_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_was_newline = false;
    for c in text.chars() {
        match c {
            '#' | '*' | '`' | '[' | ']' | '(' | ')' => {}
            '\n' => {
                if !last_was_newline {
                    out.push('\n');
                }
                last_was_newline = true;
            }
            _ => {
                out.push(c);
                last_was_newline = false;
            }
        }
    }
    out
}

#[async_trait]
impl SourceAdapter for GitHubAdapter {
    fn name(&self) -> &'static str {
        SOURCE_NAME
    }

    async fn search(&self, query: &str, max_results: usize) -> Vec<RawResult> {
        info!(query = %query, "Searching GitHub");
        match self.fetch(query, max_results).await {
            Ok(results) => {
                info!(count = results.len(), "GitHub search completed");
                results
            }
            Err(e) => {
                warn!(error = %e, "GitHub search failed");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_body() -> &'static str {
        r#"{
            "items": [
                {
                    "name": "ferris",
                    "full_name": "rustacean/ferris",
                    "description": "A crab-themed toolkit",
                    "html_url": "https://github.com/rustacean/ferris",
                    "stargazers_count": 1234
                }
            ]
        }"#
    }

    #[test]
    fn test_strip_markup_removes_control_characters() {
        let cleaned = strip_markup("# Title\n\n\n*bold* `code` [link](url)");
        assert_eq!(cleaned, " Title\nbold code linkurl");
    }

    #[tokio::test]
    async fn test_search_combines_description_and_readme() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/search/repositories")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(search_body())
            .create_async()
            .await;
        let readme_b64 = BASE64.encode("# Ferris\n\nA friendly crab library.");
        server
            .mock("GET", "/repos/rustacean/ferris/readme")
            .with_status(200)
            .with_body(format!(r#"{{"content": "{readme_b64}"}}"#))
            .create_async()
            .await;

        let adapter = GitHubAdapter::new(Client::new(), server.url());
        let results = adapter.search("crab", 3).await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "ferris - rustacean/ferris");
        assert!(results[0].content.starts_with("A crab-themed toolkit\n\n"));
        assert!(results[0].content.contains("A friendly crab library."));
        assert!(!results[0].content.contains('#'));
        assert_eq!(results[0].stars, Some(1234));
        assert_eq!(results[0].kind, ResultKind::Repository);
    }

    #[tokio::test]
    async fn test_readme_failure_degrades_to_description() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/search/repositories")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(search_body())
            .create_async()
            .await;
        server
            .mock("GET", "/repos/rustacean/ferris/readme")
            .with_status(404)
            .create_async()
            .await;

        let adapter = GitHubAdapter::new(Client::new(), server.url());
        let results = adapter.search("crab", 3).await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].content, "A crab-themed toolkit");
    }

    #[tokio::test]
    async fn test_search_swallows_http_errors() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/search/repositories")
            .match_query(mockito::Matcher::Any)
            .with_status(403)
            .create_async()
            .await;

        let adapter = GitHubAdapter::new(Client::new(), server.url());
        assert!(adapter.search("crab", 3).await.is_empty());
    }
}
