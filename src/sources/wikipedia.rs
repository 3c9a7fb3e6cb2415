//! Wikipedia adapter
//!
//! Two-step lookup against the REST API: search for candidate page titles,
//! then fetch a summary per candidate. A failed summary fetch skips that
//! candidate without aborting the others. At most three candidates are
//! inspected regardless of the caller's result cap.

use crate::sources::{SearchError, SourceAdapter};
use crate::types::{RawResult, ResultKind};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};

const SOURCE_NAME: &str = "Wikipedia";
const CANDIDATE_LIMIT: usize = 3;

pub struct WikipediaAdapter {
    http: Client,
    base_url: String,
}

impl WikipediaAdapter {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    async fn fetch(&self, query: &str) -> Result<Vec<RawResult>, SearchError> {
        let url = format!(
            "{}/api/rest_v1/page/search/{}",
            self.base_url,
            urlencoding::encode(query)
        );

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(SearchError::Status(response.status()));
        }

        let data: serde_json::Value = response.json().await?;
        let empty = Vec::new();
        let pages = data
            .get("pages")
            .and_then(|v| v.as_array())
            .unwrap_or(&empty);

        let mut results = Vec::new();
        for page in pages.iter().take(CANDIDATE_LIMIT) {
            let Some(page_title) = page.get("title").and_then(|v| v.as_str()) else {
                continue;
            };
            match self.fetch_summary(page_title).await {
                Ok(record) => results.push(record),
                Err(e) => {
                    debug!(title = %page_title, error = %e, "Skipping candidate page");
                }
            }
        }

        Ok(results)
    }

    async fn fetch_summary(&self, page_title: &str) -> Result<RawResult, SearchError> {
        let url = format!(
            "{}/api/rest_v1/page/summary/{}",
            self.base_url,
            urlencoding::encode(page_title)
        );

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(SearchError::Status(response.status()));
        }

        let data: serde_json::Value = response.json().await?;
        let title = data
            .get("title")
            .and_then(|v| v.as_str())
            .unwrap_or(page_title);
        let page_url = data
            .get("content_urls")
            .and_then(|v| v.get("desktop"))
            .and_then(|v| v.get("page"))
            .and_then(|v| v.as_str())
            .unwrap_or("");
        let extract = data.get("extract").and_then(|v| v.as_str()).unwrap_or("");

        Ok(RawResult::new(
            title,
            page_url,
            extract,
            SOURCE_NAME,
            ResultKind::Encyclopedia,
        ))
    }
}

#[async_trait]
impl SourceAdapter for WikipediaAdapter {
    fn name(&self) -> &'static str {
        SOURCE_NAME
    }

    /// `max_results` is ignored: the candidate budget is fixed at three.
    async fn search(&self, query: &str, _max_results: usize) -> Vec<RawResult> {
        info!(query = %query, "Searching Wikipedia");
        match self.fetch(query).await {
            Ok(results) => {
                info!(count = results.len(), "Wikipedia search completed");
                results
            }
            Err(e) => {
                warn!(error = %e, "Wikipedia search failed");
                Vec::new()
            }
        }
    }
}
