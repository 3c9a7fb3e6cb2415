//! Semantic Scholar adapter
//!
//! Queries the Graph API paper search. Only papers that carry an abstract
//! are emitted; the abstract becomes the record content and the author list
//! is carried as an extra.

use crate::sources::{SearchError, SourceAdapter};
use crate::types::{RawResult, ResultKind};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, warn};

const SOURCE_NAME: &str = "Semantic Scholar";

pub struct SemanticScholarAdapter {
    http: Client,
    base_url: String,
}

impl SemanticScholarAdapter {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    async fn fetch(&self, query: &str, max_results: usize) -> Result<Vec<RawResult>, SearchError> {
        let url = format!(
            "{}/graph/v1/paper/search?query={}&limit={}&fields=title,url,abstract,openAccessPdf,authors",
            self.base_url,
            urlencoding::encode(query),
            max_results
        );

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(SearchError::Status(response.status()));
        }

        let data: serde_json::Value = response.json().await?;
        let papers = data
            .get("data")
            .and_then(|v| v.as_array())
            .ok_or_else(|| SearchError::Parse("expected a `data` array".to_string()))?;

        let mut results = Vec::new();
        for paper in papers {
            // Papers without an abstract carry no usable content
            let Some(abstract_text) = paper
                .get("abstract")
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())
            else {
                continue;
            };

            let title = paper
                .get("title")
                .and_then(|v| v.as_str())
                .unwrap_or("No title");
            let url = paper.get("url").and_then(|v| v.as_str()).unwrap_or("");
            let authors = paper
                .get("authors")
                .and_then(|v| v.as_array())
                .map(|arr| {
                    arr.iter()
                        .filter_map(|a| a.get("name").and_then(|n| n.as_str()))
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default();

            let mut record = RawResult::new(
                title,
                url,
                abstract_text,
                SOURCE_NAME,
                ResultKind::AcademicPaper,
            );
            record.authors = authors;
            results.push(record);
        }

        Ok(results)
    }
}

#[async_trait]
impl SourceAdapter for SemanticScholarAdapter {
    fn name(&self) -> &'static str {
        SOURCE_NAME
    }

    async fn search(&self, query: &str, max_results: usize) -> Vec<RawResult> {
        info!(query = %query, "Searching Semantic Scholar");
        match self.fetch(query, max_results).await {
            Ok(results) => {
                info!(count = results.len(), "Semantic Scholar search completed");
                results
            }
            Err(e) => {
                warn!(error = %e, "Semantic Scholar search failed");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESPONSE: &str = r#"{
        "total": 3,
        "data": [
            {
                "title": "Paper With Abstract",
                "url": "https://www.semanticscholar.org/paper/abc",
                "abstract": "A detailed abstract of the work.",
                "authors": [{"name": "Ada Lovelace"}, {"name": "Alan Turing"}]
            },
            {
                "title": "Paper Without Abstract",
                "url": "https://www.semanticscholar.org/paper/def",
                "abstract": null
            },
            {
                "title": "Paper With Empty Abstract",
                "url": "https://www.semanticscholar.org/paper/ghi",
                "abstract": ""
            }
        ]
    }"#;

    #[tokio::test]
    async fn test_search_keeps_only_papers_with_abstracts() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/graph/v1/paper/search")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(SAMPLE_RESPONSE)
            .create_async()
            .await;

        let adapter = SemanticScholarAdapter::new(Client::new(), server.url());
        let results = adapter.search("anything", 3).await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Paper With Abstract");
        assert_eq!(results[0].content, "A detailed abstract of the work.");
        assert_eq!(results[0].authors, ["Ada Lovelace", "Alan Turing"]);
        assert_eq!(results[0].kind, ResultKind::AcademicPaper);
    }

    #[tokio::test]
    async fn test_search_swallows_parse_failures() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/graph/v1/paper/search")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"{"message": "rate limited"}"#)
            .create_async()
            .await;

        let adapter = SemanticScholarAdapter::new(Client::new(), server.url());
        assert!(adapter.search("anything", 3).await.is_empty());
    }
}
