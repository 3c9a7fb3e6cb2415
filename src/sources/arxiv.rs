//! arXiv adapter
//!
//! Queries the arXiv Atom API and emits one record per feed entry. Titles
//! and abstracts arrive with embedded newlines and indentation, so both are
//! whitespace-collapsed before normalization.

use crate::sources::{SearchError, SourceAdapter};
use crate::types::{RawResult, ResultKind};
use crate::utils::collapse_whitespace;
use async_trait::async_trait;
use quick_xml::events::Event;
use quick_xml::Reader;
use reqwest::Client;
use tracing::{info, warn};

const SOURCE_NAME: &str = "arXiv";

pub struct ArxivAdapter {
    http: Client,
    base_url: String,
}

impl ArxivAdapter {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    async fn fetch(&self, query: &str, max_results: usize) -> Result<Vec<RawResult>, SearchError> {
        let url = format!(
            "{}/api/query?search_query=all:{}&start=0&max_results={}",
            self.base_url,
            urlencoding::encode(query),
            max_results
        );

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(SearchError::Status(response.status()));
        }

        let body = response.text().await?;
        parse_atom_feed(&body)
    }
}

#[async_trait]
impl SourceAdapter for ArxivAdapter {
    fn name(&self) -> &'static str {
        SOURCE_NAME
    }

    async fn search(&self, query: &str, max_results: usize) -> Vec<RawResult> {
        info!(query = %query, "Searching arXiv");
        match self.fetch(query, max_results).await {
            Ok(results) => {
                info!(count = results.len(), "arXiv search completed");
                results
            }
            Err(e) => {
                warn!(error = %e, "arXiv search failed");
                Vec::new()
            }
        }
    }
}

/// Parse an Atom feed into records: one per `<entry>`, taking `<title>`,
/// `<summary>`, and `<id>` (which arXiv uses as the abstract page URL).
/// Namespace prefixes are stripped before tag matching.
fn parse_atom_feed(xml: &str) -> Result<Vec<RawResult>, SearchError> {
    let mut reader = Reader::from_reader(xml.as_bytes());
    reader.trim_text(true);
    let mut buf = Vec::new();
    let mut results = Vec::new();

    let mut in_entry = false;
    let mut title = String::new();
    let mut summary = String::new();
    let mut link = String::new();
    let mut text_target: Option<&'static str> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name_buf: Vec<u8> = e.name().as_ref().to_vec();
                let name = strip_ns_prefix(&name_buf);
                match name {
                    b"entry" => {
                        in_entry = true;
                        title.clear();
                        summary.clear();
                        link.clear();
                        text_target = None;
                    }
                    b"title" if in_entry => text_target = Some("title"),
                    b"summary" if in_entry => text_target = Some("summary"),
                    b"id" if in_entry => text_target = Some("id"),
                    _ => {}
                }
            }
            Ok(Event::Text(t)) => {
                if let Some(target) = text_target.take() {
                    let text = t.unescape().unwrap_or_default().to_string();
                    match target {
                        "title" => title = text,
                        "summary" => summary = text,
                        "id" => link = text,
                        _ => {}
                    }
                }
            }
            Ok(Event::End(e)) => {
                let name_buf: Vec<u8> = e.name().as_ref().to_vec();
                if strip_ns_prefix(&name_buf) == b"entry" && in_entry {
                    in_entry = false;
                    results.push(RawResult::new(
                        collapse_whitespace(&title),
                        link.trim(),
                        collapse_whitespace(&summary),
                        SOURCE_NAME,
                        ResultKind::AcademicPaper,
                    ));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(SearchError::Parse(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(results)
}

fn strip_ns_prefix(raw: &[u8]) -> &[u8] {
    match raw.iter().position(|b| *b == b':') {
        Some(idx) => &raw[idx + 1..],
        None => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>ArXiv Query Results</title>
  <entry>
    <id>http://arxiv.org/abs/2401.00001v1</id>
    <title>Deep Learning for
        Protein Folding</title>
    <summary>We present a   method
        spanning multiple lines of
        abstract text.</summary>
  </entry>
  <entry>
    <id>http://arxiv.org/abs/2401.00002v2</id>
    <title>Second Paper</title>
    <summary>Another abstract.</summary>
  </entry>
</feed>
"#;

    #[test]
    fn test_parse_atom_feed_collapses_whitespace() {
        let results = parse_atom_feed(SAMPLE_FEED).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "Deep Learning for Protein Folding");
        assert_eq!(
            results[0].content,
            "We present a method spanning multiple lines of abstract text."
        );
        assert_eq!(results[0].url, "http://arxiv.org/abs/2401.00001v1");
        assert_eq!(results[0].source, "arXiv");
        assert_eq!(results[0].kind, ResultKind::AcademicPaper);
    }

    #[test]
    fn test_parse_atom_feed_ignores_feed_level_title() {
        let results = parse_atom_feed(SAMPLE_FEED).unwrap();
        assert!(results.iter().all(|r| r.title != "ArXiv Query Results"));
    }

    #[test]
    fn test_parse_malformed_feed_is_an_error() {
        assert!(parse_atom_feed("<feed><entry></feed>").is_err());
    }

    #[tokio::test]
    async fn test_search_returns_entries_from_server() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/query")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(SAMPLE_FEED)
            .create_async()
            .await;

        let adapter = ArxivAdapter::new(Client::new(), server.url());
        let results = adapter.search("protein folding", 3).await;
        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn test_search_swallows_http_errors() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/query")
            .match_query(mockito::Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let adapter = ArxivAdapter::new(Client::new(), server.url());
        assert!(adapter.search("anything", 3).await.is_empty());
    }
}
