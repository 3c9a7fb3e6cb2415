//! Source Adapters
//!
//! One adapter per trusted external source, each translating a free-text
//! query into that source's request protocol and normalizing the response
//! into `RawResult` records:
//!
//! - **arXiv** - open access research papers (Atom XML feed)
//! - **Semantic Scholar** - academic papers with abstracts (JSON API)
//! - **Wikipedia** - encyclopedia articles (two-step REST lookup)
//! - **GitHub** - open source repositories ranked by stars (JSON API)
//! - **Reddit** - community discussions (JSON listing)
//!
//! Adapters absorb their own failures: transport errors, bad statuses, and
//! unparseable responses are logged and turn into an empty result set. The
//! pipeline never sees a source-specific error.

pub mod arxiv;
pub mod github;
pub mod reddit;
pub mod registry;
pub mod semantic_scholar;
pub mod wikipedia;

pub use arxiv::ArxivAdapter;
pub use github::GitHubAdapter;
pub use reddit::RedditAdapter;
pub use registry::{trusted_sources, Category, SourceDescriptor, SourceRegistry};
pub use semantic_scholar::SemanticScholarAdapter;
pub use wikipedia::WikipediaAdapter;

use crate::types::RawResult;
use async_trait::async_trait;
use thiserror::Error;

/// Errors internal to an adapter's fetch path. These never cross the
/// `SourceAdapter::search` boundary.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected HTTP status: {0}")]
    Status(reqwest::StatusCode),

    #[error("failed to parse response: {0}")]
    Parse(String),
}

/// A searchable external source.
///
/// `search` is best-effort: any failure yields an empty sequence, reported
/// only through logging.
#[async_trait]
pub trait SourceAdapter: Send + Sync {
    /// Adapter display name, used as the `source` field of emitted records.
    fn name(&self) -> &'static str;

    async fn search(&self, query: &str, max_results: usize) -> Vec<RawResult>;
}
