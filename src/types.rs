// Result record types shared across adapters, pipeline, and renderer

use serde::{Deserialize, Serialize};

/// Tag describing what kind of material a source produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    AcademicPaper,
    Encyclopedia,
    Repository,
    Discussion,
}

impl std::fmt::Display for ResultKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResultKind::AcademicPaper => write!(f, "academic_paper"),
            ResultKind::Encyclopedia => write!(f, "encyclopedia"),
            ResultKind::Repository => write!(f, "repository"),
            ResultKind::Discussion => write!(f, "discussion"),
        }
    }
}

/// Normalized search hit produced by a source adapter.
///
/// `title` and `content` are always present (possibly empty); an adapter
/// either emits a fully populated record or nothing at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawResult {
    pub title: String,
    pub url: String,
    pub content: String,
    /// Adapter display name, e.g. "arXiv" or "Wikipedia".
    pub source: String,
    pub kind: ResultKind,
    /// Author names (Semantic Scholar only).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,
    /// Star count (GitHub only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stars: Option<u64>,
    /// Subreddit name (Reddit only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subreddit: Option<String>,
}

impl RawResult {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        content: impl Into<String>,
        source: impl Into<String>,
        kind: ResultKind,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            content: content.into(),
            source: source.into(),
            kind,
            authors: Vec::new(),
            stars: None,
            subreddit: None,
        }
    }
}

/// A `RawResult` that survived the content filter and was summarized.
///
/// `content` is truncated to the display budget; `analysis` is either a model
/// response or the deterministic excerpt fallback. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzedResult {
    pub title: String,
    pub url: String,
    pub source: String,
    pub kind: ResultKind,
    pub content: String,
    pub analysis: String,
}
