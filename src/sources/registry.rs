//! Trusted source registry
//!
//! Static descriptors for every adapter plus the category-to-adapter
//! assignment the pipeline fans out over. The registry is built once at
//! startup from configuration and never mutated afterwards.

use crate::config::SourcesConfig;
use crate::sources::{
    ArxivAdapter, GitHubAdapter, RedditAdapter, SemanticScholarAdapter, SourceAdapter,
    WikipediaAdapter,
};
use crate::types::ResultKind;
use reqwest::Client;
use std::sync::Arc;

/// Static description of one trusted source.
#[derive(Debug, Clone, Copy)]
pub struct SourceDescriptor {
    pub name: &'static str,
    pub endpoint: &'static str,
    pub kind: ResultKind,
    pub description: &'static str,
}

/// The trusted, accessible sources this crate knows how to search.
pub fn trusted_sources() -> &'static [SourceDescriptor] {
    &[
        SourceDescriptor {
            name: "arXiv",
            endpoint: "http://export.arxiv.org/api/query",
            kind: ResultKind::AcademicPaper,
            description: "Open access research papers",
        },
        SourceDescriptor {
            name: "Semantic Scholar",
            endpoint: "https://api.semanticscholar.org/graph/v1/paper/search",
            kind: ResultKind::AcademicPaper,
            description: "Academic papers with abstracts",
        },
        SourceDescriptor {
            name: "Wikipedia",
            endpoint: "https://en.wikipedia.org/api/rest_v1",
            kind: ResultKind::Encyclopedia,
            description: "Encyclopedia articles",
        },
        SourceDescriptor {
            name: "GitHub",
            endpoint: "https://api.github.com/search/repositories",
            kind: ResultKind::Repository,
            description: "Open source projects",
        },
        SourceDescriptor {
            name: "Reddit",
            endpoint: "https://www.reddit.com/search.json",
            kind: ResultKind::Discussion,
            description: "Community discussions",
        },
    ]
}

/// Search category requested by the caller. Unrecognized category strings
/// parse to `None` and are ignored by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Academic,
    General,
    Tech,
}

impl Category {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "academic" => Some(Category::Academic),
            "general" => Some(Category::General),
            "tech" => Some(Category::Tech),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Academic => "academic",
            Category::General => "general",
            Category::Tech => "tech",
        }
    }
}

/// Read-only mapping from category to the ordered adapters it fans out to.
pub struct SourceRegistry {
    academic: Vec<Arc<dyn SourceAdapter>>,
    general: Vec<Arc<dyn SourceAdapter>>,
    tech: Vec<Arc<dyn SourceAdapter>>,
}

impl SourceRegistry {
    /// Build the standard registry: academic → arXiv + Semantic Scholar,
    /// general → Wikipedia + Reddit, tech → GitHub.
    pub fn new(http: Client, config: &SourcesConfig) -> Self {
        Self {
            academic: vec![
                Arc::new(ArxivAdapter::new(http.clone(), &config.arxiv_base)),
                Arc::new(SemanticScholarAdapter::new(
                    http.clone(),
                    &config.semantic_scholar_base,
                )),
            ],
            general: vec![
                Arc::new(WikipediaAdapter::new(http.clone(), &config.wikipedia_base)),
                Arc::new(RedditAdapter::new(http.clone(), &config.reddit_base)),
            ],
            tech: vec![Arc::new(GitHubAdapter::new(http, &config.github_base))],
        }
    }

    /// Build a registry from explicit adapter lists. Used by tests to wire
    /// in stubs.
    pub fn with_adapters(
        academic: Vec<Arc<dyn SourceAdapter>>,
        general: Vec<Arc<dyn SourceAdapter>>,
        tech: Vec<Arc<dyn SourceAdapter>>,
    ) -> Self {
        Self {
            academic,
            general,
            tech,
        }
    }

    pub fn for_category(&self, category: Category) -> &[Arc<dyn SourceAdapter>] {
        match category {
            Category::Academic => &self.academic,
            Category::General => &self.general,
            Category::Tech => &self.tech,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!(Category::parse("academic"), Some(Category::Academic));
        assert_eq!(Category::parse(" Tech "), Some(Category::Tech));
        assert_eq!(Category::parse("news"), None);
        assert_eq!(Category::parse(""), None);
    }

    #[test]
    fn test_registry_category_assignment() {
        let registry = SourceRegistry::new(Client::new(), &SourcesConfig::default());
        let names = |cat: Category| -> Vec<&str> {
            registry.for_category(cat).iter().map(|a| a.name()).collect()
        };
        assert_eq!(names(Category::Academic), ["arXiv", "Semantic Scholar"]);
        assert_eq!(names(Category::General), ["Wikipedia", "Reddit"]);
        assert_eq!(names(Category::Tech), ["GitHub"]);
    }

    #[test]
    fn test_descriptor_table_lists_every_adapter() {
        let names: Vec<&str> = trusted_sources().iter().map(|d| d.name).collect();
        assert_eq!(
            names,
            ["arXiv", "Semantic Scholar", "Wikipedia", "GitHub", "Reddit"]
        );
    }
}
