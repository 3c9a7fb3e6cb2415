use anyhow::Result;
use std::env;

pub const DEFAULT_USER_AGENT: &str = "trusted-researcher/0.1";

#[derive(Debug, Clone)]
pub struct Config {
    pub ollama: OllamaConfig,
    pub sources: SourcesConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone)]
pub struct OllamaConfig {
    pub base_url: String,
    /// Models to try in priority order when summarizing.
    pub models: Vec<String>,
    pub timeout_secs: u64,
}

/// Base URLs for the trusted source APIs.
///
/// Defaults point at the public endpoints; tests override them to target a
/// local mock server.
#[derive(Debug, Clone)]
pub struct SourcesConfig {
    pub arxiv_base: String,
    pub semantic_scholar_base: String,
    pub wikipedia_base: String,
    pub github_base: String,
    pub reddit_base: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub dir: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            arxiv_base: "http://export.arxiv.org".to_string(),
            semantic_scholar_base: "https://api.semanticscholar.org".to_string(),
            wikipedia_base: "https://en.wikipedia.org".to_string(),
            github_base: "https://api.github.com".to_string(),
            reddit_base: "https://www.reddit.com".to_string(),
            request_timeout_secs: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            models: crate::llm::summarizer::DEFAULT_MODELS
                .iter()
                .map(|m| m.to_string())
                .collect(),
            timeout_secs: 120,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let source_defaults = SourcesConfig::default();
        let ollama_defaults = OllamaConfig::default();

        Ok(Self {
            ollama: OllamaConfig {
                base_url: env::var("OLLAMA_BASE_URL").unwrap_or(ollama_defaults.base_url),
                models: env::var("OLLAMA_MODELS")
                    .map(|raw| {
                        raw.split(',')
                            .map(|m| m.trim().to_string())
                            .filter(|m| !m.is_empty())
                            .collect()
                    })
                    .unwrap_or(ollama_defaults.models),
                timeout_secs: env::var("OLLAMA_TIMEOUT_SECS")
                    .unwrap_or_else(|_| ollama_defaults.timeout_secs.to_string())
                    .parse()?,
            },
            sources: SourcesConfig {
                arxiv_base: env::var("ARXIV_BASE_URL").unwrap_or(source_defaults.arxiv_base),
                semantic_scholar_base: env::var("SEMANTIC_SCHOLAR_BASE_URL")
                    .unwrap_or(source_defaults.semantic_scholar_base),
                wikipedia_base: env::var("WIKIPEDIA_BASE_URL")
                    .unwrap_or(source_defaults.wikipedia_base),
                github_base: env::var("GITHUB_BASE_URL").unwrap_or(source_defaults.github_base),
                reddit_base: env::var("REDDIT_BASE_URL").unwrap_or(source_defaults.reddit_base),
                request_timeout_secs: env::var("SEARCH_TIMEOUT_SECS")
                    .unwrap_or_else(|_| source_defaults.request_timeout_secs.to_string())
                    .parse()?,
                user_agent: env::var("SEARCH_USER_AGENT").unwrap_or(source_defaults.user_agent),
            },
            output: OutputConfig {
                dir: env::var("REPORT_OUTPUT_DIR").unwrap_or_else(|_| ".".to_string()),
            },
        })
    }
}
