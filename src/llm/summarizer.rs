//! Summarizer
//!
//! Produces a short analysis of one source's content with respect to the
//! research query. Models are tried in priority order; a memory-exhausted
//! model is skipped in favor of the next (smaller models first makes this a
//! useful ladder on constrained machines), while any other failure abandons
//! the chain. When no model answers, the summarizer degrades to a
//! deterministic excerpt of the content. This operation never fails.

use crate::llm::{ChatModel, ModelError};
use crate::utils::truncate_chars;
use std::sync::Arc;
use tracing::{debug, warn};

/// Default model ladder, smallest first.
pub const DEFAULT_MODELS: [&str; 3] = ["tinyllama", "phi", "mistral:7b-instruct-q4_0"];

/// How much of the source content is embedded in the prompt.
const PROMPT_CONTENT_LEN: usize = 1500;
/// Length of the excerpt used when every model attempt failed.
const FALLBACK_EXCERPT_LEN: usize = 300;

pub struct Summarizer {
    model: Arc<dyn ChatModel>,
    models: Vec<String>,
}

impl Summarizer {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self {
            model,
            models: DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
        }
    }

    /// Replace the default model ladder.
    pub fn with_models(mut self, models: Vec<String>) -> Self {
        self.models = models;
        self
    }

    /// Summarize `content` for `query`. Always returns a string; failures
    /// resolve to the excerpt fallback.
    pub async fn summarize(&self, content: &str, query: &str) -> String {
        let prompt = build_prompt(content, query);

        for model in &self.models {
            match self.model.chat(model, &prompt).await {
                Ok(analysis) => {
                    debug!(model = %model, "Summarization succeeded");
                    return analysis;
                }
                Err(ModelError::OutOfMemory(msg)) => {
                    warn!(model = %model, error = %msg, "Model out of memory, trying next");
                    continue;
                }
                Err(e) => {
                    warn!(model = %model, error = %e, "Model call failed, using excerpt fallback");
                    break;
                }
            }
        }

        format!(
            "Content summary: {}...",
            truncate_chars(content, FALLBACK_EXCERPT_LEN)
        )
    }
}

fn build_prompt(content: &str, query: &str) -> String {
    format!(
        r#"Analyze this content for the research query: "{query}"

Content: {content}

Provide key insights, facts, and how this relates to the query.
Keep it concise and focused."#,
        query = query,
        content = truncate_chars(content, PROMPT_CONTENT_LEN),
    )
}
