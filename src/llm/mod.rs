//! LLM abstraction layer
//!
//! A single `ChatModel` trait fronts the summarization backend. The shipped
//! implementation talks to a local Ollama server; tests substitute stubs.

pub mod ollama;
pub mod summarizer;

pub use ollama::OllamaClient;
pub use summarizer::Summarizer;

use async_trait::async_trait;
use thiserror::Error;

/// Failure modes of a model invocation.
///
/// `OutOfMemory` is the one kind the summarizer's fallback chain continues
/// past; every other kind aborts the chain.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model exhausted available memory: {0}")]
    OutOfMemory(String),

    #[error("model request failed: {0}")]
    Request(String),

    #[error("unusable model response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Send a single-turn prompt to the named model and return its text
    /// response.
    async fn chat(&self, model: &str, prompt: &str) -> Result<String, ModelError>;
}
