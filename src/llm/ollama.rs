// Ollama adapter implementation
// Talks to a local Ollama server via its HTTP chat API (non-streaming).
// API Reference: https://github.com/ollama/ollama/blob/main/docs/api.md

use crate::config::OllamaConfig;
use crate::llm::{ChatModel, ModelError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub struct OllamaClient {
    client: Client,
    base_url: String,
}

// Request types for the Ollama chat API
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

// Response types for the Ollama chat API
#[derive(Deserialize)]
struct ChatResponse {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

impl OllamaClient {
    pub fn new(config: &OllamaConfig) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Classify a failed call. Ollama reports model-load OOM conditions in
    /// the error message body, so the message text is the only signal.
    fn classify(status: reqwest::StatusCode, message: String) -> ModelError {
        if message.to_lowercase().contains("memory") {
            ModelError::OutOfMemory(message)
        } else {
            ModelError::Request(format!("HTTP {status}: {message}"))
        }
    }
}

#[async_trait]
impl ChatModel for OllamaClient {
    async fn chat(&self, model: &str, prompt: &str) -> Result<String, ModelError> {
        let url = format!("{}/api/chat", self.base_url);
        let request = ChatRequest {
            model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            stream: false,
        };

        debug!(model, prompt_len = prompt.len(), "Sending chat request to Ollama");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ModelError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(Self::classify(status, message));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| ModelError::InvalidResponse(e.to_string()))?;

        Ok(parsed.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(base_url: &str) -> OllamaConfig {
        OllamaConfig {
            base_url: base_url.to_string(),
            models: vec!["tinyllama".to_string()],
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_classify_memory_errors() {
        let err = OllamaClient::classify(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            "model requires more system Memory than is available".to_string(),
        );
        assert!(matches!(err, ModelError::OutOfMemory(_)));

        let err = OllamaClient::classify(
            reqwest::StatusCode::NOT_FOUND,
            "model 'phi' not found".to_string(),
        );
        assert!(matches!(err, ModelError::Request(_)));
    }

    #[tokio::test]
    async fn test_chat_returns_message_content() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/chat")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message": {"role": "assistant", "content": "insightful"}}"#)
            .create_async()
            .await;

        let client = OllamaClient::new(&test_config(&server.url())).unwrap();
        let reply = client.chat("tinyllama", "hello").await.unwrap();
        assert_eq!(reply, "insightful");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_chat_surfaces_oom_from_error_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/chat")
            .with_status(500)
            .with_body(r#"{"error": "model requires more memory than is available"}"#)
            .create_async()
            .await;

        let client = OllamaClient::new(&test_config(&server.url())).unwrap();
        let err = client.chat("mistral:7b-instruct-q4_0", "hello").await.unwrap_err();
        assert!(matches!(err, ModelError::OutOfMemory(_)));
    }

    #[tokio::test]
    async fn test_chat_maps_other_failures_to_request_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/chat")
            .with_status(404)
            .with_body(r#"{"error": "model 'phi' not found"}"#)
            .create_async()
            .await;

        let client = OllamaClient::new(&test_config(&server.url())).unwrap();
        let err = client.chat("phi", "hello").await.unwrap_err();
        assert!(matches!(err, ModelError::Request(_)));
    }
}
