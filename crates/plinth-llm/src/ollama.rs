//! Ollama client implementation
//!
//! Talks to a local Ollama instance over its HTTP API. The same client
//! serves both capabilities: `/api/generate` for text completion and
//! `/api/embeddings` for vectors.
//!
//! # Features
//!
//! - Async HTTP communication
//! - Configurable endpoint and models
//! - Retry logic with exponential backoff
//! - Timeout handling
//!
//! # Examples
//!
//! ```no_run
//! use plinth_llm::{OllamaClient, OllamaConfig};
//!
//! let client = OllamaClient::new(OllamaConfig::default()).unwrap();
//! // client.complete(...) / client.embed(...) in an async context
//! ```

use crate::config::OllamaConfig;
use crate::{CompletionProvider, EmbeddingProvider, LlmError};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Ollama API client for local completion and embedding
///
/// Cheap to clone; clones share the underlying HTTP connection pool.
#[derive(Clone)]
pub struct OllamaClient {
    config: OllamaConfig,
    client: reqwest::Client,
}

/// Request body shared by the generate and embeddings endpoints
#[derive(Serialize)]
struct OllamaRequest {
    model: String,
    prompt: String,
    stream: bool,
}

/// Response from `/api/generate`
#[derive(Deserialize)]
struct OllamaGenerateResponse {
    response: String,
}

/// Response from `/api/embeddings`
#[derive(Deserialize)]
struct OllamaEmbeddingResponse {
    embedding: Vec<f32>,
}

impl OllamaClient {
    /// Create a new client from an explicit configuration
    ///
    /// # Errors
    ///
    /// Returns `LlmError::InvalidConfig` if the configuration fails
    /// validation or the HTTP client cannot be constructed.
    pub fn new(config: OllamaConfig) -> Result<Self, LlmError> {
        config.validate().map_err(LlmError::InvalidConfig)?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| LlmError::InvalidConfig(format!("HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &OllamaConfig {
        &self.config
    }

    /// POST a request body and deserialize the typed response, retrying
    /// transient failures with exponential backoff
    async fn post_json<R: DeserializeOwned>(
        &self,
        path: &str,
        body: &OllamaRequest,
    ) -> Result<R, LlmError> {
        let url = format!("{}{}", self.config.endpoint, path);

        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.config.max_retries {
            match self.client.post(&url).json(body).send().await {
                Ok(response) => {
                    if response.status().is_success() {
                        // Boundary validation: the response must match the
                        // expected shape or the call fails outright.
                        return response.json::<R>().await.map_err(|e| {
                            LlmError::InvalidResponse(format!("Failed to parse response: {}", e))
                        });
                    } else if response.status() == reqwest::StatusCode::NOT_FOUND {
                        return Err(LlmError::ModelNotAvailable(body.model.clone()));
                    } else {
                        let status = response.status();
                        let error_text = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Unknown error".to_string());
                        last_error = Some(LlmError::Communication(format!(
                            "HTTP {}: {}",
                            status, error_text
                        )));
                    }
                }
                Err(e) => {
                    last_error = Some(LlmError::Communication(format!("Request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.config.max_retries {
                // Exponential backoff: 1s, 2s, 4s, etc.
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                debug!("Retrying {} after {:?} (attempt {})", path, delay, attempts + 1);
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| LlmError::Communication("Max retries exceeded".to_string())))
    }
}

#[async_trait]
impl CompletionProvider for OllamaClient {
    /// Generate text for a prompt via `/api/generate`
    ///
    /// # Errors
    ///
    /// Returns an error if the service is unreachable, the model is not
    /// available, the status is non-2xx after retries, or the response
    /// shape is invalid.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let body = OllamaRequest {
            model: self.config.completion_model.clone(),
            prompt: prompt.to_string(),
            stream: false,
        };

        let response: OllamaGenerateResponse = self.post_json("/api/generate", &body).await?;
        Ok(response.response)
    }
}

#[async_trait]
impl EmbeddingProvider for OllamaClient {
    /// Compute an embedding via `/api/embeddings`
    ///
    /// # Errors
    ///
    /// Same failure modes as [`CompletionProvider::complete`], plus
    /// `InvalidInput` for empty text and `InvalidResponse` when the service
    /// returns an empty vector.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, LlmError> {
        if text.is_empty() {
            return Err(LlmError::InvalidInput(
                "Empty text cannot be embedded".to_string(),
            ));
        }

        let body = OllamaRequest {
            model: self.config.embedding_model.clone(),
            prompt: text.to_string(),
            stream: false,
        };

        let response: OllamaEmbeddingResponse = self.post_json("/api/embeddings", &body).await?;

        if response.embedding.is_empty() {
            return Err(LlmError::InvalidResponse(
                "Service returned an empty embedding".to_string(),
            ));
        }

        Ok(response.embedding)
    }
}
