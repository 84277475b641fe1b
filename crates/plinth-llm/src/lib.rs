//! Plinth LLM Provider Layer
//!
//! Clients for the two capability interfaces the pipeline consumes: a
//! text-completion service (`prompt -> text`) and a text-embedding service
//! (`text -> vector`). Both are treated as black boxes behind traits.
//!
//! # Providers
//!
//! - `OllamaClient`: local Ollama API integration (implements both traits)
//! - `MockCompletion` / `MockEmbedding`: deterministic mocks for testing
//!
//! # Examples
//!
//! ```
//! use plinth_llm::{CompletionProvider, MockCompletion};
//!
//! # tokio_test::block_on(async {
//! let provider = MockCompletion::new("Hello from LLM!");
//! let result = provider.complete("test prompt").await.unwrap();
//! assert_eq!(result, "Hello from LLM!");
//! # });
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod ollama;

use async_trait::async_trait;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use config::OllamaConfig;
pub use ollama::OllamaClient;

/// Errors that can occur when talking to a completion or embedding service
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Response did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Model not available on the service
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Invalid input for the requested operation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Text-completion capability: one prompt in, generated text out
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Generate a completion for the given prompt
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Text-embedding capability: text in, fixed-dimension vector out
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Compute the embedding vector for the given text
    async fn embed(&self, text: &str) -> Result<Vec<f32>, LlmError>;
}

/// Mock completion provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
///
/// # Examples
///
/// ```
/// use plinth_llm::{CompletionProvider, MockCompletion};
///
/// # tokio_test::block_on(async {
/// let mut provider = MockCompletion::new("default");
/// provider.add_response("prompt1", "response1");
/// assert_eq!(provider.complete("prompt1").await.unwrap(), "response1");
/// assert_eq!(provider.complete("anything else").await.unwrap(), "default");
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct MockCompletion {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, String>>>,
    fail_all: Arc<Mutex<bool>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockCompletion {
    /// Create a mock that returns a fixed response for every prompt
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            fail_all: Arc::new(Mutex::new(false)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), response.into());
    }

    /// Make every subsequent call fail with a communication error
    pub fn fail_with_communication_error(&mut self) {
        *self.fail_all.lock().unwrap() = true;
    }

    /// Number of completion calls made so far
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// Prompts received so far, in call order
    pub fn recorded_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// The last prompt received, if any
    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

impl Default for MockCompletion {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

#[async_trait]
impl CompletionProvider for MockCompletion {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if *self.fail_all.lock().unwrap() {
            return Err(LlmError::Communication("Mock failure".to_string()));
        }

        let responses = self.responses.lock().unwrap();
        if let Some(response) = responses.get(prompt) {
            return Ok(response.clone());
        }

        Ok(self.default_response.clone())
    }
}

/// Mock embedding provider for deterministic testing
///
/// Texts registered with [`MockEmbedding::add_embedding`] return their fixed
/// vector; everything else falls back to a hash-based deterministic
/// embedding of the configured dimension, normalized to unit length so
/// cosine similarity behaves.
#[derive(Debug, Clone)]
pub struct MockEmbedding {
    dimension: usize,
    embeddings: Arc<Mutex<HashMap<String, Vec<f32>>>>,
}

impl MockEmbedding {
    /// Create a mock producing vectors of the given dimension
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            embeddings: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Register a fixed vector for a specific text
    pub fn add_embedding(&mut self, text: impl Into<String>, vector: Vec<f32>) {
        self.embeddings.lock().unwrap().insert(text.into(), vector);
    }

    /// The dimension of vectors this mock produces by default
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Hash text with a seed to get a deterministic f32 value
    fn hash_with_seed(text: &str, seed: u64) -> f32 {
        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        seed.hash(&mut hasher);
        let hash_value = hasher.finish();

        // Map the hash into [-1, 1]
        let normalized = (hash_value as f64 / u64::MAX as f64) * 2.0 - 1.0;
        normalized as f32
    }
}

#[async_trait]
impl EmbeddingProvider for MockEmbedding {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, LlmError> {
        if text.is_empty() {
            return Err(LlmError::InvalidInput(
                "Empty text cannot be embedded".to_string(),
            ));
        }

        if let Some(vector) = self.embeddings.lock().unwrap().get(text) {
            return Ok(vector.clone());
        }

        let mut embedding = Vec::with_capacity(self.dimension);
        for i in 0..self.dimension {
            embedding.push(Self::hash_with_seed(text, i as u64));
        }

        // Normalize to unit length for cosine similarity
        let magnitude: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
        if magnitude > 0.0 {
            for value in &mut embedding {
                *value /= magnitude;
            }
        }

        Ok(embedding)
    }
}
