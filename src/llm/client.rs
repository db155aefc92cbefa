//! LLM client abstraction and provider selection
//!
//! The query engine only ever talks to an [`LLMClient`]. Production uses
//! [`OllamaClient`](crate::llm::ollama::OllamaClient); tests plug in mocks.

use crate::llm::ollama::OllamaClient;
use crate::types::Result;
use async_trait::async_trait;

/// Generic LLM client trait for provider abstraction
#[async_trait]
pub trait LLMClient: Send + Sync {
    /// Generate a completion from a single user prompt
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Check that the backing server is reachable and serves the model.
    ///
    /// Returns `Ok(false)` when the server answers but does not list the
    /// configured model.
    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }

    /// Get the model name/identifier
    fn model_name(&self) -> &str;
}

/// Provider enum for runtime selection
#[derive(Debug, Clone)]
pub enum Provider {
    /// Ollama server
    ///
    /// # Example
    /// ```rust,ignore
    /// let provider = Provider::Ollama {
    ///     base_url: "http://localhost:11434".to_string(),
    ///     model: "tinyllama".to_string(),
    /// };
    /// ```
    Ollama {
        /// Server URL, e.g. `http://localhost:11434`
        base_url: String,
        /// Model name as listed by `ollama list`
        model: String,
    },
}

impl Provider {
    /// Create an LLM client for this provider
    pub fn create_client(&self) -> Result<Box<dyn LLMClient>> {
        match self {
            Provider::Ollama { base_url, model } => {
                Ok(Box::new(OllamaClient::new(base_url, model.clone())?))
            }
        }
    }

    /// Provider from the `[llm]` configuration section
    pub fn from_config(config: &crate::utils::toml_config::LlmConfig) -> Self {
        Provider::Ollama {
            base_url: config.base_url.clone(),
            model: config.model.clone(),
        }
    }
}
