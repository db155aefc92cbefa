//! Mock implementations for testing.
//!
//! Deterministic stand-ins for the embedding model and the LLM so tests run
//! without Ollama or ONNX model downloads.

use async_trait::async_trait;
use cocktail::rag::Embedder;
use cocktail::types::{AppError, Result};
use cocktail::LLMClient;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Words the keyword embedder counts, one dimension each.
pub const VOCABULARY: [&str; 10] = [
    "rum", "gin", "tequila", "mint", "lime", "sugar", "tonic", "glass", "margarita", "mojito",
];

/// Embeds text as occurrence counts of [`VOCABULARY`] words.
///
/// Text with none of the words maps to the zero vector, which is equally
/// distant from every document.
pub struct KeywordEmbedder {
    calls: AtomicUsize,
}

impl KeywordEmbedder {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn embed(text: &str) -> Vec<f32> {
        let lower = text.to_lowercase();
        VOCABULARY
            .iter()
            .map(|word| lower.matches(word).count() as f32)
            .collect()
    }
}

#[async_trait]
impl Embedder for KeywordEmbedder {
    async fn embed_documents(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(texts.iter().map(|t| Self::embed(t)).collect())
    }

    fn model_name(&self) -> &str {
        "keyword-test"
    }
}

/// Embedder that always fails.
pub struct FailingEmbedder;

#[async_trait]
impl Embedder for FailingEmbedder {
    async fn embed_documents(&self, _texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Err(AppError::Embedding("Mock embedding failure".to_string()))
    }

    fn model_name(&self) -> &str {
        "failing-test"
    }
}

/// Mock LLM client with configurable behavior.
///
/// ```ignore
/// let client = MockLLMClient::new("Use a cocktail glass.");
/// let client = MockLLMClient::echo();    // answers with the prompt it got
/// let client = MockLLMClient::failing();
/// ```
#[derive(Clone)]
pub struct MockLLMClient {
    response: String,
    echo: bool,
    should_fail: bool,
}

impl MockLLMClient {
    /// Create a new mock client that returns the given response.
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            echo: false,
            should_fail: false,
        }
    }

    /// Create a mock client that returns the prompt unchanged.
    pub fn echo() -> Self {
        Self {
            response: String::new(),
            echo: true,
            should_fail: false,
        }
    }

    /// Create a mock client that always returns an error.
    pub fn failing() -> Self {
        Self {
            response: String::new(),
            echo: false,
            should_fail: true,
        }
    }
}

#[async_trait]
impl LLMClient for MockLLMClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        if self.should_fail {
            return Err(AppError::LLM("Mock LLM failure".to_string()));
        }
        if self.echo {
            return Ok(prompt.to_string());
        }
        Ok(self.response.clone())
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
