//! Text embedding providers
//!
//! Documents and queries must go through the same [`Embedder`] so that their
//! vectors live in the same space.

use crate::types::{AppError, Result};
use crate::utils::toml_config::{CocktailConfig, EmbeddingProvider};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Turns text into fixed-length vectors.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embed a batch of documents, one vector per input, in input order.
    async fn embed_documents(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Embed a single query with the same model as the documents.
    async fn embed_query(&self, text: &str) -> Result<Vec<f32>> {
        self.embed_documents(&[text.to_string()])
            .await?
            .pop()
            .ok_or_else(|| AppError::Embedding("Embedder returned no vector for query".to_string()))
    }

    /// Model identifier, reported by `/health`
    fn model_name(&self) -> &str;
}

/// Build the embedder selected by `[embeddings]`.
pub async fn create_embedder(config: &CocktailConfig) -> Result<Arc<dyn Embedder>> {
    let model = config.embeddings.model_name().to_string();
    match config.embeddings.provider {
        #[cfg(feature = "local-embeddings")]
        EmbeddingProvider::FastEmbed => {
            let embeddings = config.embeddings.clone();
            // Model download and ONNX session setup block
            let embedder = tokio::task::spawn_blocking(move || {
                FastEmbedder::new(
                    &model,
                    embeddings.cache_dir,
                    embeddings.show_download_progress,
                )
            })
            .await
            .map_err(|e| AppError::Internal(format!("Embedding model loader panicked: {}", e)))??;
            Ok(Arc::new(embedder))
        }
        #[cfg(not(feature = "local-embeddings"))]
        EmbeddingProvider::FastEmbed => Err(AppError::Embedding(
            "fastembed provider requires the local-embeddings feature".to_string(),
        )),
        EmbeddingProvider::Ollama => Ok(Arc::new(OllamaEmbedder::new(
            config.embedding_base_url(),
            model,
        ))),
    }
}

// ============= Local ONNX embeddings =============

#[cfg(feature = "local-embeddings")]
pub use local::FastEmbedder;

#[cfg(feature = "local-embeddings")]
mod local {
    use super::*;
    use fastembed::{EmbeddingModel, TextEmbedding, TextInitOptions};
    use parking_lot::Mutex;
    use std::path::PathBuf;
    use tracing::info;

    /// Hugging Face names that fastembed lists under its own ONNX repositories.
    const MODEL_ALIASES: [(&str, EmbeddingModel); 2] = [
        ("sentence-transformers/all-MiniLM-L6-v2", EmbeddingModel::AllMiniLML6V2),
        ("sentence-transformers/all-MiniLM-L12-v2", EmbeddingModel::AllMiniLML12V2),
    ];

    /// fastembed model behind a mutex; `TextEmbedding::embed` needs `&mut self`.
    pub struct FastEmbedder {
        model: Arc<Mutex<TextEmbedding>>,
        model_name: String,
    }

    impl FastEmbedder {
        /// Load a model by its code, e.g. `sentence-transformers/all-MiniLM-L6-v2`.
        ///
        /// Blocks while the model is downloaded on first use.
        pub fn new(
            model_code: &str,
            cache_dir: Option<PathBuf>,
            show_download_progress: bool,
        ) -> Result<Self> {
            let model = resolve_model(model_code)?;

            let mut options =
                TextInitOptions::new(model).with_show_download_progress(show_download_progress);
            if let Some(dir) = cache_dir {
                options = options.with_cache_dir(dir);
            }

            let embedding = TextEmbedding::try_new(options).map_err(|e| {
                AppError::Embedding(format!("Failed to load embedding model {}: {}", model_code, e))
            })?;

            info!(model = model_code, "Loaded local embedding model");
            Ok(Self {
                model: Arc::new(Mutex::new(embedding)),
                model_name: model_code.to_string(),
            })
        }
    }

    fn resolve_model(model_code: &str) -> Result<EmbeddingModel> {
        if let Some((_, model)) = MODEL_ALIASES
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(model_code))
        {
            return Ok(model.clone());
        }

        TextEmbedding::list_supported_models()
            .into_iter()
            .find(|info| info.model_code.eq_ignore_ascii_case(model_code))
            .map(|info| info.model)
            .ok_or_else(|| {
                AppError::Embedding(format!("Unsupported embedding model: {}", model_code))
            })
    }

    #[async_trait]
    impl Embedder for FastEmbedder {
        async fn embed_documents(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
            if texts.is_empty() {
                return Ok(Vec::new());
            }
            let model = Arc::clone(&self.model);
            let texts = texts.to_vec();
            tokio::task::spawn_blocking(move || {
                model
                    .lock()
                    .embed(texts, None)
                    .map_err(|e| AppError::Embedding(e.to_string()))
            })
            .await
            .map_err(|e| AppError::Internal(format!("Embedding task panicked: {}", e)))?
        }

        fn model_name(&self) -> &str {
            &self.model_name
        }
    }

}

// ============= Ollama embeddings =============

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct EmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

/// Embeddings from an Ollama server's `/api/embed` endpoint.
pub struct OllamaEmbedder {
    http: reqwest::Client,
    endpoint: String,
    model: String,
}

impl OllamaEmbedder {
    /// Embedder for `model` on the Ollama server at `base_url`.
    pub fn new(base_url: &str, model: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}/api/embed", base_url.trim_end_matches('/')),
            model,
        }
    }
}

#[async_trait]
impl Embedder for OllamaEmbedder {
    async fn embed_documents(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        debug!(endpoint = %self.endpoint, count = texts.len(), "Requesting embeddings");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&EmbedRequest {
                model: &self.model,
                input: texts,
            })
            .send()
            .await
            .map_err(|e| AppError::Embedding(format!("Ollama embedding request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Embedding(format!(
                "Ollama embedding request returned {}: {}",
                status, body
            )));
        }

        let parsed: EmbedResponse = response
            .json()
            .await
            .map_err(|e| AppError::Embedding(format!("Invalid embedding response: {}", e)))?;

        if parsed.embeddings.len() != texts.len() {
            return Err(AppError::Embedding(format!(
                "Expected {} embeddings, got {}",
                texts.len(),
                parsed.embeddings.len()
            )));
        }

        Ok(parsed.embeddings)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ollama_endpoint_strips_trailing_slash() {
        let embedder = OllamaEmbedder::new("http://localhost:11434/", "all-minilm".to_string());
        assert_eq!(embedder.endpoint, "http://localhost:11434/api/embed");
        assert_eq!(embedder.model_name(), "all-minilm");
    }

    #[tokio::test]
    async fn test_empty_batch_skips_request() {
        // Port 9 is discard; no request is made for an empty batch
        let embedder = OllamaEmbedder::new("http://127.0.0.1:9", "all-minilm".to_string());
        assert!(embedder.embed_documents(&[]).await.unwrap().is_empty());
    }
}
