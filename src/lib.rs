//! # Cocktail QA server
//!
//! Answers natural-language questions about a fixed cocktail recipe dataset.
//! Recipes are rendered as text, embedded and kept in an exact in-memory
//! index; each question retrieves the closest recipes and hands them to a
//! language model served by Ollama.
//!
//! ## Overview
//!
//! The crate is used two ways:
//!
//! 1. **As a server** - run the `cocktail-server` binary
//! 2. **As a library** - build an [`AppState`] and mount [`api::routes::create_router`]
//!
//! ### Library Example
//!
//! ```rust,ignore
//! use cocktail::{AppState, CocktailConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CocktailConfig::load_or_default("cocktail.toml", false)?;
//!     let state = AppState::initialize(&config).await?;
//!
//!     let answer = state.engine.query("Which cocktails use gin?").await?;
//!     println!("{}", answer);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `local-embeddings` | fastembed ONNX embeddings (default) |
//!
//! ## Modules
//!
//! - [`api`] - REST API handlers and routes
//! - [`cli`] - Command-line arguments and terminal output
//! - [`llm`] - LLM client implementations
//! - [`rag`] - Documents, embeddings, index and query engine
//! - [`types`] - Request/response types and error handling
//! - [`utils`] - Configuration and logging

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// HTTP API handlers and routes.
pub mod api;
/// Command-line interface and colored output.
pub mod cli;
/// LLM provider clients and abstractions.
pub mod llm;
/// Retrieval Augmented Generation (RAG) components.
pub mod rag;
/// Core types (requests, responses, errors).
pub mod types;
/// Configuration and logging utilities.
pub mod utils;

// Re-export commonly used types
pub use llm::{LLMClient, Provider};
pub use rag::{DatasetError, DocumentIndex, Embedder, QueryEngine};
pub use types::{AppError, Result};
pub use utils::toml_config::{CocktailConfig, ConfigError};

use crate::rag::{build_documents, create_embedder, load_recipes, DEFAULT_METRIC, DEFAULT_TOP_K};
use std::sync::Arc;
use tracing::{info, warn};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Embedder, document index and LLM client behind one query pipeline
    pub engine: Arc<QueryEngine>,
}

/// Reasons the server cannot reach the ready state.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// The dataset file is missing, malformed or incomplete
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    /// The embedding model could not be loaded
    #[error("Failed to initialize embeddings: {0}")]
    Embedding(AppError),

    /// Embedding the documents or filling the index failed
    #[error("Failed to build document index: {0}")]
    Index(AppError),

    /// The Ollama server could not be reached
    #[error("Language model unavailable: {0}")]
    ModelUnavailable(AppError),
}

impl AppState {
    /// Wrap an already assembled query engine.
    pub fn new(engine: QueryEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Load the dataset, build the index and connect to the model.
    ///
    /// Nothing is served until this succeeds; the returned state is
    /// read-only for the rest of the process.
    pub async fn initialize(config: &CocktailConfig) -> std::result::Result<Self, StartupError> {
        let recipes = load_recipes(&config.dataset.path)?;
        let documents = build_documents(&recipes)?;
        info!(documents = documents.len(), "Rendered recipe documents");

        let llm: Arc<dyn LLMClient> = Arc::from(
            Provider::from_config(&config.llm)
                .create_client()
                .map_err(StartupError::ModelUnavailable)?,
        );
        if !llm
            .health_check()
            .await
            .map_err(StartupError::ModelUnavailable)?
        {
            warn!(
                model = llm.model_name(),
                "Model not found on the server; requests will fail until it is pulled"
            );
        }
        info!(model = llm.model_name(), base_url = %config.llm.base_url, "Connected to language model");

        let embedder = create_embedder(config)
            .await
            .map_err(StartupError::Embedding)?;

        let index = DocumentIndex::build(documents, embedder.as_ref(), DEFAULT_METRIC)
            .await
            .map_err(StartupError::Index)?;

        let engine = QueryEngine::new(embedder, Arc::new(index), llm, DEFAULT_TOP_K);
        Ok(Self::new(engine))
    }
}
