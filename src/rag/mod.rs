//! Retrieval Augmented Generation over the cocktail dataset
//!
//! # Pipeline
//!
//! 1. **Documents** - [`documents`] renders each recipe record as text
//! 2. **Embedding** - [`embeddings`] turns documents and queries into vectors
//! 3. **Index** - [`index`] keeps every document with its vector in memory
//! 4. **Prompt** - [`prompt`] places retrieved documents and the query in a template
//! 5. **Generation** - [`engine`] sends the prompt to the LLM
//!
//! Steps 1-3 run once at startup; 2, 4 and 5 run per query.

pub mod documents;
pub mod embeddings;
pub mod engine;
pub mod index;
/// Prompt template.
pub mod prompt;

pub use documents::{build_documents, load_recipes, render_recipe, DatasetError, Document, RecipeRecord};
pub use embeddings::{create_embedder, Embedder};
pub use engine::QueryEngine;
pub use index::{DocumentIndex, RetrievedDocument, DEFAULT_METRIC, DEFAULT_TOP_K};
pub use prompt::build_prompt;
