//! Query pipeline

use crate::llm::LLMClient;
use crate::rag::embeddings::Embedder;
use crate::rag::index::DocumentIndex;
use crate::rag::prompt::build_prompt;
use crate::types::Result;
use std::sync::Arc;
use tracing::debug;

/// Answers one query at a time: embed, retrieve, fill the prompt, generate.
///
/// Holds no per-request state, so a single instance serves every request.
pub struct QueryEngine {
    embedder: Arc<dyn Embedder>,
    index: Arc<DocumentIndex>,
    llm: Arc<dyn LLMClient>,
    top_k: usize,
}

impl QueryEngine {
    /// `embedder` must be the one `index` was built with.
    pub fn new(
        embedder: Arc<dyn Embedder>,
        index: Arc<DocumentIndex>,
        llm: Arc<dyn LLMClient>,
        top_k: usize,
    ) -> Self {
        Self {
            embedder,
            index,
            llm,
            top_k,
        }
    }

    /// Run the full pipeline and return the model's completion as-is.
    pub async fn query(&self, text: &str) -> Result<String> {
        let query_vector = self.embedder.embed_query(text).await?;
        let retrieved = self.index.retrieve(&query_vector, self.top_k)?;

        for hit in &retrieved {
            debug!(
                position = hit.position,
                distance = hit.distance,
                score = hit.score,
                document = hit.document.title(),
                "Retrieved document"
            );
        }

        let context: Vec<&str> = retrieved.iter().map(|hit| hit.document.text()).collect();
        let prompt = build_prompt(&context, text);

        self.llm.generate(&prompt).await
    }

    /// Document index queried for context
    pub fn index(&self) -> &DocumentIndex {
        &self.index
    }

    /// Model answering queries
    pub fn llm(&self) -> &dyn LLMClient {
        self.llm.as_ref()
    }

    /// Embedder for documents and queries
    pub fn embedder(&self) -> &dyn Embedder {
        self.embedder.as_ref()
    }

    /// Documents placed in each prompt
    pub fn top_k(&self) -> usize {
        self.top_k
    }
}
