//! In-memory document index over `cocktail-vector`

use crate::rag::documents::Document;
use crate::rag::embeddings::Embedder;
use crate::types::{AppError, Result};
use cocktail_vector::{DistanceMetric, FlatIndex};
use tracing::{info, instrument};

/// Number of documents placed into each prompt.
pub const DEFAULT_TOP_K: usize = 2;

/// Cosine distance, `1 - cosine similarity`.
pub const DEFAULT_METRIC: DistanceMetric = DistanceMetric::Cosine;

/// A document returned by [`DocumentIndex::retrieve`].
#[derive(Debug, Clone)]
pub struct RetrievedDocument {
    /// The matched recipe document
    pub document: Document,
    /// Insertion position, i.e. the record's index in the dataset
    pub position: usize,
    /// Distance under the index metric; lower is closer
    pub distance: f32,
    /// Similarity derived from `distance`; higher is closer
    pub score: f32,
}

/// Recipe documents and their embeddings, built once and then read-only.
#[derive(Debug)]
pub struct DocumentIndex {
    inner: Option<FlatIndex<Document>>,
}

impl DocumentIndex {
    /// Embed every document in one batch and index them in input order.
    #[instrument(skip_all, fields(documents = documents.len(), model = embedder.model_name()))]
    pub async fn build(
        documents: Vec<Document>,
        embedder: &dyn Embedder,
        metric: DistanceMetric,
    ) -> Result<Self> {
        if documents.is_empty() {
            info!("No documents to index");
            return Ok(Self { inner: None });
        }

        let texts: Vec<String> = documents.iter().map(|d| d.text().to_string()).collect();
        let vectors = embedder.embed_documents(&texts).await?;

        if vectors.len() != documents.len() {
            return Err(AppError::Index(format!(
                "Embedder returned {} vectors for {} documents",
                vectors.len(),
                documents.len()
            )));
        }

        let dimensions = vectors.first().map(Vec::len).unwrap_or_default();
        let mut index = FlatIndex::new(dimensions, metric)?;
        index.insert_batch(documents.into_iter().zip(vectors))?;

        info!(
            documents = index.len(),
            dimensions,
            metric = %metric,
            "Built document index"
        );
        Ok(Self { inner: Some(index) })
    }

    /// The `k` nearest documents, closest first, ties in insertion order.
    pub fn retrieve(&self, query_vector: &[f32], k: usize) -> Result<Vec<RetrievedDocument>> {
        let Some(index) = &self.inner else {
            return Ok(Vec::new());
        };

        let hits = index.search(query_vector, k)?;
        Ok(hits
            .into_iter()
            .map(|hit| RetrievedDocument {
                document: hit.item.clone(),
                position: hit.position,
                distance: hit.distance,
                score: hit.score,
            })
            .collect())
    }

    /// Number of indexed documents
    pub fn len(&self) -> usize {
        self.inner.as_ref().map_or(0, FlatIndex::len)
    }

    /// True when the dataset had no records
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Vector dimensionality, `None` for an empty index.
    pub fn dimensions(&self) -> Option<usize> {
        self.inner.as_ref().map(FlatIndex::dimensions)
    }
}
