//! Exact (brute-force) vector index.
//!
//! Every search scans all stored vectors, so results are exact and
//! deterministic: hits are ordered by ascending distance, and equal distances
//! keep insertion order. The index is built once and then only read, so it
//! carries no interior locking; share it behind an `Arc`.

use crate::distance::DistanceMetric;
use crate::error::{Error, Result};
use crate::types::Neighbor;
use tracing::{debug, trace};

struct Entry<T> {
    item: T,
    vector: Vec<f32>,
}

/// Flat index of items and their embedding vectors.
pub struct FlatIndex<T> {
    entries: Vec<Entry<T>>,
    dimensions: usize,
    metric: DistanceMetric,
}

impl<T> FlatIndex<T> {
    /// Create an empty index for vectors of `dimensions` components.
    pub fn new(dimensions: usize, metric: DistanceMetric) -> Result<Self> {
        if dimensions == 0 {
            return Err(Error::InvalidDimensions(dimensions));
        }

        Ok(Self {
            entries: Vec::new(),
            dimensions,
            metric,
        })
    }

    /// Get the vector dimensions.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Get the distance metric.
    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    /// Get the number of items in the index.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the item stored at `position`.
    pub fn get(&self, position: usize) -> Option<&T> {
        self.entries.get(position).map(|e| &e.item)
    }

    /// Iterate over items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|e| &e.item)
    }

    /// Insert an item with its vector. Returns the insertion position.
    pub fn insert(&mut self, item: T, vector: &[f32]) -> Result<usize> {
        self.validate(vector)?;

        let position = self.entries.len();
        self.entries.push(Entry {
            item,
            vector: vector.to_vec(),
        });

        trace!(position, "Inserted vector");
        Ok(position)
    }

    /// Insert many items at once.
    ///
    /// Every vector is validated before anything is stored, so a failure
    /// leaves the index unchanged.
    pub fn insert_batch<I>(&mut self, items: I) -> Result<usize>
    where
        I: IntoIterator<Item = (T, Vec<f32>)>,
    {
        let batch: Vec<(T, Vec<f32>)> = items.into_iter().collect();

        for (offset, (_, vector)) in batch.iter().enumerate() {
            self.validate(vector).map_err(|e| match e {
                Error::InvalidVector(msg) => Error::InvalidVector(format!(
                    "batch entry {}: {}",
                    offset, msg
                )),
                other => other,
            })?;
        }

        let count = batch.len();
        self.entries
            .extend(batch.into_iter().map(|(item, vector)| Entry { item, vector }));

        debug!(count, total = self.entries.len(), "Batch inserted vectors");
        Ok(count)
    }

    /// Return the `limit` nearest items to `query`.
    ///
    /// Ordered by ascending distance; ties keep insertion order. A `limit`
    /// larger than the index returns every item.
    pub fn search(&self, query: &[f32], limit: usize) -> Result<Vec<Neighbor<'_, T>>> {
        self.validate(query)?;

        let mut scored: Vec<(usize, f32)> = self
            .entries
            .iter()
            .enumerate()
            .map(|(position, entry)| (position, self.metric.distance(query, &entry.vector)))
            .collect();

        // Stable sort: equal distances stay in insertion order.
        scored.sort_by(|a, b| a.1.total_cmp(&b.1));
        scored.truncate(limit);

        Ok(scored
            .into_iter()
            .map(|(position, distance)| Neighbor {
                item: &self.entries[position].item,
                position,
                distance,
                score: self.metric.distance_to_similarity(distance),
            })
            .collect())
    }

    fn validate(&self, vector: &[f32]) -> Result<()> {
        if vector.len() != self.dimensions {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions,
                actual: vector.len(),
            });
        }

        if vector.iter().any(|v| !v.is_finite()) {
            return Err(Error::InvalidVector(
                "Vector contains NaN or Inf".to_string(),
            ));
        }

        Ok(())
    }
}

impl<T> std::fmt::Debug for FlatIndex<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatIndex")
            .field("len", &self.entries.len())
            .field("dimensions", &self.dimensions)
            .field("metric", &self.metric)
            .finish()
    }
}
