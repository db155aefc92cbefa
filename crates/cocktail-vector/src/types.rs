//! Common types for cocktail-vector.

/// A single search hit borrowed from the index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor<'a, T> {
    /// The indexed item.
    pub item: &'a T,
    /// Position at which the item was inserted (0-based).
    pub position: usize,
    /// Distance to the query (lower is closer).
    pub distance: f32,
    /// Similarity to the query (higher is closer).
    pub score: f32,
}
