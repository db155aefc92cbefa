//! # cocktail-vector
//!
//! A small, exact in-memory vector index used by the cocktail server to
//! retrieve recipe documents by embedding distance.
//!
//! ## Features
//!
//! - **Exact search**: every query scans all vectors, no approximation
//! - **Deterministic ordering**: ascending distance, ties keep insertion order
//! - **Multiple Distance Metrics**: Cosine, Euclidean (L2), Dot Product, Manhattan (L1)
//! - **Generic payload**: store any item type alongside its vector
//!
//! ## Quick Start
//!
//! ```rust
//! use cocktail_vector::{DistanceMetric, FlatIndex};
//!
//! let mut index = FlatIndex::new(3, DistanceMetric::Cosine)?;
//! index.insert("margarita", &[1.0, 0.0, 0.0])?;
//! index.insert("mojito", &[0.0, 1.0, 0.0])?;
//!
//! let hits = index.search(&[0.9, 0.1, 0.0], 1)?;
//! assert_eq!(*hits[0].item, "margarita");
//! # Ok::<(), cocktail_vector::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod distance;
pub mod error;
pub mod index;
pub mod types;

pub use distance::DistanceMetric;
pub use error::{Error, Result};
pub use index::FlatIndex;
pub use types::Neighbor;
