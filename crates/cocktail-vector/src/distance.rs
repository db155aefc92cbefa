//! Distance metrics for vector similarity.
//!
//! Every metric exposes a *distance* (lower is closer), which is what the
//! index orders by, and a *similarity* (higher is closer) for reporting.

use std::fmt;

/// Distance metric used to rank indexed vectors against a query.
///
/// - **Cosine**: angle between vectors, magnitude ignored. The right choice
///   for sentence embeddings.
/// - **Euclidean**: straight-line (L2) distance.
/// - **DotProduct**: negated inner product, for pre-normalized vectors.
/// - **Manhattan**: sum of absolute differences (L1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DistanceMetric {
    /// Cosine distance, `1 - cos(a, b)`, in `[0, 2]`.
    #[default]
    Cosine,

    /// Euclidean (L2) distance, in `[0, ∞)`.
    Euclidean,

    /// Negated dot product, in `(-∞, ∞)`.
    DotProduct,

    /// Manhattan (L1) distance, in `[0, ∞)`.
    Manhattan,
}

impl DistanceMetric {
    /// Compute the distance between two vectors. Lower means more similar.
    ///
    /// Both slices must have the same length; the index checks this before
    /// calling.
    #[inline]
    pub fn distance(&self, a: &[f32], b: &[f32]) -> f32 {
        debug_assert_eq!(a.len(), b.len(), "Vector dimensions must match");

        match self {
            DistanceMetric::Cosine => 1.0 - cosine_similarity(a, b),
            DistanceMetric::Euclidean => euclidean_distance(a, b),
            DistanceMetric::DotProduct => -dot_product(a, b),
            DistanceMetric::Manhattan => manhattan_distance(a, b),
        }
    }

    /// Compute a similarity score between two vectors. Higher means more similar.
    ///
    /// Distance-based metrics are mapped into `(0, 1]` via `1 / (1 + d)`.
    #[inline]
    pub fn similarity(&self, a: &[f32], b: &[f32]) -> f32 {
        self.distance_to_similarity(self.distance(a, b))
    }

    /// Convert a distance produced by [`DistanceMetric::distance`] into a similarity.
    pub fn distance_to_similarity(&self, distance: f32) -> f32 {
        match self {
            DistanceMetric::Cosine => 1.0 - distance,
            DistanceMetric::DotProduct => -distance,
            DistanceMetric::Euclidean | DistanceMetric::Manhattan => 1.0 / (1.0 + distance),
        }
    }

    /// Get the name of this distance metric.
    pub fn name(&self) -> &'static str {
        match self {
            DistanceMetric::Cosine => "cosine",
            DistanceMetric::Euclidean => "euclidean",
            DistanceMetric::DotProduct => "dot_product",
            DistanceMetric::Manhattan => "manhattan",
        }
    }
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for DistanceMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cosine" | "cos" => Ok(DistanceMetric::Cosine),
            "euclidean" | "l2" => Ok(DistanceMetric::Euclidean),
            "dot" | "dot_product" | "inner" => Ok(DistanceMetric::DotProduct),
            "manhattan" | "l1" => Ok(DistanceMetric::Manhattan),
            _ => Err(format!("Unknown distance metric: {}", s)),
        }
    }
}

/// Cosine similarity in `[-1, 1]`. A zero vector is orthogonal to everything.
#[inline]
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let (dot, norm_a, norm_b) = a
        .iter()
        .zip(b)
        .fold((0.0f32, 0.0f32, 0.0f32), |(dot, na, nb), (x, y)| {
            (dot + x * y, na + x * x, nb + y * y)
        });

    let denom = (norm_a * norm_b).sqrt();
    if denom == 0.0 {
        0.0
    } else {
        dot / denom
    }
}

#[inline]
fn euclidean_distance(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f32>()
        .sqrt()
}

#[inline]
fn dot_product(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

#[inline]
fn manhattan_distance(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_identical_is_zero_distance() {
        let a = [1.0, 2.0, 3.0];
        let dist = DistanceMetric::Cosine.distance(&a, &a);
        assert!(dist.abs() < 0.0001);
    }

    #[test]
    fn test_cosine_ignores_magnitude() {
        let a = [1.0, 1.0, 0.0];
        let b = [10.0, 10.0, 0.0];
        let sim = DistanceMetric::Cosine.similarity(&a, &b);
        assert!((sim - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_cosine_opposite() {
        let a = [1.0, 0.0, 0.0];
        let b = [-1.0, 0.0, 0.0];
        let dist = DistanceMetric::Cosine.distance(&a, &b);
        assert!((dist - 2.0).abs() < 0.0001);
    }

    #[test]
    fn test_cosine_zero_vector() {
        let a = [0.0, 0.0, 0.0];
        let b = [1.0, 0.0, 0.0];
        let dist = DistanceMetric::Cosine.distance(&a, &b);
        assert!((dist - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_euclidean_distance() {
        let a = [0.0, 0.0, 0.0];
        let b = [3.0, 4.0, 0.0];
        let dist = DistanceMetric::Euclidean.distance(&a, &b);
        assert!((dist - 5.0).abs() < 0.0001);
        let sim = DistanceMetric::Euclidean.similarity(&a, &b);
        assert!((sim - 1.0 / 6.0).abs() < 0.0001);
    }

    #[test]
    fn test_manhattan_distance() {
        let a = [0.0, 0.0, 0.0];
        let b = [1.0, -2.0, 3.0];
        let dist = DistanceMetric::Manhattan.distance(&a, &b);
        assert!((dist - 6.0).abs() < 0.0001);
    }

    #[test]
    fn test_dot_product_is_negated_for_distance() {
        let a = [1.0, 2.0, 3.0];
        let b = [4.0, 5.0, 6.0];
        assert!((DistanceMetric::DotProduct.distance(&a, &b) + 32.0).abs() < 0.0001);
        assert!((DistanceMetric::DotProduct.similarity(&a, &b) - 32.0).abs() < 0.0001);
    }

    #[test]
    fn test_metric_from_str() {
        assert_eq!("cosine".parse::<DistanceMetric>().unwrap(), DistanceMetric::Cosine);
        assert_eq!("L2".parse::<DistanceMetric>().unwrap(), DistanceMetric::Euclidean);
        assert_eq!("dot".parse::<DistanceMetric>().unwrap(), DistanceMetric::DotProduct);
        assert_eq!("l1".parse::<DistanceMetric>().unwrap(), DistanceMetric::Manhattan);
        assert!("hamming".parse::<DistanceMetric>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for metric in [
            DistanceMetric::Cosine,
            DistanceMetric::Euclidean,
            DistanceMetric::DotProduct,
            DistanceMetric::Manhattan,
        ] {
            assert_eq!(metric.to_string().parse::<DistanceMetric>().unwrap(), metric);
        }
    }
}
