use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A sparse concept -> weight vector. Absent concepts weigh zero.
///
/// Keys are kept sorted so every sum over the vector runs in the same order,
/// which makes `cosine_similarity` exactly symmetric and exactly 1.0 on
/// identical inputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConceptVector {
    weights: BTreeMap<String, f64>,
}

impl ConceptVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, concept: impl Into<String>, weight: f64) {
        self.weights.insert(concept.into(), weight);
    }

    pub fn get(&self, concept: &str) -> Option<f64> {
        self.weights.get(concept).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn concepts(&self) -> impl Iterator<Item = &str> {
        self.weights.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(c, w)| (c.as_str(), *w))
    }

    fn norm_squared(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum()
    }

    pub fn magnitude(&self) -> f64 {
        self.norm_squared().sqrt()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for ConceptVector {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().map(|(c, w)| (c.into(), w)).collect(),
        }
    }
}

/// Cosine similarity of two sparse vectors, in `[0, 1]`.
///
/// The dot product only visits shared concepts; each magnitude covers the
/// vector's own full concept set. Empty vectors, disjoint vectors and
/// zero-magnitude vectors all score 0. IDF weights can be zero or negative
/// for concepts present in nearly every verse, so a negative cosine is
/// floored to 0.
pub fn cosine_similarity(a: &ConceptVector, b: &ConceptVector) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let mut shared = false;
    let mut dot = 0.0;
    for (concept, wa) in &a.weights {
        if let Some(wb) = b.weights.get(concept) {
            shared = true;
            dot += wa * wb;
        }
    }
    if !shared {
        return 0.0;
    }

    // sqrt(|a|^2 * |b|^2) rather than |a| * |b|: for a == b this is exact.
    let denominator = (a.norm_squared() * b.norm_squared()).sqrt();
    if denominator == 0.0 {
        return 0.0;
    }

    (dot / denominator).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(pairs: &[(&str, f64)]) -> ConceptVector {
        pairs.iter().map(|(c, w)| (*c, *w)).collect()
    }

    #[test]
    fn identical_vectors_score_exactly_one() {
        let v = vector(&[("faith", 1.7), ("grace", 0.3), ("love", 2.9)]);
        assert_eq!(cosine_similarity(&v, &v), 1.0);
        let single = vector(&[("mercy", 0.123456789)]);
        assert_eq!(cosine_similarity(&single, &single), 1.0);
    }

    #[test]
    fn disjoint_vectors_score_zero() {
        let a = vector(&[("concept1", 1.0)]);
        let b = vector(&[("concept2", 1.0)]);
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn empty_vector_scores_zero() {
        let empty = ConceptVector::new();
        let b = vector(&[("concept1", 1.0)]);
        assert_eq!(cosine_similarity(&empty, &b), 0.0);
        assert_eq!(cosine_similarity(&b, &empty), 0.0);
        assert_eq!(cosine_similarity(&empty, &empty), 0.0);
    }

    #[test]
    fn zero_magnitude_scores_zero() {
        let zero = vector(&[("faith", 0.0)]);
        let b = vector(&[("faith", 1.0)]);
        assert_eq!(cosine_similarity(&zero, &b), 0.0);
    }

    #[test]
    fn similarity_is_symmetric() {
        let a = vector(&[("concept1", 1.0), ("concept2", 0.5)]);
        let b = vector(&[("concept1", 0.5), ("concept3", 1.0)]);
        assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
    }

    #[test]
    fn magnitudes_use_full_vectors() {
        let a = vector(&[("x", 3.0), ("y", 4.0)]);
        let b = vector(&[("x", 1.0)]);
        // dot = 3, |a| = 5, |b| = 1
        assert!((cosine_similarity(&a, &b) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn similarity_is_bounded() {
        let a = vector(&[("c1", 1.0), ("c2", 2.0), ("c3", 3.0)]);
        let b = vector(&[("c1", 0.5), ("c2", 1.0), ("c3", 1.5)]);
        let sim = cosine_similarity(&a, &b);
        assert!((0.0..=1.0).contains(&sim));
        assert!((sim - 1.0).abs() < 1e-12);
    }

    #[test]
    fn negative_weights_floor_at_zero() {
        let a = vector(&[("common", -0.4), ("rare", 2.0)]);
        let b = vector(&[("common", 1.0)]);
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }
}
