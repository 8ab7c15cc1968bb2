// File: src/core/index.rs
use crate::core::taxonomy::Taxonomy;
use crate::core::tokenize::tokenize;
use crate::core::types::Corpus;
use crate::core::vector::ConceptVector;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Weight given to a concept that no verse activates.
const UNSEEN_CONCEPT_WEIGHT: f64 = 1.0;

/// Everything derived from a corpus and a taxonomy: which concepts each verse
/// activates, how rare each concept is, and the TF-IDF vector per verse.
///
/// Built once; never updated in place. A changed corpus means a new index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SemanticIndex {
    total_verses: usize,
    verse_concepts: BTreeMap<String, BTreeSet<String>>,
    document_frequency: BTreeMap<String, usize>,
    idf: BTreeMap<String, f64>,
    /// Only verses with at least one concept have a vector.
    vectors: BTreeMap<String, ConceptVector>,
}

impl SemanticIndex {
    pub fn build(corpus: &Corpus, taxonomy: &Taxonomy) -> Self {
        let mut verse_concepts = BTreeMap::new();
        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();

        for (reference, text) in corpus {
            let concepts = concepts_in_text(text, taxonomy);
            for concept in &concepts {
                *document_frequency.entry(concept.clone()).or_insert(0) += 1;
            }
            verse_concepts.insert(reference.clone(), concepts);
        }

        let total_verses = corpus.len();
        let idf: BTreeMap<String, f64> = document_frequency
            .iter()
            .map(|(concept, &df)| {
                let weight = (total_verses as f64 / (1 + df) as f64).ln();
                (concept.clone(), weight)
            })
            .collect();

        let mut vectors = BTreeMap::new();
        for (reference, concepts) in &verse_concepts {
            if concepts.is_empty() {
                continue;
            }
            // Presence is binary (tf = 1), so each weight is the IDF alone.
            let vector: ConceptVector = concepts
                .iter()
                .map(|c| {
                    let weight = idf.get(c).copied().unwrap_or(UNSEEN_CONCEPT_WEIGHT);
                    (c.clone(), weight)
                })
                .collect();
            vectors.insert(reference.clone(), vector);
        }

        log::info!(
            "Indexed {} verses: {} concepts seen, {} verse vectors",
            total_verses,
            document_frequency.len(),
            vectors.len()
        );

        Self {
            total_verses,
            verse_concepts,
            document_frequency,
            idf,
            vectors,
        }
    }

    pub fn total_verses(&self) -> usize {
        self.total_verses
    }

    pub fn verse_concepts(&self, reference: &str) -> Option<&BTreeSet<String>> {
        self.verse_concepts.get(reference)
    }

    /// All (reference, concept set) pairs in reference order.
    pub fn iter_concepts(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.verse_concepts.iter().map(|(r, c)| (r.as_str(), c))
    }

    pub fn vector(&self, reference: &str) -> Option<&ConceptVector> {
        self.vectors.get(reference)
    }

    /// All (reference, vector) pairs in reference order.
    pub fn iter_vectors(&self) -> impl Iterator<Item = (&str, &ConceptVector)> {
        self.vectors.iter().map(|(r, v)| (r.as_str(), v))
    }

    pub fn indexed_verses(&self) -> usize {
        self.vectors.len()
    }

    pub fn document_frequency(&self, concept: &str) -> usize {
        self.document_frequency.get(concept).copied().unwrap_or(0)
    }

    pub fn idf(&self, concept: &str) -> Option<f64> {
        self.idf.get(concept).copied()
    }

    /// IDF weight used when building query vectors.
    pub fn weight(&self, concept: &str) -> f64 {
        self.idf(concept).unwrap_or(UNSEEN_CONCEPT_WEIGHT)
    }
}

/// Union of the concepts reached by every token of `text` through
/// word -> root -> concept chains.
pub fn concepts_in_text(text: &str, taxonomy: &Taxonomy) -> BTreeSet<String> {
    let words: BTreeSet<String> = tokenize(text).into_iter().collect();
    let mut concepts = BTreeSet::new();
    for word in &words {
        concepts.extend(taxonomy.concepts_for_word(word).into_iter().map(str::to_string));
    }
    concepts
}
