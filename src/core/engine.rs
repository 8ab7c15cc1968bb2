use crate::config::Config;
use crate::core::index::{concepts_in_text, SemanticIndex};
use crate::core::taxonomy::Taxonomy;
use crate::core::tokenize::tokenize;
use crate::core::types::{
    ConceptGuidance, Connection, Corpus, IndexStats, RootCatalog, RootId, RootStudy, VerseHit,
    WordStudy,
};
use crate::core::vector::{cosine_similarity, ConceptVector};
use crate::error::LoadError;
use crate::fuzzy::symspell::SymSpell;
use crate::loader::{load_catalog, load_corpus, load_taxonomy};
use crate::persistence::load_or_build;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Edit distance for "did you mean" concept suggestions.
const CONCEPT_EDIT_DISTANCE: usize = 2;

/// Score given to a verse for each matching concept in `search_concept`.
const CONCEPT_MATCH_SCORE: f64 = 1.0;

/// The concept similarity engine: a verse corpus, a Strong's catalog, the
/// taxonomy linking them, and the index derived from all three.
///
/// Read-only once built; every query takes `&self`.
pub struct SemanticEngine {
    corpus: Corpus,
    catalog: RootCatalog,
    taxonomy: Taxonomy,
    index: SemanticIndex,
    concept_speller: SymSpell,
}

impl SemanticEngine {
    /// Builds the index from scratch.
    pub fn new(corpus: Corpus, catalog: RootCatalog, taxonomy: Taxonomy) -> Self {
        let index = SemanticIndex::build(&corpus, &taxonomy);
        Self::with_index(corpus, catalog, taxonomy, index)
    }

    /// Wraps an index that was built (or cached) for exactly these inputs.
    pub fn with_index(
        corpus: Corpus,
        catalog: RootCatalog,
        taxonomy: Taxonomy,
        index: SemanticIndex,
    ) -> Self {
        let concept_speller = SymSpell::from_terms(taxonomy.concept_names(), CONCEPT_EDIT_DISTANCE);
        let engine = Self {
            corpus,
            catalog,
            taxonomy,
            index,
            concept_speller,
        };
        let stats = engine.stats();
        log::info!(
            "Loaded {} verses, {} Strong's entries",
            stats.verses,
            stats.catalog_entries
        );
        log::info!(
            "Word->Strong's mappings: {}, concept categories: {}, verse vectors: {}",
            stats.word_mappings,
            stats.concepts,
            stats.indexed_verses
        );
        engine
    }

    /// Loads every input named by `config`, using the index cache when one
    /// is configured.
    pub fn open(config: &Config) -> Result<Self, LoadError> {
        let corpus = load_corpus(&config.corpus_path())?;
        let catalog = load_catalog(&config.catalog_path())?;
        let taxonomy = match config.taxonomy_path() {
            Some(path) => load_taxonomy(&path)?,
            None => Taxonomy::builtin(),
        };
        let index = match config.cache_path() {
            Some(path) => load_or_build(&corpus, &taxonomy, &path),
            None => SemanticIndex::build(&corpus, &taxonomy),
        };
        Ok(Self::with_index(corpus, catalog, taxonomy, index))
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn index(&self) -> &SemanticIndex {
        &self.index
    }

    pub fn verse_text(&self, reference: &str) -> Option<&str> {
        self.corpus.get(reference).map(String::as_str)
    }

    pub fn verse_concepts(&self, reference: &str) -> Option<&BTreeSet<String>> {
        self.index.verse_concepts(reference)
    }

    /// Maps user input onto a corpus key: exact, then case-insensitive,
    /// then the first reference containing the input.
    pub fn resolve_reference(&self, reference: &str) -> Option<&str> {
        if let Some((key, _)) = self.corpus.get_key_value(reference) {
            return Some(key.as_str());
        }
        let wanted = reference.trim().to_lowercase();
        if wanted.is_empty() {
            return None;
        }
        if let Some(key) = self.corpus.keys().find(|key| key.to_lowercase() == wanted) {
            return Some(key.as_str());
        }
        self.corpus
            .keys()
            .find(|key| key.to_lowercase().contains(&wanted))
            .map(String::as_str)
    }

    /// Up to `n` verses ranked by cosine similarity to `reference`, best
    /// first. The verse itself is never included, nor is anything scoring 0.
    pub fn similar_verses(&self, reference: &str, n: usize) -> Vec<(String, f64)> {
        if n == 0 {
            return Vec::new();
        }
        let Some(resolved) = self.resolve_reference(reference) else {
            log::warn!("Reference not found: {}", reference);
            return Vec::new();
        };
        let Some(query) = self.index.vector(resolved) else {
            log::debug!("{} activates no concepts", resolved);
            return Vec::new();
        };
        log::debug!("Similar verses for {} (resolved from '{}')", resolved, reference);

        let scores = self
            .index
            .iter_vectors()
            .filter(|(other, _)| *other != resolved)
            .map(|(other, vector)| (other, cosine_similarity(query, vector)));
        top_n(scores, n)
            .into_iter()
            .map(|(r, score)| (r.to_string(), score))
            .collect()
    }

    /// Case-insensitive exact name, else the first concept containing the
    /// input. Blank input resolves to nothing.
    pub fn resolve_concept(&self, name: &str) -> Option<&str> {
        let wanted = name.trim().to_lowercase();
        if wanted.is_empty() {
            return None;
        }
        let mut names = self.taxonomy.concept_names();
        if self.taxonomy.is_concept(&wanted) {
            return names.find(|c| *c == wanted);
        }
        names.find(|c| c.contains(&wanted))
    }

    /// Verses activating the concept named by `name`, in reference order.
    ///
    /// A verse activates a concept at most once, so every hit carries the
    /// same score. Empty when the name resolves to nothing; see
    /// `concept_guidance`.
    pub fn search_concept(&self, name: &str, n: usize) -> Vec<VerseHit> {
        let Some(concept) = self.resolve_concept(name) else {
            log::debug!("Concept not found: {}", name);
            return Vec::new();
        };

        let mut hits: Vec<VerseHit> = self
            .index
            .iter_concepts()
            .filter(|(_, concepts)| concepts.contains(concept))
            .map(|(reference, concepts)| {
                let matches = concepts.iter().filter(|c| c.as_str() == concept).count();
                self.hit(reference, matches as f64 * CONCEPT_MATCH_SCORE)
            })
            .collect();
        hits.sort_by(rank_hits);
        hits.truncate(n);
        hits
    }

    /// Close spellings of an unknown concept name plus the full concept list.
    pub fn concept_guidance(&self, name: &str) -> ConceptGuidance {
        ConceptGuidance {
            suggestions: self.concept_speller.suggestions(name),
            available: self.concept_names(),
        }
    }

    /// Concepts named or implied by the words of `query`.
    pub fn query_concepts(&self, query: &str) -> BTreeSet<String> {
        let mut concepts = concepts_in_text(query, &self.taxonomy);
        for word in tokenize(query) {
            if self.taxonomy.is_concept(&word) {
                concepts.insert(word);
            }
        }
        concepts
    }

    /// Up to `n` verses ranked by similarity to the concepts in `query`.
    /// Empty when the query names no known concept.
    pub fn search_meaning(&self, query: &str, n: usize) -> Vec<VerseHit> {
        let concepts = self.query_concepts(query);
        if concepts.is_empty() {
            log::debug!("No semantic concepts found for: {}", query);
            return Vec::new();
        }
        log::debug!("Searching concepts: {:?}", concepts);

        let query_vector: ConceptVector = concepts
            .iter()
            .map(|c| (c.as_str(), self.index.weight(c)))
            .collect();

        let scores = self
            .index
            .iter_vectors()
            .map(|(reference, vector)| (reference, cosine_similarity(&query_vector, vector)));
        top_n(scores, n)
            .into_iter()
            .map(|(reference, score)| self.hit(reference, score))
            .collect()
    }

    /// Shared concepts and similarity of two verses; `None` when they share
    /// nothing.
    pub fn explain_connection(&self, ref1: &str, ref2: &str) -> Option<Connection> {
        let first = self.resolve_reference(ref1)?;
        let second = self.resolve_reference(ref2)?;
        let concepts1 = self.index.verse_concepts(first)?;
        let concepts2 = self.index.verse_concepts(second)?;

        let shared: Vec<String> = concepts1.intersection(concepts2).cloned().collect();
        if shared.is_empty() {
            return None;
        }

        let empty = ConceptVector::new();
        let similarity = cosine_similarity(
            self.index.vector(first).unwrap_or(&empty),
            self.index.vector(second).unwrap_or(&empty),
        );
        Some(Connection {
            ref1: first.to_string(),
            ref2: second.to_string(),
            shared_concepts: shared,
            similarity,
        })
    }

    pub fn concept_names(&self) -> Vec<String> {
        self.taxonomy.concept_names().map(str::to_string).collect()
    }

    /// The roots behind an English word, with their catalog records, and the
    /// concepts they activate. `None` for words outside the taxonomy.
    pub fn word_study(&self, word: &str) -> Option<WordStudy> {
        let word = word.trim().to_lowercase();
        let roots = self.taxonomy.roots_for_word(&word)?;
        let concepts = self
            .taxonomy
            .concepts_for_word(&word)
            .into_iter()
            .map(str::to_string)
            .collect();
        Some(WordStudy {
            roots: self.study_roots(roots),
            concepts,
            word,
        })
    }

    /// Roots grouped under a concept (resolved like `search_concept`).
    pub fn concept_roots(&self, name: &str) -> Option<Vec<RootStudy>> {
        let concept = self.resolve_concept(name)?;
        let roots = self.taxonomy.roots_for_concept(concept)?;
        Some(self.study_roots(roots))
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            verses: self.corpus.len(),
            indexed_verses: self.index.indexed_verses(),
            word_mappings: self.taxonomy.word_count(),
            concepts: self.taxonomy.concept_count(),
            catalog_entries: self.catalog.len(),
        }
    }

    fn study_roots(&self, roots: &BTreeSet<RootId>) -> Vec<RootStudy> {
        roots
            .iter()
            .map(|id| RootStudy {
                id: *id,
                entry: self.catalog.get(id).cloned(),
            })
            .collect()
    }

    fn hit(&self, reference: &str, score: f64) -> VerseHit {
        VerseHit {
            reference: reference.to_string(),
            text: self.verse_text(reference).unwrap_or_default().to_string(),
            score,
        }
    }
}

/// Highest scores first, ties by reference; scores of 0 are dropped.
fn top_n<'a>(scores: impl Iterator<Item = (&'a str, f64)>, n: usize) -> Vec<(&'a str, f64)> {
    let mut ranked: Vec<(&str, f64)> = scores.filter(|(_, score)| *score > 0.0).collect();
    ranked.sort_by(|a, b| by_score_then_reference(a.1, a.0, b.1, b.0));
    ranked.truncate(n);
    ranked
}

fn rank_hits(a: &VerseHit, b: &VerseHit) -> Ordering {
    by_score_then_reference(a.score, &a.reference, b.score, &b.reference)
}

fn by_score_then_reference(score_a: f64, ref_a: &str, score_b: f64, ref_b: &str) -> Ordering {
    score_b
        .partial_cmp(&score_a)
        .unwrap_or(Ordering::Equal)
        .then_with(|| ref_a.cmp(ref_b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::taxonomy::TaxonomyTables;
    use crate::core::types::RootEntry;

    fn engine(verses: &[(&str, &str)]) -> SemanticEngine {
        let corpus = verses
            .iter()
            .map(|(r, t)| (r.to_string(), t.to_string()))
            .collect();
        let mut catalog = RootCatalog::new();
        catalog.insert(
            RootId::greek(4991),
            RootEntry {
                script_form: "σωτηρία".into(),
                transliteration: "soteria".into(),
                gloss: "salvation, deliverance".into(),
                usage_notes: "salvation, deliver, health".into(),
                frequency: 45,
            },
        );
        SemanticEngine::new(corpus, catalog, Taxonomy::builtin())
    }

    fn sample() -> SemanticEngine {
        engine(&[
            ("John 3:16", "For God so loved the world, that he gave his only begotten Son, that whosoever believeth in him should not perish, but have everlasting life."),
            ("John 3:17", "For God sent not his Son into the world to condemn the world; but that the world through him might be saved."),
            ("Romans 5:8", "But God commendeth his love toward us, in that, while we were yet sinners, Christ died for us."),
            ("Ephesians 2:8", "For by grace are ye saved through faith; and that not of yourselves: it is the gift of God:"),
            ("Genesis 1:1", "In the beginning God created the heaven and the earth."),
            ("Psalm 23:1", "The LORD is my shepherd; I shall not want."),
            ("Acts 4:12", "Neither is there salvation in any other."),
            ("Numbers 1:1", "And it came to pass on the first of the month."),
        ])
    }

    #[test]
    fn similar_verses_excludes_query_and_respects_limit() {
        let engine = sample();
        for n in 1..6 {
            let results = engine.similar_verses("John 3:16", n);
            assert!(results.len() <= n);
            assert!(results.iter().all(|(r, _)| r != "John 3:16"));
        }
    }

    #[test]
    fn similar_verses_sorted_descending_with_positive_scores() {
        let results = sample().similar_verses("John 3:16", 10);
        assert!(!results.is_empty());
        for pair in results.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
        assert!(results.iter().all(|(_, s)| *s > 0.0 && *s <= 1.0));
    }

    #[test]
    fn similar_verses_unknown_reference_is_empty() {
        let engine = sample();
        assert!(engine.similar_verses("Invalid 99:99", 5).is_empty());
        assert!(engine.similar_verses("John 3:16", 0).is_empty());
    }

    #[test]
    fn verse_without_concepts_has_no_neighbours() {
        assert!(sample().similar_verses("Numbers 1:1", 5).is_empty());
    }

    #[test]
    fn equal_scores_rank_by_reference() {
        let engine = engine(&[
            ("Zechariah 9:9", "Neither is there salvation in any other."),
            ("Acts 4:12", "Neither is there salvation in any other."),
            ("Genesis 1:1", "In the beginning God created the heaven and the earth."),
            ("Numbers 1:1", "And it came to pass on the first of the month."),
        ]);
        let hits = engine.search_meaning("salvation", 5);
        let refs: Vec<&str> = hits.iter().map(|h| h.reference.as_str()).collect();
        assert_eq!(refs, ["Acts 4:12", "Zechariah 9:9"]);
        assert_eq!(hits[0].score, hits[1].score);

        let similar = engine.similar_verses("Zechariah 9:9", 5);
        assert_eq!(similar, vec![("Acts 4:12".to_string(), 1.0)]);
    }

    #[test]
    fn top_n_breaks_ties_regardless_of_input_order() {
        let scores = [("Romans 8:1", 0.5), ("John 1:1", 0.5), ("Acts 2:1", 0.9), ("Jude 1:1", 0.0)];
        let ranked = top_n(scores.into_iter(), 3);
        assert_eq!(ranked, vec![("Acts 2:1", 0.9), ("John 1:1", 0.5), ("Romans 8:1", 0.5)]);
    }

    #[test]
    fn reference_resolution_falls_back_in_order() {
        let engine = sample();
        assert_eq!(engine.resolve_reference("John 3:16"), Some("John 3:16"));
        assert_eq!(engine.resolve_reference("john 3:17"), Some("John 3:17"));
        assert_eq!(engine.resolve_reference("romans"), Some("Romans 5:8"));
        assert_eq!(engine.resolve_reference("john"), Some("John 3:16"));
        assert_eq!(engine.resolve_reference("Jude 1:1"), None);
        assert_eq!(engine.resolve_reference("  "), None);
    }

    #[test]
    fn search_concept_resolves_partial_names() {
        let engine = sample();
        assert_eq!(engine.resolve_concept("SALVATION"), Some("salvation"));
        assert_eq!(engine.resolve_concept("salv"), Some("salvation"));
        assert_eq!(engine.resolve_concept("xyznonexistent"), None);
        assert_eq!(engine.resolve_concept(""), None);
    }

    #[test]
    fn search_concept_scores_are_constant_and_ordered_by_reference() {
        let hits = sample().search_concept("salvation", 20);
        let refs: Vec<&str> = hits.iter().map(|h| h.reference.as_str()).collect();
        assert_eq!(refs, vec!["Acts 4:12", "Ephesians 2:8", "John 3:17"]);
        assert!(hits.iter().all(|h| h.score == CONCEPT_MATCH_SCORE));
        assert_eq!(sample().search_concept("salvation", 2).len(), 2);
    }

    #[test]
    fn unknown_concept_is_empty_with_guidance() {
        let engine = sample();
        assert!(engine.search_concept("xyznonexistent", 5).is_empty());
        let guidance = engine.concept_guidance("salvtion");
        assert_eq!(guidance.suggestions, vec!["salvation"]);
        assert_eq!(guidance.available.len(), 87);
        assert!(guidance.available.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn search_meaning_finds_concepts_from_words_and_names() {
        let engine = sample();
        let concepts = engine.query_concepts("God's love and redemption");
        assert!(concepts.contains("divinity"));
        assert!(concepts.contains("love"));
        // "redemption" is both a mapped word and a concept name.
        assert!(concepts.contains("redemption"));

        let hits = engine.search_meaning("God's love for sinners", 3);
        assert!(!hits.is_empty() && hits.len() <= 3);
        assert_eq!(hits[0].reference, "Romans 5:8");
        assert!(!hits[0].text.is_empty());
    }

    #[test]
    fn search_meaning_without_vocabulary_is_empty() {
        assert!(sample().search_meaning("purple bicycle seventeen", 10).is_empty());
    }

    #[test]
    fn explain_connection_reports_shared_concepts() {
        let engine = sample();
        let connection = engine.explain_connection("John 3:16", "John 3:17").unwrap();
        assert_eq!(connection.ref1, "John 3:16");
        assert_eq!(connection.ref2, "John 3:17");
        assert!(connection.shared_concepts.contains(&"divinity".to_string()));
        assert!(connection.similarity > 0.0);
        assert!(engine.explain_connection("John 3:16", "Numbers 1:1").is_none());
        assert!(engine.explain_connection("John 3:16", "Jude 1:1").is_none());
    }

    #[test]
    fn word_study_joins_catalog_records() {
        let engine = sample();
        let study = engine.word_study("Salvation").unwrap();
        assert_eq!(study.word, "salvation");
        let soteria = study
            .roots
            .iter()
            .find(|r| r.id == RootId::greek(4991))
            .unwrap();
        assert_eq!(soteria.entry.as_ref().unwrap().transliteration, "soteria");
        assert!(study.roots.iter().any(|r| r.entry.is_none()));
        assert!(study.concepts.contains(&"salvation".to_string()));
        assert!(engine.word_study("bicycle").is_none());
    }

    #[test]
    fn concept_roots_lists_members() {
        let roots = sample().concept_roots("salvation").unwrap();
        assert!(roots.iter().any(|r| r.id == RootId::greek(4991)));
        assert!(sample().concept_roots("xyznonexistent").is_none());
    }

    #[test]
    fn custom_taxonomy_keeps_engines_independent() {
        let mut tables = TaxonomyTables::default();
        tables
            .words
            .insert("shepherd".into(), [RootId::hebrew(7462)].into_iter().collect());
        tables
            .concepts
            .insert("pastoral".into(), [RootId::hebrew(7462)].into_iter().collect());
        let corpus: Corpus = [("Psalm 23:1".to_string(), "The LORD is my shepherd".to_string())]
            .into_iter()
            .collect();
        let custom = SemanticEngine::new(corpus, RootCatalog::new(), Taxonomy::new(tables));
        let builtin = sample();

        assert_eq!(custom.concept_names(), vec!["pastoral"]);
        assert!(builtin.resolve_concept("pastoral").is_none());
        assert_eq!(custom.search_concept("pastoral", 5).len(), 1);
    }

    #[test]
    fn stats_count_inputs() {
        let stats = sample().stats();
        assert_eq!(stats.verses, 8);
        assert_eq!(stats.indexed_verses, 7);
        assert_eq!(stats.concepts, 87);
        assert_eq!(stats.catalog_entries, 1);
    }
}
