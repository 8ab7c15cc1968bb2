// File: src/core/taxonomy.rs
use crate::core::builtin::{CONCEPT_ROOTS, WORD_ROOTS};
use crate::core::types::RootId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// The two hand-curated tables as they appear on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxonomyTables {
    /// English surface word -> roots it may translate.
    #[serde(default)]
    pub words: BTreeMap<String, BTreeSet<RootId>>,
    /// Concept name -> roots considered instances of it.
    #[serde(default)]
    pub concepts: BTreeMap<String, BTreeSet<RootId>>,
}

/// Word -> root -> concept chains, plus the derived root -> concept index.
///
/// Keys are normalised to lowercase on construction. Nothing here changes
/// after `new`, so a `Taxonomy` can be shared between engines.
#[derive(Debug, Clone, Default)]
pub struct Taxonomy {
    tables: TaxonomyTables,
    root_concepts: HashMap<RootId, BTreeSet<String>>,
}

impl Taxonomy {
    pub fn new(tables: TaxonomyTables) -> Self {
        let tables = TaxonomyTables {
            words: lowercase_keys(tables.words),
            concepts: lowercase_keys(tables.concepts),
        };

        let mut root_concepts: HashMap<RootId, BTreeSet<String>> = HashMap::new();
        for (concept, roots) in &tables.concepts {
            for root in roots {
                root_concepts
                    .entry(*root)
                    .or_default()
                    .insert(concept.clone());
            }
        }

        Self {
            tables,
            root_concepts,
        }
    }

    /// The curated Strong's taxonomy shipped with the engine.
    pub fn builtin() -> Self {
        Self::new(TaxonomyTables {
            words: collect_table(WORD_ROOTS),
            concepts: collect_table(CONCEPT_ROOTS),
        })
    }

    pub fn tables(&self) -> &TaxonomyTables {
        &self.tables
    }

    pub fn roots_for_word(&self, word: &str) -> Option<&BTreeSet<RootId>> {
        self.tables.words.get(word)
    }

    pub fn concepts_for_root(&self, root: &RootId) -> Option<&BTreeSet<String>> {
        self.root_concepts.get(root)
    }

    /// Every concept reachable from `word` through its roots.
    pub fn concepts_for_word(&self, word: &str) -> BTreeSet<&str> {
        let mut concepts = BTreeSet::new();
        if let Some(roots) = self.roots_for_word(word) {
            for root in roots {
                if let Some(found) = self.concepts_for_root(root) {
                    concepts.extend(found.iter().map(String::as_str));
                }
            }
        }
        concepts
    }

    pub fn roots_for_concept(&self, concept: &str) -> Option<&BTreeSet<RootId>> {
        self.tables.concepts.get(concept)
    }

    pub fn is_concept(&self, name: &str) -> bool {
        self.tables.concepts.contains_key(name)
    }

    /// Concept names in sorted order.
    pub fn concept_names(&self) -> impl Iterator<Item = &str> {
        self.tables.concepts.keys().map(String::as_str)
    }

    pub fn word_count(&self) -> usize {
        self.tables.words.len()
    }

    pub fn concept_count(&self) -> usize {
        self.tables.concepts.len()
    }
}

fn collect_table(rows: &[(&str, &[RootId])]) -> BTreeMap<String, BTreeSet<RootId>> {
    rows.iter()
        .map(|(key, roots)| (key.to_string(), roots.iter().copied().collect()))
        .collect()
}

fn lowercase_keys(
    table: BTreeMap<String, BTreeSet<RootId>>,
) -> BTreeMap<String, BTreeSet<RootId>> {
    let mut normalised: BTreeMap<String, BTreeSet<RootId>> = BTreeMap::new();
    for (key, roots) in table {
        normalised
            .entry(key.trim().to_lowercase())
            .or_default()
            .extend(roots);
    }
    normalised
}
