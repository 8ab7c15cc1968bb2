// File: src/fuzzy/symspell.rs
use std::collections::{BTreeSet, HashMap, HashSet};

/// Index of a term in the list the speller was built from.
pub type TermId = usize;

/// Spelling suggestions based on the Symmetric Delete (SymSpell) algorithm.
/// Every term is stored under all of its delete variants up to the edit
/// distance, so a lookup only has to generate the deletes of the input.
#[derive(Debug, Clone)]
pub struct SymSpell {
    /// Maps a delete variant (e.g., "salvtion") to the terms it could have
    /// come from (e.g., [id_for_salvation]).
    deletes: HashMap<String, HashSet<TermId>>,
    terms: Vec<String>,
    max_edit_distance: usize,
    /// Longest stored term, in chars. Longer inputs are out of reach.
    max_term_len: usize,
}

impl SymSpell {
    pub fn new(max_edit_distance: usize) -> Self {
        Self {
            deletes: HashMap::new(),
            terms: Vec::new(),
            max_edit_distance,
            max_term_len: 0,
        }
    }

    pub fn from_terms<'a>(terms: impl IntoIterator<Item = &'a str>, max_edit_distance: usize) -> Self {
        let mut speller = Self::new(max_edit_distance);
        for term in terms {
            speller.add_term(term);
        }
        speller
    }

    /// Adds a term under every delete variant within the edit distance.
    /// Complexity: O(k^d) variants for a term of length k.
    pub fn add_term(&mut self, term: &str) -> TermId {
        let id = self.terms.len();
        self.terms.push(term.to_string());
        self.max_term_len = self.max_term_len.max(term.chars().count());
        for edit in self.generate_edits(term) {
            self.deletes.entry(edit).or_default().insert(id);
        }
        id
    }

    pub fn term(&self, id: TermId) -> Option<&str> {
        self.terms.get(id).map(String::as_str)
    }

    /// Ids of every term sharing a delete variant with `input`.
    /// Independent of the dictionary size. Inputs more than
    /// `max_edit_distance` chars longer than every term match nothing and
    /// generate no variants.
    pub fn lookup(&self, input: &str) -> HashSet<TermId> {
        let mut candidates = HashSet::new();
        if input.chars().count() > self.max_term_len + self.max_edit_distance {
            return candidates;
        }
        for edit in self.generate_edits(input) {
            if let Some(ids) = self.deletes.get(&edit) {
                candidates.extend(ids.iter().copied());
            }
        }
        candidates
    }

    /// Candidate terms for `input`, sorted.
    pub fn suggestions(&self, input: &str) -> Vec<String> {
        let normalised = input.trim().to_lowercase();
        if normalised.is_empty() {
            return Vec::new();
        }
        self.lookup(&normalised)
            .into_iter()
            .filter_map(|id| self.term(id))
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// All unique variants within max_edit_distance deletes, including the
    /// word itself. Works on chars, so non-ASCII input is safe.
    fn generate_edits(&self, word: &str) -> HashSet<String> {
        let mut edits = HashSet::new();
        edits.insert(word.to_string());

        let mut current_edits = edits.clone();

        for _ in 0..self.max_edit_distance {
            let mut next_edits = HashSet::new();
            for edit in &current_edits {
                for (i, _) in edit.char_indices() {
                    let mut deleted_variant = edit.clone();
                    deleted_variant.remove(i);
                    next_edits.insert(deleted_variant);
                }
            }
            edits.extend(next_edits.iter().cloned());
            current_edits = next_edits;
        }

        edits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speller() -> SymSpell {
        SymSpell::from_terms(["salvation", "sacrifice", "grace", "glory", "love"], 2)
    }

    #[test]
    fn exact_term_is_found() {
        assert_eq!(speller().suggestions("grace"), vec!["grace"]);
    }

    #[test]
    fn dropped_and_swapped_letters_are_found() {
        let speller = speller();
        assert_eq!(speller.suggestions("salvtion"), vec!["salvation"]);
        assert_eq!(speller.suggestions("Sacrfice"), vec!["sacrifice"]);
        assert_eq!(speller.suggestions("grcae"), vec!["grace"]);
    }

    #[test]
    fn distant_input_finds_nothing() {
        assert!(speller().suggestions("xyznonexistent").is_empty());
        assert!(speller().suggestions("   ").is_empty());
    }

    #[test]
    fn overlong_input_is_rejected_before_expansion() {
        let speller = speller();
        assert_eq!(speller.suggestions("salvationxx"), vec!["salvation"]);
        assert!(speller.suggestions("salvationxxx").is_empty());
        assert!(speller.lookup(&"salvation".repeat(1000)).is_empty());
    }

    #[test]
    fn multibyte_input_does_not_panic() {
        assert!(speller().suggestions("ἀγάπη").is_empty());
    }

    #[test]
    fn ids_map_back_to_terms() {
        let mut speller = SymSpell::new(1);
        let id = speller.add_term("mercy");
        assert_eq!(speller.term(id), Some("mercy"));
        assert!(speller.lookup("mery").contains(&id));
    }
}
