// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Verse reference ("John 3:16") to verse text, ordered by reference.
pub type Corpus = BTreeMap<String, String>;

/// Strong's root catalog keyed by root identifier.
pub type RootCatalog = BTreeMap<RootId, RootEntry>;

/// The origin language of a Strong's root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Lexicon {
    Hebrew,
    Greek,
}

impl Lexicon {
    fn tag(self) -> char {
        match self {
            Lexicon::Hebrew => 'H',
            Lexicon::Greek => 'G',
        }
    }
}

/// A tagged Strong's number such as `H430` or `G2316`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RootId {
    pub lexicon: Lexicon,
    pub number: u32,
}

impl RootId {
    pub const fn hebrew(number: u32) -> Self {
        Self { lexicon: Lexicon::Hebrew, number }
    }

    pub const fn greek(number: u32) -> Self {
        Self { lexicon: Lexicon::Greek, number }
    }
}

impl fmt::Display for RootId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.lexicon.tag(), self.number)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid Strong's number '{0}': expected H or G followed by digits")]
pub struct ParseRootIdError(String);

impl FromStr for RootId {
    type Err = ParseRootIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let lexicon = match chars.next() {
            Some('H') | Some('h') => Lexicon::Hebrew,
            Some('G') | Some('g') => Lexicon::Greek,
            _ => return Err(ParseRootIdError(s.to_string())),
        };
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseRootIdError(s.to_string()));
        }
        let number = digits
            .parse::<u32>()
            .map_err(|_| ParseRootIdError(s.to_string()))?;
        Ok(Self { lexicon, number })
    }
}

impl TryFrom<String> for RootId {
    type Error = ParseRootIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RootId> for String {
    fn from(id: RootId) -> Self {
        id.to_string()
    }
}

/// One Strong's catalog record.
///
/// Catalog files in the wild spell these keys several ways (`def` vs
/// `definition`, `translit` vs `transliteration`, `hebrew`/`greek` for the
/// script form), and merged files often carry two spellings side by side.
/// All of them land in the same canonical field; see `RawRootEntry`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawRootEntry")]
pub struct RootEntry {
    pub script_form: String,
    pub transliteration: String,
    pub gloss: String,
    pub usage_notes: String,
    pub frequency: u64,
}

/// A catalog record as written on disk, one slot per key spelling.
#[derive(Deserialize, Default)]
#[serde(default)]
struct RawRootEntry {
    script_form: Option<String>,
    hebrew: Option<String>,
    greek: Option<String>,
    lemma: Option<String>,
    transliteration: Option<String>,
    translit: Option<String>,
    xlit: Option<String>,
    gloss: Option<String>,
    definition: Option<String>,
    def: Option<String>,
    usage_notes: Option<String>,
    kjv: Option<String>,
    kjv_def: Option<String>,
    usage: Option<String>,
    frequency: Option<u64>,
    occurrences: Option<u64>,
    occur: Option<u64>,
}

/// The longest candidate wins; on equal length the earlier spelling does.
fn longest(candidates: [Option<String>; 4]) -> String {
    let mut best = String::new();
    for value in candidates.into_iter().flatten() {
        if value.chars().count() > best.chars().count() {
            best = value;
        }
    }
    best
}

impl From<RawRootEntry> for RootEntry {
    fn from(raw: RawRootEntry) -> Self {
        Self {
            script_form: longest([raw.script_form, raw.hebrew, raw.greek, raw.lemma]),
            transliteration: longest([raw.transliteration, raw.translit, raw.xlit, None]),
            gloss: longest([raw.gloss, raw.definition, raw.def, None]),
            usage_notes: longest([raw.usage_notes, raw.kjv, raw.kjv_def, raw.usage]),
            frequency: [raw.frequency, raw.occurrences, raw.occur]
                .into_iter()
                .flatten()
                .max()
                .unwrap_or(0),
        }
    }
}

/// A ranked verse with its text, as returned by concept and meaning search.
#[derive(Debug, Clone, PartialEq)]
pub struct VerseHit {
    pub reference: String,
    pub text: String,
    pub score: f64,
}

/// Why two verses are related: the concepts they share and their cosine score.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub ref1: String,
    pub ref2: String,
    pub shared_concepts: Vec<String>,
    pub similarity: f64,
}

/// A root together with its catalog record, when the catalog has one.
#[derive(Debug, Clone, PartialEq)]
pub struct RootStudy {
    pub id: RootId,
    pub entry: Option<RootEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WordStudy {
    pub word: String,
    pub roots: Vec<RootStudy>,
    pub concepts: Vec<String>,
}

/// Returned when a concept name resolves to nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct ConceptGuidance {
    /// Concepts within a small edit distance of the input.
    pub suggestions: Vec<String>,
    /// Every concept name, sorted.
    pub available: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    pub verses: usize,
    pub indexed_verses: usize,
    pub word_mappings: usize,
    pub concepts: usize,
    pub catalog_entries: usize,
}
