// File: src/loader.rs
use crate::core::taxonomy::{Taxonomy, TaxonomyTables};
use crate::core::types::{Corpus, RootCatalog};
use crate::error::LoadError;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Reads a `{ "Book C:V": "text" }` verse file.
pub fn load_corpus(path: &Path) -> Result<Corpus, LoadError> {
    let corpus: Corpus = read_json(path)?;
    if corpus.is_empty() {
        return Err(LoadError::EmptyCorpus(path.to_path_buf()));
    }
    Ok(corpus)
}

/// Reads a Strong's catalog keyed by `H####` / `G####`.
pub fn load_catalog(path: &Path) -> Result<RootCatalog, LoadError> {
    read_json(path)
}

/// Reads custom `{ "words": {...}, "concepts": {...} }` tables.
pub fn load_taxonomy(path: &Path) -> Result<Taxonomy, LoadError> {
    let tables: TaxonomyTables = read_json(path)?;
    Ok(Taxonomy::new(tables))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    // Some published KJV dumps start with a byte order mark.
    let contents = raw.strip_prefix('\u{feff}').unwrap_or(&raw);
    serde_json::from_str(contents).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::RootId;

    #[test]
    fn reads_corpus_with_bom() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kjv.json");
        fs::write(&path, "\u{feff}{\"John 3:16\": \"For God so loved the world\"}").unwrap();
        let corpus = load_corpus(&path).unwrap();
        assert_eq!(corpus["John 3:16"], "For God so loved the world");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_corpus(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strongs.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_catalog(&path), Err(LoadError::Parse { .. })));
    }

    #[test]
    fn bad_root_key_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strongs.json");
        fs::write(&path, r#"{"X99": {"def": "?"}}"#).unwrap();
        assert!(matches!(load_catalog(&path), Err(LoadError::Parse { .. })));
    }

    #[test]
    fn catalog_with_merged_spellings_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strongs.json");
        fs::write(
            &path,
            r#"{"H430": {"hebrew": "x", "translit": "elohim", "def": "God", "kjv": "God",
                "transliteration": "elohim", "definition": "God, gods, mighty ones"}}"#,
        )
        .unwrap();
        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog[&RootId::hebrew(430)].gloss, "God, gods, mighty ones");
    }

    #[test]
    fn empty_corpus_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kjv.json");
        fs::write(&path, "{}").unwrap();
        assert!(matches!(load_corpus(&path), Err(LoadError::EmptyCorpus(_))));
    }

    #[test]
    fn taxonomy_file_round_trips_into_reverse_index() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("taxonomy.json");
        fs::write(
            &path,
            r#"{"words": {"Saved": ["H3467"]}, "concepts": {"salvation": ["H3467"]}}"#,
        )
        .unwrap();
        let taxonomy = load_taxonomy(&path).unwrap();
        assert!(taxonomy.roots_for_word("saved").unwrap().contains(&RootId::hebrew(3467)));
        assert!(taxonomy
            .concepts_for_root(&RootId::hebrew(3467))
            .unwrap()
            .contains("salvation"));
    }
}
