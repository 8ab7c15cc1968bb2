// File: src/persistence.rs
use crate::core::index::SemanticIndex;
use crate::core::taxonomy::Taxonomy;
use crate::core::types::Corpus;
use crate::error::PersistError;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Bumped whenever `SemanticIndex` changes shape.
const SNAPSHOT_VERSION: u32 = 1;

/// SHA-256 over everything the index is derived from.
pub type Fingerprint = [u8; 32];

/// What goes on disk: the index plus what it was built from.
#[derive(Serialize, Deserialize)]
struct IndexSnapshot {
    version: u32,
    fingerprint: Fingerprint,
    index: SemanticIndex,
}

/// Fingerprints the corpus and the taxonomy tables. Both are ordered maps,
/// so the digest is stable across runs.
pub fn fingerprint(corpus: &Corpus, taxonomy: &Taxonomy) -> Fingerprint {
    let mut hasher = Sha256::new();
    for (reference, text) in corpus {
        hasher.update(reference.as_bytes());
        hasher.update([0u8]);
        hasher.update(text.as_bytes());
        hasher.update([0u8]);
    }
    let tables = taxonomy.tables();
    for (section, table) in [("words", &tables.words), ("concepts", &tables.concepts)] {
        hasher.update(section.as_bytes());
        for (key, roots) in table {
            hasher.update([1u8]);
            hasher.update(key.as_bytes());
            for root in roots {
                hasher.update([2u8]);
                hasher.update(root.to_string().as_bytes());
            }
        }
    }
    hasher.finalize().into()
}

/// Writes the snapshot through a temp file in the same directory, then
/// renames it over `path`. A crash never leaves a half-written cache.
pub fn save_index(
    index: &SemanticIndex,
    fingerprint: Fingerprint,
    path: &Path,
) -> Result<(), PersistError> {
    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let snapshot = IndexSnapshot {
        version: SNAPSHOT_VERSION,
        fingerprint,
        index: index.clone(),
    };

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, &snapshot)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Loads a snapshot. `Ok(None)` means the file exists but was built from
/// different inputs or by a different snapshot version.
pub fn load_index(path: &Path, expected: &Fingerprint) -> Result<Option<SemanticIndex>, PersistError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let snapshot: IndexSnapshot = bincode::deserialize_from(reader)?;

    if snapshot.version != SNAPSHOT_VERSION || &snapshot.fingerprint != expected {
        return Ok(None);
    }
    Ok(Some(snapshot.index))
}

/// Returns the cached index when it matches the inputs, otherwise builds a
/// fresh one and tries to cache it. Cache problems are logged, never fatal.
pub fn load_or_build(corpus: &Corpus, taxonomy: &Taxonomy, path: &Path) -> SemanticIndex {
    let expected = fingerprint(corpus, taxonomy);

    if path.exists() {
        match load_index(path, &expected) {
            Ok(Some(index)) => {
                log::info!("Loaded semantic index from {}", path.display());
                return index;
            }
            Ok(None) => log::info!("Index cache {} is stale, rebuilding", path.display()),
            Err(e) => log::warn!("Could not read index cache {}: {}", path.display(), e),
        }
    }

    let index = SemanticIndex::build(corpus, taxonomy);
    if let Err(e) = save_index(&index, expected, path) {
        log::warn!("Could not save index cache {}: {}", path.display(), e);
    }
    index
}
