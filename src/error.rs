// File: src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading the corpus, catalog or taxonomy. Any of these
/// leaves the engine without an index, so construction stops.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("verse corpus at {} contains no verses", .0.display())]
    EmptyCorpus(PathBuf),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}. Please ensure it exists.", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("data_dir '{}' is not a valid directory", .0.display())]
    NotADirectory(PathBuf),
}

/// Failures reading or writing a cached index snapshot.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("snapshot encoding failed: {0}")]
    Encode(#[from] bincode::Error),
}
