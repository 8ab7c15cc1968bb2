use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "logos.toml";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub data_dir: PathBuf,
    pub corpus_file: PathBuf,
    pub catalog_file: PathBuf,
    /// Custom word/concept tables; the built-in taxonomy when unset.
    pub taxonomy_file: Option<PathBuf>,
    /// Index snapshot location; caching is off when unset.
    pub cache_file: Option<PathBuf>,
    pub default_results: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            corpus_file: PathBuf::from("kjv.json"),
            catalog_file: PathBuf::from("strongs.json"),
            taxonomy_file: None,
            cache_file: None,
            default_results: 10,
        }
    }
}

impl Config {
    pub fn corpus_path(&self) -> PathBuf {
        self.data_dir.join(&self.corpus_file)
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.data_dir.join(&self.catalog_file)
    }

    pub fn taxonomy_path(&self) -> Option<PathBuf> {
        self.taxonomy_file.as_ref().map(|f| self.data_dir.join(f))
    }

    pub fn cache_path(&self) -> Option<PathBuf> {
        self.cache_file.as_ref().map(|f| self.data_dir.join(f))
    }
}

pub fn parse_config(contents: &str, origin: &Path) -> Result<Config, ConfigError> {
    toml::from_str::<Config>(contents).map_err(|source| ConfigError::Parse {
        path: origin.to_path_buf(),
        source,
    })
}

/// Reads and validates a config file. The configured `data_dir` must exist.
pub fn load_config_from_file(file_path: &Path) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(file_path).map_err(|source| ConfigError::Io {
        path: file_path.to_path_buf(),
        source,
    })?;
    let loaded_config = parse_config(&contents, file_path)?;
    if loaded_config.data_dir.is_dir() {
        Ok(loaded_config)
    } else {
        Err(ConfigError::NotADirectory(loaded_config.data_dir))
    }
}

/// An explicit path must load; otherwise `logos.toml` is used if present,
/// and defaults if not.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    match explicit {
        Some(path) => load_config_from_file(path),
        None => {
            let fallback = Path::new(DEFAULT_CONFIG_FILE);
            if fallback.exists() {
                load_config_from_file(fallback)
            } else {
                log::debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                Ok(Config::default())
            }
        }
    }
}
