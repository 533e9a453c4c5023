use std::{fs::File, io::BufReader, path::Path};

use serde::Deserialize;

use crate::{
    error::{Error, Result},
    normalizer::Normalizer,
    tokenizer::{StopwordSet, Tokenizer, DEFAULT_CACHE_CAPACITY},
};

/// Tokenizer settings, optionally loaded from a JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Replaces the built-in stopword list when present.
    pub stopwords: Option<StopwordSet>,
    pub extra_stopwords: Vec<String>,
    pub extra_punctuation: String,
    /// Memo cache entries; `0` disables the cache.
    pub cache_capacity: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stopwords: None,
            extra_stopwords: Vec::new(),
            extra_punctuation: String::new(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl Config {
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::InputNotFound(path.to_path_buf()));
        }

        let reader = BufReader::new(File::open(path)?);

        serde_json::from_reader(reader).map_err(|source| Error::InvalidConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn stopword_set(&self) -> StopwordSet {
        let mut stopwords = self.stopwords.clone().unwrap_or_default();
        stopwords.extend(self.extra_stopwords.iter().cloned());
        stopwords
    }

    pub fn tokenizer(&self) -> Result<Tokenizer> {
        Ok(Tokenizer::with_parts(
            Normalizer::with_extra(&self.extra_punctuation),
            self.stopword_set(),
        )?
        .with_cache_capacity(self.cache_capacity))
    }
}
