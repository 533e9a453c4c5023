pub mod stopwords;

use std::sync::Arc;

use moka::{policy::EvictionPolicy, sync::Cache};
use regex::Regex;

use crate::{
    error::{Error, Result},
    normalizer::Normalizer,
};

pub use stopwords::StopwordSet;

pub const DEFAULT_CACHE_CAPACITY: u64 = 128;

const MIN_ENGLISH_LEN: usize = 2;

/// Inclusive bounds of the CJK Unified Ideographs block.
const CJK_RANGE: std::ops::RangeInclusive<char> = '\u{4e00}'..='\u{9fff}';

pub fn is_cjk(c: char) -> bool {
    CJK_RANGE.contains(&c)
}

/// Splits text into lowercase English words and overlapping CJK bigrams.
///
/// Results are memoized per exact input text in a bounded LRU cache. Tokenizing
/// is a pure function of the input, so a cache hit is indistinguishable from a
/// fresh computation.
pub struct Tokenizer {
    normalizer: Normalizer,
    stopwords: StopwordSet,
    regex: Regex,
    cache: Option<Cache<String, Arc<[String]>>>,
}

impl Tokenizer {
    pub fn new() -> Result<Self> {
        Self::with_parts(Normalizer::default(), StopwordSet::default())
    }

    pub fn with_parts(normalizer: Normalizer, stopwords: StopwordSet) -> Result<Self> {
        Ok(Self {
            normalizer,
            stopwords,
            regex: Regex::new(r"[a-z]+")
                .map_err(|e| Error::Generic(format!("Failed to compile regex: {e}")))?,
            cache: Some(build_cache(DEFAULT_CACHE_CAPACITY)),
        })
    }

    /// Replaces the memo cache. A capacity of zero disables caching.
    #[must_use]
    pub fn with_cache_capacity(mut self, capacity: u64) -> Self {
        self.cache = (capacity > 0).then(|| build_cache(capacity));
        self
    }

    pub const fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.cache.as_ref().map_or_else(
            || self.tokenize_uncached(text),
            |cache| {
                cache
                    .get_with(text.to_owned(), || self.tokenize_uncached(text).into())
                    .to_vec()
            },
        )
    }

    pub fn tokenize_uncached(&self, text: &str) -> Vec<String> {
        let cleaned = self.normalizer.normalize(text);
        if cleaned.is_empty() {
            return Vec::new();
        }

        let mut tokens = self.english_words(&cleaned);
        tokens.extend(self.cjk_bigrams(&cleaned));
        tokens
    }

    fn english_words(&self, cleaned: &str) -> Vec<String> {
        self.regex
            .find_iter(cleaned)
            .map(|word| word.as_str())
            .filter(|word| word.len() >= MIN_ENGLISH_LEN && !self.stopwords.contains(word))
            .map(str::to_owned)
            .collect()
    }

    fn cjk_bigrams(&self, cleaned: &str) -> Vec<String> {
        // Latin letters are dropped before pairing, so no bigram spans a Latin run.
        let chars: Vec<char> = cleaned
            .chars()
            .filter(|c| !c.is_ascii_alphabetic() && !c.is_whitespace())
            .collect();

        chars
            .windows(2)
            .filter(|pair| is_cjk(pair[0]) && is_cjk(pair[1]))
            .map(|pair| pair.iter().collect::<String>())
            .filter(|bigram| !self.stopwords.contains(bigram))
            .collect()
    }
}

fn build_cache(capacity: u64) -> Cache<String, Arc<[String]>> {
    Cache::builder()
        .max_capacity(capacity)
        .eviction_policy(EvictionPolicy::lru())
        .build()
}
