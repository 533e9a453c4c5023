use std::collections::HashSet;

/// ASCII punctuation followed by the CJK punctuation, brackets and quotation
/// marks found in Chinese prose.
pub const DEFAULT_PUNCTUATION: &str = concat!(
    r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##,
    "，。、；：？！‘’“”（）【】《》〈〉「」『』〔〕…—·",
);

/// Strips punctuation, whitespace and control characters from text and
/// lowercases ASCII letters. Latin and CJK letters survive, with nothing left
/// between adjacent CJK characters.
#[derive(Debug, Clone)]
pub struct Normalizer {
    punctuation: HashSet<char>,
}

impl Normalizer {
    pub fn new(punctuation: &str) -> Self {
        Self {
            punctuation: punctuation.chars().collect(),
        }
    }

    /// Default punctuation set plus every character of `extra`.
    pub fn with_extra(extra: &str) -> Self {
        Self::new(&format!("{DEFAULT_PUNCTUATION}{extra}"))
    }

    pub fn is_removed(&self, c: char) -> bool {
        c.is_whitespace() || c.is_control() || self.punctuation.contains(&c)
    }

    pub fn normalize(&self, text: &str) -> String {
        text.chars()
            .filter(|&c| !self.is_removed(c))
            .map(|c| c.to_ascii_lowercase())
            .collect()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_PUNCTUATION)
    }
}
