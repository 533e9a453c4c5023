use std::collections::{hash_map::Iter, HashMap};

pub type Count = usize;

/// Sparse token → occurrence count mapping. Never holds a zero count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyVector(HashMap<String, Count>);

impl FrequencyVector {
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts: HashMap<String, Count> = HashMap::new();

        for token in tokens {
            *counts.entry(token.as_ref().to_owned()).or_insert(0) += 1;
        }

        Self(counts)
    }

    pub fn get(&self, token: &str) -> Count {
        self.0.get(token).copied().unwrap_or(0)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains_key(token)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total(&self) -> Count {
        self.0.values().sum()
    }

    pub fn iter(&self) -> Iter<'_, String, Count> {
        self.0.iter()
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn squared_norm(&self) -> u128 {
        self.0
            .values()
            .map(|&count| (count as u128) * (count as u128))
            .sum()
    }
}

pub fn vectorize(tokens: &[String]) -> FrequencyVector {
    FrequencyVector::from_tokens(tokens)
}
