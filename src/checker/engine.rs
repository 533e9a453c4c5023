use tracing::debug;

use crate::{
    error::Result,
    frequency::FrequencyVector,
    similarity::{cosine, jaccard, SimilarityScore},
    tokenizer::Tokenizer,
};

use super::check_result::CheckResult;

/// Scores how much a candidate text reuses an original text.
pub struct PaperChecker {
    tokenizer: Tokenizer,
}

impl PaperChecker {
    pub fn new() -> Result<Self> {
        Ok(Self {
            tokenizer: Tokenizer::new()?,
        })
    }

    pub const fn with_tokenizer(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }

    pub const fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn vectorize(&self, text: &str) -> FrequencyVector {
        FrequencyVector::from_tokens(self.tokenizer.tokenize(text))
    }

    /// Cosine similarity of the two texts' token frequencies.
    pub fn score(&self, original: &str, candidate: &str) -> f64 {
        cosine(&self.vectorize(original), &self.vectorize(candidate))
    }

    pub fn check(&self, original: &str, candidate: &str) -> CheckResult {
        let original_freq = self.vectorize(original);
        let candidate_freq = self.vectorize(candidate);

        debug!(
            original_tokens = original_freq.total(),
            original_distinct = original_freq.len(),
            candidate_tokens = candidate_freq.total(),
            candidate_distinct = candidate_freq.len(),
            "vectorized documents"
        );

        CheckResult::new(
            SimilarityScore::new(cosine(&original_freq, &candidate_freq)),
            SimilarityScore::new(jaccard(&original_freq, &candidate_freq)),
            original_freq.total(),
            candidate_freq.total(),
        )
    }
}
