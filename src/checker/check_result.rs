use crate::similarity::SimilarityScore;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckResult {
    pub cosine: SimilarityScore,
    pub jaccard: SimilarityScore,
    pub original_tokens: usize,
    pub candidate_tokens: usize,
}

impl CheckResult {
    pub const fn new(
        cosine: SimilarityScore,
        jaccard: SimilarityScore,
        original_tokens: usize,
        candidate_tokens: usize,
    ) -> Self {
        Self {
            cosine,
            jaccard,
            original_tokens,
            candidate_tokens,
        }
    }
}
