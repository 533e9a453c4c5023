//! Similarity measures over two [`FrequencyVector`]s.
//!
//! Both measures are total and symmetric. Absent tokens count as zero.

pub mod score;

use crate::frequency::FrequencyVector;

pub use score::SimilarityScore;

/// Cosine of the angle between two frequency vectors, clamped into `[0, 1]`.
///
/// Returns `0.0` when either vector is empty. Dot product and norms are summed
/// as integers so `cosine(a, b)` and `cosine(b, a)` are bit-identical, and
/// `cosine(a, a)` is exactly `1.0`.
pub fn cosine(a: &FrequencyVector, b: &FrequencyVector) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    // Only shared tokens contribute, so walk the smaller map.
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: u128 = small
        .iter()
        .map(|(token, &count)| (count as u128) * (large.get(token) as u128))
        .sum();

    let (norm_a, norm_b) = (a.squared_norm(), b.squared_norm());
    // A single sqrt of the exact product keeps identical inputs at exactly 1.0.
    let denominator = norm_a.checked_mul(norm_b).map_or_else(
        || (norm_a as f64).sqrt() * (norm_b as f64).sqrt(),
        |product| (product as f64).sqrt(),
    );

    if denominator == 0.0 {
        return 0.0;
    }

    SimilarityScore::new(dot as f64 / denominator).value()
}

/// Ratio of shared distinct tokens to all distinct tokens.
pub fn jaccard(a: &FrequencyVector, b: &FrequencyVector) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }

    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let intersection = small.tokens().filter(|token| large.contains(token)).count();
    let union = a.len() + b.len() - intersection;

    if union == 0 {
        return 0.0;
    }

    SimilarityScore::new(intersection as f64 / union as f64).value()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freq(tokens: &[&str]) -> FrequencyVector {
        FrequencyVector::from_tokens(tokens)
    }

    #[test]
    fn cosine_identical() {
        let a = freq(&["苹果", "苹果", "香蕉"]);
        let b = freq(&["苹果", "苹果", "香蕉"]);
        assert_eq!(cosine(&a, &b), 1.0);
        assert_eq!(cosine(&a, &a), 1.0);
    }

    #[test]
    fn cosine_proportional() {
        let a = freq(&["苹果", "香蕉"]);
        let b = freq(&["苹果", "苹果", "香蕉", "香蕉"]);
        assert!((cosine(&a, &b) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn cosine_no_common() {
        let a = freq(&["苹果", "苹果"]);
        let b = freq(&["橙子"]);
        assert_eq!(cosine(&a, &b), 0.0);
    }

    #[test]
    fn cosine_empty() {
        let a = freq(&["苹果", "苹果"]);
        let empty = freq(&[]);
        assert_eq!(cosine(&a, &empty), 0.0);
        assert_eq!(cosine(&empty, &a), 0.0);
        assert_eq!(cosine(&empty, &empty), 0.0);
    }

    #[test]
    fn cosine_partial() {
        // dot = 1, |a| = sqrt(2), |b| = sqrt(2)
        let a = freq(&["ab", "cd"]);
        let b = freq(&["ab", "ef"]);
        assert!((cosine(&a, &b) - 0.5).abs() < 1e-9);
        assert_eq!(cosine(&a, &b).to_bits(), cosine(&b, &a).to_bits());
    }

    #[test]
    fn jaccard_cases() {
        let a = freq(&["ab", "cd", "cd"]);
        let b = freq(&["ab", "ef"]);
        assert!((jaccard(&a, &b) - 1.0 / 3.0).abs() < 1e-9);
        assert!((jaccard(&b, &a) - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(jaccard(&freq(&[]), &freq(&[])), 1.0);
        assert_eq!(jaccard(&a, &freq(&[])), 0.0);
        assert_eq!(jaccard(&a, &a), 1.0);
    }
}
