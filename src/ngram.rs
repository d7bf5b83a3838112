//! Contiguous n-gram windows over a token sequence.

use crate::utils::assert_order_at_least_one;

/// A contiguous window of n tokens borrowed from the source sequence.
///
/// Two n-grams are equal iff every position matches.
pub type Ngram<'a> = &'a [String];

/// Produces every contiguous window of `n` tokens, in source order.
///
/// Returns an empty vector when the sequence holds fewer than `n` tokens.
/// Duplicate windows are preserved, not deduplicated.
///
/// `n` must be at least 1.
pub fn ngrams(tokens: &[String], n: usize) -> Vec<Ngram<'_>> {
    assert_order_at_least_one(n);
    tokens.windows(n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize;

    #[test]
    fn test_unigrams() {
        let tokens = tokenize("the cat sat");
        let grams = ngrams(&tokens, 1);
        assert_eq!(grams.len(), 3);
        assert_eq!(grams[0], ["the"]);
        assert_eq!(grams[1], ["cat"]);
        assert_eq!(grams[2], ["sat"]);
    }

    #[test]
    fn test_bigrams_in_source_order() {
        let tokens = tokenize("the cat sat");
        let grams = ngrams(&tokens, 2);
        assert_eq!(grams.len(), 2);
        assert_eq!(grams[0], ["the", "cat"]);
        assert_eq!(grams[1], ["cat", "sat"]);
    }

    #[test]
    fn test_input_exactly_n() {
        let tokens = tokenize("the cat");
        let grams = ngrams(&tokens, 2);
        assert_eq!(grams.len(), 1);
    }

    #[test]
    fn test_input_shorter_than_n_is_empty() {
        let tokens = tokenize("the cat");
        let grams = ngrams(&tokens, 3);
        assert!(grams.is_empty());
    }

    #[test]
    fn test_duplicates_preserved() {
        let tokens = tokenize("the cat the cat");
        let grams = ngrams(&tokens, 2);
        assert_eq!(grams.len(), 3);
        assert_eq!(grams[0], grams[2]);
    }

    #[test]
    fn test_empty_tokens_participate() {
        let tokens = tokenize("a  b");
        let grams = ngrams(&tokens, 2);
        assert_eq!(grams.len(), 2);
        assert_eq!(grams[0], ["a", ""]);
    }

    #[test]
    fn test_structural_equality() {
        let left = tokenize("the cat sat");
        let right = tokenize("sat the cat");
        assert_eq!(ngrams(&left, 1)[0], ngrams(&right, 1)[1]);
        assert_ne!(ngrams(&left, 2)[0], ngrams(&right, 2)[0]);
    }
}
