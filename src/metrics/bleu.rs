//! BLEU (Bilingual Evaluation Understudy) translation-quality metric.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use itertools::Itertools;

use crate::ngram::{ngrams, Ngram};
use crate::utils::{assert_order_at_least_one, round_to_hundredths};

#[derive(Debug, Clone, PartialEq)]
pub enum BleuScoreError {
    EmptyCandidateNgrams,
    EmptyCandidate,
    CorpusLengthMismatch { references: usize, candidates: usize },
}

impl fmt::Display for BleuScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BleuScoreError::EmptyCandidateNgrams => {
                write!(f, "Precision is undefined over an empty candidate n-gram list")
            }
            BleuScoreError::EmptyCandidate => {
                write!(f, "Cannot compute a brevity penalty for a candidate with no tokens")
            }
            BleuScoreError::CorpusLengthMismatch {
                references,
                candidates,
            } => {
                write!(
                    f,
                    "Corpora have different lengths: {} references vs {} candidates",
                    references, candidates
                )
            }
        }
    }
}

impl std::error::Error for BleuScoreError {}

/// Final BLEU score plus the per-order precision breakdown.
///
/// Both the score and the recorded precisions are rounded to two decimal
/// places; the score itself is derived from the unrounded per-order values.
#[derive(Debug, Clone, PartialEq)]
pub struct BleuScore {
    pub score: f64,
    pub precisions: BTreeMap<usize, f64>,
}

impl fmt::Display for BleuScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let breakdown = self
            .precisions
            .iter()
            .map(|(order, p)| format!("{}:{:.2}", order, p))
            .join(" ");
        write!(f, "{:.2} ({})", self.score, breakdown)
    }
}

/// Fraction of candidate n-grams that occur anywhere in the reference list.
///
/// Every candidate occurrence counts, and membership is set-style: matches
/// are not clipped by how often the reference contains the n-gram. This is a
/// simplified precision, kept deliberately looser than the clipped count of
/// standard BLEU.
pub fn precision(
    reference_ngrams: &[Ngram<'_>],
    candidate_ngrams: &[Ngram<'_>],
) -> Result<f64, BleuScoreError> {
    if candidate_ngrams.is_empty() {
        return Err(BleuScoreError::EmptyCandidateNgrams);
    }

    let reference_set: HashSet<Ngram<'_>> = reference_ngrams.iter().copied().collect();
    let matched = candidate_ngrams
        .iter()
        .filter(|gram| reference_set.contains(*gram))
        .count();

    Ok(matched as f64 / candidate_ngrams.len() as f64)
}

/// Discount for candidates shorter than the reference.
///
/// Equal-or-longer candidates pass through at 1; shorter candidates decay by
/// exp(1 - r/c), approaching zero as the candidate shrinks.
pub fn brevity_penalty(reference: &[String], candidate: &[String]) -> Result<f64, BleuScoreError> {
    if candidate.is_empty() {
        return Err(BleuScoreError::EmptyCandidate);
    }

    let r = reference.len() as f64;
    let c = candidate.len() as f64;

    if r <= c {
        Ok(1.0)
    } else {
        Ok((1.0 - r / c).exp())
    }
}

/// Computes the BLEU score of a candidate translation against a reference.
///
/// The brevity penalty is computed once from the two full token sequences and
/// multiplied into the precision of every order from 1 to `max_order`; the
/// final score is the geometric mean of those scaled precisions. A zero
/// precision at any order zeroes the whole score; no smoothing is applied.
///
/// A candidate shorter than `max_order` tokens has no n-grams at the top
/// order and fails with [`BleuScoreError::EmptyCandidateNgrams`]. A reference
/// that is too short for some order merely contributes zero matches there.
///
/// # Arguments
///
/// * `reference` - Reference token sequence
/// * `candidate` - Candidate token sequence to evaluate
/// * `max_order` - Largest n-gram order scored, at least 1
///
/// # Returns
///
/// The rounded score plus the per-order precision map, or the first
/// per-order failure.
///
/// # Example
///
/// ```
/// use translation_metrics::{bleu_score, tokenize};
///
/// let reference = tokenize("the cat is on the mat");
/// let result = bleu_score(&reference, &reference, 4).unwrap();
/// assert_eq!(result.score, 1.0);
/// ```
pub fn bleu_score(
    reference: &[String],
    candidate: &[String],
    max_order: usize,
) -> Result<BleuScore, BleuScoreError> {
    assert_order_at_least_one(max_order);

    let bp = brevity_penalty(reference, candidate)?;
    let mut precisions = BTreeMap::new();
    let mut product = 1.0;

    for order in 1..=max_order {
        let reference_ngrams = ngrams(reference, order);
        let candidate_ngrams = ngrams(candidate, order);
        let scaled = precision(&reference_ngrams, &candidate_ngrams)? * bp;
        precisions.insert(order, round_to_hundredths(scaled));
        // The product stays unrounded; only the reported map is display-rounded.
        product *= scaled;
    }

    let score = round_to_hundredths(product.powf(1.0 / max_order as f64));
    Ok(BleuScore { score, precisions })
}
