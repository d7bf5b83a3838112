//! Corpus-level scoring over paired reference/candidate sentence lists.

use log::debug;

use crate::metrics::bleu::{bleu_score, BleuScore, BleuScoreError};
use crate::tokenize::tokenize;
use crate::utils::assert_order_at_least_one;

/// Per-sentence scores plus their arithmetic mean.
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusScore {
    pub sentences: Vec<BleuScore>,
    pub mean: f64,
}

/// Scores each reference/candidate sentence pair and averages the results.
///
/// The two lists are paired by position and must have the same length. Each
/// pair is tokenized with [`tokenize`] and scored with [`bleu_score`]; the
/// first failing sentence aborts the whole corpus. The mean is taken over
/// the rounded sentence scores, and is 0.0 for an empty corpus.
///
/// # Example
///
/// ```
/// use translation_metrics::score_corpus;
///
/// let references = ["the cat is on the mat", "a dog barks loudly"];
/// let candidates = ["the cat is on the mat", "a dog barks loudly"];
/// let corpus = score_corpus(&references, &candidates, 2).unwrap();
/// assert_eq!(corpus.mean, 1.0);
/// ```
pub fn score_corpus(
    references: &[&str],
    candidates: &[&str],
    max_order: usize,
) -> Result<CorpusScore, BleuScoreError> {
    assert_order_at_least_one(max_order);

    if references.len() != candidates.len() {
        return Err(BleuScoreError::CorpusLengthMismatch {
            references: references.len(),
            candidates: candidates.len(),
        });
    }

    let mut sentences = Vec::with_capacity(references.len());
    for (index, (reference, candidate)) in references.iter().zip(candidates).enumerate() {
        let reference_tokens = tokenize(reference);
        let candidate_tokens = tokenize(candidate);
        let sentence = bleu_score(&reference_tokens, &candidate_tokens, max_order)?;
        debug!("sentence {}: {}", index + 1, sentence);
        sentences.push(sentence);
    }

    let mean = if sentences.is_empty() {
        0.0
    } else {
        sentences.iter().map(|s| s.score).sum::<f64>() / sentences.len() as f64
    };

    Ok(CorpusScore { sentences, mean })
}
