pub(crate) mod utils;
pub mod corpus;
pub mod metrics;
pub mod ngram;
pub mod tokenize;

//re-exports
pub use corpus::{score_corpus, CorpusScore};
pub use metrics::bleu::{bleu_score, brevity_penalty, precision, BleuScore, BleuScoreError};
pub use ngram::{ngrams, Ngram};
pub use tokenize::tokenize;
