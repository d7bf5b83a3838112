//! Whitespace tokenizer shared by every metric entry point.

/// Splits a text string into an ordered sequence of word tokens.
///
/// All comma characters are removed first, then the text is split on single
/// spaces. Consecutive spaces produce empty tokens on purpose: the split is
/// not a normalizing pass, and downstream matching treats empty tokens like
/// any other token.
///
/// # Example
///
/// ```
/// use translation_metrics::tokenize;
///
/// assert_eq!(tokenize("a, b, c"), vec!["a", "b", "c"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.replace(',', "")
        .split(' ')
        .map(str::to_owned)
        .collect()
}
