// Text normalization and word segmentation.
//
// The Tokenizer strips punctuation, hands the cleaned text to a pluggable
// Segmenter backend, and filters out whitespace-only fragments. Everything
// downstream (vectorize, similarity) sees only the resulting token list.

pub mod jieba;
pub mod traits;
pub mod whitespace;

use std::sync::LazyLock;

use regex::Regex;

use self::traits::Segmenter;

/// Matches every character that is neither a word character nor whitespace.
static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("punctuation pattern compiles"));

/// Delete punctuation and symbol characters, keeping letters, digits,
/// underscores, and whitespace. `\w` here is Unicode-aware, so CJK
/// characters survive.
pub fn strip_punctuation(text: &str) -> String {
    PUNCTUATION.replace_all(text, "").into_owned()
}

/// Normalizes raw text into an ordered token sequence.
///
/// The segmentation strategy is swappable via the Segmenter trait; the
/// tokenizer itself only owns the punctuation policy and the final filter.
pub struct Tokenizer {
    segmenter: Box<dyn Segmenter>,
}

impl Tokenizer {
    pub fn new(segmenter: Box<dyn Segmenter>) -> Self {
        Self { segmenter }
    }

    /// Tokenize raw text. Empty input yields an empty sequence; tokens are
    /// case- and form-preserving. Punctuation is removed before the backend
    /// runs.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let cleaned = strip_punctuation(text);
        self.segmenter
            .segment(&cleaned)
            .into_iter()
            .filter(|token| !token.trim().is_empty())
            .collect()
    }
}
