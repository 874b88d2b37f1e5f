// The swappable word-splitting strategy.
//
// The default implementation uses the jieba dictionary; Latin-only or
// pre-segmented corpora can use the whitespace backend. New strategies slot
// in without touching the vectorizer or scorer.

/// Trait for splitting cleaned text into word-like fragments.
///
/// Implementations must be deterministic for identical input. They may
/// return whitespace-only fragments; the Tokenizer filters those out.
pub trait Segmenter {
    fn segment(&self, text: &str) -> Vec<String>;
}
