// Comparison pipeline: tokenize both documents, build the shared vector
// space, score. File handling stays with the caller.

use tracing::info;

use crate::segment::Tokenizer;
use crate::similarity::cosine;
use crate::vectorize;

/// Compare two raw texts and return their cosine similarity in [0, 1].
///
/// Pure with respect to its inputs. The vocabulary and vectors are rebuilt
/// on every call; nothing persists between comparisons.
pub fn compare(text_a: &str, text_b: &str, tokenizer: &Tokenizer) -> f64 {
    let tokens_a = tokenizer.tokenize(text_a);
    let tokens_b = tokenizer.tokenize(text_b);

    info!(
        original_tokens = tokens_a.len(),
        candidate_tokens = tokens_b.len(),
        "Tokenized document pair"
    );

    let vectors = vectorize::build_pair(&tokens_a, &tokens_b);
    let score = cosine(&vectors.original, &vectors.candidate);

    info!(score, "Scored document pair");
    score
}

/// Format a similarity score with exactly two decimal digits.
///
/// Uses the standard formatter's rounding of the underlying binary value,
/// so 0.845 (stored as ~0.84499…) renders as "0.84" while 0.85 renders
/// as "0.85".
pub fn format_score(score: f64) -> String {
    format!("{score:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_two_decimals() {
        assert_eq!(format_score(1.0), "1.00");
        assert_eq!(format_score(0.0), "0.00");
        assert_eq!(format_score(0.85), "0.85");
        assert_eq!(format_score(0.5), "0.50");
        assert_eq!(format_score(0.666), "0.67");
    }

    #[test]
    fn format_rounds_the_binary_value() {
        // 0.845 has no exact binary representation; the stored value is
        // just below the tie, so it rounds down.
        assert_eq!(format_score(0.845), "0.84");
    }
}
