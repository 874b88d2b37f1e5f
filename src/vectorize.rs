// TF-IDF vector construction over a two-document corpus.
//
// Every comparison builds its own vocabulary from the union of the two
// token sequences and weighs each term by raw count times smoothed
// inverse document frequency. Nothing is cached between comparisons.

use std::collections::HashMap;

/// Every comparison corpus holds exactly two documents.
const CORPUS_SIZE: f64 = 2.0;

/// The weighted vectors for one document pair, over a shared term space.
///
/// Both vectors have dimension `|vocabulary|`; a term absent from a
/// document weighs 0.0 there.
pub struct PairVectors {
    pub original: Vec<f64>,
    pub candidate: Vec<f64>,
}

/// Smoothed inverse document frequency: `ln((1 + N) / (1 + df)) + 1` with
/// N = 2. Terms present in both documents weigh 1.0, terms unique to one
/// weigh ln(1.5) + 1. The smoothing keeps the denominator away from zero.
fn idf(doc_frequency: f64) -> f64 {
    ((1.0 + CORPUS_SIZE) / (1.0 + doc_frequency)).ln() + 1.0
}

/// Assign each distinct term an axis, in first-occurrence order across both
/// token sequences. First-occurrence order keeps the assignment
/// deterministic across repeated runs on the same inputs.
fn vocabulary(tokens_a: &[String], tokens_b: &[String]) -> HashMap<String, usize> {
    let mut vocab = HashMap::new();
    for token in tokens_a.iter().chain(tokens_b) {
        let next_axis = vocab.len();
        vocab.entry(token.clone()).or_insert(next_axis);
    }
    vocab
}

/// Raw term counts for one document, laid out on the shared axes.
fn term_counts(tokens: &[String], vocab: &HashMap<String, usize>) -> Vec<f64> {
    let mut counts = vec![0.0; vocab.len()];
    for token in tokens {
        counts[vocab[token]] += 1.0;
    }
    counts
}

/// Build the TF-IDF weighted vector pair for two token sequences.
///
/// An empty token sequence produces an all-zeros vector whose dimension
/// still matches the vocabulary built from the other document; two empty
/// sequences produce two zero-dimensional vectors.
pub fn build_pair(tokens_a: &[String], tokens_b: &[String]) -> PairVectors {
    let vocab = vocabulary(tokens_a, tokens_b);
    let mut original = term_counts(tokens_a, &vocab);
    let mut candidate = term_counts(tokens_b, &vocab);

    for axis in 0..vocab.len() {
        let df = (original[axis] > 0.0) as u32 + (candidate[axis] > 0.0) as u32;
        let weight = idf(f64::from(df));
        original[axis] *= weight;
        candidate[axis] *= weight;
    }

    PairVectors {
        original,
        candidate,
    }
}
