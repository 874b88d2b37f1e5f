// Cosine similarity between weighted term vectors.

/// Cosine of the angle between two equal-length weight vectors, in [0, 1].
///
/// A zero-norm vector (a document yielding no recognized tokens, or an
/// empty shared vocabulary) scores 0.0 instead of dividing by zero. The
/// result is clamped to at most 1.0.
pub fn cosine(u: &[f64], v: &[f64]) -> f64 {
    debug_assert_eq!(u.len(), v.len());

    let dot: f64 = u.iter().zip(v).map(|(a, b)| a * b).sum();
    let norm_u = u.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_v = v.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_u == 0.0 || norm_v == 0.0 {
        return 0.0;
    }

    (dot / (norm_u * norm_v)).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_norm_scores_zero() {
        assert_eq!(cosine(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
        assert_eq!(cosine(&[1.0, 2.0], &[0.0, 0.0]), 0.0);
        assert_eq!(cosine(&[], &[]), 0.0);
    }

    #[test]
    fn identical_vectors_score_one() {
        let v = [1.0, 2.0, 3.0];
        let score = cosine(&v, &v);
        assert!((score - 1.0).abs() < 1e-12, "got {score}");
    }

    #[test]
    fn orthogonal_vectors_score_zero() {
        assert_eq!(cosine(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn forty_five_degrees() {
        let score = cosine(&[1.0, 0.0], &[1.0, 1.0]);
        let expected = 1.0 / 2.0_f64.sqrt();
        assert!((score - expected).abs() < 1e-12);
    }
}
