use crate::error::Result;

/// A vector of tuples each containing a label and a confidence score, ranked
/// highest score first.
pub type LabelScores = Vec<(String, f32)>;

/// A zero-shot text classifier.
///
/// Implementations score a text against caller-supplied candidate labels and
/// return the ranked result. With `exclusive` set, the labels compete: the
/// returned scores are mutually exclusive probabilities over the label set
/// summing to 1.0. Without it, each score is an independent per-label
/// probability.
pub trait ZeroShotClassifier {
    /// Scores `text` against `candidate_labels`, highest score first.
    fn score(&self, text: &str, candidate_labels: &[&str], exclusive: bool)
        -> Result<LabelScores>;
}

/// Rescales scores in place so they sum to 1.0. All-zero input is left as-is.
pub(crate) fn normalize_exclusive(scores: &mut LabelScores) {
    let sum: f32 = scores.iter().map(|(_, p)| p).sum();
    if sum > 0.0 {
        for (_, p) in scores.iter_mut() {
            *p /= sum;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclusive_scores_sum_to_one() {
        let mut scores: LabelScores = vec![
            ("a".into(), 0.9),
            ("b".into(), 0.6),
            ("c".into(), 0.3),
            ("d".into(), 0.2),
        ];
        normalize_exclusive(&mut scores);

        let sum: f32 = scores.iter().map(|(_, p)| p).sum();
        assert!((sum - 1.0).abs() < 1e-4, "expected sum 1.0, got {sum}");
        assert!(scores[0].1 > scores[1].1, "ranking order must survive");
    }

    #[test]
    fn all_zero_scores_stay_zero() {
        let mut scores: LabelScores = vec![("a".into(), 0.0), ("b".into(), 0.0)];
        normalize_exclusive(&mut scores);
        assert!(scores.iter().all(|(_, p)| *p == 0.0));
    }
}
