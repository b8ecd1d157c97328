//! Accuracy percentage between extracted text and a reference transcription.

use serde::{Deserialize, Serialize};

use crate::scoring::levenshtein::levenshtein;
use crate::scoring::normalize::normalize;

/// Fidelity score plus the diagnostics the UI surfaces alongside it.
/// Computed fresh per request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccuracyReport {
    /// Percentage in [0, 100], rounded to two decimals. The upper and lower
    /// bounds are a property of the metric (distance ≤ max length always),
    /// not enforced by clamping.
    pub accuracy: f64,
    pub normalized_extracted: String,
    pub normalized_reference: String,
    /// Raw character-level edit distance between the normalized strings.
    pub distance: usize,
    /// Length of the longer normalized string.
    pub max_length: usize,
}

/// Scores `extracted` against `reference`.
///
/// Both inputs are normalized first, so the score is invariant to letter case
/// and to punctuation that does not change the underlying word characters.
/// Either side normalizing to empty yields a defined zero-score result
/// instead of a divide-by-zero.
pub fn score_accuracy(extracted: &str, reference: &str) -> AccuracyReport {
    let normalized_extracted = normalize(extracted);
    let normalized_reference = normalize(reference);

    if normalized_extracted.is_empty() || normalized_reference.is_empty() {
        return AccuracyReport {
            accuracy: 0.0,
            normalized_extracted,
            normalized_reference,
            distance: 0,
            max_length: 0,
        };
    }

    let distance = levenshtein(&normalized_extracted, &normalized_reference);
    let max_length = normalized_extracted
        .chars()
        .count()
        .max(normalized_reference.chars().count());

    let accuracy = (1.0 - distance as f64 / max_length as f64) * 100.0;
    let accuracy = (accuracy * 100.0).round() / 100.0;

    AccuracyReport {
        accuracy,
        normalized_extracted,
        normalized_reference,
        distance,
        max_length,
    }
}
