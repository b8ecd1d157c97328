//! Text fidelity scoring: normalization, character-level edit distance, and
//! the combined accuracy percentage.

pub mod accuracy;
pub mod levenshtein;
pub mod normalize;
