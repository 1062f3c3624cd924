// TermRecord — one distinct term with its count and rarity score.
//
// Records are produced by the scoring stage, ordered by the ranking stage,
// and serialized as-is into the upload response, so the field names here are
// the JSON field names.

use serde::{Deserialize, Serialize};

/// A distinct term observed in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermRecord {
    /// The normalized term (lowercase, alphabet-filtered).
    pub term: String,
    /// Exact number of occurrences in the token sequence (>= 1).
    pub frequency: u32,
    /// Document-relative rarity: round(ln(N / frequency), 2).
    /// 0.0 means the term filled every token position.
    pub score: f64,
}

impl TermRecord {
    pub fn new(term: impl Into<String>, frequency: u32, score: f64) -> Self {
        Self {
            term: term.into(),
            frequency,
            score,
        }
    }
}
