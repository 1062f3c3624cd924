// Ranking — order scored terms and cut to the result size.
//
// The frequency map upstream has no iteration order, so the sort needs an
// explicit secondary key to make the ranking reproducible: score descending,
// then term ascending. A plain comparison sort keeps this O(k log k) in
// vocabulary size.

use std::cmp::Ordering;

use super::record::TermRecord;

/// Maximum number of terms in a ranking.
pub const RESULT_LIMIT: usize = 50;

/// Sort records by score descending (ties: term ascending) and truncate to
/// `RESULT_LIMIT`. Fewer records than the limit come back fully sorted.
pub fn rank_terms(mut records: Vec<TermRecord>) -> Vec<TermRecord> {
    records.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.term.cmp(&b.term))
    });
    records.truncate(RESULT_LIMIT);
    records
}
