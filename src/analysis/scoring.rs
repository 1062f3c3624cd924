// Rarity scoring — term counts to TermRecords.
//
// The score is computed against the document's own token count, not a
// corpus: score(t) = round(ln(N / count(t)), 2), with N the total token
// count. A term that fills every position scores 0.0; a hapax in a large
// document scores highest.
//
// f64::round rounds half away from zero, so quantizing via
// (x * 100).round() / 100 gives standard two-decimal rounding.

use std::collections::HashMap;

use super::record::TermRecord;

/// Score every distinct term. `token_count` is N, the sum of all counts.
///
/// N == 0 produces an empty result without touching the formula (no
/// division by zero, no ln of nonsense). Counts are >= 1 and <= N by
/// construction, so N/c >= 1 and scores are never negative.
pub fn score_terms(counts: HashMap<String, u32>, token_count: usize) -> Vec<TermRecord> {
    if token_count == 0 {
        return Vec::new();
    }
    let total = token_count as f64;
    counts
        .into_iter()
        .map(|(term, frequency)| {
            let score = ((total / frequency as f64).ln() * 100.0).round() / 100.0;
            TermRecord {
                term,
                frequency,
                score,
            }
        })
        .collect()
}
