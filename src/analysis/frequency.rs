// Frequency counting — token sequence to term -> count mapping.

use std::collections::HashMap;

/// Count occurrences of each distinct term. Single pass, O(n) in token
/// count. An empty token sequence yields an empty map.
pub fn count_terms(tokens: Vec<String>) -> HashMap<String, u32> {
    let mut counts = HashMap::new();
    for token in tokens {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}
