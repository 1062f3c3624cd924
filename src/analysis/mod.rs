// The text-statistics pipeline: tokenize, count, score, rank.
//
// This is the whole algorithmic core of the tool. Everything here is a pure
// function of the document bytes — no I/O, no shared state, no failure modes
// once the bytes are in hand. The boundaries (web handler, CLI) own all
// error reporting.

pub mod frequency;
pub mod ranking;
pub mod record;
pub mod scoring;
pub mod tokenizer;

use serde::{Deserialize, Serialize};

use record::TermRecord;
use tokenizer::Tokenizer;

/// The full pipeline result: the ranked terms plus the document totals the
/// truncated list alone cannot provide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    /// N — total token count of the document (sum of all frequencies).
    pub token_count: usize,
    /// Vocabulary size: distinct terms before truncation.
    pub distinct_terms: usize,
    /// Top terms by score descending, at most `ranking::RESULT_LIMIT`.
    pub ranking: Vec<TermRecord>,
}

/// Run the pipeline over raw document bytes.
///
/// Bytes are decoded lossily as UTF-8, so any byte sequence is valid input;
/// undecodable bytes become replacement characters, which are separators.
/// An empty or all-separator document yields an empty ranking — that is a
/// successful result, not an error.
pub fn analyze_document(bytes: &[u8], tokenizer: &Tokenizer) -> DocumentAnalysis {
    let text = String::from_utf8_lossy(bytes);
    let tokens = tokenizer.tokenize(&text);
    let token_count = tokens.len();
    let counts = frequency::count_terms(tokens);
    let distinct_terms = counts.len();
    let ranking = ranking::rank_terms(scoring::score_terms(counts, token_count));
    DocumentAnalysis {
        token_count,
        distinct_terms,
        ranking,
    }
}

/// The ranked term list alone — the core entry point for callers that do
/// not need the totals.
pub fn rank_document(bytes: &[u8], tokenizer: &Tokenizer) -> Vec<TermRecord> {
    analyze_document(bytes, tokenizer).ranking
}
