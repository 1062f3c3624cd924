// Colored terminal output for term rankings.
//
// This module handles all terminal-specific formatting for the `rank`
// subcommand: the header, the totals line, and the rank/term/count/score
// table. The web boundary renders its own table client-side and never
// touches this.

use colored::Colorize;

use crate::analysis::DocumentAnalysis;

/// Display a ranked term table for one document.
///
/// `source` names the document (usually the file path); `top` limits how
/// many rows are printed — the ranking itself is already capped upstream.
pub fn display_ranking(analysis: &DocumentAnalysis, source: &str, top: usize) {
    if analysis.ranking.is_empty() {
        println!("No terms extracted from {source} — nothing to rank.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Distinctive terms in {source} ===").bold()
    );
    println!(
        "  {} tokens, {} distinct terms",
        analysis.token_count, analysis.distinct_terms
    );
    println!();

    // Header
    println!(
        "  {:>4}  {:<24} {:>6}  {:>6}",
        "Rank".dimmed(),
        "Term".dimmed(),
        "Count".dimmed(),
        "Score".dimmed(),
    );
    println!("  {}", "-".repeat(48).dimmed());

    for (i, record) in analysis.ranking.iter().take(top).enumerate() {
        println!(
            "  {:>4}. {:<24} {:>6}  {:>6}",
            i + 1,
            record.term,
            record.frequency,
            colorize_score(record.score),
        );
    }

    let shown = analysis.ranking.len().min(top);
    if analysis.ranking.len() > shown {
        println!(
            "  {}",
            format!("({} more not shown)", analysis.ranking.len() - shown).dimmed()
        );
    }
    println!();
}

/// Colorize a score: zero means the term fills the whole document and is
/// dimmed; everything else prints plainly, two decimals.
fn colorize_score(score: f64) -> colored::ColoredString {
    let formatted = format!("{score:.2}");
    if score == 0.0 {
        formatted.dimmed()
    } else {
        formatted.normal()
    }
}
