//! Formatting utilities for terminal output

use crate::engine::MatchResult;

/// Render a word with its wildcard-filled letters in lowercase
///
/// # Examples
/// ```
/// use wordrack::output::formatters::mark_wildcards;
///
/// assert_eq!(mark_wildcards("CATS", &[0, 3]), "cATs");
/// ```
#[must_use]
pub fn mark_wildcards(word: &str, wildcard_positions: &[usize]) -> String {
    word.chars()
        .enumerate()
        .map(|(i, ch)| {
            if wildcard_positions.contains(&i) {
                ch.to_ascii_lowercase()
            } else {
                ch
            }
        })
        .collect()
}

/// Short score label: combined score, with the tile/position split when there is one
#[must_use]
pub fn score_label(entry: &MatchResult) -> String {
    if entry.position_score == 0 {
        format!("{}", entry.combined_score)
    } else {
        format!(
            "{} = {}+{}",
            entry.combined_score, entry.tile_score, entry.position_score
        )
    }
}

/// Serialize a view as a pretty JSON array of result records
///
/// # Errors
/// Returns an error only if serialization itself fails.
pub fn to_json(view: &[&MatchResult]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(view)
}
