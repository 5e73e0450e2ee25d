//! Presentation data derived from a result view
//!
//! Grouping and summary figures that every front end shows. Pure data; the
//! rendering lives with each front end.

use super::query::MatchResult;
use crate::core::Rack;
use rustc_hash::FxHashMap;

/// All results of one word length, in rank order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthGroup<'a> {
    pub length: usize,
    pub entries: Vec<&'a MatchResult>,
}

/// Group a ranked view by word length, longest group first
#[must_use]
pub fn group_by_length<'a>(view: &[&'a MatchResult]) -> Vec<LengthGroup<'a>> {
    let mut by_length: FxHashMap<usize, Vec<&'a MatchResult>> = FxHashMap::default();
    for &entry in view {
        by_length.entry(entry.length()).or_default().push(entry);
    }

    let mut groups: Vec<LengthGroup<'a>> = by_length
        .into_iter()
        .map(|(length, entries)| LengthGroup { length, entries })
        .collect();
    groups.sort_by(|a, b| b.length.cmp(&a.length));
    groups
}

/// Headline figures for a result view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    /// First ranked word and its length
    pub longest: Option<(String, usize)>,
    pub best_score: Option<u32>,
    pub highlighted: usize,
    pub letters_used: String,
}

/// Summarize `view` for the rack it was computed from
#[must_use]
pub fn summarize(view: &[&MatchResult], rack: &Rack) -> Summary {
    Summary {
        total: view.len(),
        longest: view.first().map(|e| (e.word.clone(), e.length())),
        best_score: view.iter().map(|e| e.combined_score).max(),
        highlighted: view.iter().filter(|e| e.highlighted).count(),
        letters_used: rack.to_string(),
    }
}
