//! Query engine
//!
//! Runs the matcher, constraint checker and scorer over a dictionary and
//! produces the ranked result set for one rack.

use super::capabilities::{Capabilities, Variant};
use super::checker::matches_constraints;
use super::matcher::try_match;
use super::scoring::{ScoringPolicy, ScoringType};
use crate::core::{Inventory, PositionConstraints, Rack};
use rayon::prelude::*;
use serde::Serialize;
use std::cmp::Ordering;
use std::time::Instant;
use tracing::debug;

/// Shortest dictionary word considered by a query
pub const MIN_WORD_LENGTH: usize = 4;

/// One accepted word with its scores
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub word: String,
    pub tile_score: u32,
    pub position_score: u32,
    pub combined_score: u32,
    /// 0-indexed positions filled by a wildcard
    pub wildcard_positions: Vec<usize>,
    /// Shorter than the longest match, yet outscores every longest match
    pub highlighted: bool,
}

impl MatchResult {
    /// Word length in letters
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.word.len()
    }
}

/// Ranking: longer first, then higher combined score, then alphabetical
fn rank_order(a: &MatchResult, b: &MatchResult) -> Ordering {
    b.length()
        .cmp(&a.length())
        .then_with(|| b.combined_score.cmp(&a.combined_score))
        .then_with(|| a.word.cmp(&b.word))
}

/// Flag short words that beat the best word of the longest length
///
/// Expects `entries` in rank order.
fn mark_highlights(entries: &mut [MatchResult]) {
    // Top entry is the best-scoring word of the longest length
    let Some((longest, best)) = entries
        .first()
        .map(|top| (top.length(), top.combined_score))
    else {
        return;
    };

    for entry in entries.iter_mut().skip_while(|e| e.length() == longest) {
        entry.highlighted = entry.combined_score > best;
    }
}

/// Ranked, annotated matches of one query
///
/// Immutable once built; refinement derives views from it instead of
/// recomputing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultSet {
    entries: Vec<MatchResult>,
}

impl ResultSet {
    /// Rank `entries` and compute highlight flags
    #[must_use]
    pub fn from_matches(mut entries: Vec<MatchResult>) -> Self {
        entries.sort_by(rank_order);
        mark_highlights(&mut entries);
        Self { entries }
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[MatchResult] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatchResult> {
        self.entries.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Matched words in rank order
    #[must_use]
    pub fn words(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.word.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a MatchResult;
    type IntoIter = std::slice::Iter<'a, MatchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Configurable matching and ranking pipeline
///
/// Holds no per-query state, so one engine can serve any number of queries,
/// including from several threads.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine {
    capabilities: Capabilities,
    scoring: ScoringType,
    parallel: bool,
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new(Capabilities::default())
    }
}

impl QueryEngine {
    #[must_use]
    pub const fn new(capabilities: Capabilities) -> Self {
        Self {
            capabilities,
            scoring: capabilities.scoring(),
            parallel: false,
        }
    }

    #[must_use]
    pub const fn from_variant(variant: Variant) -> Self {
        Self::new(variant.capabilities())
    }

    /// Scan the dictionary with a rayon parallel iterator
    ///
    /// Ranking is a strict total order, so the output is identical either way.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    #[must_use]
    pub const fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Find every dictionary word buildable from `inventory`
    ///
    /// Words shorter than [`MIN_WORD_LENGTH`] are skipped. Constraints are
    /// applied only when the engine has the constraint capability. An empty
    /// inventory or dictionary gives an empty result set.
    ///
    /// # Examples
    /// ```
    /// use wordrack::core::Rack;
    /// use wordrack::engine::QueryEngine;
    ///
    /// let dictionary = ["CAT", "CATS", "ACT", "TACO", "CATTLE"];
    /// let engine = QueryEngine::default();
    ///
    /// let inventory = Rack::parse("C,A,T,S").unwrap().inventory();
    /// let results = engine.query(&dictionary, &inventory, None);
    /// assert_eq!(results.words(), vec!["CATS"]);
    /// ```
    pub fn query<W>(
        &self,
        dictionary: &[W],
        inventory: &Inventory,
        constraints: Option<&PositionConstraints>,
    ) -> ResultSet
    where
        W: AsRef<str> + Sync,
    {
        let start = Instant::now();
        let inventory = self.usable_inventory(inventory);

        if inventory.is_empty() || dictionary.is_empty() {
            debug!(
                dictionary = dictionary.len(),
                tiles = inventory.total(),
                "nothing to match"
            );
            return ResultSet::empty();
        }

        let constraints = self.active_constraints(constraints);
        let evaluate = |word: &W| self.evaluate_prepared(word.as_ref(), &inventory, constraints);

        let matches: Vec<MatchResult> = if self.parallel {
            dictionary.par_iter().filter_map(evaluate).collect()
        } else {
            dictionary.iter().filter_map(evaluate).collect()
        };

        let results = ResultSet::from_matches(matches);

        debug!(
            dictionary = dictionary.len(),
            tiles = inventory.total(),
            wildcards = inventory.wildcards(),
            constraints = constraints.map_or(0, PositionConstraints::len),
            parallel = self.parallel,
            matches = results.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "query complete"
        );

        results
    }

    /// [`query`](Self::query) for a parsed rack
    pub fn query_rack<W>(
        &self,
        dictionary: &[W],
        rack: &Rack,
        constraints: Option<&PositionConstraints>,
    ) -> ResultSet
    where
        W: AsRef<str> + Sync,
    {
        self.query(dictionary, &rack.inventory(), constraints)
    }

    fn evaluate_prepared(
        &self,
        word: &str,
        inventory: &Inventory,
        constraints: Option<&PositionConstraints>,
    ) -> Option<MatchResult> {
        if word.len() < MIN_WORD_LENGTH {
            return None;
        }

        let fit = try_match(word, inventory).into_fit()?;

        if let Some(constraints) = constraints
            && !matches_constraints(word, constraints)
        {
            return None;
        }

        let score = self.scoring.score(fit.tile_score, word.len());

        Some(MatchResult {
            word: word.to_string(),
            tile_score: score.tile,
            position_score: score.position,
            combined_score: score.combined,
            wildcard_positions: fit.wildcard_positions,
            highlighted: false,
        })
    }

    fn usable_inventory(&self, inventory: &Inventory) -> Inventory {
        if self.capabilities.wildcards {
            *inventory
        } else {
            inventory.without_wildcards()
        }
    }

    fn active_constraints<'c>(
        &self,
        constraints: Option<&'c PositionConstraints>,
    ) -> Option<&'c PositionConstraints> {
        constraints.filter(|c| self.capabilities.constraints && !c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::DEFAULT_WORDS;

    fn inventory(rack: &str) -> Inventory {
        Rack::parse(rack).unwrap().inventory()
    }

    fn setup_dictionary() -> Vec<String> {
        ["CAT", "CATS", "ACT", "TACO", "CATTLE", "ACTS", "SCAT", "CAST", "TACOS"]
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn short_words_are_excluded() {
        let engine = QueryEngine::default();
        let dictionary = ["CAT", "CATS", "ACT", "TACO", "CATTLE"];

        let results = engine.query(&dictionary, &inventory("C,A,T,S"), None);
        assert_eq!(results.words(), vec!["CATS"]);
    }

    #[test]
    fn duplicate_letters_match_long_word() {
        let engine = QueryEngine::default();
        let dictionary = ["CAT", "CATS", "ACT", "TACO", "CATTLE"];

        let results = engine.query(&dictionary, &inventory("C,A,T,T,L,E"), None);
        assert_eq!(results.words(), vec!["CATTLE"]);
        assert_eq!(results.entries()[0].tile_score, 8);
        assert_eq!(results.entries()[0].position_score, 10);
        assert_eq!(results.entries()[0].combined_score, 18);
    }

    #[test]
    fn ranking_by_length_then_alphabet_on_ties() {
        let engine = QueryEngine::default();
        let results = engine.query(&setup_dictionary(), &inventory("CATSO"), None);

        assert_eq!(results.words(), vec!["TACOS", "ACTS", "CAST", "CATS", "SCAT", "TACO"]);
    }

    #[test]
    fn ranking_by_score_within_length() {
        let engine = QueryEngine::default();
        let dictionary = ["SEAL", "LEAD", "DEAL", "ZEAL"];

        let results = engine.query(&dictionary, &inventory("ZDEAL"), None);
        assert_eq!(results.words(), vec!["ZEAL", "DEAL", "LEAD"]);
    }

    #[test]
    fn ranking_is_strict_total_order() {
        let engine = QueryEngine::default();
        let results = engine.query(DEFAULT_WORDS, &inventory("AEINRST**"), None);

        for pair in results.entries().windows(2) {
            assert_ne!(rank_order(&pair[0], &pair[1]), Ordering::Greater);
            let key = |e: &MatchResult| (e.length(), e.combined_score);
            if key(&pair[0]) == key(&pair[1]) {
                assert!(pair[0].word <= pair[1].word);
            }
        }
    }

    #[test]
    fn wildcards_reduce_tile_score() {
        let engine = QueryEngine::new(Capabilities::SCORED);
        let dictionary = ["QUIZ"];

        let real = engine.query(&dictionary, &inventory("QUIZ"), None);
        let blank = engine.query(&dictionary, &inventory("*UIZ"), None);

        assert_eq!(real.entries()[0].tile_score, 22);
        assert_eq!(blank.entries()[0].tile_score, 12);
        assert_eq!(blank.entries()[0].wildcard_positions, vec![0]);
    }

    #[test]
    fn plain_variant_ignores_wildcards() {
        let dictionary = ["CATS"];
        let rack = inventory("CAT*");

        let plain = QueryEngine::from_variant(Variant::Plain);
        assert!(plain.query(&dictionary, &rack, None).is_empty());

        let wildcard = QueryEngine::from_variant(Variant::Wildcard);
        assert_eq!(wildcard.query(&dictionary, &rack, None).len(), 1);
    }

    #[test]
    fn plain_variant_with_only_wildcards_is_empty() {
        let plain = QueryEngine::from_variant(Variant::Plain);
        assert!(plain.query(&["ABCD"], &inventory("****"), None).is_empty());
    }

    #[test]
    fn tile_only_variant_has_zero_position_score() {
        let engine = QueryEngine::from_variant(Variant::Scored);
        let results = engine.query(&["CATTLE"], &inventory("CATTLE"), None);

        let entry = &results.entries()[0];
        assert_eq!(entry.position_score, 0);
        assert_eq!(entry.combined_score, entry.tile_score);
    }

    #[test]
    fn constraints_filter_matches() {
        let engine = QueryEngine::default();
        let constraints: PositionConstraints = "1=C".parse().unwrap();

        let results = engine.query(&setup_dictionary(), &inventory("CATSO"), Some(&constraints));
        assert_eq!(results.words(), vec!["CAST", "CATS"]);
    }

    #[test]
    fn constraints_ignored_without_capability() {
        let engine = QueryEngine::from_variant(Variant::Wildcard);
        let constraints: PositionConstraints = "1=C".parse().unwrap();

        let results = engine.query(&setup_dictionary(), &inventory("CATSO"), Some(&constraints));
        assert_eq!(results.len(), 6);
    }

    #[test]
    fn highlight_short_word_outscoring_longest() {
        let engine = QueryEngine::default();
        let dictionary = ["QUIZ", "TEARS", "RATES", "STAR"];

        let results = engine.query(&dictionary, &inventory("QUIZTEARS"), None);
        assert_eq!(results.words(), vec!["RATES", "TEARS", "QUIZ", "STAR"]);

        let flags: Vec<bool> = results.iter().map(|e| e.highlighted).collect();
        assert_eq!(flags, vec![false, false, true, false]);
    }

    #[test]
    fn longest_words_never_highlighted() {
        let engine = QueryEngine::default();
        let results = engine.query(DEFAULT_WORDS, &inventory("QZJXAEIOUS**"), None);

        if let Some(top) = results.entries().first() {
            let longest = top.length();
            assert!(
                results
                    .iter()
                    .filter(|e| e.length() == longest)
                    .all(|e| !e.highlighted)
            );
        }
    }

    #[test]
    fn empty_inventory_gives_empty_results() {
        let engine = QueryEngine::default();
        assert!(engine.query(&setup_dictionary(), &Inventory::default(), None).is_empty());
    }

    #[test]
    fn empty_dictionary_gives_empty_results() {
        let engine = QueryEngine::default();
        let dictionary: Vec<String> = Vec::new();
        assert!(engine.query(&dictionary, &inventory("CATS"), None).is_empty());
    }

    #[test]
    fn duplicates_in_dictionary_are_kept() {
        let engine = QueryEngine::default();
        let results = engine.query(&["CATS", "CATS"], &inventory("CATS"), None);
        assert_eq!(results.words(), vec!["CATS", "CATS"]);
    }

    #[test]
    fn query_is_deterministic() {
        let engine = QueryEngine::default();
        let rack = inventory("ETAOINSHR*");

        let first = engine.query(DEFAULT_WORDS, &rack, None);
        let second = engine.query(DEFAULT_WORDS, &rack, None);
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn parallel_scan_matches_sequential() {
        let sequential = QueryEngine::default();
        let parallel = QueryEngine::default().with_parallel(true);
        let rack = inventory("ETAOINSHRDLU**");
        let constraints: PositionConstraints = "2=A".parse().unwrap();

        assert_eq!(
            sequential.query(DEFAULT_WORDS, &rack, None),
            parallel.query(DEFAULT_WORDS, &rack, None)
        );
        assert_eq!(
            sequential.query(DEFAULT_WORDS, &rack, Some(&constraints)),
            parallel.query(DEFAULT_WORDS, &rack, Some(&constraints))
        );
    }
}
