//! Refinement of cached results
//!
//! Narrows an already computed result set by prefix, suffix and substring
//! without going back to the dictionary.

use super::query::MatchResult;

/// Substring criteria, all optional
///
/// Criteria are stored trimmed and uppercased. An empty criterion is the same
/// as no criterion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefineFilter {
    starts_with: Option<String>,
    ends_with: Option<String>,
    contains: Option<String>,
}

fn normalize(criterion: &str) -> Option<String> {
    let trimmed = criterion.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}

impl RefineFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn starts_with(mut self, prefix: &str) -> Self {
        self.set_starts_with(prefix);
        self
    }

    #[must_use]
    pub fn ends_with(mut self, suffix: &str) -> Self {
        self.set_ends_with(suffix);
        self
    }

    #[must_use]
    pub fn contains(mut self, fragment: &str) -> Self {
        self.set_contains(fragment);
        self
    }

    pub fn set_starts_with(&mut self, prefix: &str) {
        self.starts_with = normalize(prefix);
    }

    pub fn set_ends_with(&mut self, suffix: &str) {
        self.ends_with = normalize(suffix);
    }

    pub fn set_contains(&mut self, fragment: &str) {
        self.contains = normalize(fragment);
    }

    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.starts_with.as_deref()
    }

    #[must_use]
    pub fn suffix(&self) -> Option<&str> {
        self.ends_with.as_deref()
    }

    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.contains.as_deref()
    }

    /// True when no criterion is set
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.starts_with.is_none() && self.ends_with.is_none() && self.contains.is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check one (uppercase) word against every set criterion
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        self.starts_with.as_deref().is_none_or(|p| word.starts_with(p))
            && self.ends_with.as_deref().is_none_or(|s| word.ends_with(s))
            && self.contains.as_deref().is_none_or(|c| word.contains(c))
    }
}

/// Keep the entries whose word satisfies `filter`, preserving order
///
/// Accepts a whole result set or a previous view, so refinements can be
/// chained. The entries themselves are borrowed, never copied or modified.
///
/// # Examples
/// ```
/// use wordrack::core::Rack;
/// use wordrack::engine::{QueryEngine, RefineFilter, refine};
///
/// let results = QueryEngine::default().query(
///     &["CATS", "ACTS"],
///     &Rack::parse("CATS").unwrap().inventory(),
///     None,
/// );
///
/// let view = refine(&results, &RefineFilter::new().starts_with("ca"));
/// let words: Vec<&str> = view.iter().map(|e| e.word.as_str()).collect();
/// assert_eq!(words, vec!["CATS"]);
/// ```
pub fn refine<'a, I>(entries: I, filter: &RefineFilter) -> Vec<&'a MatchResult>
where
    I: IntoIterator<Item = &'a MatchResult>,
{
    entries
        .into_iter()
        .filter(|entry| filter.matches(&entry.word))
        .collect()
}
