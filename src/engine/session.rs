//! Query session
//!
//! Explicit state a front end keeps between queries: the last rack and
//! constraints, the cached result set and the active refinement.

use super::query::{MatchResult, QueryEngine, ResultSet};
use super::refine::{RefineFilter, refine};
use crate::core::{PositionConstraints, Rack};
use tracing::debug;

/// Tag identifying one submitted query
pub type QueryTag = u64;

/// Results of a query computed elsewhere (e.g. on a background thread)
#[derive(Debug, Clone)]
pub struct CompletedQuery {
    pub tag: QueryTag,
    pub rack: Rack,
    pub constraints: PositionConstraints,
    pub results: ResultSet,
}

/// Cached query state owned by a front end
///
/// The last submitted query always wins: results carrying an older tag are
/// dropped by [`Session::accept`].
#[derive(Debug, Clone, Default)]
pub struct Session {
    engine: QueryEngine,
    rack: Rack,
    constraints: PositionConstraints,
    results: ResultSet,
    filter: RefineFilter,
    generation: QueryTag,
}

impl Session {
    #[must_use]
    pub fn new(engine: QueryEngine) -> Self {
        Self {
            engine,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn engine(&self) -> &QueryEngine {
        &self.engine
    }

    /// Run a query synchronously and cache its results
    ///
    /// The refinement filter is kept, so the new view is already narrowed.
    pub fn run_query<W>(
        &mut self,
        dictionary: &[W],
        rack: Rack,
        constraints: PositionConstraints,
    ) -> &ResultSet
    where
        W: AsRef<str> + Sync,
    {
        let tag = self.begin_query();
        let results = self.engine.query_rack(dictionary, &rack, Some(&constraints));
        self.accept(CompletedQuery {
            tag,
            rack,
            constraints,
            results,
        });
        &self.results
    }

    /// Reserve a tag for a query that will be computed elsewhere
    ///
    /// Any query submitted earlier becomes stale.
    pub fn begin_query(&mut self) -> QueryTag {
        self.generation += 1;
        self.generation
    }

    /// Tag of the most recently submitted query
    #[must_use]
    pub const fn generation(&self) -> QueryTag {
        self.generation
    }

    /// Install completed results unless a newer query has been submitted
    ///
    /// Returns whether the results were installed.
    pub fn accept(&mut self, completed: CompletedQuery) -> bool {
        if completed.tag != self.generation {
            debug!(
                tag = completed.tag,
                current = self.generation,
                "dropping stale query results"
            );
            return false;
        }

        self.rack = completed.rack;
        self.constraints = completed.constraints;
        self.results = completed.results;
        true
    }

    #[must_use]
    pub const fn rack(&self) -> &Rack {
        &self.rack
    }

    #[must_use]
    pub const fn constraints(&self) -> &PositionConstraints {
        &self.constraints
    }

    /// Full cached result set, ignoring the filter
    #[must_use]
    pub const fn results(&self) -> &ResultSet {
        &self.results
    }

    #[must_use]
    pub const fn filter(&self) -> &RefineFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: RefineFilter) {
        self.filter = filter;
    }

    pub fn filter_mut(&mut self) -> &mut RefineFilter {
        &mut self.filter
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear();
    }

    /// Cached results narrowed by the current filter
    #[must_use]
    pub fn view(&self) -> Vec<&MatchResult> {
        refine(&self.results, &self.filter)
    }

    /// Drop rack, constraints, results and filter
    ///
    /// Any in-flight query is invalidated as well.
    pub fn reset(&mut self) {
        self.rack = Rack::default();
        self.constraints.clear();
        self.results = ResultSet::empty();
        self.filter.clear();
        self.generation += 1;
    }
}
