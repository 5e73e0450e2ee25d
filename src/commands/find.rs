//! One-shot rack query
//!
//! Parses the rack and constraints, runs the engine once and applies the
//! refinement filter.

use crate::core::{ConstraintError, PositionConstraints, Rack, RackError};
use crate::engine::{MatchResult, QueryEngine, RefineFilter, ResultSet, refine};
use thiserror::Error;

/// Error type for query input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FindError {
    #[error(transparent)]
    Rack(#[from] RackError),
    #[error(transparent)]
    Constraint(#[from] ConstraintError),
}

/// Configuration for a single query
#[derive(Debug, Clone, Default)]
pub struct FindConfig {
    pub rack: String,
    /// `POS=LETTER` pairs
    pub constraints: Vec<String>,
    pub filter: RefineFilter,
    pub limit: Option<usize>,
}

impl FindConfig {
    #[must_use]
    pub fn new(rack: impl Into<String>) -> Self {
        Self {
            rack: rack.into(),
            ..Self::default()
        }
    }
}

/// Result of a single query
#[derive(Debug, Clone)]
pub struct FindResult {
    pub rack: Rack,
    pub constraints: PositionConstraints,
    pub results: ResultSet,
    pub filter: RefineFilter,
    pub limit: Option<usize>,
}

impl FindResult {
    /// Refined results, cut to the limit
    #[must_use]
    pub fn view(&self) -> Vec<&MatchResult> {
        let mut view = refine(&self.results, &self.filter);
        if let Some(limit) = self.limit {
            view.truncate(limit);
        }
        view
    }
}

/// Run one query against `dictionary`
///
/// # Errors
///
/// Returns an error if the rack contains characters other than letters,
/// wildcards and separators, or if a constraint pair is malformed.
pub fn run_find<W>(
    config: FindConfig,
    engine: &QueryEngine,
    dictionary: &[W],
) -> Result<FindResult, FindError>
where
    W: AsRef<str> + Sync,
{
    let rack = Rack::parse(&config.rack)?;
    let constraints = PositionConstraints::parse_all(config.constraints.iter().map(String::as_str))?;

    let results = engine.query_rack(dictionary, &rack, Some(&constraints));

    Ok(FindResult {
        rack,
        constraints,
        results,
        filter: config.filter,
        limit: config.limit,
    })
}
