//! Word matching, scoring and ranking
//!
//! The matcher, scorer and constraint checker are leaf functions; the query
//! engine runs them over a dictionary, and refinement narrows its cached
//! output.

mod capabilities;
mod checker;
mod matcher;
mod query;
mod refine;
pub mod report;
mod scoring;
mod session;

pub use capabilities::{Capabilities, Variant};
pub use checker::matches_constraints;
pub use matcher::{MatchOutcome, WordFit, try_match};
pub use query::{MIN_WORD_LENGTH, MatchResult, QueryEngine, ResultSet};
pub use refine::{RefineFilter, refine};
pub use scoring::{
    PositionScoring, Score, ScoringPolicy, ScoringType, TileScoring, position_bonus,
    position_score, tile_value,
};
pub use session::{CompletedQuery, QueryTag, Session};
