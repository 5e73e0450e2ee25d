//! Engine capabilities
//!
//! The engine is one configurable pipeline. Optional behaviours are switched on
//! through a capability set, and the named variants are presets of that set.

use super::scoring::{PositionScoring, ScoringType, TileScoring};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Optional behaviours of the query engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Rack wildcards may stand in for missing letters
    pub wildcards: bool,
    /// Positional constraints are applied when supplied
    pub constraints: bool,
    /// Length-position bonus counts toward the combined score
    pub position_scoring: bool,
}

impl Capabilities {
    pub const PLAIN: Self = Self {
        wildcards: false,
        constraints: false,
        position_scoring: false,
    };

    pub const WILDCARD: Self = Self {
        wildcards: true,
        constraints: false,
        position_scoring: false,
    };

    pub const SCORED: Self = Self {
        wildcards: true,
        constraints: true,
        position_scoring: false,
    };

    pub const FULL: Self = Self {
        wildcards: true,
        constraints: true,
        position_scoring: true,
    };

    /// Scoring policy implied by these capabilities
    #[must_use]
    pub const fn scoring(self) -> ScoringType {
        if self.position_scoring {
            ScoringType::Position(PositionScoring)
        } else {
            ScoringType::Tile(TileScoring)
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::FULL
    }
}

/// Named capability presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Literal letters only, ranked by tile score
    Plain,
    /// Adds wildcard tiles
    Wildcard,
    /// Adds positional constraints
    Scored,
    /// Adds the length-position bonus
    #[default]
    Full,
}

impl Variant {
    pub const ALL: [Self; 4] = [Self::Plain, Self::Wildcard, Self::Scored, Self::Full];

    #[must_use]
    pub const fn capabilities(self) -> Capabilities {
        match self {
            Self::Plain => Capabilities::PLAIN,
            Self::Wildcard => Capabilities::WILDCARD,
            Self::Scored => Capabilities::SCORED,
            Self::Full => Capabilities::FULL,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Wildcard => "wildcard",
            Self::Scored => "scored",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown variant '{s}' (expected plain, wildcard, scored or full)"))
    }
}
