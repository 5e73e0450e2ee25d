//! Word matching against an inventory
//!
//! Decides whether a whole dictionary word can be laid down from the rack.

use super::scoring::tile_value;
use crate::core::{Inventory, letter_index};

/// How an accepted word was built from the rack
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordFit {
    /// Sum of tile values of the letters taken from the rack
    pub tile_score: u32,
    /// 0-indexed positions filled by a wildcard, ascending
    pub wildcard_positions: Vec<usize>,
}

/// Result of trying one word against an inventory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    Accepted(WordFit),
    Rejected,
}

impl MatchOutcome {
    #[inline]
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    #[must_use]
    pub fn into_fit(self) -> Option<WordFit> {
        match self {
            Self::Accepted(fit) => Some(fit),
            Self::Rejected => None,
        }
    }
}

/// Try to build `word` from `inventory`
///
/// Scans left to right. Each letter takes a matching rack letter when one is
/// left, otherwise a wildcard, otherwise the word is rejected on the spot.
/// Wildcards score 0 and a real letter is never worth less than one, so this
/// greedy pass already uses the fewest possible wildcards. Characters outside
/// `A..=Z` can never be matched.
///
/// The caller's inventory is not modified.
///
/// # Examples
/// ```
/// use wordrack::core::Rack;
/// use wordrack::engine::{MatchOutcome, try_match};
///
/// let inventory = Rack::parse("CA*").unwrap().inventory();
/// match try_match("CAT", &inventory) {
///     MatchOutcome::Accepted(fit) => {
///         assert_eq!(fit.tile_score, 4); // C=3, A=1, T from the wildcard
///         assert_eq!(fit.wildcard_positions, vec![2]);
///     }
///     MatchOutcome::Rejected => unreachable!(),
/// }
///
/// assert!(!try_match("DOG", &inventory).is_accepted());
/// ```
#[must_use]
pub fn try_match(word: &str, inventory: &Inventory) -> MatchOutcome {
    // A word longer than the whole rack can never fit
    if word.len() > inventory.total() as usize {
        return MatchOutcome::Rejected;
    }

    let mut remaining = *inventory;
    let mut tile_score = 0;
    let mut wildcard_positions = Vec::new();

    for (position, letter) in word.bytes().enumerate() {
        if remaining.take_letter(letter) {
            tile_score += tile_value(letter);
        } else if letter_index(letter).is_some() && remaining.take_wildcard() {
            wildcard_positions.push(position);
        } else {
            return MatchOutcome::Rejected;
        }
    }

    MatchOutcome::Accepted(WordFit {
        tile_score,
        wildcard_positions,
    })
}
