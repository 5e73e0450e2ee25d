//! Rack parsing and dealing
//!
//! A rack is the ordered list of tiles a player entered. Parsing is the
//! sanitization step in front of the engine: the engine itself only ever sees
//! clean tiles.

use super::inventory::Inventory;
use super::tile::Tile;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;
use thiserror::Error;

/// Letter distribution of a standard 100-tile bag (98 letters, 2 blanks)
const BAG_DISTRIBUTION: [(u8, usize); 26] = [
    (b'A', 9),
    (b'B', 2),
    (b'C', 2),
    (b'D', 4),
    (b'E', 12),
    (b'F', 2),
    (b'G', 3),
    (b'H', 2),
    (b'I', 9),
    (b'J', 1),
    (b'K', 1),
    (b'L', 4),
    (b'M', 2),
    (b'N', 6),
    (b'O', 8),
    (b'P', 2),
    (b'Q', 1),
    (b'R', 6),
    (b'S', 4),
    (b'T', 6),
    (b'U', 4),
    (b'V', 2),
    (b'W', 2),
    (b'X', 1),
    (b'Y', 2),
    (b'Z', 1),
];

const BAG_BLANKS: usize = 2;

/// Error type for rack input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RackError {
    #[error("invalid rack character '{ch}' at offset {offset}: use letters A-Z or '*' for a wildcard")]
    InvalidCharacter { ch: char, offset: usize },
}

/// The tiles available for one query, in entry order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rack {
    tiles: Vec<Tile>,
}

impl Rack {
    #[must_use]
    pub const fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Parse a rack from user text
    ///
    /// Whitespace and commas separate tiles and are ignored.
    ///
    /// # Errors
    /// Returns `RackError::InvalidCharacter` for the first character that is
    /// neither a letter, a wildcard symbol nor a separator.
    ///
    /// # Examples
    /// ```
    /// use wordrack::core::Rack;
    ///
    /// let rack = Rack::parse("c, a, *").unwrap();
    /// assert_eq!(rack.to_string(), "CA*");
    ///
    /// assert!(Rack::parse("CAT5").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, RackError> {
        let mut tiles = Vec::with_capacity(input.len());
        for (offset, ch) in input.char_indices() {
            if is_separator(ch) {
                continue;
            }
            let tile = Tile::from_char(ch).ok_or(RackError::InvalidCharacter { ch, offset })?;
            tiles.push(tile);
        }
        Ok(Self { tiles })
    }

    /// Parse a rack, silently dropping anything that is not a tile
    #[must_use]
    pub fn parse_lenient(input: &str) -> Self {
        Self {
            tiles: input.chars().filter_map(Tile::from_char).collect(),
        }
    }

    /// Deal `size` tiles from a freshly shuffled standard bag
    ///
    /// Tiles are drawn without replacement, so `size` is capped at 100.
    pub fn deal<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Self {
        let mut bag: Vec<Tile> = BAG_DISTRIBUTION
            .iter()
            .flat_map(|&(letter, count)| std::iter::repeat_n(Tile::Letter(letter), count))
            .chain(std::iter::repeat_n(Tile::Wildcard, BAG_BLANKS))
            .collect();

        bag.shuffle(rng);
        bag.truncate(size);
        Self { tiles: bag }
    }

    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Build the letter inventory for this rack
    #[must_use]
    pub fn inventory(&self) -> Inventory {
        Inventory::from_tiles(self.tiles.iter().copied())
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in &self.tiles {
            write!(f, "{tile}")?;
        }
        Ok(())
    }
}

fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || ch == ','
}
