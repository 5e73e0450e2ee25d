//! Letter inventory
//!
//! The multiset of tiles available for one query: a count per letter plus a
//! separate wildcard count. Inventories are `Copy`, so each trial match works
//! on its own copy and never touches the caller's value.

use super::tile::{ALPHABET_SIZE, Tile, letter_index};

/// Per-letter tile counts plus a wildcard count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Inventory {
    letters: [u32; ALPHABET_SIZE],
    wildcards: u32,
}

impl Inventory {
    /// Build an inventory from a sequence of tiles
    ///
    /// Never fails; an empty sequence gives an empty inventory.
    ///
    /// # Examples
    /// ```
    /// use wordrack::core::{Inventory, Tile};
    ///
    /// let inventory = Inventory::from_tiles([Tile::Letter(b'C'), Tile::Letter(b'C'), Tile::Wildcard]);
    /// assert_eq!(inventory.count(b'C'), 2);
    /// assert_eq!(inventory.wildcards(), 1);
    /// ```
    pub fn from_tiles<I: IntoIterator<Item = Tile>>(tiles: I) -> Self {
        let mut inventory = Self::default();
        for tile in tiles {
            match tile {
                Tile::Letter(letter) => {
                    if let Some(index) = letter_index(letter) {
                        inventory.letters[index] += 1;
                    }
                }
                Tile::Wildcard => inventory.wildcards += 1,
            }
        }
        inventory
    }

    /// Number of tiles of `letter` (uppercase byte); zero for non-letters
    #[inline]
    #[must_use]
    pub fn count(&self, letter: u8) -> u32 {
        letter_index(letter).map_or(0, |index| self.letters[index])
    }

    #[inline]
    #[must_use]
    pub const fn wildcards(&self) -> u32 {
        self.wildcards
    }

    /// Total number of tiles, letters and wildcards
    #[must_use]
    pub fn total(&self) -> u32 {
        self.letters.iter().sum::<u32>() + self.wildcards
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Same letters with the wildcards dropped
    #[must_use]
    pub const fn without_wildcards(mut self) -> Self {
        self.wildcards = 0;
        self
    }

    /// Consume one `letter` tile if any remain
    #[inline]
    pub(crate) fn take_letter(&mut self, letter: u8) -> bool {
        match letter_index(letter) {
            Some(index) if self.letters[index] > 0 => {
                self.letters[index] -= 1;
                true
            }
            _ => false,
        }
    }

    /// Consume one wildcard if any remain
    #[inline]
    pub(crate) fn take_wildcard(&mut self) -> bool {
        if self.wildcards > 0 {
            self.wildcards -= 1;
            true
        } else {
            false
        }
    }
}

impl FromIterator<Tile> for Inventory {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        Self::from_tiles(iter)
    }
}
