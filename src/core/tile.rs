//! Rack tiles
//!
//! A tile is either a concrete letter A-Z or a wildcard that can stand in for any letter.

use std::fmt;

/// Canonical wildcard symbol
pub const WILDCARD: char = '*';

/// Number of distinct letters
pub const ALPHABET_SIZE: usize = 26;

/// A single rack tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// Uppercase ASCII letter, stored as its byte value
    Letter(u8),
    /// Blank tile, substitutes any single letter at zero score
    Wildcard,
}

impl Tile {
    /// Interpret a character as a tile
    ///
    /// Letters are uppercased. `*`, `?` and `_` are all read as the wildcard.
    /// Returns `None` for anything else.
    ///
    /// # Examples
    /// ```
    /// use wordrack::core::Tile;
    ///
    /// assert_eq!(Tile::from_char('c'), Some(Tile::Letter(b'C')));
    /// assert_eq!(Tile::from_char('?'), Some(Tile::Wildcard));
    /// assert_eq!(Tile::from_char('3'), None);
    /// ```
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '*' | '?' | '_' => Some(Self::Wildcard),
            'a'..='z' | 'A'..='Z' => Some(Self::Letter((ch as u8).to_ascii_uppercase())),
            _ => None,
        }
    }

    /// Character shown for this tile
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Letter(letter) => letter as char,
            Self::Wildcard => WILDCARD,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_wildcard(self) -> bool {
        matches!(self, Self::Wildcard)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Index of an uppercase letter in the alphabet (A = 0)
///
/// Returns `None` for any byte outside `A..=Z`.
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> Option<usize> {
    if letter.is_ascii_uppercase() {
        Some((letter - b'A') as usize)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_from_letters_uppercases() {
        assert_eq!(Tile::from_char('a'), Some(Tile::Letter(b'A')));
        assert_eq!(Tile::from_char('Z'), Some(Tile::Letter(b'Z')));
    }

    #[test]
    fn tile_wildcard_aliases() {
        for ch in ['*', '?', '_'] {
            assert_eq!(Tile::from_char(ch), Some(Tile::Wildcard));
        }
    }

    #[test]
    fn tile_rejects_other_characters() {
        for ch in ['1', ' ', '-', 'é', '!'] {
            assert_eq!(Tile::from_char(ch), None, "'{ch}' should not be a tile");
        }
    }

    #[test]
    fn tile_display() {
        assert_eq!(Tile::Letter(b'Q').to_string(), "Q");
        assert_eq!(Tile::Wildcard.to_string(), "*");
    }

    #[test]
    fn letter_index_bounds() {
        assert_eq!(letter_index(b'A'), Some(0));
        assert_eq!(letter_index(b'Z'), Some(25));
        assert_eq!(letter_index(b'a'), None);
        assert_eq!(letter_index(b'\''), None);
    }
}
