//! Word scoring
//!
//! Tile values are a fixed Scrabble-style table. The position score rewards
//! long words and depends only on length. Which of the two count toward the
//! combined score is decided by a [`ScoringPolicy`].

/// Tile value of an uppercase letter
///
/// Returns 0 for anything that is not `A..=Z`.
///
/// # Examples
/// ```
/// use wordrack::engine::tile_value;
///
/// assert_eq!(tile_value(b'E'), 1);
/// assert_eq!(tile_value(b'K'), 5);
/// assert_eq!(tile_value(b'Q'), 10);
/// ```
#[must_use]
pub const fn tile_value(letter: u8) -> u32 {
    match letter {
        b'A' | b'E' | b'I' | b'L' | b'N' | b'O' | b'R' | b'S' | b'T' | b'U' => 1,
        b'D' | b'G' => 2,
        b'B' | b'C' | b'M' | b'P' => 3,
        b'F' | b'H' | b'V' | b'W' | b'Y' => 4,
        b'K' => 5,
        b'J' | b'X' => 8,
        b'Q' | b'Z' => 10,
        _ => 0,
    }
}

/// Bonus awarded for the letter at 1-indexed `position`
#[must_use]
pub const fn position_bonus(position: usize) -> u32 {
    match position {
        20.. => 50,
        19 => 40,
        18 => 30,
        15..=17 => 25,
        12..=14 => 20,
        10..=11 => 15,
        8..=9 => 10,
        5..=7 => 5,
        _ => 0,
    }
}

/// Sum of position bonuses for a word of `length` letters
///
/// # Examples
/// ```
/// use wordrack::engine::position_score;
///
/// assert_eq!(position_score(4), 0);
/// assert_eq!(position_score(6), 10);
/// assert_eq!(position_score(10), 50);
/// ```
#[must_use]
pub fn position_score(length: usize) -> u32 {
    (1..=length).map(position_bonus).sum()
}

/// Breakdown of a word's score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub tile: u32,
    pub position: u32,
    pub combined: u32,
}

impl Score {
    #[must_use]
    pub const fn new(tile: u32, position: u32) -> Self {
        Self {
            tile,
            position,
            combined: tile + position,
        }
    }
}

/// Decides how an accepted word is scored
pub trait ScoringPolicy {
    /// Score a word of `length` letters whose non-wildcard tiles sum to `tile_score`
    fn score(&self, tile_score: u32, length: usize) -> Score;
}

/// Tile values only; the position score is always 0
#[derive(Debug, Clone, Copy, Default)]
pub struct TileScoring;

impl ScoringPolicy for TileScoring {
    fn score(&self, tile_score: u32, _length: usize) -> Score {
        Score::new(tile_score, 0)
    }
}

/// Tile values plus the length-position bonus
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionScoring;

impl ScoringPolicy for PositionScoring {
    fn score(&self, tile_score: u32, length: usize) -> Score {
        Score::new(tile_score, position_score(length))
    }
}

/// Enum wrapper over the scoring policies
///
/// Allows selecting the policy at runtime while keeping static dispatch.
#[derive(Debug, Clone, Copy)]
pub enum ScoringType {
    Tile(TileScoring),
    Position(PositionScoring),
}

impl ScoringPolicy for ScoringType {
    fn score(&self, tile_score: u32, length: usize) -> Score {
        match self {
            Self::Tile(s) => s.score(tile_score, length),
            Self::Position(s) => s.score(tile_score, length),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_values_match_table() {
        for letter in b"AEILNORSTU" {
            assert_eq!(tile_value(*letter), 1, "{}", *letter as char);
        }
        for letter in b"DG" {
            assert_eq!(tile_value(*letter), 2);
        }
        for letter in b"BCMP" {
            assert_eq!(tile_value(*letter), 3);
        }
        for letter in b"FHVWY" {
            assert_eq!(tile_value(*letter), 4);
        }
        assert_eq!(tile_value(b'K'), 5);
        assert_eq!(tile_value(b'J'), 8);
        assert_eq!(tile_value(b'X'), 8);
        assert_eq!(tile_value(b'Q'), 10);
        assert_eq!(tile_value(b'Z'), 10);
    }

    #[test]
    fn tile_value_of_non_letters_is_zero() {
        assert_eq!(tile_value(b'*'), 0);
        assert_eq!(tile_value(b'a'), 0);
    }

    #[test]
    fn position_bonus_thresholds() {
        let expected = [
            (1, 0),
            (4, 0),
            (5, 5),
            (7, 5),
            (8, 10),
            (9, 10),
            (10, 15),
            (11, 15),
            (12, 20),
            (14, 20),
            (15, 25),
            (17, 25),
            (18, 30),
            (19, 40),
            (20, 50),
            (31, 50),
        ];
        for (position, bonus) in expected {
            assert_eq!(position_bonus(position), bonus, "position {position}");
        }
    }

    #[test]
    fn position_score_accumulates() {
        assert_eq!(position_score(0), 0);
        assert_eq!(position_score(4), 0);
        assert_eq!(position_score(5), 5);
        assert_eq!(position_score(7), 15);
        assert_eq!(position_score(8), 25);
        assert_eq!(position_score(11), 65);
        assert_eq!(position_score(15), 150);
        assert_eq!(position_score(18), 230);
        assert_eq!(position_score(19), 270);
        assert_eq!(position_score(20), 320);
        assert_eq!(position_score(21), 370);
    }

    #[test]
    fn position_score_grows_with_length() {
        for length in 1..30 {
            assert!(position_score(length + 1) >= position_score(length));
        }
    }

    #[test]
    fn tile_scoring_ignores_length() {
        let score = TileScoring.score(9, 12);
        assert_eq!(score, Score::new(9, 0));
        assert_eq!(score.combined, 9);
    }

    #[test]
    fn position_scoring_adds_bonus() {
        let score = ScoringType::Position(PositionScoring).score(9, 6);
        assert_eq!(score.tile, 9);
        assert_eq!(score.position, 10);
        assert_eq!(score.combined, 19);
    }
}
