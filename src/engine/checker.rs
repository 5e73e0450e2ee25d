//! Positional constraint checking

use crate::core::PositionConstraints;

/// Check that `word` has the required letter at every constrained position it reaches
///
/// Positions are 1-indexed. A constrained position beyond the end of the word
/// imposes nothing, so only positions up to `min(word length, max constrained
/// position)` are ever inspected.
///
/// # Examples
/// ```
/// use wordrack::core::PositionConstraints;
/// use wordrack::engine::matches_constraints;
///
/// let constraints: PositionConstraints = "1=C".parse().unwrap();
/// assert!(matches_constraints("CAT", &constraints));
/// assert!(!matches_constraints("DOG", &constraints));
/// ```
#[must_use]
pub fn matches_constraints(word: &str, constraints: &PositionConstraints) -> bool {
    let bytes = word.as_bytes();
    constraints
        .iter()
        .take_while(|&(position, _)| position <= bytes.len())
        .all(|(position, letter)| bytes[position - 1] == letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constraints(list: &str) -> PositionConstraints {
        list.parse().unwrap()
    }

    #[test]
    fn empty_constraints_accept_anything() {
        let none = PositionConstraints::new();
        assert!(matches_constraints("ANYTHING", &none));
        assert!(matches_constraints("", &none));
    }

    #[test]
    fn first_position() {
        let c = constraints("1=C");
        assert!(matches_constraints("CAT", &c));
        assert!(!matches_constraints("DOG", &c));
    }

    #[test]
    fn several_positions_all_required() {
        let c = constraints("1=C,4=S");
        assert!(matches_constraints("CATS", &c));
        assert!(!matches_constraints("CATE", &c));
        assert!(!matches_constraints("BATS", &c));
    }

    #[test]
    fn positions_past_end_are_ignored() {
        let c = constraints("2=A,9=Z");
        assert!(matches_constraints("CATS", &c));
        assert!(!matches_constraints("COTS", &c));
    }

    #[test]
    fn last_position_is_checked() {
        let c = constraints("4=S");
        assert!(matches_constraints("CATS", &c));
        assert!(!matches_constraints("CATE", &c));
        assert!(matches_constraints("CAT", &c));
    }
}
