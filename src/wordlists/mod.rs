//! Dictionaries for rack queries
//!
//! Provides the embedded default dictionary and loading of custom word lists.

mod embedded;
pub mod loader;

pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_count_matches_const() {
        assert_eq!(DEFAULT_WORDS.len(), DEFAULT_WORDS_COUNT);
    }

    #[test]
    fn default_words_are_uppercase_ascii() {
        for &word in DEFAULT_WORDS {
            assert!(!word.is_empty());
            assert!(
                word.bytes().all(|b| b.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn default_words_cover_common_lengths() {
        for length in 4..=12 {
            assert!(
                DEFAULT_WORDS.iter().any(|w| w.len() == length),
                "no {length}-letter word in the default dictionary"
            );
        }
    }

    #[test]
    fn default_words_contain_examples() {
        for word in ["CATS", "CATTLE", "TACO"] {
            assert!(DEFAULT_WORDS.contains(&word), "missing {word}");
        }
    }
}
