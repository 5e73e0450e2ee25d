//! Word list loading utilities
//!
//! Reads newline-delimited word lists into the uppercase word sequence the
//! engine consumes. Entries are trimmed and uppercased; blank lines are skipped.
//! Nothing else is filtered, duplicates included.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Error type for word list loading
#[derive(Debug, Error)]
pub enum WordlistError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Normalize the lines of a word list
///
/// # Examples
/// ```
/// use wordrack::wordlists::loader::words_from_text;
///
/// let words = words_from_text("cats\n  Taco \n\nCATTLE\r\n");
/// assert_eq!(words, vec!["CATS", "TACO", "CATTLE"]);
/// ```
#[must_use]
pub fn words_from_text(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_ascii_uppercase())
            }
        })
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns `WordlistError::Io` if the file cannot be opened or is not UTF-8.
///
/// # Examples
/// ```no_run
/// use wordrack::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordlistError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordlistError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_text(&content);
    info!(path = %path.display(), words = words.len(), "loaded word list");
    Ok(words)
}

/// Convert an embedded string slice to owned words
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}
