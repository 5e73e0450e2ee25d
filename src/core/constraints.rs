//! Fixed-position letter constraints
//!
//! Sparse map from a 1-indexed word position to the letter required there.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for constraint input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintError {
    #[error("positions start at 1, got 0")]
    ZeroPosition,
    #[error("invalid position '{0}'")]
    InvalidPosition(String),
    #[error("constraint letter must be A-Z, got '{0}'")]
    InvalidLetter(String),
    #[error("constraint must look like POSITION=LETTER (e.g. 1=C), got '{0}'")]
    Malformed(String),
}

/// Letters required at specific positions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionConstraints {
    required: BTreeMap<usize, u8>,
}

impl PositionConstraints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `letter` at 1-indexed `position`, replacing any earlier requirement
    ///
    /// # Errors
    /// Returns an error if `position` is 0 or `letter` is not an ASCII letter.
    pub fn insert(&mut self, position: usize, letter: char) -> Result<(), ConstraintError> {
        if position == 0 {
            return Err(ConstraintError::ZeroPosition);
        }
        if !letter.is_ascii_alphabetic() {
            return Err(ConstraintError::InvalidLetter(letter.to_string()));
        }
        self.required
            .insert(position, letter.to_ascii_uppercase() as u8);
        Ok(())
    }

    pub fn remove(&mut self, position: usize) -> Option<char> {
        self.required.remove(&position).map(char::from)
    }

    /// Parse a list of `POS=LETTER` pairs
    ///
    /// # Errors
    /// Returns the first pair that fails to parse.
    ///
    /// # Examples
    /// ```
    /// use wordrack::core::PositionConstraints;
    ///
    /// let constraints = PositionConstraints::parse_all(["1=C", "4=s"]).unwrap();
    /// assert_eq!(constraints.get(1), Some('C'));
    /// assert_eq!(constraints.get(4), Some('S'));
    /// assert_eq!(constraints.get(2), None);
    /// ```
    pub fn parse_all<'a, I>(pairs: I) -> Result<Self, ConstraintError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut constraints = Self::new();
        for pair in pairs {
            let (position, letter) = parse_pair(pair)?;
            constraints.insert(position, letter)?;
        }
        Ok(constraints)
    }

    /// Required letter at 1-indexed `position`
    #[must_use]
    pub fn get(&self, position: usize) -> Option<char> {
        self.required.get(&position).copied().map(char::from)
    }

    /// Iterate `(position, letter byte)` pairs in ascending position order
    pub fn iter(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.required.iter().map(|(&position, &letter)| (position, letter))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.required.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.required.is_empty()
    }

    pub fn clear(&mut self) {
        self.required.clear();
    }
}

impl FromStr for PositionConstraints {
    type Err = ConstraintError;

    /// Parse a comma separated list such as `1=C,3=T`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_all(s.split(',').map(str::trim).filter(|pair| !pair.is_empty()))
    }
}

impl fmt::Display for PositionConstraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (position, letter) in self.iter() {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{position}={}", letter as char)?;
            first = false;
        }
        Ok(())
    }
}

fn parse_pair(pair: &str) -> Result<(usize, char), ConstraintError> {
    let (position, letter) = pair
        .split_once(['=', ':'])
        .ok_or_else(|| ConstraintError::Malformed(pair.to_string()))?;

    let position = position.trim();
    let position: usize = position
        .parse()
        .map_err(|_| ConstraintError::InvalidPosition(position.to_string()))?;

    let letter = letter.trim();
    let mut chars = letter.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok((position, ch)),
        _ => Err(ConstraintError::InvalidLetter(letter.to_string())),
    }
}
