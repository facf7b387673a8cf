//! The string-rotation puzzle.
//!
//! Transform a start word into an end word of the same length, one letter per
//! move. Each move rotates a single position forward or backward in the
//! alphabet, wrapping between 'A' and 'Z'.

use thiserror::Error;

use crate::configuration::Configuration;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StringsConfigError {
    #[error("Start '{start}' and end '{end}' differ in length")]
    LengthMismatch { start: String, end: String },
    #[error("Invalid character {0:?}, expected 'A'..='Z'")]
    InvalidCharacter(char),
}

/// The next letter, wrapping 'Z' back to 'A'.
fn next_letter(ch: char) -> char {
    if ch == 'Z' { 'A' } else { (ch as u8 + 1) as char }
}

/// The previous letter, wrapping 'A' back to 'Z'.
fn prev_letter(ch: char) -> char {
    if ch == 'A' { 'Z' } else { (ch as u8 - 1) as char }
}

/// A single state of the strings puzzle.
///
/// Only `current` evolves across moves. The target is carried along so that a
/// configuration is self-contained, and within one puzzle every configuration
/// shares it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StringsConfig {
    current: String,
    end: String,
}

impl StringsConfig {
    /// Builds the start configuration after validating both words.
    pub fn new(start: &str, end: &str) -> Result<Self, StringsConfigError> {
        if start.chars().count() != end.chars().count() {
            return Err(StringsConfigError::LengthMismatch {
                start: start.to_owned(),
                end: end.to_owned(),
            });
        }
        if let Some(ch) = start
            .chars()
            .chain(end.chars())
            .find(|ch| !ch.is_ascii_uppercase())
        {
            return Err(StringsConfigError::InvalidCharacter(ch));
        }

        Ok(Self {
            current: start.to_owned(),
            end: end.to_owned(),
        })
    }

    /// Copies `self` with the letter at `index` stepped by `step`.
    #[must_use]
    fn rotated(&self, index: usize, step: fn(char) -> char) -> Self {
        let current = self
            .current
            .chars()
            .enumerate()
            .map(|(i, ch)| if i == index { step(ch) } else { ch })
            .collect();

        Self {
            current,
            end: self.end.clone(),
        }
    }
}

impl Configuration for StringsConfig {
    fn is_goal(&self) -> bool {
        self.current == self.end
    }

    /// Per position, the forward rotation then the backward one.
    fn neighbours(&self) -> Vec<Self> {
        let len = self.current.chars().count();
        let mut successors = Vec::with_capacity(2 * len);
        for index in 0..len {
            successors.push(self.rotated(index, next_letter));
            successors.push(self.rotated(index, prev_letter));
        }
        successors
    }
}

impl std::fmt::Display for StringsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::solve;

    #[test]
    fn rejects_mismatched_lengths() {
        assert!(matches!(
            StringsConfig::new("AB", "XYZ"),
            Err(StringsConfigError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn rejects_lowercase_and_punctuation() {
        assert_eq!(
            StringsConfig::new("Ab", "XY"),
            Err(StringsConfigError::InvalidCharacter('b'))
        );
        assert_eq!(
            StringsConfig::new("AB", "X!"),
            Err(StringsConfigError::InvalidCharacter('!'))
        );
    }

    #[test]
    fn rotations_come_in_position_order() {
        let config = StringsConfig::new("AA", "AC").unwrap();

        assert_eq!(
            config.neighbours(),
            vec![
                StringsConfig::new("BA", "AC").unwrap(),
                StringsConfig::new("ZA", "AC").unwrap(),
                StringsConfig::new("AB", "AC").unwrap(),
                StringsConfig::new("AZ", "AC").unwrap(),
            ]
        );
    }

    #[test]
    fn rotation_wraps_around_the_alphabet() {
        let config = StringsConfig::new("Z", "M").unwrap();

        assert_eq!(
            config.neighbours(),
            vec![
                StringsConfig::new("A", "M").unwrap(),
                StringsConfig::new("Y", "M").unwrap(),
            ]
        );
    }

    #[test]
    fn matching_words_are_already_solved() {
        let solution = solve(StringsConfig::new("FROG", "FROG").unwrap());

        assert!(solution.already_solved());
        assert_eq!(solution.stats.total, 1);
        assert_eq!(solution.stats.unique, 1);
    }

    #[test]
    fn climbs_the_shortest_ladder() {
        let solution = solve(StringsConfig::new("AA", "AC").unwrap());

        assert_eq!(solution.moves(), 2);
        assert_eq!(
            solution.path,
            vec![
                StringsConfig::new("AA", "AC").unwrap(),
                StringsConfig::new("AB", "AC").unwrap(),
                StringsConfig::new("AC", "AC").unwrap(),
            ]
        );
        assert!(solution.stats.unique <= solution.stats.total);
    }

    #[test]
    fn displays_the_current_word_only() {
        let config = StringsConfig::new("HIP", "HOP").unwrap();

        assert_eq!(config.to_string(), "HIP");
    }
}
