//! Search query representation
//!
//! A `Query` carries the available letters, the inclusive length bounds and
//! any fixed-position character constraints for one search.

use thiserror::Error;

/// Default lower length bound when none is given
pub const DEFAULT_MIN_LENGTH: usize = 1;

/// Default upper length bound when none is given
pub const DEFAULT_MAX_LENGTH: usize = 6;

/// Largest number of available letters a well-formed query carries
pub const MAX_AVAILABLE_LETTERS: usize = 6;

/// Requirement that the character at a 1-indexed position equals a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionConstraint {
    position: usize,
    character: char,
}

impl PositionConstraint {
    /// Create a constraint for a 1-indexed position
    ///
    /// The character is ASCII case-folded. Position 0 is accepted here and
    /// simply never matches.
    #[must_use]
    pub const fn new(position: usize, character: char) -> Self {
        Self {
            position,
            character: character.to_ascii_lowercase(),
        }
    }

    /// Build a constraint from raw user input, skipping blank entries
    ///
    /// Only the last character typed counts, mirroring a one-character input
    /// box. Returns `None` when the input is empty or whitespace.
    ///
    /// # Examples
    /// ```
    /// use word_puzzle_solver::core::PositionConstraint;
    ///
    /// let c = PositionConstraint::from_input(2, "xA").unwrap();
    /// assert_eq!(c.character(), 'a');
    /// assert!(PositionConstraint::from_input(2, "  ").is_none());
    /// ```
    #[must_use]
    pub fn from_input(position: usize, input: &str) -> Option<Self> {
        let ch = input.trim().chars().next_back()?;
        Some(Self::new(position, ch))
    }

    /// The 1-indexed position this constraint pins
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// The lower-cased character required at the position
    #[inline]
    #[must_use]
    pub const fn character(&self) -> char {
        self.character
    }

    /// Whether this constraint actually pins anything
    #[inline]
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.character.is_whitespace()
    }
}

/// Parse `P=C` (or `P:C`) into a constraint
///
/// Used by the command line `--constraint` flag.
impl std::str::FromStr for PositionConstraint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (pos, ch) = s
            .split_once(['=', ':'])
            .ok_or_else(|| format!("expected POSITION=LETTER, got '{s}'"))?;
        let position: usize = pos
            .trim()
            .parse()
            .map_err(|e| format!("invalid position '{pos}': {e}"))?;
        let mut chars = ch.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Self::new(position, c)),
            _ => Err(format!("expected a single letter, got '{ch}'")),
        }
    }
}

/// Error type for queries rejected by validation
///
/// The match engine never produces these: it is total over every query
/// shape. Callers validate first when they want a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Minimum length {min} is greater than maximum length {max}")]
    InvalidLengthRange { min: usize, max: usize },

    #[error("Length bounds must be at least 1")]
    ZeroLength,

    #[error("At most 6 letters can be given, got {0}")]
    TooManyLetters(usize),

    #[error("Constraint position {position} is outside 1..={max}")]
    PositionOutOfRange { position: usize, max: usize },
}

/// A single word search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    available_letters: String,
    min_length: usize,
    max_length: usize,
    constraints: Vec<PositionConstraint>,
}

impl Query {
    /// Create a query with default length bounds and no constraints
    ///
    /// # Examples
    /// ```
    /// use word_puzzle_solver::core::Query;
    ///
    /// let query = Query::new("CRAT").with_lengths(3, 3).with_constraint(1, 'c');
    /// assert_eq!(query.available_letters(), "crat");
    /// assert_eq!(query.constraints().len(), 1);
    /// ```
    #[must_use]
    pub fn new(available_letters: impl Into<String>) -> Self {
        Self {
            available_letters: available_letters.into().to_ascii_lowercase(),
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            constraints: Vec::new(),
        }
    }

    /// Set the inclusive length bounds
    #[must_use]
    pub const fn with_lengths(mut self, min_length: usize, max_length: usize) -> Self {
        self.min_length = min_length;
        self.max_length = max_length;
        self
    }

    /// Add a position constraint
    #[must_use]
    pub fn with_constraint(mut self, position: usize, character: char) -> Self {
        self.constraints.push(PositionConstraint::new(position, character));
        self
    }

    /// Replace all constraints
    #[must_use]
    pub fn with_constraints(
        mut self,
        constraints: impl IntoIterator<Item = PositionConstraint>,
    ) -> Self {
        self.constraints = constraints.into_iter().collect();
        self
    }

    /// Available letters, lower-cased
    #[inline]
    #[must_use]
    pub fn available_letters(&self) -> &str {
        &self.available_letters
    }

    #[inline]
    #[must_use]
    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    #[inline]
    #[must_use]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }

    #[inline]
    #[must_use]
    pub fn constraints(&self) -> &[PositionConstraint] {
        &self.constraints
    }

    /// Check the query for shapes a user probably did not intend
    ///
    /// # Errors
    /// Returns `QueryError` if:
    /// - a length bound is 0
    /// - `min_length > max_length`
    /// - more than six letters are given
    /// - a constraint position is 0 or beyond `max_length`
    pub fn validate(&self) -> Result<(), QueryError> {
        if self.min_length == 0 || self.max_length == 0 {
            return Err(QueryError::ZeroLength);
        }

        if self.min_length > self.max_length {
            return Err(QueryError::InvalidLengthRange {
                min: self.min_length,
                max: self.max_length,
            });
        }

        let letter_count = self.available_letters.chars().count();
        if letter_count > MAX_AVAILABLE_LETTERS {
            return Err(QueryError::TooManyLetters(letter_count));
        }

        if let Some(bad) = self
            .constraints
            .iter()
            .find(|c| c.position == 0 || c.position > self.max_length)
        {
            return Err(QueryError::PositionOutOfRange {
                position: bad.position,
                max: self.max_length,
            });
        }

        Ok(())
    }
}

impl Default for Query {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_defaults() {
        let query = Query::new("abc");
        assert_eq!(query.min_length(), 1);
        assert_eq!(query.max_length(), 6);
        assert!(query.constraints().is_empty());
    }

    #[test]
    fn query_letters_case_folded() {
        assert_eq!(Query::new("AeIoT").available_letters(), "aeiot");
    }

    #[test]
    fn constraint_case_folded() {
        let c = PositionConstraint::new(1, 'A');
        assert_eq!(c.character(), 'a');
        assert_eq!(c.position(), 1);
    }

    #[test]
    fn constraint_from_blank_input() {
        assert!(PositionConstraint::from_input(1, "").is_none());
        assert!(PositionConstraint::from_input(1, " ").is_none());
    }

    #[test]
    fn constraint_from_input_keeps_last_char() {
        let c = PositionConstraint::from_input(3, "qZ").unwrap();
        assert_eq!(c.character(), 'z');
    }

    #[test]
    fn constraint_parse() {
        let c: PositionConstraint = "2=T".parse().unwrap();
        assert_eq!(c, PositionConstraint::new(2, 't'));

        let c: PositionConstraint = " 4 : e ".parse().unwrap();
        assert_eq!(c, PositionConstraint::new(4, 'e'));
    }

    #[test]
    fn constraint_parse_invalid() {
        assert!("2".parse::<PositionConstraint>().is_err());
        assert!("x=a".parse::<PositionConstraint>().is_err());
        assert!("2=ab".parse::<PositionConstraint>().is_err());
        assert!("2=".parse::<PositionConstraint>().is_err());
    }

    #[test]
    fn validate_accepts_well_formed() {
        let query = Query::new("aeiot").with_lengths(3, 5).with_constraint(5, 'e');
        assert_eq!(query.validate(), Ok(()));
    }

    #[test]
    fn validate_length_range() {
        let query = Query::new("abc").with_lengths(5, 3);
        assert_eq!(
            query.validate(),
            Err(QueryError::InvalidLengthRange { min: 5, max: 3 })
        );
        assert_eq!(
            Query::new("abc").with_lengths(0, 3).validate(),
            Err(QueryError::ZeroLength)
        );
    }

    #[test]
    fn validate_too_many_letters() {
        assert_eq!(
            Query::new("abcdefg").validate(),
            Err(QueryError::TooManyLetters(7))
        );
    }

    #[test]
    fn validate_constraint_position() {
        let query = Query::new("abc").with_lengths(1, 3).with_constraint(4, 'a');
        assert_eq!(
            query.validate(),
            Err(QueryError::PositionOutOfRange { position: 4, max: 3 })
        );

        let query = Query::new("abc").with_constraint(0, 'a');
        assert!(query.validate().is_err());
    }
}
