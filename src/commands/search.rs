//! One-shot search command
//!
//! Validates a query built from command line arguments and runs it.

use crate::core::{
    DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, PositionConstraint, Query, QueryError,
};
use crate::dictionary::Dictionary;
use crate::matcher;
use std::time::{Duration, Instant};

/// Inputs for a single search
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    pub letters: String,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub constraints: Vec<PositionConstraint>,
}

impl SearchConfig {
    #[must_use]
    pub fn new(letters: impl Into<String>) -> Self {
        Self {
            letters: letters.into(),
            ..Self::default()
        }
    }

    /// Build the query, filling unset bounds with defaults
    ///
    /// Blank constraints are dropped here so the engine never sees them.
    #[must_use]
    pub fn to_query(&self) -> Query {
        Query::new(self.letters.as_str())
            .with_lengths(
                self.min_length.unwrap_or(DEFAULT_MIN_LENGTH),
                self.max_length.unwrap_or(DEFAULT_MAX_LENGTH),
            )
            .with_constraints(self.constraints.iter().copied().filter(|c| !c.is_blank()))
    }
}

/// Result of a search
pub struct SearchReport {
    pub query: Query,
    pub matches: Vec<String>,
    pub dictionary_size: usize,
    pub duration: Duration,
}

/// Validate and run a search
///
/// # Errors
///
/// Returns `QueryError` if the query fails validation (inverted length range,
/// too many letters, constraint position out of range).
pub fn run_search(
    dictionary: &Dictionary,
    config: &SearchConfig,
) -> Result<SearchReport, QueryError> {
    let query = config.to_query();
    query.validate()?;

    let start = Instant::now();
    let matches = matcher::search(dictionary, &query)
        .into_iter()
        .map(str::to_string)
        .collect();
    let duration = start.elapsed();

    Ok(SearchReport {
        query,
        matches,
        dictionary_size: dictionary.len(),
        duration,
    })
}
