//! Search form state
//!
//! Holds what the user has typed so far and turns it into a `Query`. The
//! toggles here only change how queries are built, never how they match.

use super::query::{MAX_AVAILABLE_LETTERS, PositionConstraint, Query};
use super::state::SearchState;
use crate::dictionary::Dictionary;
use crate::matcher;

/// Number of position constraint slots offered
pub const CONSTRAINT_SLOTS: usize = 6;

/// Minimum length the form starts with
pub const DEFAULT_FORM_MIN: usize = 3;

/// Maximum length the form starts with
pub const DEFAULT_FORM_MAX: usize = 6;

/// Longest word length the form lets a user pick
const FORM_LENGTH_LIMIT: usize = 6;

/// Editable search inputs plus the result of the last search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    letters: String,
    min_length: usize,
    max_length: usize,
    constraints: [Option<char>; CONSTRAINT_SLOTS],
    sync_lengths: bool,
    clear_constraints_after_search: bool,
    state: SearchState,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self::new(false, false)
    }
}

impl SearchForm {
    /// Create an empty form with the given toggle preferences
    #[must_use]
    pub fn new(sync_lengths: bool, clear_constraints_after_search: bool) -> Self {
        let mut form = Self {
            letters: String::new(),
            min_length: DEFAULT_FORM_MIN,
            max_length: DEFAULT_FORM_MAX,
            constraints: [None; CONSTRAINT_SLOTS],
            sync_lengths: false,
            clear_constraints_after_search,
            state: SearchState::NotSearched,
        };
        if sync_lengths {
            form.toggle_sync_lengths();
        }
        form
    }

    /// Letters as displayed (upper-case)
    #[must_use]
    pub fn letters(&self) -> &str {
        &self.letters
    }

    #[must_use]
    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    #[must_use]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }

    /// Constraint character in a 1-indexed slot
    #[must_use]
    pub fn constraint(&self, position: usize) -> Option<char> {
        position
            .checked_sub(1)
            .and_then(|i| self.constraints.get(i).copied().flatten())
    }

    /// All constraint slots, index 0 being position 1
    #[must_use]
    pub const fn constraint_slots(&self) -> &[Option<char>; CONSTRAINT_SLOTS] {
        &self.constraints
    }

    #[must_use]
    pub const fn sync_lengths(&self) -> bool {
        self.sync_lengths
    }

    #[must_use]
    pub const fn clear_constraints_after_search(&self) -> bool {
        self.clear_constraints_after_search
    }

    #[must_use]
    pub const fn state(&self) -> &SearchState {
        &self.state
    }

    /// Replace the letters, keeping at most six and upper-casing them
    pub fn set_letters(&mut self, input: &str) {
        self.letters = input
            .chars()
            .filter(|c| !c.is_whitespace())
            .take(MAX_AVAILABLE_LETTERS)
            .map(|c| c.to_ascii_uppercase())
            .collect();
    }

    /// Append one letter if there is room
    pub fn push_letter(&mut self, letter: char) {
        if !letter.is_whitespace() && self.letters.chars().count() < MAX_AVAILABLE_LETTERS {
            self.letters.push(letter.to_ascii_uppercase());
        }
    }

    pub fn pop_letter(&mut self) {
        self.letters.pop();
    }

    /// Set the lower bound; with sync on the upper bound follows
    pub fn set_min_length(&mut self, length: usize) {
        let length = length.clamp(1, FORM_LENGTH_LIMIT);
        self.min_length = length;
        if self.sync_lengths {
            self.max_length = length;
        }
    }

    /// Set the upper bound; with sync on the lower bound follows
    pub fn set_max_length(&mut self, length: usize) {
        let length = length.clamp(1, FORM_LENGTH_LIMIT);
        self.max_length = length;
        if self.sync_lengths {
            self.min_length = length;
        }
    }

    /// Set a constraint slot from raw input
    ///
    /// Only the last character typed is kept, lower-cased. Blank input clears
    /// the slot. Positions outside 1..=6 are ignored.
    pub fn set_constraint(&mut self, position: usize, input: &str) {
        let Some(slot) = position
            .checked_sub(1)
            .and_then(|i| self.constraints.get_mut(i))
        else {
            return;
        };
        *slot = PositionConstraint::from_input(position, input).map(|c| c.character());
    }

    pub fn clear_constraints(&mut self) {
        self.constraints = [None; CONSTRAINT_SLOTS];
    }

    /// Reset every input and forget the last search
    ///
    /// Toggle preferences are kept.
    pub fn clear_all(&mut self) {
        self.letters.clear();
        self.min_length = DEFAULT_FORM_MIN;
        self.max_length = DEFAULT_FORM_MAX;
        self.clear_constraints();
        self.state = SearchState::NotSearched;
    }

    /// Flip "keep min/max equal"; turning it on pulls max down to min
    pub fn toggle_sync_lengths(&mut self) {
        self.sync_lengths = !self.sync_lengths;
        if self.sync_lengths {
            self.max_length = self.min_length;
        }
    }

    pub fn toggle_clear_after_search(&mut self) {
        self.clear_constraints_after_search = !self.clear_constraints_after_search;
    }

    /// Build the engine query for the current inputs
    ///
    /// Empty constraint slots are left out.
    #[must_use]
    pub fn to_query(&self) -> Query {
        Query::new(self.letters.as_str())
            .with_lengths(self.min_length, self.max_length)
            .with_constraints(
                self.constraints
                    .iter()
                    .enumerate()
                    .filter_map(|(i, slot)| slot.map(|c| PositionConstraint::new(i + 1, c))),
            )
    }

    /// Run the current query and store the sorted results
    ///
    /// Returns the number of matches.
    pub fn search(&mut self, dictionary: &Dictionary) -> usize {
        let query = self.to_query();
        let results: Vec<String> = matcher::search(dictionary, &query)
            .into_iter()
            .map(str::to_string)
            .collect();
        let count = results.len();
        self.state = SearchState::Searched(results);

        if self.clear_constraints_after_search {
            self.clear_constraints();
        }

        count
    }

    /// Results joined for the clipboard
    #[must_use]
    pub fn copy_text(&self) -> String {
        self.state.results().join(", ")
    }
}
