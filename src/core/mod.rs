//! Core domain types for word searches
//!
//! This module contains the query model, the per-query letter multiset and the
//! form state that turns user input into queries. Nothing here does I/O.

mod form;
mod letters;
mod query;
mod state;

pub use form::{CONSTRAINT_SLOTS, DEFAULT_FORM_MAX, DEFAULT_FORM_MIN, SearchForm};
pub use letters::LetterPool;
pub use query::{
    DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, MAX_AVAILABLE_LETTERS, PositionConstraint, Query,
    QueryError,
};
pub use state::SearchState;
