//! Word matching
//!
//! Filters a dictionary against a query and orders the results.

mod engine;

pub use engine::{filter_words, filter_words_par, matches, result_order, search, sort_matches};
