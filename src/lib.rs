//! Word Puzzle Solver
//!
//! Finds dictionary words that can be built from a small set of available
//! letters, within length bounds and with optional fixed-position letters.
//!
//! # Quick Start
//!
//! ```rust
//! use word_puzzle_solver::core::Query;
//! use word_puzzle_solver::dictionary::Dictionary;
//! use word_puzzle_solver::matcher::search;
//!
//! let dictionary = Dictionary::parse("cat\ncar\nart\nrat\nstare");
//! let query = Query::new("CRAT").with_lengths(3, 3);
//!
//! assert_eq!(search(&dictionary, &query), ["art", "car", "cat", "rat"]);
//! ```

// Core domain types
pub mod core;

// Word list sources and cached loading
pub mod dictionary;

// Matching engine
pub mod matcher;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod log;
