//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod clipboard;
pub mod display;
pub mod formatters;

pub use display::{print_benchmark_result, print_results, print_search_report};
