//! Command implementations

pub mod benchmark;
pub mod search;
pub mod simple;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use search::{SearchConfig, SearchReport, run_search};
pub use simple::run_simple;
