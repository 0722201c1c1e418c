//! Dictionary loading errors

use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain the raw word list
///
/// Loading is never retried internally and never falls back to stale data.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The word list file could not be read.
    #[error("Failed to read dictionary {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A source had no text to give.
    #[error("Dictionary source unavailable: {0}")]
    Unavailable(String),
}
