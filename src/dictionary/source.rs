//! Backing sources for the raw word list
//!
//! A source only produces text. Splitting and normalization belong to the
//! loader.

use super::embedded::WORDS;
use super::error::LoadError;
use std::fs;
use std::path::{Path, PathBuf};

/// Anything that can produce newline-delimited dictionary text
pub trait WordSource {
    /// Fetch the raw text
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the text cannot be obtained.
    fn fetch(&self) -> Result<String, LoadError>;

    /// Short human-readable name used in log lines
    fn describe(&self) -> String;
}

impl<T: WordSource + ?Sized> WordSource for Box<T> {
    fn fetch(&self) -> Result<String, LoadError> {
        (**self).fetch()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// The word list compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl WordSource for EmbeddedSource {
    fn fetch(&self) -> Result<String, LoadError> {
        Ok(WORDS.to_string())
    }

    fn describe(&self) -> String {
        "embedded word list".to_string()
    }
}

/// A word list file on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for FileSource {
    fn fetch(&self) -> Result<String, LoadError> {
        fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Text already held in memory
#[derive(Debug, Clone)]
pub struct StaticSource {
    text: String,
}

impl StaticSource {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl WordSource for StaticSource {
    fn fetch(&self) -> Result<String, LoadError> {
        Ok(self.text.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory list ({} bytes)", self.text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_source_has_text() {
        let text = EmbeddedSource.fetch().unwrap();
        assert!(!text.trim().is_empty());
    }

    #[test]
    fn file_source_missing_file() {
        let source = FileSource::new("definitely/not/here/words.txt");
        let err = source.fetch().unwrap_err();

        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("words.txt"));
    }

    #[test]
    fn file_source_reads_file() {
        let path = std::env::temp_dir().join(format!(
            "word_puzzle_solver_source_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "Cat\ndog\n").unwrap();

        let text = FileSource::new(&path).fetch().unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(text, "Cat\ndog\n");
    }

    #[test]
    fn static_source_round_trips_text() {
        let source = StaticSource::new("a\nb");
        assert_eq!(source.fetch().unwrap(), "a\nb");
        assert!(source.describe().contains("3 bytes"));
    }

    #[test]
    fn boxed_source_delegates() {
        let source: Box<dyn WordSource> = Box::new(StaticSource::new("x"));
        assert_eq!(source.fetch().unwrap(), "x");
    }
}
