//! Dictionary loading and storage
//!
//! Provides the normalized word list, the sources it can come from and a
//! loader that fetches it once and caches it.

mod embedded;
mod error;
mod loader;
mod source;

pub use embedded::{WORDS, WORDS_COUNT};
pub use error::LoadError;
pub use loader::DictionaryLoader;
pub use source::{EmbeddedSource, FileSource, StaticSource, WordSource};

use std::sync::Arc;

/// Ordered, immutable list of lower-case words
///
/// Duplicates are kept and entries are not checked for alphabetic content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Parse newline-delimited text
    ///
    /// Each line is trimmed and lower-cased; blank lines are dropped.
    ///
    /// # Examples
    /// ```
    /// use word_puzzle_solver::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::parse("Cat\n\n  dog  \r\nart\nart");
    /// assert_eq!(dictionary.words(), ["cat", "dog", "art", "art"]);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self::from_words(raw.lines())
    }

    /// Build a dictionary from individual entries, normalized like `parse`
    #[must_use]
    pub fn from_words<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = entries
            .into_iter()
            .filter_map(|entry| {
                let trimmed = entry.as_ref().trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_lowercase())
                }
            })
            .collect();

        Self { words }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Length of the longest entry, in characters
    #[must_use]
    pub fn longest_word(&self) -> usize {
        self.iter().map(|w| w.chars().count()).max().unwrap_or(0)
    }
}

static DEFAULT_LOADER: DictionaryLoader<EmbeddedSource> = DictionaryLoader::new(EmbeddedSource);

/// Load the embedded dictionary, cached for the rest of the process
///
/// # Errors
///
/// The embedded source cannot fail; the `Result` keeps the signature in
/// line with other loaders.
pub fn load_default() -> Result<Arc<Dictionary>, LoadError> {
    DEFAULT_LOADER.load()
}
