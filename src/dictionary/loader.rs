//! Cached dictionary loading
//!
//! The first `load` fetches and normalizes the word list; later calls hand
//! out the same `Arc` without touching the source again.

use super::Dictionary;
use super::error::LoadError;
use super::source::WordSource;
use log::{debug, info, trace};
use std::sync::{Arc, Mutex, PoisonError};

/// Loads a dictionary from a source at most once
///
/// The cache lock is held for the whole fetch, so callers that arrive while
/// a fetch is running wait for it and share its result.
#[derive(Debug)]
pub struct DictionaryLoader<S> {
    source: S,
    cache: Mutex<Option<Arc<Dictionary>>>,
}

impl<S> DictionaryLoader<S> {
    /// Create a loader that has not fetched anything yet
    pub const fn new(source: S) -> Self {
        Self {
            source,
            cache: Mutex::new(None),
        }
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Whether a dictionary is already cached
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl<S: WordSource> DictionaryLoader<S> {
    /// Return the cached dictionary, fetching it on first use
    ///
    /// A failed fetch is reported and nothing is cached.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the source cannot produce the word list.
    pub fn load(&self) -> Result<Arc<Dictionary>, LoadError> {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(dictionary) = cache.as_ref() {
            trace!("Dictionary cache hit ({} words)", dictionary.len());
            return Ok(Arc::clone(dictionary));
        }

        let name = self.source.describe();
        debug!("Fetching dictionary from {name}");
        let raw = self.source.fetch()?;

        let dictionary = Arc::new(Dictionary::parse(&raw));
        info!("Loaded {} words from {name}", dictionary.len());

        *cache = Some(Arc::clone(&dictionary));
        Ok(dictionary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::StaticSource;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use std::time::Duration;

    /// Source that counts fetches and can be told to fail
    struct CountingSource {
        text: &'static str,
        fail: bool,
        fetches: AtomicUsize,
    }

    impl CountingSource {
        fn new(text: &'static str) -> Self {
            Self {
                text,
                fail: false,
                fetches: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::new("")
            }
        }

        fn fetches(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }
    }

    impl WordSource for CountingSource {
        fn fetch(&self) -> Result<String, LoadError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            // Widen the window for overlapping callers
            thread::sleep(Duration::from_millis(5));
            if self.fail {
                Err(LoadError::Unavailable("offline".to_string()))
            } else {
                Ok(self.text.to_string())
            }
        }

        fn describe(&self) -> String {
            "counting source".to_string()
        }
    }

    #[test]
    fn load_normalizes_lines() {
        let loader = DictionaryLoader::new(StaticSource::new("  Cat \r\n\nDOG\n  \nbird"));
        let dictionary = loader.load().unwrap();
        assert_eq!(dictionary.words(), ["cat", "dog", "bird"]);
    }

    #[test]
    fn second_load_uses_cache() {
        let loader = DictionaryLoader::new(CountingSource::new("cat\ndog"));
        assert!(!loader.is_loaded());

        let first = loader.load().unwrap();
        let second = loader.load().unwrap();

        assert_eq!(loader.source().fetches(), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert!(loader.is_loaded());
    }

    #[test]
    fn concurrent_loads_fetch_once() {
        let loader = DictionaryLoader::new(CountingSource::new("cat\ndog\nart"));

        let results: Vec<Arc<Dictionary>> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8).map(|_| scope.spawn(|| loader.load())).collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap().unwrap())
                .collect()
        });

        assert_eq!(loader.source().fetches(), 1);
        assert!(results.iter().all(|d| Arc::ptr_eq(d, &results[0])));
        assert_eq!(results[0].len(), 3);
    }

    #[test]
    fn failed_load_is_not_cached() {
        let loader = DictionaryLoader::new(CountingSource::failing());

        let err = loader.load().unwrap_err();
        assert!(matches!(err, LoadError::Unavailable(_)));
        assert!(!loader.is_loaded());

        // A later call goes back to the source instead of returning stale data
        assert!(loader.load().is_err());
        assert_eq!(loader.source().fetches(), 2);
    }
}
