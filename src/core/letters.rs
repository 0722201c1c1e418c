//! Available-letter multiset
//!
//! A `LetterPool` records how many times each letter may be used. It is built
//! once per query and consulted for every candidate word.

use rustc_hash::FxHashMap;

/// Multiset of letters a word may draw from
///
/// Each occurrence in the source string allows one use of that letter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterPool {
    counts: FxHashMap<char, u32>,
}

impl LetterPool {
    /// Build a pool from a letter string, ASCII case-folded
    ///
    /// # Examples
    /// ```
    /// use word_puzzle_solver::core::LetterPool;
    ///
    /// let pool = LetterPool::new("AEIOT");
    /// assert!(pool.can_spell("iota"));
    /// assert!(!pool.can_spell("tatoo"));
    /// ```
    #[must_use]
    pub fn new(letters: &str) -> Self {
        let mut counts = FxHashMap::default();
        for ch in letters.chars().map(|c| c.to_ascii_lowercase()) {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// How many uses of a letter the pool allows
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> u32 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of letters in the pool
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.values().map(|&n| n as usize).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Check whether every character of `word` can be drawn from the pool
    ///
    /// Characters are consumed left to right; the first one with no remaining
    /// uses rejects the word. The pool itself is left untouched.
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut remaining = self.counts.clone();
        for ch in word.chars() {
            match remaining.get_mut(&ch) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return false,
            }
        }
        true
    }
}
