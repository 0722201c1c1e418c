//! Word matching engine
//!
//! Runs each dictionary word through three gates: length, letter
//! availability and positional constraints. Every function here is pure.

use crate::core::{LetterPool, Query};
use crate::dictionary::Dictionary;
use rayon::prelude::*;
use std::cmp::Ordering;

/// Decide whether one word satisfies a query
///
/// `pool` must be the `LetterPool` built from the query's letters.
#[must_use]
pub fn matches(word: &str, query: &Query, pool: &LetterPool) -> bool {
    let length = word.chars().count();
    if length < query.min_length() || length > query.max_length() {
        return false;
    }

    if !pool.can_spell(word) {
        return false;
    }

    query
        .constraints()
        .iter()
        .filter(|c| !c.is_blank())
        .all(|c| {
            c.position()
                .checked_sub(1)
                .and_then(|index| word.chars().nth(index))
                .is_some_and(|ch| ch.to_ascii_lowercase() == c.character())
        })
}

/// Words matching the query, in dictionary order
///
/// # Examples
/// ```
/// use word_puzzle_solver::core::Query;
/// use word_puzzle_solver::dictionary::Dictionary;
/// use word_puzzle_solver::matcher::filter_words;
///
/// let dictionary = Dictionary::from_words(["cat", "tact", "act"]);
/// let query = Query::new("CAT");
/// assert_eq!(filter_words(&dictionary, &query), ["cat", "act"]);
/// ```
#[must_use]
pub fn filter_words<'a>(dictionary: &'a Dictionary, query: &Query) -> Vec<&'a str> {
    let pool = LetterPool::new(query.available_letters());
    dictionary
        .iter()
        .filter(|word| matches(word, query, &pool))
        .collect()
}

/// Same result as `filter_words`, with the gates evaluated on the rayon pool
#[must_use]
pub fn filter_words_par<'a>(dictionary: &'a Dictionary, query: &Query) -> Vec<&'a str> {
    let pool = LetterPool::new(query.available_letters());
    dictionary
        .words()
        .par_iter()
        .map(String::as_str)
        .filter(|word| matches(word, query, &pool))
        .collect()
}

/// Result ordering: shorter words first, then alphabetical
#[must_use]
pub fn result_order(a: &str, b: &str) -> Ordering {
    a.chars()
        .count()
        .cmp(&b.chars().count())
        .then_with(|| a.cmp(b))
}

/// Sort matches by length, then lexicographically
pub fn sort_matches(words: &mut [&str]) {
    words.sort_by(|a, b| result_order(a, b));
}

/// Filter then sort: the list a caller presents
#[must_use]
pub fn search<'a>(dictionary: &'a Dictionary, query: &Query) -> Vec<&'a str> {
    let mut words = filter_words(dictionary, query);
    sort_matches(&mut words);
    log::debug!(
        "Query {:?} len {}..={} with {} constraint(s): {} match(es)",
        query.available_letters(),
        query.min_length(),
        query.max_length(),
        query.constraints().len(),
        words.len()
    );
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PositionConstraint;

    fn setup_dictionary() -> Dictionary {
        Dictionary::from_words(["cat", "car", "art", "rat", "art", "stare"])
    }

    #[test]
    fn letter_gate_end_to_end() {
        let dictionary = setup_dictionary();
        let query = Query::new("CRAT").with_lengths(3, 3);

        assert_eq!(
            search(&dictionary, &query),
            ["art", "art", "car", "cat", "rat"]
        );
    }

    #[test]
    fn filter_keeps_dictionary_order() {
        let dictionary = setup_dictionary();
        let query = Query::new("crat").with_lengths(3, 3);

        assert_eq!(
            filter_words(&dictionary, &query),
            ["cat", "car", "art", "rat", "art"]
        );
    }

    #[test]
    fn length_gate_boundaries() {
        let dictionary = Dictionary::from_words(["ta", "tea", "teas", "steak", "streak"]);
        let query = Query::new("streaks").with_lengths(3, 5);

        assert_eq!(filter_words(&dictionary, &query), ["tea", "teas", "steak"]);
    }

    #[test]
    fn inverted_length_range_is_empty() {
        let dictionary = setup_dictionary();
        let query = Query::new("crat").with_lengths(4, 3);
        assert!(filter_words(&dictionary, &query).is_empty());
    }

    #[test]
    fn empty_letters_match_nothing() {
        let dictionary = setup_dictionary();
        assert!(filter_words(&dictionary, &Query::new("")).is_empty());
    }

    #[test]
    fn multiset_exhaustion() {
        let dictionary = Dictionary::from_words(["tao", "tata", "iota", "toot"]);
        let query = Query::new("AEIOT");
        assert_eq!(filter_words(&dictionary, &query), ["tao", "iota"]);
    }

    #[test]
    fn repeated_letters_match_when_available() {
        let dictionary = Dictionary::from_words(["tata", "tat"]);
        let query = Query::new("ttaa");
        assert_eq!(filter_words(&dictionary, &query), ["tata", "tat"]);
    }

    #[test]
    fn position_constraint_pins_character() {
        let dictionary = setup_dictionary();
        let query = Query::new("crat").with_lengths(3, 3).with_constraint(1, 'C');

        assert_eq!(search(&dictionary, &query), ["car", "cat"]);
    }

    #[test]
    fn multiple_constraints_all_apply() {
        let dictionary = setup_dictionary();
        let query = Query::new("crat")
            .with_constraint(1, 'c')
            .with_constraint(3, 't');

        assert_eq!(search(&dictionary, &query), ["cat"]);
    }

    #[test]
    fn constraint_beyond_word_length_rejects() {
        let dictionary = Dictionary::from_words(["at", "tea", "teat"]);
        let query = Query::new("aeitt").with_constraint(4, 't');

        assert_eq!(filter_words(&dictionary, &query), ["teat"]);
    }

    #[test]
    fn constraint_position_zero_rejects() {
        let dictionary = setup_dictionary();
        let query = Query::new("crat").with_constraint(0, 'c');
        assert!(filter_words(&dictionary, &query).is_empty());
    }

    #[test]
    fn blank_constraint_pins_nothing() {
        let dictionary = setup_dictionary();
        let query = Query::new("crat")
            .with_lengths(3, 3)
            .with_constraints([PositionConstraint::new(2, ' ')]);

        assert_eq!(filter_words(&dictionary, &query).len(), 5);
    }

    #[test]
    fn case_insensitive_letters() {
        let dictionary = setup_dictionary();
        let upper = search(&dictionary, &Query::new("AEIOTRSC"));
        let lower = search(&dictionary, &Query::new("aeiotrsc"));
        assert_eq!(upper, lower);
    }

    #[test]
    fn parallel_filter_matches_sequential() {
        let dictionary = Dictionary::parse(crate::dictionary::WORDS);
        let query = Query::new("stare").with_lengths(2, 5).with_constraint(1, 's');

        assert_eq!(
            filter_words_par(&dictionary, &query),
            filter_words(&dictionary, &query)
        );
    }

    #[test]
    fn sort_length_then_alpha() {
        let mut words = vec!["stare", "rat", "at", "art", "tears"];
        sort_matches(&mut words);
        assert_eq!(words, ["at", "art", "rat", "stare", "tears"]);
    }

    #[test]
    fn matches_single_word() {
        let query = Query::new("crat").with_lengths(3, 4);
        let pool = LetterPool::new(query.available_letters());

        assert!(matches("cart", &query, &pool));
        assert!(!matches("carts", &query, &pool));
        assert!(!matches("ca", &query, &pool));
    }
}
