//! Benchmark command
//!
//! Times the matching engine over randomly generated queries.

use crate::core::{MAX_AVAILABLE_LETTERS, Query};
use crate::dictionary::Dictionary;
use crate::matcher::{filter_words, filter_words_par};
use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_queries: usize,
    pub dictionary_size: usize,
    pub total_matches: usize,
    pub max_matches: usize,
    pub sequential: Duration,
    pub parallel: Duration,
    pub queries_per_second: f64,
    /// Queries where the parallel filter disagreed with the sequential one
    pub mismatches: usize,
}

/// Generate a random query
///
/// Letters come from a random dictionary word, topped up with random letters
/// to six; lengths and an occasional position constraint are random too.
pub fn random_query<R: Rng>(dictionary: &Dictionary, rng: &mut R) -> Query {
    let mut letters: String = dictionary
        .words()
        .choose(rng)
        .map(|w| w.chars().take(MAX_AVAILABLE_LETTERS).collect())
        .unwrap_or_default();

    while letters.chars().count() < MAX_AVAILABLE_LETTERS {
        letters.push(char::from(rng.random_range(b'a'..=b'z')));
    }

    let min_length = rng.random_range(1..=MAX_AVAILABLE_LETTERS);
    let max_length = rng.random_range(min_length..=MAX_AVAILABLE_LETTERS);
    let mut query = Query::new(letters).with_lengths(min_length, max_length);

    if rng.random_bool(0.3) {
        let position = rng.random_range(1..=max_length);
        let character = query
            .available_letters()
            .chars()
            .nth(position - 1)
            .unwrap_or('e');
        query = query.with_constraint(position, character);
    }

    query
}

/// Run `count` random queries through both filters
///
/// `seed` makes the query set reproducible.
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
pub fn run_benchmark(dictionary: &Dictionary, count: usize, seed: Option<u64>) -> BenchmarkResult {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let queries: Vec<Query> = (0..count)
        .map(|_| random_query(dictionary, &mut rng))
        .collect();

    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut sequential = Duration::ZERO;
    let mut parallel = Duration::ZERO;
    let mut total_matches = 0;
    let mut max_matches = 0;
    let mut mismatches = 0;

    for query in &queries {
        let start = Instant::now();
        let seq_matches = filter_words(dictionary, query);
        sequential += start.elapsed();

        let start = Instant::now();
        let par_matches = filter_words_par(dictionary, query);
        parallel += start.elapsed();

        if seq_matches != par_matches {
            mismatches += 1;
        }

        total_matches += seq_matches.len();
        max_matches = max_matches.max(seq_matches.len());

        pb.set_message(format!("{} → {}", query.available_letters(), seq_matches.len()));
        pb.inc(1);
    }

    pb.finish_and_clear();

    let secs = sequential.as_secs_f64();
    BenchmarkResult {
        total_queries: count,
        dictionary_size: dictionary.len(),
        total_matches,
        max_matches,
        sequential,
        parallel,
        queries_per_second: if secs > 0.0 { count as f64 / secs } else { 0.0 },
        mismatches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WORDS;

    #[test]
    fn random_query_is_well_formed() {
        let dictionary = Dictionary::parse(WORDS);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let query = random_query(&dictionary, &mut rng);
            assert_eq!(query.available_letters().chars().count(), 6);
            assert_eq!(query.validate(), Ok(()));
        }
    }

    #[test]
    fn random_query_on_empty_dictionary() {
        let mut rng = StdRng::seed_from_u64(1);
        let query = random_query(&Dictionary::default(), &mut rng);
        assert_eq!(query.available_letters().len(), 6);
    }

    #[test]
    fn benchmark_runs() {
        let dictionary = Dictionary::parse(WORDS);
        let result = run_benchmark(&dictionary, 20, Some(42));

        assert_eq!(result.total_queries, 20);
        assert_eq!(result.dictionary_size, dictionary.len());
        assert_eq!(result.mismatches, 0);
        assert!(result.max_matches <= result.total_matches);
    }

    #[test]
    fn benchmark_is_reproducible_with_seed() {
        let dictionary = Dictionary::parse(WORDS);
        let first = run_benchmark(&dictionary, 10, Some(3));
        let second = run_benchmark(&dictionary, 10, Some(3));
        assert_eq!(first.total_matches, second.total_matches);
    }

    #[test]
    fn benchmark_zero_queries() {
        let dictionary = Dictionary::parse(WORDS);
        let result = run_benchmark(&dictionary, 0, Some(0));

        assert_eq!(result.total_queries, 0);
        assert_eq!(result.total_matches, 0);
    }
}
