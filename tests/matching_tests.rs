use std::collections::HashMap;
use std::fs;
use word_puzzle_solver::core::Query;
use word_puzzle_solver::dictionary::{
    Dictionary, DictionaryLoader, FileSource, LoadError, load_default,
};
use word_puzzle_solver::matcher::{filter_words, result_order, search};

/// Reference check written independently of the engine
fn passes_all_gates(word: &str, query: &Query) -> bool {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() < query.min_length() || chars.len() > query.max_length() {
        return false;
    }

    let mut available: HashMap<char, i32> = HashMap::new();
    for c in query.available_letters().chars() {
        *available.entry(c).or_default() += 1;
    }
    for c in &chars {
        let count = available.entry(*c).or_default();
        *count -= 1;
        if *count < 0 {
            return false;
        }
    }

    query.constraints().iter().all(|c| {
        c.position() >= 1 && chars.get(c.position() - 1) == Some(&c.character())
    })
}

fn sample_queries() -> Vec<Query> {
    vec![
        Query::new("AEIOT"),
        Query::new("stare").with_lengths(5, 5),
        Query::new("STARE").with_lengths(3, 4).with_constraint(1, 'S'),
        Query::new("aeirst").with_constraint(2, 't'),
        Query::new("ratoes").with_lengths(2, 3).with_constraint(3, 'e'),
        Query::new("ttaaoo").with_lengths(1, 6),
        Query::new("abc").with_lengths(6, 1),
        Query::new("aeiot").with_constraint(9, 'a'),
        Query::new(""),
    ]
}

#[test]
fn test_results_are_sound_and_complete() {
    let dictionary = load_default().unwrap();

    for query in sample_queries() {
        let results = filter_words(&dictionary, &query);

        for word in &results {
            assert!(passes_all_gates(word, &query), "{word} wrongly matched {query:?}");
        }

        let expected = dictionary
            .iter()
            .filter(|w| passes_all_gates(w, &query))
            .count();
        assert_eq!(results.len(), expected, "missing matches for {query:?}");
    }
}

#[test]
fn test_search_is_idempotent() {
    let dictionary = load_default().unwrap();
    for query in sample_queries() {
        assert_eq!(search(&dictionary, &query), search(&dictionary, &query));
    }
}

#[test]
fn test_search_results_sorted() {
    let dictionary = load_default().unwrap();
    let results = search(&dictionary, &Query::new("aeirst"));

    assert!(!results.is_empty());
    assert!(
        results
            .windows(2)
            .all(|pair| result_order(pair[0], pair[1]).is_le())
    );
}

#[test]
fn test_end_to_end_example() {
    let dictionary = Dictionary::from_words(["cat", "car", "art", "rat", "art", "stare"]);
    let query = Query::new("CRAT").with_lengths(3, 3);

    assert_eq!(
        search(&dictionary, &query),
        ["art", "art", "car", "cat", "rat"]
    );
}

#[test]
fn test_length_boundaries() {
    let dictionary = load_default().unwrap();
    let query = Query::new("aeirst").with_lengths(3, 4);

    let results = search(&dictionary, &query);
    let lengths: Vec<usize> = results.iter().map(|w| w.chars().count()).collect();

    assert!(lengths.contains(&3));
    assert!(lengths.contains(&4));
    assert!(lengths.iter().all(|&n| (3..=4).contains(&n)));
}

#[test]
fn test_multiset_exhaustion() {
    let dictionary = load_default().unwrap();
    let results = search(&dictionary, &Query::new("AEIOT"));

    assert!(!results.contains(&"alfalfa"));
    assert!(results.iter().all(|w| w.matches('a').count() <= 1));
    assert!(results.contains(&"iota"));
}

#[test]
fn test_first_position_constraint() {
    let dictionary = load_default().unwrap();
    let results = search(&dictionary, &Query::new("AEIOT").with_constraint(1, 'A'));

    assert!(!results.is_empty());
    assert!(results.iter().all(|w| w.starts_with('a')));
}

#[test]
fn test_case_insensitive_letters() {
    let dictionary = load_default().unwrap();
    assert_eq!(
        search(&dictionary, &Query::new("aeiot")),
        search(&dictionary, &Query::new("AEIOT"))
    );
}

#[test]
fn test_empty_letters_yield_nothing() {
    let dictionary = load_default().unwrap();
    assert!(search(&dictionary, &Query::new("")).is_empty());
}

#[test]
fn test_file_loader() {
    let path = std::env::temp_dir().join(format!(
        "word_puzzle_solver_it_{}.txt",
        std::process::id()
    ));
    fs::write(&path, "  Cat\nCAR\n\nart\n rat \nart\nStare\n").unwrap();

    let loader = DictionaryLoader::new(FileSource::new(&path));
    let first = loader.load().unwrap();
    fs::remove_file(&path).unwrap();

    // Cached: the file is gone but the dictionary is still served
    let second = loader.load().unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first.words(),
        ["cat", "car", "art", "rat", "art", "stare"]
    );
}

#[test]
fn test_file_loader_missing_file() {
    let loader = DictionaryLoader::new(FileSource::new("no/such/dir/words.txt"));
    assert!(matches!(loader.load(), Err(LoadError::Io { .. })));
    assert!(!loader.is_loaded());
}
