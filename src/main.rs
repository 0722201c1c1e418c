//! Word Puzzle Solver - CLI
//!
//! Finds words buildable from up to six available letters, with TUI,
//! line-mode and one-shot search front ends.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use word_puzzle_solver::{
    commands::{SearchConfig, run_benchmark, run_search, run_simple},
    core::{PositionConstraint, SearchForm},
    dictionary::{Dictionary, DictionaryLoader, EmbeddedSource, FileSource, WordSource},
    output::{print_benchmark_result, print_search_report},
};

#[derive(Parser)]
#[command(
    name = "word_puzzle_solver",
    about = "Find dictionary words from available letters with length and position constraints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Start with "keep min/max lengths equal" turned on
    #[arg(long, global = true)]
    sync_lengths: bool,

    /// Start with "clear constraints after each search" turned on
    #[arg(long, global = true)]
    clear_constraints: bool,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive prompt without TUI)
    Simple,

    /// Run a single search and print the matches
    Search {
        /// Available letters (up to 6)
        letters: String,

        /// Minimum word length
        #[arg(long)]
        min: Option<usize>,

        /// Maximum word length
        #[arg(long)]
        max: Option<usize>,

        /// Position constraint as POSITION=LETTER (repeatable)
        #[arg(short, long = "constraint", value_name = "P=C")]
        constraints: Vec<PositionConstraint>,

        /// Print only the comma-separated result list
        #[arg(short, long)]
        joined: bool,
    },

    /// Benchmark the matching engine on random queries
    Benchmark {
        /// Number of random queries to run
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,

        /// Seed for reproducible query sets
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Load the dictionary selected by the -w flag
fn load_dictionary(wordlist: &str) -> Result<Arc<Dictionary>> {
    let source: Box<dyn WordSource> = match wordlist {
        "embedded" => Box::new(EmbeddedSource),
        path => Box::new(FileSource::new(path)),
    };

    let loader = DictionaryLoader::new(source);
    loader
        .load()
        .with_context(|| format!("could not load word list '{wordlist}'"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    word_puzzle_solver::log::init_logger(cli.debug);

    let dictionary = load_dictionary(&cli.wordlist)?;
    let form = SearchForm::new(cli.sync_lengths, cli.clear_constraints);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(dictionary, form),
        Commands::Simple => run_simple(&dictionary, form).map_err(|e| anyhow::anyhow!(e)),
        Commands::Search {
            letters,
            min,
            max,
            constraints,
            joined,
        } => {
            let config = SearchConfig {
                letters,
                min_length: min,
                max_length: max,
                constraints,
            };
            run_search_command(&dictionary, &config, joined)
        }
        Commands::Benchmark { count, seed } => {
            println!(
                "Running benchmark on {count} random queries over {} words...",
                dictionary.len()
            );
            let result = run_benchmark(&dictionary, count, seed);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn run_search_command(dictionary: &Dictionary, config: &SearchConfig, joined: bool) -> Result<()> {
    let report = run_search(dictionary, config).context("invalid search")?;
    print_search_report(&report, joined);
    Ok(())
}

fn run_play_command(dictionary: Arc<Dictionary>, form: SearchForm) -> Result<()> {
    use word_puzzle_solver::interactive::{App, run_tui};

    let app = App::new(dictionary, form);
    run_tui(app)
}
