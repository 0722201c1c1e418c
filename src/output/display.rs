//! Display functions for command results

use super::formatters::{constraint_pattern, create_progress_bar, format_columns, join_results};
use crate::commands::{BenchmarkResult, SearchReport};
use crate::core::{SearchForm, SearchState};
use colored::Colorize;

const RESULT_COLUMNS: usize = 5;

/// Print the result of a one-shot search
///
/// With `joined` only the comma-separated list is printed, ready to paste.
pub fn print_search_report(report: &SearchReport, joined: bool) {
    if joined {
        println!("{}", join_results(&report.matches));
        return;
    }

    let query = &report.query;
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Letters: {}  Length: {}..={}",
        query.available_letters().to_uppercase().bright_yellow().bold(),
        query.min_length(),
        query.max_length()
    );
    for c in query.constraints() {
        println!(
            "  Position {}: {}",
            c.position(),
            c.character().to_ascii_uppercase()
        );
    }
    println!("{}", "─".repeat(60).cyan());

    print_results(&SearchState::Searched(report.matches.clone()));

    println!(
        "\n{}",
        format!(
            "Searched {} words in {:.2}ms",
            report.dictionary_size,
            report.duration.as_secs_f64() * 1000.0
        )
        .bright_black()
    );
}

/// Print the result list, or the placeholder when there is none
pub fn print_results(state: &SearchState) {
    let results = state.results();
    println!(
        "\n{}",
        format!("Results ({})", results.len()).bright_cyan().bold()
    );

    if let Some(placeholder) = state.placeholder() {
        let text = if state.has_searched() {
            placeholder.yellow()
        } else {
            placeholder.bright_black()
        };
        println!("  {text}");
        return;
    }

    for row in format_columns(results, RESULT_COLUMNS) {
        println!("  {}", row.bright_white());
    }
}

/// One-line view of the form inputs
pub fn print_form_summary(form: &SearchForm) {
    let letters = if form.letters().is_empty() {
        "—".to_string()
    } else {
        form.letters().to_string()
    };

    println!(
        "{} {}  {} {}..={}  {} {}  {} {}  {} {}",
        "Letters:".bright_black(),
        letters.bright_yellow().bold(),
        "Length:".bright_black(),
        form.min_length(),
        form.max_length(),
        "Pattern:".bright_black(),
        constraint_pattern(form.constraint_slots()),
        "Sync:".bright_black(),
        toggle_label(form.sync_lengths()),
        "Autoclear:".bright_black(),
        toggle_label(form.clear_constraints_after_search()),
    );
}

fn toggle_label(on: bool) -> colored::ColoredString {
    if on { "on".green() } else { "off".bright_black() }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Dictionary:       {} words", result.dictionary_size);
    println!("   Queries run:      {}", result.total_queries);
    println!(
        "   Queries/second:   {}",
        format!("{:.1}", result.queries_per_second)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Sequential:       {:.2}s",
        result.sequential.as_secs_f64()
    );
    println!("   Parallel:         {:.2}s", result.parallel.as_secs_f64());

    let slowest = result.sequential.max(result.parallel).as_secs_f64();
    println!(
        "   Sequential: {}",
        create_progress_bar(result.sequential.as_secs_f64(), slowest, 40).green()
    );
    println!(
        "   Parallel:   {}",
        create_progress_bar(result.parallel.as_secs_f64(), slowest, 40).cyan()
    );

    println!("\n📈 {}", "Matches:".bright_cyan().bold());
    let average = if result.total_queries > 0 {
        result.total_matches as f64 / result.total_queries as f64
    } else {
        0.0
    };
    println!("   Total:            {}", result.total_matches);
    println!("   Average/query:    {average:.1}");
    println!("   Largest result:   {}", result.max_matches);

    if result.mismatches == 0 {
        println!("\n{}", "✅ Parallel and sequential results agree".green().bold());
    } else {
        println!(
            "\n{}",
            format!(
                "❌ {} queries differed between parallel and sequential",
                result.mismatches
            )
            .red()
            .bold()
        );
    }
}
