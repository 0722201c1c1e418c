//! Simple interactive CLI mode
//!
//! Line-based search prompt without the TUI

use crate::core::{CONSTRAINT_SLOTS, SearchForm};
use crate::dictionary::Dictionary;
use crate::output::clipboard::copy_to_clipboard;
use crate::output::display::{print_form_summary, print_results};
use colored::Colorize;
use std::io::{self, Write};

/// What a single prompt line asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Form updated; show this note
    Updated(String),
    /// A search ran; show the results
    Searched,
    /// Results should go to the clipboard
    Copy(String),
    Help,
    Quit,
    Invalid(String),
}

/// Apply one prompt line to the form
///
/// Kept separate from the I/O loop so it can be driven directly.
pub fn apply_command(form: &mut SearchForm, dictionary: &Dictionary, line: &str) -> Outcome {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return Outcome::Invalid("Type 'help' for commands".to_string());
    };
    let args: Vec<&str> = parts.collect();

    match command.to_lowercase().as_str() {
        "quit" | "q" | "exit" => Outcome::Quit,
        "help" | "h" | "?" => Outcome::Help,
        "letters" | "l" => {
            form.set_letters(&args.concat());
            Outcome::Updated(format!("Letters: {}", form.letters()))
        }
        "min" | "max" => {
            let Some(n) = args.first().and_then(|a| a.parse::<usize>().ok()) else {
                return Outcome::Invalid(format!("Usage: {command} <1-6>"));
            };
            if command.eq_ignore_ascii_case("min") {
                form.set_min_length(n);
            } else {
                form.set_max_length(n);
            }
            Outcome::Updated(format!(
                "Length: {}..={}",
                form.min_length(),
                form.max_length()
            ))
        }
        "pos" | "p" => {
            let Some(position) = args
                .first()
                .and_then(|a| a.parse::<usize>().ok())
                .filter(|p| (1..=CONSTRAINT_SLOTS).contains(p))
            else {
                return Outcome::Invalid(format!("Usage: pos <1-{CONSTRAINT_SLOTS}> [letter]"));
            };
            form.set_constraint(position, args.get(1).copied().unwrap_or(""));
            match form.constraint(position) {
                Some(c) => Outcome::Updated(format!("Position {position} = {}", c.to_ascii_uppercase())),
                None => Outcome::Updated(format!("Position {position} cleared")),
            }
        }
        "search" | "s" | "go" => {
            form.search(dictionary);
            Outcome::Searched
        }
        "clear" | "c" => {
            form.clear_constraints();
            Outcome::Updated("Constraints cleared".to_string())
        }
        "reset" => {
            form.clear_all();
            Outcome::Updated("Form reset".to_string())
        }
        "sync" => {
            form.toggle_sync_lengths();
            Outcome::Updated(format!("Keep min/max equal: {}", on_off(form.sync_lengths())))
        }
        "autoclear" => {
            form.toggle_clear_after_search();
            Outcome::Updated(format!(
                "Clear constraints after search: {}",
                on_off(form.clear_constraints_after_search())
            ))
        }
        "copy" => {
            if form.state().results().is_empty() {
                Outcome::Invalid("Nothing to copy".to_string())
            } else {
                Outcome::Copy(form.copy_text())
            }
        }
        other => Outcome::Invalid(format!("Unknown command '{other}'")),
    }
}

const fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(dictionary: &Dictionary, mut form: SearchForm) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║             Word Puzzle Solver - Interactive Mode            ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Searching {} words. Type 'help' for commands.\n", dictionary.len());

    loop {
        print_form_summary(&form);

        let Some(line) = get_user_input(">")? else {
            println!("\n👋 Goodbye!\n");
            return Ok(());
        };

        match apply_command(&mut form, dictionary, &line) {
            Outcome::Quit => {
                println!("\n👋 Goodbye!\n");
                return Ok(());
            }
            Outcome::Help => print_help(),
            Outcome::Searched => print_results(form.state()),
            Outcome::Updated(note) => println!("{}", note.green()),
            Outcome::Copy(text) => match copy_to_clipboard(&text) {
                Ok(()) => println!("{}", "📋 Copied results to clipboard".green()),
                Err(e) => {
                    println!("{}", format!("Clipboard unavailable ({e}); results:").yellow());
                    println!("{text}");
                }
            },
            Outcome::Invalid(msg) => println!("{}", format!("❌ {msg}").red()),
        }
        println!();
    }
}

fn print_help() {
    println!("Commands:");
    println!("  letters <ABC>    set available letters (up to 6)");
    println!("  min <n>, max <n> set length bounds (1-6)");
    println!("  pos <p> [c]      pin letter c at position p (omit c to clear)");
    println!("  search           run the search");
    println!("  clear            clear position constraints");
    println!("  reset            clear everything");
    println!("  sync             toggle keeping min/max equal");
    println!("  autoclear        toggle clearing constraints after each search");
    println!("  copy             copy results to the clipboard");
    println!("  quit             exit");
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt} ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
