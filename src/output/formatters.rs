//! Formatting utilities for terminal output

/// Join results the way they are put on the clipboard
///
/// # Examples
/// ```
/// use word_puzzle_solver::output::formatters::join_results;
///
/// assert_eq!(join_results(&["art", "car"]), "art, car");
/// ```
#[must_use]
pub fn join_results<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A result cell: upper-case word followed by its length
#[must_use]
pub fn format_result_item(word: &str) -> String {
    format!("{} ({})", word.to_uppercase(), word.chars().count())
}

/// Lay result cells out in fixed-width columns
///
/// Returns one string per row. `columns` of 0 is treated as 1.
#[must_use]
pub fn format_columns<S: AsRef<str>>(words: &[S], columns: usize) -> Vec<String> {
    let columns = columns.max(1);
    let cells: Vec<String> = words
        .iter()
        .map(|w| format_result_item(w.as_ref()))
        .collect();
    let width = cells.iter().map(|c| c.chars().count()).max().unwrap_or(0);

    cells
        .chunks(columns)
        .map(|row| {
            row.iter()
                .map(|cell| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Render the six constraint slots as `A _ _ T _ _`
#[must_use]
pub fn constraint_pattern(slots: &[Option<char>]) -> String {
    slots
        .iter()
        .map(|slot| slot.map_or('_', |c| c.to_ascii_uppercase()).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
