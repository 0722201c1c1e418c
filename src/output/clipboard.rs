//! Clipboard access through the terminal
//!
//! Uses the OSC 52 escape sequence, so it works over SSH as long as the
//! terminal emulator honours it.

use crossterm::clipboard::CopyToClipboard;
use crossterm::execute;
use std::io;

/// Ask the terminal to put `text` on the system clipboard
///
/// # Errors
///
/// Returns an I/O error if the escape sequence cannot be written to stdout.
pub fn copy_to_clipboard(text: &str) -> io::Result<()> {
    execute!(io::stdout(), CopyToClipboard::to_clipboard_from(text))?;
    log::debug!("Copied {} bytes to clipboard", text.len());
    Ok(())
}
