//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Focus, Message, MessageStyle, run_tui};
