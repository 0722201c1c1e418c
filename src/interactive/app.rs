//! TUI application state and logic

use crate::core::{CONSTRAINT_SLOTS, SearchForm};
use crate::dictionary::Dictionary;
use crate::output::clipboard::copy_to_clipboard;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;

/// Which input has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Letters,
    MinLength,
    MaxLength,
    /// 1-indexed constraint slot
    Constraint(usize),
}

impl Focus {
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Letters => Self::MinLength,
            Self::MinLength => Self::MaxLength,
            Self::MaxLength => Self::Constraint(1),
            Self::Constraint(p) if p < CONSTRAINT_SLOTS => Self::Constraint(p + 1),
            Self::Constraint(_) => Self::Letters,
        }
    }

    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Letters => Self::Constraint(CONSTRAINT_SLOTS),
            Self::MinLength => Self::Letters,
            Self::MaxLength => Self::MinLength,
            Self::Constraint(1) => Self::MaxLength,
            Self::Constraint(p) => Self::Constraint(p - 1),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App {
    pub dictionary: Arc<Dictionary>,
    pub form: SearchForm,
    pub focus: Focus,
    pub messages: Vec<Message>,
    pub scroll: usize,
    pub should_quit: bool,
    /// Text waiting to be written to the clipboard by the event loop
    pub pending_copy: Option<String>,
}

impl App {
    #[must_use]
    pub fn new(dictionary: Arc<Dictionary>, form: SearchForm) -> Self {
        let words = dictionary.len();
        Self {
            dictionary,
            form,
            focus: Focus::Letters,
            messages: vec![
                Message {
                    text: format!("Loaded {words} words."),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type letters, then press Enter to search.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            scroll: 0,
            should_quit: false,
            pending_copy: None,
        }
    }

    pub fn search(&mut self) {
        let count = self.form.search(&self.dictionary);
        self.scroll = 0;
        if count == 0 {
            self.add_message("No matches found.", MessageStyle::Error);
        } else {
            self.add_message(
                &format!("{count} word{} found", if count == 1 { "" } else { "s" }),
                MessageStyle::Success,
            );
        }
    }

    pub fn copy_results(&mut self) {
        if self.form.state().results().is_empty() {
            self.add_message("Nothing to copy!", MessageStyle::Error);
            return;
        }
        self.pending_copy = Some(self.form.copy_text());
        self.add_message("Copied results to clipboard.", MessageStyle::Success);
    }

    pub fn clear_constraints(&mut self) {
        self.form.clear_constraints();
        self.add_message("Constraints cleared.", MessageStyle::Info);
    }

    pub fn clear_all(&mut self) {
        self.form.clear_all();
        self.focus = Focus::Letters;
        self.scroll = 0;
        self.add_message("Form reset.", MessageStyle::Info);
    }

    pub fn toggle_sync(&mut self) {
        self.form.toggle_sync_lengths();
        let state = if self.form.sync_lengths() { "on" } else { "off" };
        self.add_message(&format!("Keep min/max equal: {state}"), MessageStyle::Info);
    }

    pub fn toggle_autoclear(&mut self) {
        self.form.toggle_clear_after_search();
        let state = if self.form.clear_constraints_after_search() {
            "on"
        } else {
            "off"
        };
        self.add_message(
            &format!("Clear constraints after search: {state}"),
            MessageStyle::Info,
        );
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    fn adjust_length(&mut self, delta: isize) {
        match self.focus {
            Focus::MinLength => {
                let value = self.form.min_length().saturating_add_signed(delta);
                self.form.set_min_length(value);
            }
            Focus::MaxLength => {
                let value = self.form.max_length().saturating_add_signed(delta);
                self.form.set_max_length(value);
            }
            _ => {}
        }
    }

    fn type_char(&mut self, c: char) {
        match self.focus {
            Focus::Letters => {
                if c.is_alphabetic() {
                    self.form.push_letter(c);
                }
            }
            Focus::MinLength | Focus::MaxLength => {
                if let Some(n) = c.to_digit(10) {
                    let n = n as usize;
                    if self.focus == Focus::MinLength {
                        self.form.set_min_length(n);
                    } else {
                        self.form.set_max_length(n);
                    }
                }
            }
            Focus::Constraint(position) => {
                if c.is_alphabetic() {
                    self.form.set_constraint(position, &c.to_string());
                    self.focus = self.focus.next();
                }
            }
        }
    }

    fn erase(&mut self) {
        match self.focus {
            Focus::Letters => self.form.pop_letter(),
            Focus::Constraint(position) => self.form.set_constraint(position, ""),
            Focus::MinLength | Focus::MaxLength => {}
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.search(),
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.previous(),
            KeyCode::F(2) => self.toggle_sync(),
            KeyCode::F(3) => self.toggle_autoclear(),
            KeyCode::F(5) => self.clear_constraints(),
            KeyCode::F(6) => self.clear_all(),
            KeyCode::F(7) => self.copy_results(),
            KeyCode::Up => self.adjust_length(1),
            KeyCode::Down => self.adjust_length(-1),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(1),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Backspace | KeyCode::Delete => self.erase(),
            KeyCode::Char(c) => self.type_char(c),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if let Some(text) = app.pending_copy.take()
            && let Err(e) = copy_to_clipboard(&text)
        {
            app.add_message(&format!("Clipboard unavailable: {e}"), MessageStyle::Error);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
