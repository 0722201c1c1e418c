//! TUI rendering with ratatui
//!
//! Search form, result grid and message panel.

use super::app::{App, Focus, MessageStyle};
use crate::core::CONSTRAINT_SLOTS;
use crate::output::formatters::format_result_item;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Width of one result cell, including padding
const CELL_WIDTH: u16 = 14;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(6), // Search form
            Constraint::Min(6),    // Results
            Constraint::Length(5), // Messages
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_form(f, app, chunks[1]);
    render_results(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 WORD PUZZLE SOLVER - Find words from available letters")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn field_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    }
}

fn toggle_span(label: &str, key: &str, on: bool) -> Vec<Span<'static>> {
    let (mark, color) = if on {
        ("[x]", Color::Green)
    } else {
        ("[ ]", Color::DarkGray)
    };
    vec![
        Span::styled(format!("{mark} "), Style::default().fg(color)),
        Span::raw(label.to_string()),
        Span::styled(format!(" ({key})   "), Style::default().fg(Color::DarkGray)),
    ]
}

fn render_form(f: &mut Frame, app: &App, area: Rect) {
    let form = &app.form;

    let letters = if form.letters().is_empty() && app.focus != Focus::Letters {
        "e.g. ABCDEF".to_string()
    } else {
        format!("{:<6}", form.letters())
    };

    let mut constraint_spans = vec![Span::raw("Positions:    ")];
    for position in 1..=CONSTRAINT_SLOTS {
        let ch = form
            .constraint(position)
            .map_or('_', |c| c.to_ascii_uppercase());
        constraint_spans.push(Span::styled(
            format!(" {position}:{ch} "),
            field_style(app.focus == Focus::Constraint(position)),
        ));
        constraint_spans.push(Span::raw(" "));
    }

    let mut toggles = toggle_span("Keep min/max equal", "F2", form.sync_lengths());
    toggles.extend(toggle_span(
        "Clear constraints after search",
        "F3",
        form.clear_constraints_after_search(),
    ));

    let content = vec![
        Line::from(vec![
            Span::raw("Letters (≤6): "),
            Span::styled(
                format!(" {letters} "),
                field_style(app.focus == Focus::Letters),
            ),
        ]),
        Line::from(vec![
            Span::raw("Min length:   "),
            Span::styled(
                format!(" {} ", form.min_length()),
                field_style(app.focus == Focus::MinLength),
            ),
            Span::raw("   Max length: "),
            Span::styled(
                format!(" {} ", form.max_length()),
                field_style(app.focus == Focus::MaxLength),
            ),
        ]),
        Line::from(constraint_spans),
        Line::from(toggles),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let state = app.form.state();
    let results = state.results();
    let title = format!(" Results ({}) ", results.len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Green));

    if let Some(placeholder) = state.placeholder() {
        let color = if state.has_searched() {
            Color::Red
        } else {
            Color::DarkGray
        };
        let paragraph = Paragraph::new(placeholder)
            .style(Style::default().fg(color))
            .block(block)
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
        return;
    }

    let columns = usize::from((area.width.saturating_sub(2) / CELL_WIDTH).max(1));
    let visible_rows = usize::from(area.height.saturating_sub(2));
    let total_rows = results.len().div_ceil(columns);
    let first_row = app.scroll.min(total_rows.saturating_sub(visible_rows));

    let lines: Vec<Line> = results
        .chunks(columns)
        .skip(first_row)
        .take(visible_rows)
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|word| {
                        Span::styled(
                            format!("{:<width$}", format_result_item(word), width = CELL_WIDTH as usize),
                            Style::default().fg(Color::White),
                        )
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(3)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "Enter: Search | Tab: Next field | ↑↓: Length | F5: Clear constraints | F6: Clear all | F7: Copy | Esc: Quit",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
