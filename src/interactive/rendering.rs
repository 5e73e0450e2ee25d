//! TUI rendering with ratatui
//!
//! Letter grid, refinement inputs and grouped results.

use super::app::{App, Focus, GRID_CELLS, GRID_WIDTH, MessageStyle};
use crate::engine::report::{group_by_length, summarize};
use crate::output::formatters::{mark_wildcards, score_label};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(30), // Grid and inputs
            Constraint::Min(30),    // Results
        ])
        .split(chunks[1]);

    render_input_panel(f, app, main_chunks[0]);
    render_results_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 WORD RACK - Interactive Mode")
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

fn render_input_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(GRID_WIDTH as u16 + 2), // Grid
            Constraint::Length(3),                     // Starts with
            Constraint::Length(3),                     // Ends with
            Constraint::Length(3),                     // Contains
            Constraint::Min(3),                        // Messages
        ])
        .split(area);

    render_grid(f, app, chunks[0]);
    let inputs = [
        (" Starts with ", &app.starts_with, Focus::StartsWith),
        (" Ends with ", &app.ends_with, Focus::EndsWith),
        (" Contains ", &app.contains, Focus::Contains),
    ];
    for ((title, value, focus), area) in inputs.into_iter().zip(&chunks[1..4]) {
        render_refine_input(f, title, value, app.focus == focus, *area);
    }
    render_messages(f, app, chunks[4]);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = (0..GRID_CELLS)
        .step_by(GRID_WIDTH)
        .map(|row_start| {
            let spans = (row_start..row_start + GRID_WIDTH).flat_map(|index| {
                let symbol = app.cells[index].map_or('·', |tile| tile.as_char());
                let mut style = if app.cells[index].is_some_and(|tile| tile.is_wildcard()) {
                    Style::default().fg(Color::Magenta)
                } else {
                    Style::default().fg(Color::White)
                };
                if app.focus == Focus::Cell(index) {
                    style = style
                        .bg(Color::Yellow)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD);
                }
                [Span::raw(" "), Span::styled(format!(" {symbol} "), style)]
            });
            Line::from(spans.collect::<Vec<_>>())
        })
        .collect();

    let border = if matches!(app.focus, Focus::Cell(_)) {
        Color::Yellow
    } else {
        Color::DarkGray
    };

    let grid = Paragraph::new(lines).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(border)),
    );
    f.render_widget(grid, area);
}

fn render_refine_input(f: &mut Frame, title: &str, value: &str, focused: bool, area: Rect) {
    let color = if focused { Color::Yellow } else { Color::DarkGray };
    let input = Paragraph::new(value.to_string())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_results_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Summary
            Constraint::Min(5),    // Grouped results
        ])
        .split(area);

    let view = app.session.view();
    let summary = summarize(&view, app.session.rack());

    let summary_lines = if app.pending.is_some() {
        vec![Line::from(Span::styled(
            "Searching...",
            Style::default().fg(Color::Yellow),
        ))]
    } else if app.session.rack().is_empty() {
        vec![Line::from("Enter letters to see results")]
    } else if summary.total == 0 {
        vec![Line::from("No words found with these letters.")]
    } else {
        let longest = summary
            .longest
            .as_ref()
            .map_or_else(String::new, |(word, length)| format!("{word} ({length})"));
        vec![
            Line::from(vec![
                Span::raw("Found "),
                Span::styled(
                    summary.total.to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" words using "),
                Span::styled(
                    summary.letters_used.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::raw("Longest: "),
                Span::styled(longest, Style::default().fg(Color::Green)),
                Span::raw(format!(
                    " | Best: {} | ★ {}",
                    summary.best_score.unwrap_or_default(),
                    summary.highlighted
                )),
            ]),
        ]
    };

    let summary_widget = Paragraph::new(summary_lines)
        .block(
            Block::default()
                .title(" Summary ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(summary_widget, chunks[0]);

    let mut items: Vec<ListItem> = Vec::new();
    for group in group_by_length(&view) {
        items.push(ListItem::new(Line::from(vec![
            Span::styled(
                format!("{} letters", group.length),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" ({})", group.entries.len()),
                Style::default().fg(Color::DarkGray),
            ),
        ])));

        for entry in group.entries {
            let word = mark_wildcards(&entry.word, &entry.wildcard_positions);
            let text = format!("  {word:<18} {}", score_label(entry));
            let item = if entry.highlighted {
                ListItem::new(format!("{text} ★")).style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ListItem::new(text)
            };
            items.push(item);
        }
    }

    let title = if app.session.filter().is_empty() {
        " Words ".to_string()
    } else {
        format!(
            " Words ({} of {}) ",
            view.len(),
            app.session.results().len()
        )
    };

    let results = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    let mut state = ListState::default().with_offset(app.results_offset);
    f.render_stateful_widget(results, chunks[1], &mut state);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let variant = Paragraph::new(format!(
        "Scoring: {}",
        if app.session.engine().capabilities().position_scoring {
            "tile + position"
        } else {
            "tile"
        }
    ))
    .alignment(Alignment::Center);
    f.render_widget(variant, chunks[0]);

    let dictionary = Paragraph::new(format!("Dictionary: {}", app.dictionary_size()))
        .alignment(Alignment::Center);
    f.render_widget(dictionary, chunks[1]);

    let help_text = match app.focus {
        Focus::Cell(_) => {
            "Enter: Search | ^R: Deal | ^L: Clear | Tab: Filters | PgUp/PgDn: Scroll | Esc: Quit"
        }
        _ => "Type to filter | Tab: Next | PgUp/PgDn: Scroll | Esc: Back to grid | ^C: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
