//! TUI application state and logic

use crate::core::{PositionConstraints, Rack, Tile};
use crate::engine::report::group_by_length;
use crate::engine::{CompletedQuery, QueryTag, Session};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;
use tracing::debug;

/// Cells per grid row
pub const GRID_WIDTH: usize = 4;

/// Total number of grid cells
pub const GRID_CELLS: usize = GRID_WIDTH * GRID_WIDTH;

const EVENT_POLL: Duration = Duration::from_millis(50);

/// Result lines moved by PageUp/PageDown
pub const RESULTS_PAGE: usize = 10;

/// Which input currently receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Cell(usize),
    StartsWith,
    EndsWith,
    Contains,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App {
    pub session: Session,
    dictionary: Arc<Vec<String>>,
    pub cells: [Option<Tile>; GRID_CELLS],
    pub focus: Focus,
    pub starts_with: String,
    pub ends_with: String,
    pub contains: String,
    pub messages: Vec<Message>,
    /// Result lines scrolled off the top of the results panel
    pub results_offset: usize,
    /// Tag of the query still running in the background
    pub pending: Option<QueryTag>,
    pub should_quit: bool,
    sender: Sender<CompletedQuery>,
    receiver: Receiver<CompletedQuery>,
}

impl App {
    #[must_use]
    pub fn new(session: Session, dictionary: Arc<Vec<String>>) -> Self {
        let (sender, receiver) = mpsc::channel();

        let mut app = Self {
            session,
            dictionary,
            cells: [None; GRID_CELLS],
            focus: Focus::Cell(0),
            starts_with: String::new(),
            ends_with: String::new(),
            contains: String::new(),
            messages: Vec::new(),
            results_offset: 0,
            pending: None,
            should_quit: false,
            sender,
            receiver,
        };

        if app.dictionary.is_empty() {
            app.add_message(
                "Dictionary is empty, no words will be found",
                MessageStyle::Error,
            );
        } else {
            app.add_message(
                &format!(
                    "Loaded {} words. Type letters, then press Enter.",
                    app.dictionary.len()
                ),
                MessageStyle::Info,
            );
        }
        app
    }

    /// Tiles currently on the grid, in cell order
    #[must_use]
    pub fn rack(&self) -> Rack {
        Rack::from_tiles(self.cells.iter().flatten().copied().collect())
    }

    #[must_use]
    pub fn dictionary_size(&self) -> usize {
        self.dictionary.len()
    }

    /// Start a background query for the grid contents
    ///
    /// Any query still running is superseded.
    pub fn submit(&mut self) {
        let rack = self.rack();
        if rack.is_empty() {
            self.add_message("Enter some letters first", MessageStyle::Error);
            return;
        }

        let tag = self.session.begin_query();
        let engine = *self.session.engine();
        let dictionary = Arc::clone(&self.dictionary);
        let sender = self.sender.clone();
        debug!(tag, rack = %rack, "submitting query");

        thread::spawn(move || {
            let constraints = PositionConstraints::new();
            let results = engine.query_rack(dictionary.as_slice(), &rack, Some(&constraints));
            // Receiver is gone only once the app has exited
            let _ = sender.send(CompletedQuery {
                tag,
                rack,
                constraints,
                results,
            });
        });

        self.pending = Some(tag);
    }

    /// Install any finished query results
    pub fn poll_results(&mut self) {
        while let Ok(completed) = self.receiver.try_recv() {
            if self.session.accept(completed) {
                self.pending = None;
                self.results_offset = 0;
                let count = self.session.results().len();
                if count == 0 {
                    self.add_message("No words found with these letters", MessageStyle::Error);
                } else {
                    self.add_message(&format!("Found {count} words"), MessageStyle::Success);
                }
            }
        }
    }

    /// Fill the grid with a random rack and search it
    pub fn deal(&mut self) {
        let rack = Rack::deal(&mut rand::rng(), GRID_CELLS);
        self.cells = [None; GRID_CELLS];
        for (cell, tile) in self.cells.iter_mut().zip(rack.tiles()) {
            *cell = Some(*tile);
        }
        self.focus = Focus::Cell(0);
        self.add_message(&format!("Dealt {rack}"), MessageStyle::Info);
        self.submit();
    }

    /// Empty the grid, the refinement inputs and the results
    pub fn clear(&mut self) {
        self.cells = [None; GRID_CELLS];
        self.focus = Focus::Cell(0);
        self.starts_with.clear();
        self.ends_with.clear();
        self.contains.clear();
        self.session.reset();
        self.pending = None;
        self.results_offset = 0;
        self.add_message("Cleared", MessageStyle::Info);
    }

    fn type_tile(&mut self, index: usize, tile: Tile) {
        self.cells[index] = Some(tile);
        if index + 1 < GRID_CELLS {
            self.focus = Focus::Cell(index + 1);
        }
    }

    /// Clear a filled cell, or step back from an empty one
    fn backspace_cell(&mut self, index: usize) {
        if self.cells[index].is_some() {
            self.cells[index] = None;
        } else if index > 0 {
            self.focus = Focus::Cell(index - 1);
        }
    }

    /// Lines in the grouped results panel: one header per length plus one per word
    fn result_line_count(&self) -> usize {
        let view = self.session.view();
        view.len() + group_by_length(&view).len()
    }

    /// Page the results panel, keeping at least one line in view
    pub fn scroll_results(&mut self, down: bool) {
        let last = self.result_line_count().saturating_sub(1);
        self.results_offset = if down {
            (self.results_offset + RESULTS_PAGE).min(last)
        } else {
            self.results_offset.saturating_sub(RESULTS_PAGE)
        };
    }

    fn move_focus(&mut self, index: usize, code: KeyCode) {
        let next = match code {
            KeyCode::Left => index.checked_sub(1),
            KeyCode::Right => Some(index + 1).filter(|&i| i < GRID_CELLS),
            KeyCode::Up => index.checked_sub(GRID_WIDTH),
            KeyCode::Down => Some(index + GRID_WIDTH).filter(|&i| i < GRID_CELLS),
            _ => None,
        };
        if let Some(next) = next {
            self.focus = Focus::Cell(next);
        }
    }

    fn next_focus(&self) -> Focus {
        match self.focus {
            Focus::Cell(_) => Focus::StartsWith,
            Focus::StartsWith => Focus::EndsWith,
            Focus::EndsWith => Focus::Contains,
            Focus::Contains => Focus::Cell(self.first_empty_cell()),
        }
    }

    fn previous_focus(&self) -> Focus {
        match self.focus {
            Focus::Cell(_) => Focus::Contains,
            Focus::StartsWith => Focus::Cell(self.first_empty_cell()),
            Focus::EndsWith => Focus::StartsWith,
            Focus::Contains => Focus::EndsWith,
        }
    }

    fn first_empty_cell(&self) -> usize {
        self.cells
            .iter()
            .position(Option::is_none)
            .unwrap_or(GRID_CELLS - 1)
    }

    /// Mutable buffer of the focused refinement input
    fn refine_input(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Cell(_) => None,
            Focus::StartsWith => Some(&mut self.starts_with),
            Focus::EndsWith => Some(&mut self.ends_with),
            Focus::Contains => Some(&mut self.contains),
        }
    }

    /// Push the refinement inputs into the session filter
    fn sync_filter(&mut self) {
        let filter = self.session.filter_mut();
        filter.set_starts_with(&self.starts_with);
        filter.set_ends_with(&self.ends_with);
        filter.set_contains(&self.contains);
        self.results_offset = 0;
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('r') if ctrl => {
                self.deal();
                return;
            }
            KeyCode::Char('l') if ctrl => {
                self.clear();
                return;
            }
            KeyCode::Tab => {
                self.focus = self.next_focus();
                return;
            }
            KeyCode::BackTab => {
                self.focus = self.previous_focus();
                return;
            }
            KeyCode::Enter => {
                self.submit();
                return;
            }
            KeyCode::PageDown => {
                self.scroll_results(true);
                return;
            }
            KeyCode::PageUp => {
                self.scroll_results(false);
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Cell(index) => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(ch) if !ctrl => {
                    if let Some(tile) = Tile::from_char(ch) {
                        self.type_tile(index, tile);
                    }
                }
                KeyCode::Backspace => self.backspace_cell(index),
                KeyCode::Delete => self.cells[index] = None,
                code @ (KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down) => {
                    self.move_focus(index, code);
                }
                _ => {}
            },
            Focus::StartsWith | Focus::EndsWith | Focus::Contains => match key.code {
                KeyCode::Esc => self.focus = Focus::Cell(self.first_empty_cell()),
                KeyCode::Char(ch) if !ctrl && ch.is_ascii_alphabetic() => {
                    if let Some(input) = self.refine_input() {
                        input.push(ch.to_ascii_uppercase());
                    }
                    self.sync_filter();
                }
                KeyCode::Backspace => {
                    if let Some(input) = self.refine_input() {
                        input.pop();
                    }
                    self.sync_filter();
                }
                _ => {}
            },
        }
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
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.poll_results();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Poll so background results are drawn without waiting for a key
        if !event::poll(EVENT_POLL)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::QueryEngine;

    fn setup_app(words: &[&str]) -> App {
        let dictionary = Arc::new(words.iter().map(|w| (*w).to_string()).collect());
        App::new(Session::new(QueryEngine::default()), dictionary)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, ch: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL));
    }

    fn type_str(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    /// Block until the pending query lands
    fn settle(app: &mut App) {
        while app.pending.is_some() {
            let completed = app
                .receiver
                .recv_timeout(Duration::from_secs(10))
                .unwrap();
            if app.session.accept(completed) {
                app.pending = None;
            }
        }
    }

    #[test]
    fn typing_advances_focus() {
        let mut app = setup_app(&[]);
        type_str(&mut app, "ca*");

        assert_eq!(app.focus, Focus::Cell(3));
        assert_eq!(app.rack().to_string(), "CA*");
    }

    #[test]
    fn non_tile_keys_are_ignored() {
        let mut app = setup_app(&[]);
        type_str(&mut app, "c3!");

        assert_eq!(app.rack().to_string(), "C");
        assert_eq!(app.focus, Focus::Cell(1));
    }

    #[test]
    fn last_cell_keeps_focus() {
        let mut app = setup_app(&[]);
        type_str(&mut app, "ABCDEFGHIJKLMNOPQ");

        assert_eq!(app.focus, Focus::Cell(GRID_CELLS - 1));
        assert_eq!(app.rack().to_string(), "ABCDEFGHIJKLMNOQ");
    }

    #[test]
    fn backspace_moves_back_from_empty_cell() {
        let mut app = setup_app(&[]);
        type_str(&mut app, "cat");
        assert_eq!(app.focus, Focus::Cell(3));

        // Empty cell: focus moves back, nothing is deleted
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.focus, Focus::Cell(2));
        assert_eq!(app.rack().to_string(), "CAT");

        // Filled cell is cleared in place
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.focus, Focus::Cell(2));
        assert_eq!(app.rack().to_string(), "CA");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.focus, Focus::Cell(1));
        assert_eq!(app.rack().to_string(), "CA");
    }

    #[test]
    fn backspace_at_first_cell_stays() {
        let mut app = setup_app(&[]);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.focus, Focus::Cell(0));
    }

    #[test]
    fn arrow_keys_stay_on_grid() {
        let mut app = setup_app(&[]);

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.focus, Focus::Cell(0));

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.focus, Focus::Cell(GRID_WIDTH + 1));

        app.focus = Focus::Cell(GRID_CELLS - 1);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.focus, Focus::Cell(GRID_CELLS - 1));
    }

    #[test]
    fn tab_cycles_inputs() {
        let mut app = setup_app(&[]);
        type_str(&mut app, "ab");

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::StartsWith);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::EndsWith);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Contains);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Cell(2));

        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, Focus::Contains);
    }

    #[test]
    fn enter_on_empty_grid_reports_error() {
        let mut app = setup_app(&["CATS"]);
        press(&mut app, KeyCode::Enter);

        assert!(app.pending.is_none());
        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));
    }

    #[test]
    fn enter_runs_background_query() {
        let mut app = setup_app(&["CAT", "CATS", "ACT", "TACO", "CATTLE"]);
        type_str(&mut app, "cats");
        press(&mut app, KeyCode::Enter);
        assert!(app.pending.is_some());

        settle(&mut app);
        assert_eq!(app.session.results().words(), vec!["CATS"]);
        assert_eq!(app.session.rack().to_string(), "CATS");
    }

    #[test]
    fn latest_query_wins() {
        let mut app = setup_app(&["CATS", "TACO"]);
        type_str(&mut app, "cats");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Backspace);
        type_str(&mut app, "o");
        press(&mut app, KeyCode::Enter);

        settle(&mut app);
        assert_eq!(app.session.results().words(), vec!["TACO"]);
    }

    #[test]
    fn refine_inputs_filter_live() {
        let mut app = setup_app(&["CATS", "ACTS", "CAST", "SCAT"]);
        type_str(&mut app, "cats");
        press(&mut app, KeyCode::Enter);
        settle(&mut app);
        assert_eq!(app.session.view().len(), 4);

        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "c");
        let view: Vec<&str> = app.session.view().iter().map(|e| e.word.as_str()).collect();
        assert_eq!(view, vec!["CAST", "CATS"]);

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.view().len(), 4);
        assert_eq!(app.session.results().len(), 4);
    }

    #[test]
    fn refine_input_ignores_non_letters() {
        let mut app = setup_app(&[]);
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "a1*b");
        assert_eq!(app.starts_with, "AB");
        assert_eq!(app.session.filter().prefix(), Some("AB"));
    }

    #[test]
    fn ctrl_r_deals_full_grid() {
        let mut app = setup_app(&["CATS"]);
        ctrl(&mut app, 'r');

        assert!(app.cells.iter().all(Option::is_some));
        assert!(app.pending.is_some());
        settle(&mut app);
        assert_eq!(app.session.rack().len(), GRID_CELLS);
    }

    #[test]
    fn ctrl_l_clears_everything() {
        let mut app = setup_app(&["CATS"]);
        type_str(&mut app, "cats");
        press(&mut app, KeyCode::Enter);
        settle(&mut app);
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "c");

        ctrl(&mut app, 'l');
        assert!(app.rack().is_empty());
        assert!(app.session.results().is_empty());
        assert!(app.session.filter().is_empty());
        assert!(app.starts_with.is_empty());
        assert_eq!(app.focus, Focus::Cell(0));
    }

    #[test]
    fn quit_keys() {
        let mut app = setup_app(&[]);
        type_str(&mut app, "q");
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = setup_app(&[]);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Esc);
        assert!(!app.should_quit);
        assert_eq!(app.focus, Focus::Cell(0));

        ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }

    fn setup_paged_app() -> App {
        // Every 4- and 5-letter window of the rack: 13 + 12 words in two groups
        let letters = "ABCDEFGHIJKLMNOP";
        let words: Vec<String> = [4, 5]
            .into_iter()
            .flat_map(|len| (0..=letters.len() - len).map(move |i| letters[i..i + len].to_string()))
            .collect();
        let words: Vec<&str> = words.iter().map(String::as_str).collect();

        let mut app = setup_app(&words);
        type_str(&mut app, letters);
        press(&mut app, KeyCode::Enter);
        settle(&mut app);
        app
    }

    #[test]
    fn paging_moves_and_clamps_offset() {
        let mut app = setup_paged_app();
        assert_eq!(app.session.results().len(), 25);
        assert_eq!(app.result_line_count(), 27);

        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.results_offset, 10);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.results_offset, 20);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.results_offset, 26);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.results_offset, 26);

        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.results_offset, 16);
        press(&mut app, KeyCode::PageUp);
        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.results_offset, 0);
    }

    #[test]
    fn paging_without_results_stays_at_top() {
        let mut app = setup_app(&[]);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.results_offset, 0);
    }

    #[test]
    fn filter_and_clear_reset_offset() {
        let mut app = setup_paged_app();
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.results_offset, 10);

        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "a");
        assert_eq!(app.results_offset, 0);
        assert_eq!(app.session.view().len(), 2);

        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.results_offset, 3);

        ctrl(&mut app, 'l');
        assert_eq!(app.results_offset, 0);
    }

    #[test]
    fn empty_dictionary_warns() {
        let app = setup_app(&[]);
        assert!(matches!(
            app.messages.first().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));
    }
}
