//! Main TUI application state and logic

use crate::align::AlignError;
use crate::buffer::Buffer;
use crate::ui::panes::{render_fields_pane, render_source_pane, render_status_bar, SourceView};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// The main application state
pub struct App {
    /// The file being edited
    pub buffer: Buffer,

    /// Cursor line (0-based)
    pub cursor: usize,

    /// Selection anchor; a selection spans anchor..=cursor in either order
    pub anchor: Option<usize>,

    /// Scroll window of the source pane
    pub view: SourceView,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports a failure
    pub status_is_error: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Set after one q on a dirty buffer; the next q quits anyway
    pub quit_pending: bool,
}

impl App {
    /// Create a new app over a loaded buffer
    pub fn new(buffer: Buffer) -> Self {
        App {
            buffer,
            cursor: 0,
            anchor: None,
            view: SourceView {
                scroll: 0,
                height: 0,
            },
            status_message: String::from("Ready!"),
            status_is_error: false,
            should_quit: false,
            quit_pending: false,
        }
    }

    /// The selected inclusive line range, in order
    pub fn selection(&self) -> Option<(usize, usize)> {
        self.anchor
            .map(|anchor| (anchor.min(self.cursor), anchor.max(self.cursor)))
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Source pane and inspector side by side, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(pane_area);

        let selection = self.selection();

        render_source_pane(
            frame,
            columns[0],
            &self.buffer,
            self.cursor,
            selection,
            &mut self.view,
        );

        render_fields_pane(frame, columns[1], &self.buffer, self.cursor, selection);

        render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.status_is_error,
            self.cursor + 1,
            self.buffer.len(),
            selection.map(|(start, end)| end - start + 1),
            self.buffer.is_dirty(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code != KeyCode::Char('q') {
            self.quit_pending = false;
        }

        match key.code {
            KeyCode::Char('q') => {
                if self.buffer.is_dirty() && !self.quit_pending {
                    self.quit_pending = true;
                    self.report_error("Unsaved changes! Press q again to quit");
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor_down(1),
            KeyCode::PageUp => self.move_cursor_up(self.view.height.max(1)),
            KeyCode::PageDown => self.move_cursor_down(self.view.height.max(1)),
            KeyCode::Char('g') => self.cursor = 0,
            KeyCode::Char('G') => self.cursor = self.buffer.len().saturating_sub(1),
            KeyCode::Char('v') | KeyCode::Char(' ') => self.toggle_selection(),
            KeyCode::Esc => {
                if self.anchor.take().is_some() {
                    self.report("Selection cleared");
                }
            }
            KeyCode::Enter | KeyCode::Char('a') => self.align_selection(),
            KeyCode::Char('u') => self.undo(),
            KeyCode::Char('w') => self.save(),
            _ => {}
        }
    }

    fn move_cursor_up(&mut self, by: usize) {
        self.cursor = self.cursor.saturating_sub(by);
    }

    fn move_cursor_down(&mut self, by: usize) {
        let last = self.buffer.len().saturating_sub(1);
        self.cursor = (self.cursor + by).min(last);
    }

    /// Start a selection at the cursor, or drop the current one
    fn toggle_selection(&mut self) {
        match self.anchor {
            Some(_) => {
                self.anchor = None;
                self.report("Selection cleared");
            }
            None => {
                if self.buffer.is_empty() {
                    return;
                }
                self.anchor = Some(self.cursor);
                self.report("Selection started");
            }
        }
    }

    /// Align the selected lines, or the cursor line alone
    fn align_selection(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let (start, end) = self.selection().unwrap_or((self.cursor, self.cursor));

        match self.buffer.align_range(start, end) {
            Ok(0) => {
                self.report("No declarations in selection");
            }
            Ok(count) => {
                self.anchor = None;
                self.cursor = start;
                let message = format!("Aligned {} declaration(s)", count);
                self.report(&message);
            }
            Err(AlignError::MalformedLine { line_number, cause }) => {
                // Point the cursor at the offending line.
                self.anchor = None;
                self.cursor = start + line_number - 1;
                let message = format!("Line {}: {}", start + line_number, cause);
                self.report_error(&message);
            }
        }
    }

    fn undo(&mut self) {
        if self.buffer.undo() {
            self.anchor = None;
            self.cursor = self.cursor.min(self.buffer.len().saturating_sub(1));
            self.report("Undid last edit");
        } else {
            self.report("Nothing to undo");
        }
    }

    fn save(&mut self) {
        match self.buffer.save() {
            Ok(()) => {
                let message = format!("Wrote {}", self.buffer.path().display());
                self.report(&message);
            }
            Err(e) => {
                let message = format!("Save failed: {}", e);
                self.report_error(&message);
            }
        }
    }

    fn report(&mut self, message: &str) {
        self.status_message = message.to_string();
        self.status_is_error = false;
    }

    fn report_error(&mut self, message: &str) {
        self.status_message = message.to_string();
        self.status_is_error = true;
    }
}
