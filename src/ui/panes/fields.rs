//! Declaration inspector pane
//!
//! Shows the six-field decomposition of the cursor line, live, so the
//! effect of an alignment is visible before running it. While a visual
//! selection is active the pane also shows the column plan that
//! selection would produce.

use crate::align::AlignmentPlan;
use crate::buffer::Buffer;
use crate::decl::split_declaration;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the inspector pane for the cursor line and selection.
pub fn render_fields_pane(
    frame: &mut Frame,
    area: Rect,
    buffer: &Buffer,
    cursor: usize,
    selection: Option<(usize, usize)>,
) {
    let block = Block::default()
        .title(" Declaration ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    let mut rows: Vec<Line> = Vec::new();

    if buffer.is_empty() {
        rows.push(Line::from(Span::styled(
            " empty file",
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    } else {
        match split_declaration(&buffer.lines()[cursor]) {
            Ok(Some(fields)) => {
                rows.push(Line::from(Span::styled(
                    " declaration",
                    Style::default()
                        .fg(DEFAULT_THEME.success)
                        .add_modifier(Modifier::BOLD),
                )));
                let name_style = Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .add_modifier(Modifier::BOLD);
                rows.push(field_row(
                    "type",
                    &fields.type_spec,
                    Style::default().fg(DEFAULT_THEME.type_name),
                ));
                rows.push(field_row(
                    "pointer",
                    &fields.pointer,
                    Style::default().fg(DEFAULT_THEME.primary),
                ));
                rows.push(field_row("name", &fields.name, name_style));
                rows.push(field_row(
                    "equals",
                    &fields.equals,
                    Style::default().fg(DEFAULT_THEME.primary),
                ));
                rows.push(field_row(
                    "assignment",
                    &fields.assignment,
                    Style::default().fg(DEFAULT_THEME.string),
                ));
                rows.push(field_row(
                    "terminator",
                    &fields.terminator,
                    Style::default().fg(DEFAULT_THEME.primary),
                ));
            }
            Ok(None) => {
                rows.push(Line::from(Span::styled(
                    " not a declaration",
                    Style::default().fg(DEFAULT_THEME.comment),
                )));
            }
            Err(e) => {
                rows.push(Line::from(Span::styled(
                    " malformed declaration",
                    Style::default()
                        .fg(DEFAULT_THEME.error)
                        .add_modifier(Modifier::BOLD),
                )));
                rows.push(Line::from(Span::styled(
                    format!(" no name before '{}' at column {}", e.split_token, e.column),
                    Style::default().fg(DEFAULT_THEME.error),
                )));
            }
        }
    }

    if let Some((start, end)) = selection {
        rows.push(Line::default());
        rows.push(Line::from(Span::styled(
            " Selection",
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
        )));
        rows.extend(selection_rows(buffer, start, end));
    }

    let paragraph = Paragraph::new(rows).block(block);
    frame.render_widget(paragraph, area);
}

/// The column plan the current selection would align to, or why it
/// would not align.
fn selection_rows(buffer: &Buffer, start: usize, end: usize) -> Vec<Line<'static>> {
    let lines = &buffer.lines()[start..=end];

    let mut fields = Vec::new();
    for (index, line) in lines.iter().enumerate() {
        match split_declaration(line) {
            Ok(Some(declaration)) => fields.push(declaration),
            Ok(None) => {}
            Err(_) => {
                return vec![Line::from(Span::styled(
                    format!(" malformed line {}", start + index + 1),
                    Style::default().fg(DEFAULT_THEME.error),
                ))];
            }
        }
    }
    if fields.is_empty() {
        return vec![Line::from(Span::styled(
            " no declarations",
            Style::default().fg(DEFAULT_THEME.comment),
        ))];
    }

    let indentation = lines[0].chars().take_while(|c| *c == ' ').count();
    let plan = AlignmentPlan::from_fields(indentation, &fields);
    vec![
        stat_row("lines", (end - start + 1).to_string()),
        stat_row("declarations", fields.len().to_string()),
        stat_row("name column", plan.name_column.to_string()),
        stat_row("equals column", plan.equals_column.to_string()),
    ]
}

/// A labeled field line. The value is copied so the row outlives the
/// split it came from.
fn field_row(label: &str, value: &str, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {:<11}", label),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(value.to_string(), style),
    ])
}

fn stat_row(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {:<13}", label),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(value, Style::default().fg(DEFAULT_THEME.fg)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn scratch(lines: &[&str]) -> Buffer {
        Buffer::from_lines("scratch.c", lines.iter().map(|s| s.to_string()).collect())
    }

    /// Render the pane into a test terminal and return the screen text,
    /// one string per row.
    fn rendered(buffer: &Buffer, cursor: usize, selection: Option<(usize, usize)>) -> String {
        let backend = TestBackend::new(44, 16);
        let mut terminal = Terminal::new(backend).expect("test terminal");
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_fields_pane(frame, area, buffer, cursor, selection);
            })
            .expect("draw failed");

        let screen = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..screen.area.height {
            for x in 0..screen.area.width {
                text.push_str(screen[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_field_rows_own_their_content() {
        let row = {
            let value = String::from("int");
            field_row("type", &value, Style::default())
        };
        assert_eq!(row.spans[1].content, "int");
    }

    #[test]
    fn test_inspector_shows_the_six_fields() {
        let text = rendered(&scratch(&["char *s = \"a\";"]), 0, None);
        assert!(text.contains(" declaration"));
        assert!(text.contains("type"));
        assert!(text.contains("char"));
        assert!(text.contains("pointer"));
        assert!(text.contains("assignment"));
        assert!(text.contains("\"a\""));
    }

    #[test]
    fn test_inspector_reports_malformed_lines() {
        let text = rendered(&scratch(&["= 5;"]), 0, None);
        assert!(text.contains("malformed declaration"));
        assert!(text.contains("no name before '=' at column 1"));
    }

    #[test]
    fn test_inspector_shows_the_selection_plan() {
        let buffer = scratch(&["int x = 5;", "char *longname;"]);
        let text = rendered(&buffer, 0, Some((0, 1)));
        assert!(text.contains("Selection"));
        assert!(text.contains("declarations"));
        assert!(text.contains("name column"));
    }
}
