//! Source pane rendering with syntax highlighting
//!
//! This module renders the file being edited: line numbers, a cursor
//! line, an optional visual selection, and lightweight C highlighting.
//!
//! # Highlighting
//!
//! A single character scan per line, with the same quote rules as the
//! declaration tokenizer: double-quoted spans are one string-colored
//! unit and a backslash escapes the next character. The three
//! alignment-significant delimiters (`*`, `=`, `;`) get the accent
//! color so a block's columns stand out while moving the cursor.

use crate::buffer::Buffer;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Scroll window of the source pane.
///
/// `height` is written back on every render so key handling knows how
/// far a page movement jumps.
pub struct SourceView {
    pub scroll: usize,
    pub height: usize,
}

/// Render the source pane.
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    buffer: &Buffer,
    cursor: usize,
    selection: Option<(usize, usize)>,
    view: &mut SourceView,
) {
    let title = format!(
        " {}{} ",
        buffer.path().display(),
        if buffer.is_dirty() { " [+]" } else { "" }
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    let total_lines = buffer.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders
    view.height = visible_height;

    // Keep the cursor inside the window.
    if cursor < view.scroll {
        view.scroll = cursor;
    } else if cursor >= view.scroll + visible_height {
        view.scroll = cursor + 1 - visible_height;
    }
    view.scroll = view.scroll.min(total_lines.saturating_sub(visible_height));

    let visible_lines: Vec<Line> = buffer
        .lines()
        .iter()
        .enumerate()
        .skip(view.scroll)
        .take(visible_height)
        .map(|(idx, line)| {
            let is_cursor = idx == cursor;
            let is_selected = selection.is_some_and(|(start, end)| idx >= start && idx <= end);

            let num_style = if is_cursor {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else if is_selected {
                Style::default().fg(DEFAULT_THEME.primary)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut content_line = highlight_line(line);
            if is_cursor || is_selected {
                let background = Style::default().bg(if is_cursor {
                    DEFAULT_THEME.current_line_bg
                } else {
                    DEFAULT_THEME.selection_bg
                });
                for span in &mut content_line.spans {
                    span.style = span.style.patch(background);
                }
            }

            let mut spans = vec![Span::styled(format!("{:4} ", idx + 1), num_style)];
            spans.extend(content_line.spans);
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}

/// Highlight one line of C-like text.
fn highlight_line(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let mut word = String::new();
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        // A quoted span is one unit, with backslash escapes honored so
        // an embedded \" does not end it early.
        if c == '"' {
            flush_word(&mut spans, &mut word, false);
            let mut text = String::from('"');
            let mut escaped = false;
            i += 1;
            while i < chars.len() {
                let q = chars[i];
                text.push(q);
                i += 1;
                if escaped {
                    escaped = false;
                } else if q == '\\' {
                    escaped = true;
                } else if q == '"' {
                    break;
                }
            }
            spans.push(Span::styled(
                text,
                Style::default().fg(DEFAULT_THEME.string),
            ));
            continue;
        }

        if c == '/' && chars.get(i + 1) == Some(&'/') {
            flush_word(&mut spans, &mut word, false);
            let tail: String = chars[i..].iter().collect();
            spans.push(Span::styled(
                tail,
                Style::default().fg(DEFAULT_THEME.comment),
            ));
            break;
        }

        if c.is_alphanumeric() || c == '_' {
            word.push(c);
            i += 1;
            continue;
        }

        flush_word(&mut spans, &mut word, c == '(');
        let style = match c {
            '*' | '=' | ';' => Style::default().fg(DEFAULT_THEME.primary),
            '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.fg),
            _ => Style::default(),
        };
        spans.push(Span::styled(c.to_string(), style));
        i += 1;
    }

    flush_word(&mut spans, &mut word, false);
    Line::from(spans)
}

fn flush_word(spans: &mut Vec<Span>, word: &mut String, is_call: bool) {
    if word.is_empty() {
        return;
    }
    let style = word_style(word, is_call);
    spans.push(Span::styled(std::mem::take(word), style));
}

fn word_style(word: &str, is_call: bool) -> Style {
    if word.starts_with(|c: char| c.is_ascii_digit()) {
        return Style::default().fg(DEFAULT_THEME.number);
    }
    match word {
        "int" | "char" | "void" | "float" | "double" | "long" | "short" | "unsigned"
        | "signed" | "const" | "static" | "struct" | "size_t" | "int8_t" | "int16_t"
        | "int32_t" | "int64_t" | "uint8_t" | "uint16_t" | "uint32_t" | "uint64_t" => {
            Style::default().fg(DEFAULT_THEME.type_name)
        }
        "return" | "if" | "else" | "while" | "for" | "do" | "switch" | "case" | "default"
        | "break" | "continue" | "goto" | "sizeof" | "typedef" | "extern" | "volatile" => {
            Style::default()
                .fg(DEFAULT_THEME.keyword)
                .add_modifier(Modifier::BOLD)
        }
        "NULL" | "true" | "false" => Style::default().fg(DEFAULT_THEME.number),
        _ => {
            if is_call {
                Style::default().fg(DEFAULT_THEME.function)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            }
        }
    }
}
