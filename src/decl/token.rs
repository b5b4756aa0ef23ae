//! Line tokenizer for declaration text
//!
//! Converts one raw line into a flat [`Token`] stream consumed by the
//! splitter. The scan is a single left-to-right pass: maximal runs of the
//! delimiter characters (space, `*`, `=`, `;`) become delimiter tokens and
//! everything between two runs becomes a word token. Double-quoted spans
//! are opaque, so a `;` or `=` inside a string literal never splits the
//! line, and a backslash keeps an escaped `"` from toggling the quote
//! state.
//!
//! Delimiter tokens keep only their non-space characters (`= ` becomes
//! `=`, `* *` becomes `**`); runs made of spaces alone produce no token.

/// Character class a token was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Run of non-delimiter characters, including any quoted spans.
    Word,
    /// Run of delimiter characters with its spaces removed.
    Delimiter,
}

/// One token of a line.
///
/// Every token carries the 1-based character column where its first
/// non-space character appeared, so that malformed-declaration errors can
/// point at the offending delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    pub column: usize,
}

impl Token {
    /// True for a delimiter token made only of `*` characters, which is
    /// how pointer indirection appears between a type and a name.
    pub fn is_pointer_run(&self) -> bool {
        self.kind == TokenKind::Delimiter
            && !self.text.is_empty()
            && self.text.chars().all(|c| c == '*')
    }

    /// True when the token is the delimiter `text` exactly.
    pub fn is_delimiter(&self, text: &str) -> bool {
        self.kind == TokenKind::Delimiter && self.text == text
    }
}

fn is_delimiter_char(c: char) -> bool {
    matches!(c, ' ' | '*' | '=' | ';')
}

/// Tokenize one line.
///
/// Runs are maximal, so the output never contains two delimiter tokens in
/// a row; two word tokens in a row appear wherever an all-space run was
/// dropped between them.
pub fn scan_line(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut word = String::new();
    let mut word_column = 0;
    let mut run = String::new();
    let mut run_column = 0;
    let mut in_quotes = false;
    let mut escaped = false;

    for (i, ch) in line.chars().enumerate() {
        let column = i + 1;

        let is_plain_delimiter =
            !in_quotes && !escaped && ch != '\\' && ch != '"' && is_delimiter_char(ch);

        if is_plain_delimiter {
            if !word.is_empty() {
                tokens.push(Token {
                    text: std::mem::take(&mut word),
                    kind: TokenKind::Word,
                    column: word_column,
                });
            }
            // Spaces extend the run but contribute nothing to its token.
            if ch != ' ' {
                if run.is_empty() {
                    run_column = column;
                }
                run.push(ch);
            }
            continue;
        }

        if !run.is_empty() {
            tokens.push(Token {
                text: std::mem::take(&mut run),
                kind: TokenKind::Delimiter,
                column: run_column,
            });
        }
        if word.is_empty() {
            word_column = column;
        }

        if escaped {
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == '"' {
            in_quotes = !in_quotes;
        }
        word.push(ch);
    }

    if !word.is_empty() {
        tokens.push(Token {
            text: word,
            kind: TokenKind::Word,
            column: word_column,
        });
    }
    if !run.is_empty() {
        tokens.push(Token {
            text: run,
            kind: TokenKind::Delimiter,
            column: run_column,
        });
    }

    tokens
}
