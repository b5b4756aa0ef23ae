//! Column alignment across a block of declarations
//!
//! This module re-renders a contiguous run of declaration lines so their
//! fields line up:
//! - [`AlignmentPlan`]: the two shared column offsets of one batch
//! - [`align_declarations`]: split, plan, and render a whole batch
//!
//! # Alignment Model
//!
//! Two columns are computed per batch, both measured in characters from
//! the shared indentation:
//! - `name_column`: where every name starts, the widest
//!   `type_spec + pointer` plus one space.
//! - `equals_column`: where every `=` starts, `name_column` plus the
//!   widest initialized name plus one space. Zero when nothing in the
//!   batch has an initializer.
//!
//! Indentation comes from the first line of the batch alone and is
//! applied to every rendered line, so re-aligning a block also squares
//! up ragged indentation. Lines that do not classify as declarations
//! are dropped from the output, which is therefore allowed to be
//! shorter than the input.

use std::error::Error;
use std::fmt;

use crate::decl::{split_declaration, DeclarationFields, MalformedDeclaration};

/// Column offsets shared by every line of one alignment batch.
///
/// A plan is recomputed from scratch for each batch and never reused,
/// so the offsets always reflect the current field widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentPlan {
    /// Leading spaces applied to every rendered line.
    pub indentation: usize,
    /// Offset (from the indentation) at which names start.
    pub name_column: usize,
    /// Offset at which `=` starts, zero when no line has one.
    pub equals_column: usize,
}

impl AlignmentPlan {
    /// Compute the column offsets for a batch of split declarations.
    pub fn from_fields(indentation: usize, fields: &[DeclarationFields]) -> AlignmentPlan {
        let name_column = fields
            .iter()
            .map(|f| width(&f.type_spec) + width(&f.pointer) + 1)
            .max()
            .unwrap_or(0);
        let equals_column = fields
            .iter()
            .filter(|f| f.has_initializer())
            .map(|f| name_column + width(&f.name) + 1)
            .max()
            .unwrap_or(0);

        AlignmentPlan {
            indentation,
            name_column,
            equals_column,
        }
    }

    /// Render one declaration padded to this plan's columns.
    pub fn render(&self, fields: &DeclarationFields) -> String {
        let mut line = " ".repeat(self.indentation);
        line.push_str(&fields.type_spec);

        let padding = self
            .name_column
            .saturating_sub(width(&fields.type_spec) + width(&fields.pointer));
        line.push_str(&" ".repeat(padding));
        line.push_str(&fields.pointer);
        line.push_str(&fields.name);

        if fields.has_initializer() {
            let used = width(&line) - self.indentation;
            line.push_str(&" ".repeat(self.equals_column.saturating_sub(used)));
            line.push_str("= ");
            line.push_str(&fields.assignment);
        }
        line.push_str(&fields.terminator);

        line
    }
}

/// Alignment failure for a whole batch.
///
/// A malformed line aborts the batch before anything is rendered, so a
/// caller that sees this error knows no replacement lines were produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlignError {
    /// One line tokenized like a declaration but could not be split.
    MalformedLine {
        /// 1-based position of the line within the batch.
        line_number: usize,
        cause: MalformedDeclaration,
    },
}

impl fmt::Display for AlignError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AlignError::MalformedLine { line_number, cause } => {
                write!(f, "line {}: {}", line_number, cause)
            }
        }
    }
}

impl Error for AlignError {}

/// Align a batch of raw lines.
///
/// Splits every line, drops the ones that are not declarations, and
/// renders the rest against a fresh [`AlignmentPlan`]. The output holds
/// one line per retained declaration, so batches with no declarations
/// at all (including empty batches) come back as an empty vector.
pub fn align_declarations<S: AsRef<str>>(lines: &[S]) -> Result<Vec<String>, AlignError> {
    // Indentation is sampled from the first line even when that line is
    // not itself a declaration.
    let indentation = match lines.first() {
        Some(first) => leading_spaces(first.as_ref()),
        None => return Ok(Vec::new()),
    };

    let mut fields = Vec::new();
    for (index, line) in lines.iter().enumerate() {
        match split_declaration(line.as_ref()) {
            Ok(Some(declaration)) => fields.push(declaration),
            Ok(None) => {}
            Err(cause) => {
                return Err(AlignError::MalformedLine {
                    line_number: index + 1,
                    cause,
                })
            }
        }
    }
    if fields.is_empty() {
        return Ok(Vec::new());
    }

    let plan = AlignmentPlan::from_fields(indentation, &fields);
    Ok(fields.iter().map(|f| plan.render(f)).collect())
}

/// Width in characters, so multi-byte text pads the same as ASCII.
fn width(text: &str) -> usize {
    text.chars().count()
}

fn leading_spaces(line: &str) -> usize {
    line.chars().take_while(|c| *c == ' ').count()
}
