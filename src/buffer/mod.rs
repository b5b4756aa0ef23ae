//! Line buffer with range replacement and undo
//!
//! This module owns the file being edited as a `Vec<String>` of lines:
//! - [`Buffer`]: load, replace a line range, align a line range, undo, save
//!
//! # Edit Model
//!
//! Every mutation goes through [`Buffer::replace_range`], which records
//! the removed lines and the inserted count on an undo stack. Undo pops
//! the newest edit and splices the removed lines back. A saved mark
//! remembers the stack depth at the last save; once an undo walks below
//! the mark and a new edit diverges from it, the saved state is no
//! longer reachable and the buffer stays dirty until the next save.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::align::{align_declarations, AlignError};

/// One recorded mutation, enough to reverse it.
struct Edit {
    start: usize,
    removed: Vec<String>,
    inserted: usize,
}

/// The lines of one file plus its edit history.
pub struct Buffer {
    path: PathBuf,
    lines: Vec<String>,
    edits: Vec<Edit>,
    /// Stack depth at the last save; `None` once unreachable by undo.
    saved_mark: Option<usize>,
}

impl Buffer {
    /// Read a file into a buffer. The buffer starts clean.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Buffer> {
        let text = fs::read_to_string(path.as_ref())?;
        let lines = text.lines().map(String::from).collect();
        Ok(Buffer::from_lines(path.as_ref().to_path_buf(), lines))
    }

    /// Build a buffer from lines already in memory.
    pub fn from_lines<P: Into<PathBuf>>(path: P, lines: Vec<String>) -> Buffer {
        Buffer {
            path: path.into(),
            lines,
            edits: Vec::new(),
            saved_mark: Some(0),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// True when the buffer differs from the state last saved (or loaded).
    pub fn is_dirty(&self) -> bool {
        self.saved_mark != Some(self.edits.len())
    }

    /// Replace the inclusive line range `start..=end` with `replacement`.
    ///
    /// The replacement may be shorter or longer than the range. Callers
    /// must pass a range inside the buffer.
    pub fn replace_range(&mut self, start: usize, end: usize, replacement: Vec<String>) {
        if self.saved_mark.is_some_and(|mark| mark > self.edits.len()) {
            // Undone past the save, so a new edit makes the saved state
            // unreachable.
            self.saved_mark = None;
        }
        let inserted = replacement.len();
        let removed = self.lines.splice(start..=end, replacement).collect();
        self.edits.push(Edit {
            start,
            removed,
            inserted,
        });
    }

    /// Align the inclusive line range `start..=end` in place.
    ///
    /// Returns the number of aligned lines now occupying the range. A
    /// range with no declarations leaves the buffer untouched and
    /// returns 0, and a malformed line leaves it untouched and reports
    /// the failure with its position inside the range.
    pub fn align_range(&mut self, start: usize, end: usize) -> Result<usize, AlignError> {
        let aligned = align_declarations(&self.lines[start..=end])?;
        if aligned.is_empty() {
            return Ok(0);
        }
        let count = aligned.len();
        self.replace_range(start, end, aligned);
        Ok(count)
    }

    /// Reverse the newest edit. Returns false when there is nothing to
    /// undo.
    pub fn undo(&mut self) -> bool {
        match self.edits.pop() {
            Some(edit) => {
                self.lines
                    .splice(edit.start..edit.start + edit.inserted, edit.removed);
                true
            }
            None => false,
        }
    }

    /// Write the buffer back to its path with a trailing newline.
    pub fn save(&mut self) -> io::Result<()> {
        let text = if self.lines.is_empty() {
            String::new()
        } else {
            let mut text = self.lines.join("\n");
            text.push('\n');
            text
        };
        fs::write(&self.path, text)?;
        self.saved_mark = Some(self.edits.len());
        Ok(())
    }
}
