//! # Introduction
//!
//! decal re-aligns consecutive C-style variable declarations into
//! tabular columns: types, pointer markers, names, `=`, initializers,
//! and terminators each start at a shared offset.  Blocks are selected
//! and aligned in place through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui), or in one shot from the command
//! line.
//!
//! ## Alignment pipeline
//!
//! ```text
//! Raw lines → Tokenizer → DeclarationFields → AlignmentPlan → Rendered lines
//! ```
//!
//! 1. [`decl`] — tokenises one line (quote-aware) and splits it into the
//!    six [`decl::DeclarationFields`] components, or classifies it as
//!    not a declaration.
//! 2. [`align`] — computes an [`align::AlignmentPlan`] over a batch of
//!    lines and renders each declaration padded to the shared columns.
//! 3. [`buffer`] — the file being edited: line storage, range
//!    replacement, undo, save.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Recognized lines
//!
//! A single declaration statement per line: `type [*] name [= init] [;]`
//! with double-quoted string literals kept intact.  Lines with neither a
//! top-level `=` nor `;` pass through classification as non-declarations
//! and are dropped from aligned output.

pub mod align;
pub mod buffer;
pub mod decl;
pub mod ui;
