//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visual panes in the
//! TUI, organized by responsibility.
//!
//! # Pane Modules
//!
//! - [`source`]: Source display with syntax highlighting, cursor line,
//!   and visual selection
//! - [`fields`]: Declaration inspector showing the six fields of the
//!   cursor line and the selection's column plan
//! - [`status`]: Status bar with keybindings and editor state
//!
//! Each pane module exports a `render_*` function taking the frame, its
//! area, and the state it draws from; panes hold no state of their own
//! beyond the source pane's scroll window.

pub mod fields;
pub mod source;
pub mod status;

// Re-export render functions for convenience
pub use fields::render_fields_pane;
pub use source::{render_source_pane, SourceView};
pub use status::render_status_bar;
