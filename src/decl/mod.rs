//! Declaration recognition
//!
//! This module turns raw source lines into structured declarations:
//! - [`token`]: Quote-aware tokenization (line text → tokens)
//! - [`split`]: Field extraction (tokens → declaration fields)
//! - [`fields`]: Field and error definitions
//!
//! # Recognized Shape
//!
//! A declaration is any line whose tokens contain a top-level `=` or `;`
//! delimiter. It decomposes into six fields, any of which may be empty:
//!
//! ```text
//! line:    static char *s = "abc";
//!
//! fields:  type_spec  = "static char"
//!          pointer    = "*"
//!          name       = "s"
//!          equals     = "="
//!          assignment = "\"abc\""
//!          terminator = ";"
//! ```
//!
//! No C grammar is involved. The fields fall out of token positions
//! alone, so the module happily splits things that are not declarations
//! at all, and callers decide which lines to feed it.

pub mod fields;
pub mod split;
pub mod token;

pub use fields::{DeclarationFields, MalformedDeclaration};
pub use split::split_declaration;
