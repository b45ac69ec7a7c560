//! # Inline Parsing
//!
//! Resolves the inline styling of a single line into a flat list of runs.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over the raw text
//! of paragraphs and bullet items, one line at a time.
//!
//! Resolution has three steps:
//! - every pattern (bold, italic, code, link) is scanned independently,
//!   collecting candidate `SpanMatch`es
//! - candidates are sorted by start and overlaps are pruned, leftmost wins
//! - the line is walked left to right, emitting plain runs for the gaps
//!
//! ## Modules
//!
//! - **`types`**: `Run` and `RunStyle`
//! - **`kinds`**: Inline types owning their patterns (Emphasis, CodeSpan, Link)
//! - **`matches`**: `SpanMatch` collection and overlap resolution
//! - **`parser`**: `resolve_inline()` main entry point
//!
//! ## Overlap Precedence
//!
//! Styles never nest: `**a *b* c**` is one bold run whose content still
//! contains the inner asterisks.

pub mod kinds;
pub mod matches;
pub mod parser;
pub mod types;

pub use parser::resolve_inline;
pub use types::{Run, RunStyle};
