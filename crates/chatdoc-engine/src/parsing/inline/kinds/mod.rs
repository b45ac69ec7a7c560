//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters and patterns.
//!
//! ## Types
//!
//! - **`Emphasis`**: `**bold**` / `__bold__` and `*italic*` / `_italic_`
//! - **`CodeSpan`**: `` `code` ``
//! - **`Link`**: `[label](target)`
//!
//! The resolver asks these types for their patterns; it never hardcodes
//! delimiters itself.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::Link;
