pub mod export;
pub mod models;
pub mod parsing;

// Re-export key types for easier usage
pub use export::{ExportError, ExportOptions, compose_markdown, export_filename};
pub use models::{Document, StyledBlock};
pub use parsing::{
    blocks::{Block, BlockKind, Grammar, HeadingLevel},
    inline::{Run, RunStyle, resolve_inline},
    parse_blocks, parse_document, render_markdown,
};
