//! # Block Parsing
//!
//! Two-phase, line-oriented block parsing for chat replies.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` holding local facts only (fence marker, and the leaf block it
//!    would open outside code)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` tracks whether a
//!    code fence is open and emits `Block`s in input order
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `BlockKind`, `HeadingLevel`)
//! - **`grammar`**: `Grammar` flags for the optional heading rules
//! - **`kinds`**: Block-specific types with owned delimiters (CodeFence, Heading, Bullet)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Parsing never fails; unrecognised syntax becomes a paragraph
//! - Fenced code blocks are raw zones: lines inside are kept untrimmed
//! - An unterminated fence emits nothing

pub mod builder;
pub mod classify;
pub mod grammar;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{Leaf, LineClass, MarkdownLineClassifier};
pub use grammar::Grammar;
pub use types::{Block, BlockKind, HeadingLevel};

/// Splits `markdown` into lines and parses them into blocks.
pub fn parse_blocks(markdown: &str, grammar: &Grammar) -> Vec<Block> {
    let classifier = MarkdownLineClassifier::new(*grammar);
    let mut builder = BlockBuilder::new();

    for line in markdown.lines() {
        let lc = classifier.classify(line);
        log::trace!("classified {line:?} as {:?}", lc.leaf);
        builder.push(&lc);
    }

    builder.finish()
}
