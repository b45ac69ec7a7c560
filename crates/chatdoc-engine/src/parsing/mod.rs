pub mod blocks;
pub mod inline;
pub mod render;

#[cfg(test)]
mod tests;

use blocks::{Block, Grammar};
use inline::{Run, resolve_inline};

use crate::models::{Document, StyledBlock};

pub use blocks::parse_blocks;
pub use render::render_markdown;

/// Parses Markdown into blocks and resolves the inline runs of each block.
pub fn parse_document(markdown: &str, grammar: &Grammar) -> Document {
    let blocks = parse_blocks(markdown, grammar);
    log::debug!(
        "parsed {} block(s) from {} byte(s) of markdown",
        blocks.len(),
        markdown.len()
    );

    Document {
        blocks: blocks
            .into_iter()
            .map(|block| {
                let runs = runs_for_block(&block);
                StyledBlock { block, runs }
            })
            .collect(),
    }
}

/// Inline runs for a block.
///
/// Paragraphs and bullet items get full inline resolution. Headings are
/// written verbatim as one plain run. Code blocks and blank lines have none.
pub fn runs_for_block(block: &Block) -> Vec<Run> {
    match block {
        Block::Paragraph { text } | Block::BulletItem { text } => resolve_inline(text),
        Block::Heading { text, .. } => vec![Run::plain(text.as_str())],
        Block::CodeBlock { .. } | Block::BlankLine => vec![],
    }
}
