use super::blocks::{
    Block,
    kinds::{Bullet, CodeFence, Heading},
};

/// Writes blocks back out as Markdown, re-inserting each block's markers.
///
/// Every line is newline-terminated so a trailing blank line survives.
/// Label headings come back as `## label:`. Re-parsing the output with the
/// same grammar yields the same blocks.
pub fn render_markdown(blocks: &[Block]) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(blocks.len());

    for block in blocks {
        match block {
            Block::Heading { level, text } => {
                let marker = Heading::MARKER.to_string().repeat(level.depth());
                lines.push(format!("{marker} {text}"));
            }
            Block::CodeBlock { lines: code } => {
                lines.push(CodeFence::BACKTICKS.to_string());
                lines.extend(code.iter().cloned());
                lines.push(CodeFence::BACKTICKS.to_string());
            }
            Block::BulletItem { text } => lines.push(format!("{} {text}", Bullet::MARKERS[0])),
            Block::Paragraph { text } => lines.push(text.clone()),
            Block::BlankLine => lines.push(String::new()),
        }
    }

    lines.into_iter().map(|line| line + "\n").collect()
}
