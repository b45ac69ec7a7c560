use super::{
    grammar::Grammar,
    kinds::{Bullet, CodeFence, Heading},
    types::HeadingLevel,
};

/// What a line would become outside of a code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leaf<'a> {
    Heading { level: HeadingLevel, text: &'a str },
    Blank,
    Bullet { text: &'a str },
    Paragraph { text: &'a str },
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Whether the line ends up as code
/// content is decided by the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClass<'a> {
    /// The line as it appeared in the input, without the line break.
    pub raw: &'a str,
    /// The trimmed line starts with a code fence marker.
    pub is_fence: bool,
    /// Block the line opens when not inside a code block.
    pub leaf: Leaf<'a>,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier {
    grammar: Grammar,
}

impl MarkdownLineClassifier {
    pub fn new(grammar: Grammar) -> Self {
        Self { grammar }
    }

    /// Classifies a line into a [`LineClass`].
    ///
    /// Rules are tried in priority order on the trimmed line: `#` headings
    /// (shallowest first), label headings, blank, bullet, paragraph.
    pub fn classify<'a>(&self, raw: &'a str) -> LineClass<'a> {
        let trimmed = raw.trim();
        LineClass {
            raw,
            is_fence: CodeFence::is_marker(trimmed),
            leaf: self.leaf(trimmed),
        }
    }

    fn leaf<'a>(&self, trimmed: &'a str) -> Leaf<'a> {
        if let Some((level, text)) = Heading::atx(trimmed, self.grammar.max_heading_depth()) {
            return Leaf::Heading { level, text };
        }
        if self.grammar.label_headings && Heading::label(trimmed) {
            return Leaf::Heading {
                level: HeadingLevel::H2,
                text: trimmed,
            };
        }
        if trimmed.is_empty() {
            return Leaf::Blank;
        }
        if let Some(text) = Bullet::item(trimmed) {
            return Leaf::Bullet { text };
        }
        Leaf::Paragraph { text: trimmed }
    }
}

impl Default for MarkdownLineClassifier {
    fn default() -> Self {
        Self::new(Grammar::default())
    }
}
