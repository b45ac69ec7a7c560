/// Heading depth recognised by the block parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
}

impl HeadingLevel {
    /// Maps a count of leading `#` markers to a level.
    pub fn from_marker_count(count: usize) -> Option<Self> {
        match count {
            1 => Some(Self::H1),
            2 => Some(Self::H2),
            3 => Some(Self::H3),
            4 => Some(Self::H4),
            _ => None,
        }
    }

    /// Number of `#` markers that introduce this level.
    pub fn depth(self) -> usize {
        match self {
            Self::H1 => 1,
            Self::H2 => 2,
            Self::H3 => 3,
            Self::H4 => 4,
        }
    }
}

/// Flat discriminant of a [`Block`], convenient for lookup tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    CodeBlock,
    BulletItem,
    Paragraph,
    BlankLine,
}

/// One structural unit of parsed content.
///
/// Text-bearing variants hold the raw inline markup (still containing `**`,
/// backticks, link syntax); inline styling is resolved separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `#`..`####` heading, or a label line ending in a colon (as H2).
    Heading { level: HeadingLevel, text: String },
    /// Lines between a pair of ```` ``` ```` fences, whitespace preserved.
    CodeBlock { lines: Vec<String> },
    /// `-` or `*` bullet. Nesting is not modelled.
    BulletItem { text: String },
    /// Any other non-blank line, trimmed.
    Paragraph { text: String },
    /// A line that is empty after trimming.
    BlankLine,
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Heading { level, .. } => match level {
                HeadingLevel::H1 => BlockKind::Heading1,
                HeadingLevel::H2 => BlockKind::Heading2,
                HeadingLevel::H3 => BlockKind::Heading3,
                HeadingLevel::H4 => BlockKind::Heading4,
            },
            Block::CodeBlock { .. } => BlockKind::CodeBlock,
            Block::BulletItem { .. } => BlockKind::BulletItem,
            Block::Paragraph { .. } => BlockKind::Paragraph,
            Block::BlankLine => BlockKind::BlankLine,
        }
    }

    /// Raw inline text for headings, bullets and paragraphs.
    pub fn text(&self) -> Option<&str> {
        match self {
            Block::Heading { text, .. }
            | Block::BulletItem { text }
            | Block::Paragraph { text } => Some(text),
            Block::CodeBlock { .. } | Block::BlankLine => None,
        }
    }

    /// Code lines for fenced code blocks.
    pub fn code_lines(&self) -> Option<&[String]> {
        match self {
            Block::CodeBlock { lines } => Some(lines),
            _ => None,
        }
    }
}
