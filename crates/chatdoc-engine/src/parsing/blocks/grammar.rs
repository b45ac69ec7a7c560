use serde::{Deserialize, Serialize};

/// Switches for the optional parts of the block grammar.
///
/// The chat page and the standalone exporter historically disagreed on two
/// rules; both are kept behind flags so either behaviour can be reproduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Grammar {
    /// Recognise `#### text` as a fourth heading level.
    pub heading4: bool,
    /// Treat a line like `Summary:` (alphanumeric or CJK start, colon end) as an H2.
    pub label_headings: bool,
}

impl Grammar {
    /// Every rule enabled.
    pub const fn full() -> Self {
        Self {
            heading4: true,
            label_headings: true,
        }
    }

    /// Rules used by the chat page: label headings, no fourth level.
    pub const fn chat() -> Self {
        Self {
            heading4: false,
            label_headings: true,
        }
    }

    /// Rules used by the standalone exporter: fourth level, no label headings.
    pub const fn standalone() -> Self {
        Self {
            heading4: true,
            label_headings: false,
        }
    }

    /// Deepest heading level this grammar accepts.
    pub fn max_heading_depth(&self) -> usize {
        if self.heading4 { 4 } else { 3 }
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::full()
    }
}
