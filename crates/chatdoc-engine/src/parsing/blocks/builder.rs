use super::{
    classify::{Leaf, LineClass},
    types::Block,
};

#[derive(Debug, Default)]
enum FenceState {
    #[default]
    Closed,
    Open {
        lines: Vec<String>,
    },
}

/// Phase 2 of block parsing: turns classified lines into [`Block`]s.
///
/// Single pass, no lookahead. The only state carried between lines is
/// whether a code fence is open and the code lines collected so far.
#[derive(Debug, Default)]
pub struct BlockBuilder {
    fence: FenceState,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        if c.is_fence {
            self.toggle_fence();
            return;
        }

        if let FenceState::Open { lines } = &mut self.fence {
            lines.push(c.raw.to_string());
            return;
        }

        self.out.push(match c.leaf {
            Leaf::Heading { level, text } => Block::Heading {
                level,
                text: text.to_string(),
            },
            Leaf::Blank => Block::BlankLine,
            Leaf::Bullet { text } => Block::BulletItem {
                text: text.to_string(),
            },
            Leaf::Paragraph { text } => Block::Paragraph {
                text: text.to_string(),
            },
        });
    }

    /// Returns the finished blocks.
    ///
    /// An unterminated fence is dropped along with its collected lines.
    pub fn finish(self) -> Vec<Block> {
        if let FenceState::Open { lines } = &self.fence {
            log::debug!(
                "discarding {} line(s) of unterminated code fence",
                lines.len()
            );
        }
        self.out
    }

    fn toggle_fence(&mut self) {
        match std::mem::take(&mut self.fence) {
            FenceState::Closed => {
                self.fence = FenceState::Open { lines: Vec::new() };
            }
            FenceState::Open { lines } => {
                // An empty fence pair emits nothing.
                if !lines.is_empty() {
                    self.out.push(Block::CodeBlock { lines });
                }
            }
        }
    }
}
