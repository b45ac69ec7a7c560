use crate::parsing::{blocks::Block, inline::Run};

/// A block together with the inline runs resolved from its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledBlock {
    pub block: Block,
    pub runs: Vec<Run>,
}

/// A parsed chat reply, ready to hand to a document writer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<StyledBlock>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StyledBlock> {
        self.blocks.iter()
    }

    /// Link targets in document order, duplicates included.
    pub fn link_targets(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .flat_map(|b| b.runs.iter())
            .filter_map(|r| r.link_target())
            .collect()
    }
}
