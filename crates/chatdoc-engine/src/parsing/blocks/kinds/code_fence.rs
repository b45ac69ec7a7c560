/// Fenced code block type with its owned delimiter.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Whether a trimmed line opens or closes a fence.
    ///
    /// Anything after the backticks (an info string such as `rust`) is ignored.
    pub fn is_marker(trimmed: &str) -> bool {
        trimmed.starts_with(Self::BACKTICKS)
    }
}
