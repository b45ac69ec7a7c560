use std::sync::OnceLock;

use regex::Regex;

/// Inline code span `` `code` ``.
pub struct CodeSpan;

impl CodeSpan {
    /// Single-backtick span with at least one character inside.
    pub fn pattern() -> &'static Regex {
        static CODE: OnceLock<Regex> = OnceLock::new();
        CODE.get_or_init(|| Regex::new(r"`([^`]+)`").expect("Invalid code span regex"))
    }
}
