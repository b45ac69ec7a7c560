use std::sync::OnceLock;

use regex::Regex;

/// Bold and italic spans, each with an asterisk and an underscore form.
///
/// Both patterns are lazy, so `**a** and **b**` yields two bold spans rather
/// than one spanning the whole line.
pub struct Emphasis;

impl Emphasis {
    pub fn bold() -> &'static Regex {
        static BOLD: OnceLock<Regex> = OnceLock::new();
        BOLD.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*|__(.*?)__").expect("Invalid bold regex"))
    }

    pub fn italic() -> &'static Regex {
        static ITALIC: OnceLock<Regex> = OnceLock::new();
        ITALIC.get_or_init(|| Regex::new(r"\*(.*?)\*|_(.*?)_").expect("Invalid italic regex"))
    }
}
