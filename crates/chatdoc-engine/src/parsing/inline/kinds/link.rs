use std::sync::OnceLock;

use regex::Regex;

/// Inline link `[label](target)`.
pub struct Link;

impl Link {
    /// Group 1 is the label, group 2 the target.
    pub fn pattern() -> &'static Regex {
        static LINK: OnceLock<Regex> = OnceLock::new();
        LINK.get_or_init(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("Invalid link regex"))
    }
}
