use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::blocks::types::HeadingLevel;

/// `#` headings and colon-terminated label headings.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';

    /// Matches `# text` through `#### text` on a trimmed line.
    ///
    /// Returns `None` for deeper headings than `max_depth`; those lines fall
    /// through to the remaining rules.
    pub fn atx(trimmed: &str, max_depth: usize) -> Option<(HeadingLevel, &str)> {
        static ATX: OnceLock<Regex> = OnceLock::new();
        let re =
            ATX.get_or_init(|| Regex::new(r"^(#{1,4})\s+(.+)$").expect("Invalid heading regex"));

        let caps = re.captures(trimmed)?;
        let depth = caps.get(1)?.len();
        if depth > max_depth {
            return None;
        }
        let level = HeadingLevel::from_marker_count(depth)?;
        Some((level, caps.get(2)?.as_str()))
    }

    /// Matches label lines such as `Summary:` or `总结：`.
    ///
    /// Only letters, digits and CJK ideographs may start a label, so lines
    /// opening with a structural marker never qualify.
    pub fn label(trimmed: &str) -> bool {
        static LABEL: OnceLock<Regex> = OnceLock::new();
        let re = LABEL.get_or_init(|| {
            Regex::new(r"^[A-Za-z0-9\x{4e00}-\x{9fa5}].*[:\x{ff1a}]$")
                .expect("Invalid label regex")
        });
        re.is_match(trimmed)
    }
}
