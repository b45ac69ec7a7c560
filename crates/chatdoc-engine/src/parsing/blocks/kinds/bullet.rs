use std::sync::OnceLock;

use regex::Regex;

/// Flat bullet list item (`- item` or `* item`).
pub struct Bullet;

impl Bullet {
    pub const MARKERS: [char; 2] = ['-', '*'];

    /// Returns the item text with the marker and the whitespace after it removed.
    pub fn item(trimmed: &str) -> Option<&str> {
        static ITEM: OnceLock<Regex> = OnceLock::new();
        let re =
            ITEM.get_or_init(|| Regex::new(r"^[-*]\s+(.+)$").expect("Invalid bullet regex"));
        re.captures(trimmed)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_and_star_bullets() {
        assert_eq!(Bullet::item("- first"), Some("first"));
        assert_eq!(Bullet::item("* second"), Some("second"));
        assert_eq!(Bullet::item("-   spaced"), Some("spaced"));
    }

    #[test]
    fn emphasis_is_not_a_bullet() {
        assert_eq!(Bullet::item("**bold** text"), None);
        assert_eq!(Bullet::item("*italic*"), None);
    }

    #[test]
    fn marker_without_text_is_not_a_bullet() {
        assert_eq!(Bullet::item("-"), None);
        assert_eq!(Bullet::item("+ plus"), None);
    }
}
