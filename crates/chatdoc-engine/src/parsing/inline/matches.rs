use regex::{Captures, Regex};

use super::kinds::{CodeSpan, Emphasis, Link};

/// Style a candidate span would apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanStyle {
    Bold,
    Italic,
    Code,
    Link,
}

/// A candidate styled span found by one of the pattern scans.
///
/// Offsets are byte offsets into the scanned line; `end` is exclusive and
/// covers the delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanMatch<'a> {
    pub start: usize,
    pub end: usize,
    pub content: &'a str,
    pub target: Option<&'a str>,
    pub style: SpanStyle,
}

/// Runs every pattern scan over `line`, in scan order: bold, italic, code, link.
pub fn collect_matches(line: &str) -> Vec<SpanMatch<'_>> {
    let mut out = Vec::new();
    scan(&mut out, line, Emphasis::bold(), SpanStyle::Bold);
    scan(&mut out, line, Emphasis::italic(), SpanStyle::Italic);
    scan(&mut out, line, CodeSpan::pattern(), SpanStyle::Code);
    scan(&mut out, line, Link::pattern(), SpanStyle::Link);
    out
}

fn scan<'a>(out: &mut Vec<SpanMatch<'a>>, line: &'a str, re: &Regex, style: SpanStyle) {
    for caps in re.captures_iter(line) {
        let Some(full) = caps.get(0) else {
            continue;
        };
        let content = first_group(&caps, style);
        let target = match style {
            SpanStyle::Link => caps.get(2).map(|m| m.as_str()),
            _ => None,
        };
        out.push(SpanMatch {
            start: full.start(),
            end: full.end(),
            content,
            target,
            style,
        });
    }
}

/// Inner text of a match: group 1, or group 2 for the alternate emphasis form.
fn first_group<'a>(caps: &Captures<'a>, style: SpanStyle) -> &'a str {
    let group = match style {
        SpanStyle::Bold | SpanStyle::Italic => caps.get(1).or_else(|| caps.get(2)),
        SpanStyle::Code | SpanStyle::Link => caps.get(1),
    };
    group.map_or("", |m| m.as_str())
}

/// Orders matches by start and drops every match that begins inside the
/// previously kept one.
///
/// The sort is stable, so at equal starts the earlier scan wins (bold over
/// italic). Each match is compared only against the last kept match.
pub fn resolve_overlaps(mut matches: Vec<SpanMatch<'_>>) -> Vec<SpanMatch<'_>> {
    matches.sort_by_key(|m| m.start);

    let mut kept: Vec<SpanMatch<'_>> = Vec::with_capacity(matches.len());
    for m in matches {
        if kept.last().is_some_and(|prev| m.start < prev.end) {
            continue;
        }
        kept.push(m);
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn styles(line: &str) -> Vec<(SpanStyle, &str)> {
        resolve_overlaps(collect_matches(line))
            .into_iter()
            .map(|m| (m.style, m.content))
            .collect()
    }

    #[test]
    fn scans_report_all_candidates_before_pruning() {
        let found = collect_matches("**a *b* c**");
        assert!(found.iter().any(|m| m.style == SpanStyle::Bold));
        assert!(found.iter().any(|m| m.style == SpanStyle::Italic));
    }

    #[test]
    fn bold_wins_tie_with_italic() {
        assert_eq!(styles("**bold**"), vec![(SpanStyle::Bold, "bold")]);
    }

    #[test]
    fn nested_italic_is_dropped() {
        assert_eq!(styles("**a *b* c**"), vec![(SpanStyle::Bold, "a *b* c")]);
    }

    #[test]
    fn underscore_forms() {
        assert_eq!(
            styles("__strong__ and _soft_"),
            vec![(SpanStyle::Bold, "strong"), (SpanStyle::Italic, "soft")]
        );
    }

    #[test]
    fn code_span_shields_emphasis() {
        assert_eq!(styles("`a*b*c`"), vec![(SpanStyle::Code, "a*b*c")]);
    }

    #[test]
    fn earlier_italic_cuts_off_later_code() {
        assert_eq!(styles("*a `b* c`"), vec![(SpanStyle::Italic, "a `b")]);
    }

    #[test]
    fn discarded_match_does_not_block_later_ones() {
        // The code span is dropped inside the first italic; the second italic
        // overlaps the code span but only the first italic counts.
        assert_eq!(
            styles("*x `y* *z` w*"),
            vec![(SpanStyle::Italic, "x `y"), (SpanStyle::Italic, "z` w")]
        );
    }

    #[test]
    fn link_keeps_target() {
        let kept = resolve_overlaps(collect_matches("see [docs](https://example.com) now"));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].style, SpanStyle::Link);
        assert_eq!(kept[0].content, "docs");
        assert_eq!(kept[0].target, Some("https://example.com"));
        assert_eq!((kept[0].start, kept[0].end), (4, 31));
    }

    #[test]
    fn empty_code_span_is_not_a_match() {
        assert!(styles("``").is_empty());
    }

    #[test]
    fn offsets_are_bytes_of_multibyte_text() {
        let kept = resolve_overlaps(collect_matches("中文**粗体**"));
        assert_eq!(kept.len(), 1);
        assert_eq!((kept[0].start, kept[0].end), (6, 16));
        assert_eq!(kept[0].content, "粗体");
    }
}
