use super::{
    matches::{SpanMatch, SpanStyle, collect_matches, resolve_overlaps},
    types::{Run, RunStyle},
};

/// Splits one line of inline markup into styled [`Run`]s.
///
/// Bold, italic, code and link spans are detected independently and the
/// leftmost span wins any overlap. Text between kept spans becomes plain
/// runs; empty gaps produce nothing.
///
/// A line without any span (including the empty line) yields exactly one
/// plain run holding the line unchanged.
pub fn resolve_inline(line: &str) -> Vec<Run> {
    let kept = resolve_overlaps(collect_matches(line));
    if kept.is_empty() {
        return vec![Run::plain(line)];
    }

    let mut out = Vec::with_capacity(kept.len() * 2 + 1);
    let mut text_start = 0;

    // Helper to flush the plain text between spans
    fn flush_text(out: &mut Vec<Run>, line: &str, start: usize, end: usize) {
        if end > start {
            out.push(Run::plain(&line[start..end]));
        }
    }

    for m in &kept {
        flush_text(&mut out, line, text_start, m.start);
        out.push(styled_run(m));
        text_start = m.end;
    }
    flush_text(&mut out, line, text_start, line.len());

    out
}

fn styled_run(m: &SpanMatch<'_>) -> Run {
    let style = match m.style {
        SpanStyle::Bold => RunStyle::Bold,
        SpanStyle::Italic => RunStyle::Italic,
        SpanStyle::Code => RunStyle::Code,
        SpanStyle::Link => RunStyle::Link {
            target: m.target.unwrap_or_default().to_string(),
        },
    };
    Run::styled(style, m.content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_line_is_single_run() {
        assert_eq!(
            resolve_inline("nothing special here"),
            vec![Run::plain("nothing special here")]
        );
    }

    #[test]
    fn empty_line_is_single_empty_run() {
        assert_eq!(resolve_inline(""), vec![Run::plain("")]);
    }

    #[test]
    fn mixed_styles() {
        assert_eq!(
            resolve_inline("Some **bold** and *italic* text."),
            vec![
                Run::plain("Some "),
                Run::styled(RunStyle::Bold, "bold"),
                Run::plain(" and "),
                Run::styled(RunStyle::Italic, "italic"),
                Run::plain(" text."),
            ]
        );
    }

    #[test]
    fn whole_line_code_span() {
        assert_eq!(
            resolve_inline("`inline code`"),
            vec![Run::styled(RunStyle::Code, "inline code")]
        );
    }

    #[test]
    fn adjacent_spans_have_no_gap_run() {
        assert_eq!(
            resolve_inline("**a**`b`"),
            vec![
                Run::styled(RunStyle::Bold, "a"),
                Run::styled(RunStyle::Code, "b"),
            ]
        );
    }

    #[test]
    fn link_run_carries_target() {
        let runs = resolve_inline("Read [the guide](https://example.com/guide).");
        assert_eq!(
            runs,
            vec![
                Run::plain("Read "),
                Run::styled(
                    RunStyle::Link {
                        target: "https://example.com/guide".into()
                    },
                    "the guide"
                ),
                Run::plain("."),
            ]
        );
        assert_eq!(runs[1].link_target(), Some("https://example.com/guide"));
    }

    #[test]
    fn unmatched_delimiters_stay_plain() {
        assert_eq!(
            resolve_inline("price is 5 * 3 and `open"),
            vec![Run::plain("price is 5 * 3 and `open")]
        );
    }
}
