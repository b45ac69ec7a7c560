use chatdoc_engine::{Block, Grammar, Run, RunStyle, parse_blocks, parse_document, render_markdown};
use pretty_assertions::assert_eq;

const HEADLINE: &str = "# Title\n\nSome **bold** and *italic* text.\n\n```\ncode line 1\ncode line 2\n```\n- item one\n- item two";

#[test]
fn headline_document_snapshot() {
    let doc = parse_document(HEADLINE, &Grammar::default());
    insta::assert_debug_snapshot!("headline_document", doc);
}

/// A typical assistant reply: label heading, mixed bullets, fenced code with
/// an info string, and a link.
#[test]
fn assistant_reply_structure() {
    let md = "\
Here is how to fix it:

1. Install the tool
* Run `cargo fmt`
- Read [the book](https://doc.rust-lang.org/book/)

```bash
  cargo build --release
```
";
    let doc = parse_document(md, &Grammar::default());
    let kinds: Vec<_> = doc.iter().map(|b| b.block.kind()).collect();

    use chatdoc_engine::BlockKind::*;
    assert_eq!(
        kinds,
        vec![Heading2, BlankLine, Paragraph, BulletItem, BulletItem, BlankLine, CodeBlock]
    );
    assert_eq!(
        doc.blocks[3].runs,
        vec![Run::plain("Run "), Run::styled(RunStyle::Code, "cargo fmt")]
    );
    assert_eq!(
        doc.blocks[4].runs[1].link_target(),
        Some("https://doc.rust-lang.org/book/")
    );
    assert_eq!(
        doc.blocks[6].block.code_lines(),
        Some(&["  cargo build --release".to_string()][..])
    );
}

#[test]
fn render_then_parse_is_stable() {
    let blocks = parse_blocks(HEADLINE, &Grammar::default());
    let again = parse_blocks(&render_markdown(&blocks), &Grammar::default());
    assert_eq!(again, blocks);
}

#[test]
fn inline_code_line_is_one_code_run() {
    let doc = parse_document("`inline code`", &Grammar::default());
    assert_eq!(
        doc.blocks[0].block,
        Block::Paragraph {
            text: "`inline code`".into()
        }
    );
    assert_eq!(
        doc.blocks[0].runs,
        vec![Run::styled(RunStyle::Code, "inline code")]
    );
}
