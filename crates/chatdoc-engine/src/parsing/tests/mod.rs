//! Behavioural tests for block and inline parsing working together.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    blocks::{Block, Grammar, HeadingLevel, parse_blocks},
    inline::{Run, RunStyle, resolve_inline},
    parse_document,
};

const CORPUS: &[&str] = &[
    "",
    "\n\n\n",
    "# Title\n\nSome **bold** and *italic* text.\n\n```\ncode line 1\ncode line 2\n```\n- item one\n- item two",
    "```\nabc",
    "```\n```",
    "Summary:\n- first\n* second\n\n#### Small\n##### Too small",
    "  indented paragraph  \r\nwindows line\r\n",
    "```rust\nfn main() {\n    println!(\"hi\");\n}\n```\ntrailing",
    "总结：\n第一点：**重点**\n- 列表项",
    "plain\n\n\n",
];

#[test]
fn corpus_satisfies_block_invariants() {
    for md in CORPUS {
        for grammar in [Grammar::full(), Grammar::chat(), Grammar::standalone()] {
            invariants::check_blocks(md, &grammar);
        }
    }
}

#[rstest]
#[case("")]
#[case("plain words only")]
#[case("Some **bold** and *italic* text.")]
#[case("**a *b* c**")]
#[case("snake_case_name and __init__")]
#[case("[label](https://example.com) then `code` then **end**")]
#[case("unclosed ** and ` and [x](")]
#[case("*x `y* *z` w*")]
#[case("**")]
#[case("中文 **粗体** 和 `代码`")]
fn lines_satisfy_run_invariants(#[case] line: &str) {
    invariants::check_runs(line);
}

#[test]
fn headline_scenario() {
    let md = "# Title\n\nSome **bold** and *italic* text.\n\n```\ncode line 1\ncode line 2\n```\n- item one\n- item two";
    let blocks = parse_blocks(md, &Grammar::default());

    assert_eq!(
        blocks,
        vec![
            Block::Heading {
                level: HeadingLevel::H1,
                text: "Title".into()
            },
            Block::BlankLine,
            Block::Paragraph {
                text: "Some **bold** and *italic* text.".into()
            },
            Block::BlankLine,
            Block::CodeBlock {
                lines: vec!["code line 1".into(), "code line 2".into()]
            },
            Block::BulletItem {
                text: "item one".into()
            },
            Block::BulletItem {
                text: "item two".into()
            },
        ]
    );

    let doc = parse_document(md, &Grammar::default());
    assert_eq!(
        doc.blocks[2].runs,
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
fn unterminated_fence_produces_no_code_block() {
    assert_eq!(parse_blocks("```\nabc", &Grammar::default()), vec![]);
}

#[test]
fn empty_input_produces_no_blocks() {
    assert!(parse_blocks("", &Grammar::default()).is_empty());
}

#[test]
fn trailing_newline_adds_no_blank_line() {
    assert_eq!(
        parse_blocks("text\n", &Grammar::default()),
        vec![Block::Paragraph {
            text: "text".into()
        }]
    );
}

#[test]
fn bold_suppresses_nested_italic() {
    assert_eq!(
        resolve_inline("**a *b* c**"),
        vec![Run::styled(RunStyle::Bold, "a *b* c")]
    );
}

#[rstest]
#[case("Some **bold** and *italic* text.", "Some bold and italic text.")]
#[case("__init__ runs first", "init runs first")]
#[case("call `f(x)` now", "call f(x) now")]
#[case("see [docs](https://example.com).", "see docs.")]
#[case("no markup", "no markup")]
#[case("**a *b* c**", "a *b* c")]
#[case("*x `y* *z` w*", "x `y z` w")]
fn runs_reconstruct_stripped_line(#[case] line: &str, #[case] stripped: &str) {
    let joined: String = resolve_inline(line)
        .into_iter()
        .map(|r| r.content)
        .collect();
    assert_eq!(joined, stripped);
}

#[rstest]
#[case(Grammar::full(), "#### Minor", Block::Heading { level: HeadingLevel::H4, text: "Minor".into() })]
#[case(Grammar::chat(), "#### Minor", Block::Paragraph { text: "#### Minor".into() })]
#[case(Grammar::full(), "Steps:", Block::Heading { level: HeadingLevel::H2, text: "Steps:".into() })]
#[case(Grammar::standalone(), "Steps:", Block::Paragraph { text: "Steps:".into() })]
fn grammar_variants(#[case] grammar: Grammar, #[case] line: &str, #[case] expected: Block) {
    assert_eq!(parse_blocks(line, &grammar), vec![expected]);
}

#[test]
fn heading_priority_beats_label_rule() {
    assert_eq!(
        parse_blocks("# Overview:", &Grammar::default()),
        vec![Block::Heading {
            level: HeadingLevel::H1,
            text: "Overview:".into()
        }]
    );
}

#[test]
fn label_rule_beats_bullet_and_paragraph() {
    assert_eq!(
        parse_blocks("1. First step:", &Grammar::default()),
        vec![Block::Heading {
            level: HeadingLevel::H2,
            text: "1. First step:".into()
        }]
    );
}
