//! Fixed formatting table for blocks and runs, and the style and numbering
//! parts generated from it.
//!
//! Measurements follow WordprocessingML units: font sizes in half-points,
//! spacing and indentation in twips.

use chatdoc_engine::{BlockKind, RunStyle};

use crate::{
    DocxError,
    xml::{NS_W, XmlOut},
};

const HEADING_COLOR: &str = "2F5496";
const LINK_COLOR: &str = "0000FF";
const CODE_FONT: &str = "Courier New";
const CODE_SHADING: &str = "E5E5E5";
const BODY_FONT: &str = "Calibri";
const BODY_SIZE: u32 = 22;

/// Numbering instance used by bullet paragraphs.
pub const BULLET_NUM_ID: &str = "1";
const BULLET_INDENT: u32 = 720;
const BULLET_HANGING: u32 = 360;

/// Character formatting, shared by paragraph styles and direct run formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunFormat {
    pub font: Option<&'static str>,
    pub bold: bool,
    pub italic: bool,
    pub color: Option<&'static str>,
    pub size: Option<u32>,
    pub underline: bool,
    pub shading: Option<&'static str>,
}

impl RunFormat {
    pub const NONE: Self = Self {
        font: None,
        bold: false,
        italic: false,
        color: None,
        size: None,
        underline: false,
        shading: None,
    };

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParagraphStyle {
    pub id: &'static str,
    pub name: &'static str,
    pub outline_level: Option<u8>,
    pub spacing_before: Option<u32>,
    pub spacing_after: Option<u32>,
    pub indent_left: Option<u32>,
    pub shading: Option<&'static str>,
    pub run: RunFormat,
}

const fn heading(
    id: &'static str,
    name: &'static str,
    outline_level: u8,
    size: u32,
    before: u32,
    after: u32,
) -> ParagraphStyle {
    ParagraphStyle {
        id,
        name,
        outline_level: Some(outline_level),
        spacing_before: Some(before),
        spacing_after: Some(after),
        indent_left: None,
        shading: None,
        run: RunFormat {
            bold: true,
            color: Some(HEADING_COLOR),
            size: Some(size),
            ..RunFormat::NONE
        },
    }
}

pub const HEADING1: ParagraphStyle = heading("Heading1", "heading 1", 0, 36, 400, 120);
pub const HEADING2: ParagraphStyle = heading("Heading2", "heading 2", 1, 32, 320, 120);
pub const HEADING3: ParagraphStyle = heading("Heading3", "heading 3", 2, 28, 240, 100);
pub const HEADING4: ParagraphStyle = heading("Heading4", "heading 4", 3, 26, 200, 80);

pub const CODE: ParagraphStyle = ParagraphStyle {
    id: "Code",
    name: "Code",
    outline_level: None,
    spacing_before: Some(200),
    spacing_after: Some(200),
    indent_left: None,
    shading: Some(CODE_SHADING),
    run: RunFormat {
        font: Some(CODE_FONT),
        ..RunFormat::NONE
    },
};

pub const LIST_BULLET: ParagraphStyle = ParagraphStyle {
    id: "ListBullet",
    name: "List Bullet",
    outline_level: None,
    spacing_before: None,
    spacing_after: None,
    indent_left: Some(BULLET_INDENT),
    shading: None,
    run: RunFormat::NONE,
};

const ALL_STYLES: [&ParagraphStyle; 6] =
    [&HEADING1, &HEADING2, &HEADING3, &HEADING4, &CODE, &LIST_BULLET];

/// Paragraph style for a block; `None` means the default (Normal) style.
pub fn paragraph_style(kind: BlockKind) -> Option<&'static ParagraphStyle> {
    match kind {
        BlockKind::Heading1 => Some(&HEADING1),
        BlockKind::Heading2 => Some(&HEADING2),
        BlockKind::Heading3 => Some(&HEADING3),
        BlockKind::Heading4 => Some(&HEADING4),
        BlockKind::CodeBlock => Some(&CODE),
        BlockKind::BulletItem => Some(&LIST_BULLET),
        BlockKind::Paragraph | BlockKind::BlankLine => None,
    }
}

/// Direct formatting applied to a run of the given style.
pub fn run_format(style: &RunStyle) -> RunFormat {
    match style {
        RunStyle::Plain => RunFormat::NONE,
        RunStyle::Bold => RunFormat {
            bold: true,
            ..RunFormat::NONE
        },
        RunStyle::Italic => RunFormat {
            italic: true,
            ..RunFormat::NONE
        },
        RunStyle::Code => RunFormat {
            font: Some(CODE_FONT),
            shading: Some(CODE_SHADING),
            ..RunFormat::NONE
        },
        RunStyle::Link { .. } => RunFormat {
            color: Some(LINK_COLOR),
            underline: true,
            ..RunFormat::NONE
        },
    }
}

/// Writes `<w:rPr>`, children in schema order. Nothing is written for an
/// empty format.
pub(crate) fn write_run_properties(
    out: &mut XmlOut,
    format: &RunFormat,
) -> Result<(), DocxError> {
    if format.is_empty() {
        return Ok(());
    }
    out.start("w:rPr", &[])?;
    if let Some(font) = format.font {
        out.empty(
            "w:rFonts",
            &[("w:ascii", font), ("w:hAnsi", font), ("w:cs", font)],
        )?;
    }
    if format.bold {
        out.empty("w:b", &[])?;
    }
    if format.italic {
        out.empty("w:i", &[])?;
    }
    if let Some(color) = format.color {
        out.empty("w:color", &[("w:val", color)])?;
    }
    if let Some(size) = format.size {
        let size = size.to_string();
        out.empty("w:sz", &[("w:val", size.as_str())])?;
        out.empty("w:szCs", &[("w:val", size.as_str())])?;
    }
    if format.underline {
        out.empty("w:u", &[("w:val", "single")])?;
    }
    if let Some(fill) = format.shading {
        write_shading(out, fill)?;
    }
    out.end("w:rPr")
}

fn write_shading(out: &mut XmlOut, fill: &str) -> Result<(), DocxError> {
    out.empty(
        "w:shd",
        &[("w:val", "clear"), ("w:color", "auto"), ("w:fill", fill)],
    )
}

fn write_paragraph_properties(
    out: &mut XmlOut,
    style: &ParagraphStyle,
) -> Result<(), DocxError> {
    out.start("w:pPr", &[])?;
    if style.outline_level.is_some() {
        out.empty("w:keepNext", &[])?;
    }
    if let Some(fill) = style.shading {
        write_shading(out, fill)?;
    }
    if style.spacing_before.is_some() || style.spacing_after.is_some() {
        let before = style.spacing_before.unwrap_or(0).to_string();
        let after = style.spacing_after.unwrap_or(0).to_string();
        out.empty(
            "w:spacing",
            &[("w:before", before.as_str()), ("w:after", after.as_str())],
        )?;
    }
    if let Some(left) = style.indent_left {
        let left = left.to_string();
        let hanging = BULLET_HANGING.to_string();
        out.empty(
            "w:ind",
            &[("w:left", left.as_str()), ("w:hanging", hanging.as_str())],
        )?;
    }
    if let Some(level) = style.outline_level {
        out.empty("w:outlineLvl", &[("w:val", level.to_string().as_str())])?;
    }
    out.end("w:pPr")
}

/// `word/styles.xml`: document defaults, Normal, and every table style.
pub fn styles_xml() -> Result<Vec<u8>, DocxError> {
    let mut out = XmlOut::new()?;
    out.start("w:styles", &[("xmlns:w", NS_W)])?;

    out.start("w:docDefaults", &[])?;
    out.start("w:rPrDefault", &[])?;
    write_run_properties(
        &mut out,
        &RunFormat {
            font: Some(BODY_FONT),
            size: Some(BODY_SIZE),
            ..RunFormat::NONE
        },
    )?;
    out.end("w:rPrDefault")?;
    out.end("w:docDefaults")?;

    out.start(
        "w:style",
        &[
            ("w:type", "paragraph"),
            ("w:default", "1"),
            ("w:styleId", "Normal"),
        ],
    )?;
    out.empty("w:name", &[("w:val", "Normal")])?;
    out.empty("w:qFormat", &[])?;
    out.end("w:style")?;

    for style in ALL_STYLES {
        out.start(
            "w:style",
            &[("w:type", "paragraph"), ("w:styleId", style.id)],
        )?;
        out.empty("w:name", &[("w:val", style.name)])?;
        out.empty("w:basedOn", &[("w:val", "Normal")])?;
        out.empty("w:next", &[("w:val", "Normal")])?;
        out.empty("w:qFormat", &[])?;
        write_paragraph_properties(&mut out, style)?;
        write_run_properties(&mut out, &style.run)?;
        out.end("w:style")?;
    }

    out.end("w:styles")?;
    Ok(out.finish())
}

/// `word/numbering.xml`: a single-level bullet list.
pub fn numbering_xml() -> Result<Vec<u8>, DocxError> {
    let left = BULLET_INDENT.to_string();
    let hanging = BULLET_HANGING.to_string();

    let mut out = XmlOut::new()?;
    out.start("w:numbering", &[("xmlns:w", NS_W)])?;

    out.start("w:abstractNum", &[("w:abstractNumId", "0")])?;
    out.empty("w:multiLevelType", &[("w:val", "singleLevel")])?;
    out.start("w:lvl", &[("w:ilvl", "0")])?;
    out.empty("w:start", &[("w:val", "1")])?;
    out.empty("w:numFmt", &[("w:val", "bullet")])?;
    out.empty("w:lvlText", &[("w:val", "\u{2022}")])?;
    out.empty("w:lvlJc", &[("w:val", "left")])?;
    out.start("w:pPr", &[])?;
    out.empty(
        "w:ind",
        &[("w:left", left.as_str()), ("w:hanging", hanging.as_str())],
    )?;
    out.end("w:pPr")?;
    out.end("w:lvl")?;
    out.end("w:abstractNum")?;

    out.start("w:num", &[("w:numId", BULLET_NUM_ID)])?;
    out.empty("w:abstractNumId", &[("w:val", "0")])?;
    out.end("w:num")?;

    out.end("w:numbering")?;
    Ok(out.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(BlockKind::Heading1, Some("Heading1"))]
    #[case(BlockKind::Heading4, Some("Heading4"))]
    #[case(BlockKind::CodeBlock, Some("Code"))]
    #[case(BlockKind::BulletItem, Some("ListBullet"))]
    #[case(BlockKind::Paragraph, None)]
    #[case(BlockKind::BlankLine, None)]
    fn block_to_style(#[case] kind: BlockKind, #[case] id: Option<&str>) {
        assert_eq!(paragraph_style(kind).map(|s| s.id), id);
    }

    #[test]
    fn heading_sizes_shrink_with_depth() {
        let sizes: Vec<_> = [HEADING1, HEADING2, HEADING3, HEADING4]
            .iter()
            .map(|s| s.run.size)
            .collect();
        assert_eq!(sizes, vec![Some(36), Some(32), Some(28), Some(26)]);
    }

    #[test]
    fn link_runs_are_blue_and_underlined() {
        let format = run_format(&RunStyle::Link {
            target: "https://example.com".into(),
        });
        assert_eq!(format.color, Some("0000FF"));
        assert!(format.underline);
        assert!(!format.bold);
    }

    #[test]
    fn plain_runs_have_no_properties() {
        let mut out = XmlOut::new().unwrap();
        write_run_properties(&mut out, &run_format(&RunStyle::Plain)).unwrap();
        let xml = String::from_utf8(out.finish()).unwrap();
        assert!(!xml.contains("w:rPr"));
    }

    #[test]
    fn styles_part_declares_every_style() {
        let xml = String::from_utf8(styles_xml().unwrap()).unwrap();
        for id in [
            "Normal",
            "Heading1",
            "Heading2",
            "Heading3",
            "Heading4",
            "Code",
            "ListBullet",
        ] {
            assert!(xml.contains(&format!(r#"w:styleId="{id}""#)), "missing {id}");
        }
        assert!(xml.contains(r#"<w:color w:val="2F5496"/>"#));
        assert!(xml.contains(r#"<w:spacing w:before="400" w:after="120"/>"#));
        assert!(xml.contains(r#"w:fill="E5E5E5""#));
    }

    #[test]
    fn numbering_part_defines_bullet_instance() {
        let xml = String::from_utf8(numbering_xml().unwrap()).unwrap();
        assert!(xml.contains(r#"<w:numFmt w:val="bullet"/>"#));
        assert!(xml.contains(r#"<w:num w:numId="1">"#));
        assert!(xml.contains(r#"<w:ind w:left="720" w:hanging="360"/>"#));
    }
}
