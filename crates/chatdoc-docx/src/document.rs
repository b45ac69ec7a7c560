//! `word/document.xml`: one paragraph per block.
//!
//! Blank lines become empty paragraphs so the vertical rhythm of the chat
//! reply survives. Code blocks are a single run with `<w:br/>` between
//! lines and `<w:tab/>` for tabs; whitespace is preserved on every text node.

use chatdoc_engine::{Block, BlockKind, Document, Run, StyledBlock};

use crate::{
    DocxError, DocxOptions,
    package::hyperlink_rel_id,
    styles::{BULLET_NUM_ID, paragraph_style, run_format, write_run_properties},
    xml::{NS_R, NS_W, XmlOut},
};

const PRESERVE: &[(&str, &str)] = &[("xml:space", "preserve")];

/// The serialized body plus the external link targets it references, in
/// relationship order.
pub(crate) struct DocumentPart {
    pub xml: Vec<u8>,
    pub hyperlinks: Vec<String>,
}

struct BodyWriter<'a> {
    out: XmlOut,
    options: &'a DocxOptions,
    next_link: usize,
}

/// Link runs that become `w:hyperlink` elements. Visited in the same order
/// as [`BodyWriter::run`], so the n-th target gets the n-th relationship.
fn is_hyperlink(target: &str, options: &DocxOptions) -> bool {
    options.hyperlinks && !target.is_empty()
}

pub(crate) fn document_xml(
    doc: &Document,
    options: &DocxOptions,
) -> Result<DocumentPart, DocxError> {
    let hyperlinks: Vec<String> = doc
        .link_targets()
        .into_iter()
        .filter(|target| is_hyperlink(target, options))
        .map(str::to_string)
        .collect();

    let mut body = BodyWriter {
        out: XmlOut::new()?,
        options,
        next_link: 0,
    };

    body.out
        .start("w:document", &[("xmlns:w", NS_W), ("xmlns:r", NS_R)])?;
    body.out.start("w:body", &[])?;
    for styled in doc.iter() {
        body.block(styled)?;
    }
    body.section_properties()?;
    body.out.end("w:body")?;
    body.out.end("w:document")?;

    log::debug!(
        "wrote {} paragraph(s) with {} hyperlink(s)",
        doc.len(),
        hyperlinks.len()
    );
    Ok(DocumentPart {
        xml: body.out.finish(),
        hyperlinks,
    })
}

impl BodyWriter<'_> {
    fn block(&mut self, styled: &StyledBlock) -> Result<(), DocxError> {
        let block = &styled.block;
        if matches!(block, Block::BlankLine) {
            return self.out.empty("w:p", &[]);
        }

        self.out.start("w:p", &[])?;
        self.paragraph_properties(block.kind())?;
        match block {
            Block::CodeBlock { lines } => self.code_run(lines)?,
            _ => {
                for run in &styled.runs {
                    self.run(run)?;
                }
            }
        }
        self.out.end("w:p")
    }

    fn paragraph_properties(&mut self, kind: BlockKind) -> Result<(), DocxError> {
        let Some(style) = paragraph_style(kind) else {
            return Ok(());
        };
        self.out.start("w:pPr", &[])?;
        self.out.empty("w:pStyle", &[("w:val", style.id)])?;
        if kind == BlockKind::BulletItem {
            self.out.start("w:numPr", &[])?;
            self.out.empty("w:ilvl", &[("w:val", "0")])?;
            self.out.empty("w:numId", &[("w:val", BULLET_NUM_ID)])?;
            self.out.end("w:numPr")?;
        }
        self.out.end("w:pPr")
    }

    fn run(&mut self, run: &Run) -> Result<(), DocxError> {
        match run.link_target() {
            Some(target) if is_hyperlink(target, self.options) => {
                let id = hyperlink_rel_id(self.next_link);
                self.next_link += 1;
                self.out.start(
                    "w:hyperlink",
                    &[("r:id", id.as_str()), ("w:history", "1")],
                )?;
                self.text_run(run)?;
                self.out.end("w:hyperlink")
            }
            _ => self.text_run(run),
        }
    }

    fn text_run(&mut self, run: &Run) -> Result<(), DocxError> {
        self.out.start("w:r", &[])?;
        write_run_properties(&mut self.out, &run_format(&run.style))?;
        self.out.text_element("w:t", PRESERVE, &run.content)?;
        self.out.end("w:r")
    }

    // The Code paragraph style carries the font and shading.
    fn code_run(&mut self, lines: &[String]) -> Result<(), DocxError> {
        self.out.start("w:r", &[])?;
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                self.out.empty("w:br", &[])?;
            }
            for (j, segment) in line.split('\t').enumerate() {
                if j > 0 {
                    self.out.empty("w:tab", &[])?;
                }
                if !segment.is_empty() {
                    self.out.text_element("w:t", PRESERVE, segment)?;
                }
            }
        }
        self.out.end("w:r")
    }

    /// A4 portrait with one-inch margins.
    fn section_properties(&mut self) -> Result<(), DocxError> {
        self.out.start("w:sectPr", &[])?;
        self.out.empty("w:pgSz", &[("w:w", "11906"), ("w:h", "16838")])?;
        self.out.empty(
            "w:pgMar",
            &[
                ("w:top", "1440"),
                ("w:right", "1440"),
                ("w:bottom", "1440"),
                ("w:left", "1440"),
                ("w:header", "708"),
                ("w:footer", "708"),
                ("w:gutter", "0"),
            ],
        )?;
        self.out.end("w:sectPr")
    }
}
