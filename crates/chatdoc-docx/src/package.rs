//! Packaging parts into the `.docx` zip container.

use std::io::{Cursor, Write};

use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

use crate::{
    DocxError, DocxOptions,
    xml::{NS_CONTENT_TYPES, NS_PKG_RELS, XmlOut},
};

pub const CONTENT_TYPES_PART: &str = "[Content_Types].xml";
pub const ROOT_RELS_PART: &str = "_rels/.rels";
pub const DOCUMENT_PART: &str = "word/document.xml";
pub const STYLES_PART: &str = "word/styles.xml";
pub const NUMBERING_PART: &str = "word/numbering.xml";
pub const DOCUMENT_RELS_PART: &str = "word/_rels/document.xml.rels";
pub const CORE_PART: &str = "docProps/core.xml";
pub const APP_PART: &str = "docProps/app.xml";

const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const REL_CORE_PROPERTIES: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
const REL_EXTENDED_PROPERTIES: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
const REL_STYLES: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
const REL_NUMBERING: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering";
const REL_HYPERLINK: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink";

const APPLICATION: &str = "chatdoc";

// rId1 and rId2 of the document belong to styles and numbering.
const FIRST_HYPERLINK_REL: usize = 3;

/// Relationship id of the `index`-th hyperlink in the document part.
pub(crate) fn hyperlink_rel_id(index: usize) -> String {
    format!("rId{}", FIRST_HYPERLINK_REL + index)
}

/// Zips `parts` (name, bytes) in order using deflate.
pub(crate) fn package(parts: &[(&str, Vec<u8>)]) -> Result<Vec<u8>, DocxError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    for (name, bytes) in parts {
        zip.start_file(*name, options)?;
        zip.write_all(bytes)?;
    }
    Ok(zip.finish()?.into_inner())
}

pub(crate) fn content_types_xml() -> Result<Vec<u8>, DocxError> {
    let overrides = [
        (
            DOCUMENT_PART,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml",
        ),
        (
            STYLES_PART,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml",
        ),
        (
            NUMBERING_PART,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml",
        ),
        (
            CORE_PART,
            "application/vnd.openxmlformats-package.core-properties+xml",
        ),
        (
            APP_PART,
            "application/vnd.openxmlformats-officedocument.extended-properties+xml",
        ),
    ];

    let mut out = XmlOut::new()?;
    out.start("Types", &[("xmlns", NS_CONTENT_TYPES)])?;
    out.empty(
        "Default",
        &[
            ("Extension", "rels"),
            (
                "ContentType",
                "application/vnd.openxmlformats-package.relationships+xml",
            ),
        ],
    )?;
    out.empty(
        "Default",
        &[("Extension", "xml"), ("ContentType", "application/xml")],
    )?;
    for (part, content_type) in overrides {
        let part_name = format!("/{part}");
        out.empty(
            "Override",
            &[
                ("PartName", part_name.as_str()),
                ("ContentType", content_type),
            ],
        )?;
    }
    out.end("Types")?;
    Ok(out.finish())
}

struct Relationship<'a> {
    id: String,
    kind: &'static str,
    target: &'a str,
    external: bool,
}

fn relationships_xml(rels: &[Relationship<'_>]) -> Result<Vec<u8>, DocxError> {
    let mut out = XmlOut::new()?;
    out.start("Relationships", &[("xmlns", NS_PKG_RELS)])?;
    for rel in rels {
        let mut attrs = vec![
            ("Id", rel.id.as_str()),
            ("Type", rel.kind),
            ("Target", rel.target),
        ];
        if rel.external {
            attrs.push(("TargetMode", "External"));
        }
        out.empty("Relationship", &attrs)?;
    }
    out.end("Relationships")?;
    Ok(out.finish())
}

pub(crate) fn root_rels_xml() -> Result<Vec<u8>, DocxError> {
    let internal = |n: usize, kind: &'static str, target: &'static str| Relationship {
        id: format!("rId{n}"),
        kind,
        target,
        external: false,
    };
    relationships_xml(&[
        internal(1, REL_OFFICE_DOCUMENT, DOCUMENT_PART),
        internal(2, REL_CORE_PROPERTIES, CORE_PART),
        internal(3, REL_EXTENDED_PROPERTIES, APP_PART),
    ])
}

/// Relationships of the document part: styles, numbering, then one
/// external relationship per hyperlink.
pub(crate) fn document_rels_xml(hyperlinks: &[String]) -> Result<Vec<u8>, DocxError> {
    let mut rels = vec![
        Relationship {
            id: "rId1".to_string(),
            kind: REL_STYLES,
            target: "styles.xml",
            external: false,
        },
        Relationship {
            id: "rId2".to_string(),
            kind: REL_NUMBERING,
            target: "numbering.xml",
            external: false,
        },
    ];
    rels.extend(
        hyperlinks
            .iter()
            .enumerate()
            .map(|(i, target)| Relationship {
                id: hyperlink_rel_id(i),
                kind: REL_HYPERLINK,
                target,
                external: true,
            }),
    );
    relationships_xml(&rels)
}

pub(crate) fn core_xml(options: &DocxOptions) -> Result<Vec<u8>, DocxError> {
    let mut out = XmlOut::new()?;
    out.start(
        "cp:coreProperties",
        &[
            (
                "xmlns:cp",
                "http://schemas.openxmlformats.org/package/2006/metadata/core-properties",
            ),
            ("xmlns:dc", "http://purl.org/dc/elements/1.1/"),
            ("xmlns:dcterms", "http://purl.org/dc/terms/"),
            ("xmlns:dcmitype", "http://purl.org/dc/dcmitype/"),
            ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
        ],
    )?;
    for (name, value) in [
        ("dc:title", &options.title),
        ("dc:creator", &options.creator),
        ("dc:description", &options.description),
    ] {
        if !value.is_empty() {
            out.text_element(name, &[], value)?;
        }
    }
    out.end("cp:coreProperties")?;
    Ok(out.finish())
}

pub(crate) fn app_xml() -> Result<Vec<u8>, DocxError> {
    let mut out = XmlOut::new()?;
    out.start(
        "Properties",
        &[(
            "xmlns",
            "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties",
        )],
    )?;
    out.text_element("Application", &[], APPLICATION)?;
    out.end("Properties")?;
    Ok(out.finish())
}
