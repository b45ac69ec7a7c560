//! Writes a parsed [`Document`] as a WordprocessingML (`.docx`) package.
//!
//! Every part is generated with `quick-xml` into memory and zipped with
//! deflate; nothing touches the filesystem.

pub mod error;
pub mod options;
pub mod styles;

mod document;
mod package;
mod xml;

use chatdoc_engine::Document;

pub use error::DocxError;
pub use options::DocxOptions;
pub use package::{
    APP_PART, CONTENT_TYPES_PART, CORE_PART, DOCUMENT_PART, DOCUMENT_RELS_PART, NUMBERING_PART,
    ROOT_RELS_PART, STYLES_PART,
};

/// Serializes `doc` into the bytes of a `.docx` file.
pub fn write_docx(doc: &Document, options: &DocxOptions) -> Result<Vec<u8>, DocxError> {
    let body = document::document_xml(doc, options)?;

    let parts = [
        (CONTENT_TYPES_PART, package::content_types_xml()?),
        (ROOT_RELS_PART, package::root_rels_xml()?),
        (DOCUMENT_PART, body.xml),
        (STYLES_PART, styles::styles_xml()?),
        (NUMBERING_PART, styles::numbering_xml()?),
        (DOCUMENT_RELS_PART, package::document_rels_xml(&body.hyperlinks)?),
        (CORE_PART, package::core_xml(options)?),
        (APP_PART, package::app_xml()?),
    ];

    let bytes = package::package(&parts)?;
    log::info!(
        "packaged {} block(s) into {} byte(s) of docx",
        doc.len(),
        bytes.len()
    );
    Ok(bytes)
}
