use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocxError {
    #[error("Failed to write document part: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Failed to package document: {0}")]
    Zip(#[from] zip::result::ZipError),
}
