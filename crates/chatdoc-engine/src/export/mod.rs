//! Preparing a chat reply for export: the optional title and timestamp
//! preamble, and the name of the file it is saved under.

pub mod options;

use chrono::NaiveDateTime;
use thiserror::Error;

pub use options::ExportOptions;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
    #[error("There is no content to export")]
    EmptyContent,
}

/// Extension of exported Word documents.
pub const DOCX_EXTENSION: &str = "docx";

/// Builds the Markdown that is actually exported.
///
/// The title becomes a `#` heading; the timestamp line goes above it.
pub fn compose_markdown(
    markdown: &str,
    options: &ExportOptions,
    now: NaiveDateTime,
) -> Result<String, ExportError> {
    if markdown.trim().is_empty() {
        return Err(ExportError::EmptyContent);
    }

    let mut out = String::with_capacity(markdown.len() + 64);
    if options.include_timestamp {
        out.push_str(&format!("*Exported: {}*\n\n", now.format("%Y-%m-%d %H:%M:%S")));
    }
    let title = options.title.trim();
    if options.include_title && !title.is_empty() {
        out.push_str(&format!("# {title}\n\n"));
    }
    out.push_str(markdown);
    Ok(out)
}

/// File name for an export, e.g. `AI reply_20240315_0930.docx`.
pub fn export_filename(options: &ExportOptions, now: NaiveDateTime) -> String {
    let base = match options.filename.trim() {
        "" => ExportOptions::DEFAULT_FILENAME,
        name => name,
    };
    if options.timestamp_filename {
        format!("{base}_{}.{DOCX_EXTENSION}", now.format("%Y%m%d_%H%M"))
    } else {
        format!("{base}.{DOCX_EXTENSION}")
    }
}
