use serde::{Deserialize, Serialize};

/// Choices offered when exporting a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Base filename without extension.
    pub filename: String,
    /// Document title, written as a level 1 heading when enabled.
    pub title: String,
    pub include_title: bool,
    /// Prefix an italic "Exported: <time>" line.
    pub include_timestamp: bool,
    /// Append `_YYYYMMDD_HHMM` to the filename.
    pub timestamp_filename: bool,
}

impl ExportOptions {
    pub const DEFAULT_FILENAME: &'static str = "AI reply";
    pub const DEFAULT_TITLE: &'static str = "AI Assistant Reply";
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            filename: Self::DEFAULT_FILENAME.to_string(),
            title: Self::DEFAULT_TITLE.to_string(),
            include_title: true,
            include_timestamp: true,
            timestamp_filename: true,
        }
    }
}
