use serde::{Deserialize, Serialize};

/// Metadata and behaviour switches for the written document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocxOptions {
    /// Stored in the document properties; left out when empty.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    pub creator: String,
    pub description: String,
    /// Turn link runs into clickable hyperlinks instead of styled text only.
    pub hyperlinks: bool,
}

impl Default for DocxOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            creator: "chatdoc".to_string(),
            description: "Generated from an AI chat reply".to_string(),
            hyperlinks: true,
        }
    }
}
