/// Formatting applied to a [`Run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStyle {
    Plain,
    Bold,
    Italic,
    Code,
    /// Link label; the target is kept so writers that support hyperlinks can use it.
    Link { target: String },
}

/// One styled fragment of a line, with its markers already stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub style: RunStyle,
    pub content: String,
}

impl Run {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            style: RunStyle::Plain,
            content: content.into(),
        }
    }

    pub fn styled(style: RunStyle, content: impl Into<String>) -> Self {
        Self {
            style,
            content: content.into(),
        }
    }

    pub fn link_target(&self) -> Option<&str> {
        match &self.style {
            RunStyle::Link { target } => Some(target),
            _ => None,
        }
    }

    pub fn is_plain(&self) -> bool {
        self.style == RunStyle::Plain
    }
}
