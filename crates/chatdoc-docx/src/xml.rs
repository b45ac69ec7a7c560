use std::borrow::Cow;

use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

use crate::DocxError;

pub const NS_W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
pub const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
pub const NS_PKG_RELS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
pub const NS_CONTENT_TYPES: &str = "http://schemas.openxmlformats.org/package/2006/content-types";

/// Characters XML 1.0 cannot carry at all, not even as references.
fn is_forbidden(c: char) -> bool {
    (c < '\u{20}' && !matches!(c, '\t' | '\n' | '\r')) || matches!(c, '\u{FFFE}' | '\u{FFFF}')
}

/// Drops characters that would make the part malformed, such as the ESC of
/// pasted terminal colour codes.
pub fn xml_chars(text: &str) -> Cow<'_, str> {
    if text.chars().any(is_forbidden) {
        Cow::Owned(text.chars().filter(|&c| !is_forbidden(c)).collect())
    } else {
        Cow::Borrowed(text)
    }
}

fn element<'a>(name: &'a str, attrs: &[(&str, &str)]) -> BytesStart<'a> {
    let mut el = BytesStart::new(name);
    for &(key, value) in attrs {
        el.push_attribute((key, xml_chars(value).as_ref()));
    }
    el
}

/// Thin event writer for one XML part.
pub struct XmlOut {
    w: Writer<Vec<u8>>,
}

impl XmlOut {
    /// Starts a standalone UTF-8 document.
    pub fn new() -> Result<Self, DocxError> {
        let mut w = Writer::new(Vec::new());
        w.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
        Ok(Self { w })
    }

    pub fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<(), DocxError> {
        self.w.write_event(Event::Start(element(name, attrs)))?;
        Ok(())
    }

    pub fn end(&mut self, name: &str) -> Result<(), DocxError> {
        self.w.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    pub fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<(), DocxError> {
        self.w.write_event(Event::Empty(element(name, attrs)))?;
        Ok(())
    }

    /// Writes escaped character data.
    pub fn text(&mut self, text: &str) -> Result<(), DocxError> {
        let text = xml_chars(text);
        self.w.write_event(Event::Text(BytesText::new(&text)))?;
        Ok(())
    }

    /// `<name attrs>text</name>`
    pub fn text_element(
        &mut self,
        name: &str,
        attrs: &[(&str, &str)],
        text: &str,
    ) -> Result<(), DocxError> {
        self.start(name, attrs)?;
        self.text(text)?;
        self.end(name)
    }

    pub fn finish(self) -> Vec<u8> {
        self.w.into_inner()
    }
}
