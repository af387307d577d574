//! Minimal element tree over quick-xml, with the tolerant field lookups the
//! extractors are built on.
//!
//! Fiscal documents are small (a few KB) and the extraction rules need
//! descendant lookups and first-child access (the ICMS regime node), so the
//! whole document is materialized instead of being streamed.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use rust_decimal::Decimal;

/// One XML element: local name, attributes, children, and direct text.
#[derive(Debug, Clone, Default)]
pub(crate) struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    text: String,
}

impl Element {
    /// Attribute value by local name.
    pub(crate) fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// First descendant with the given local name, in document order.
    pub(crate) fn find(&self, tag: &str) -> Option<&Element> {
        for child in &self.children {
            if child.name == tag {
                return Some(child);
            }
            if let Some(found) = child.find(tag) {
                return Some(found);
            }
        }
        None
    }

    pub(crate) fn children(&self) -> &[Element] {
        &self.children
    }

    pub(crate) fn text(&self) -> &str {
        self.text.trim()
    }
}

/// Trimmed text of the first `tag` descendant, or `""` when the container or
/// the tag is absent. Total — this lookup never fails.
pub(crate) fn text_of(node: Option<&Element>, tag: &str) -> String {
    node.and_then(|n| n.find(tag))
        .map(|e| e.text().to_string())
        .unwrap_or_default()
}

/// Numeric variant of [`text_of`]: parses the text as a decimal, returning
/// zero on absence or parse failure.
pub(crate) fn decimal_of(node: Option<&Element>, tag: &str) -> Decimal {
    parse_decimal(&text_of(node, tag))
}

fn parse_decimal(text: &str) -> Decimal {
    let text = text.trim();
    text.parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_scientific(text).ok())
        .unwrap_or_default()
}

fn local_name(qname: &[u8]) -> String {
    let name = std::str::from_utf8(qname).unwrap_or_default();
    name.rsplit(':').next().unwrap_or(name).to_string()
}

fn element_from(start: &BytesStart<'_>) -> Element {
    let mut attributes = Vec::new();
    for attr in start.attributes().flatten() {
        let key = local_name(attr.key.as_ref());
        let value = String::from_utf8_lossy(&attr.value).into_owned();
        attributes.push((key, value));
    }
    Element {
        name: local_name(start.name().as_ref()),
        attributes,
        children: Vec::new(),
        text: String::new(),
    }
}

/// Parse a document into a synthetic root element whose children are the
/// document's top-level elements, so [`Element::find`] also matches the
/// document root itself.
///
/// Returns the parser's error message on ill-formed input, including
/// truncated documents and text with no root element at all.
pub(crate) fn parse(xml: &str) -> Result<Element, String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut document = Element::default();
    let mut stack: Vec<Element> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                stack.push(element_from(e));
            }
            Ok(Event::Empty(ref e)) => {
                let element = element_from(e);
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => document.children.push(element),
                }
            }
            Ok(Event::End(_)) => {
                // quick-xml rejects mismatched end tags before we get here
                if let Some(done) = stack.pop() {
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(done),
                        None => document.children.push(done),
                    }
                }
            }
            Ok(Event::Text(ref e)) => {
                let text = e.unescape().unwrap_or_default();
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&text);
                }
            }
            Ok(Event::CData(ref e)) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(e.to_string()),
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err("unexpected end of document".into());
    }
    if document.children.is_empty() {
        return Err("no root element".into());
    }
    Ok(document)
}
