//! XML support for TMX documents: escaping for the writer and a small
//! element tree built on `quick-xml` for the reader.

use std::borrow::Cow;

use quick_xml::Reader;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesStart, Event};

use crate::error::{Result, TmxError};

/// Escapes character data for use between tags: `&`, `<` and `>` only.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    partial_escape(text)
}

/// Escapes a value for use inside a double-quoted attribute. Single quotes
/// are left alone.
pub fn escape_attribute(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// A parsed element with its attributes and children in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Child elements, skipping text.
    pub fn elements(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    pub fn child(&self, name: &str) -> Option<&Self> {
        self.elements().find(|element| element.name == name)
    }

    /// All character data below this element, inline markup removed.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for node in &self.children {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Element(element) => element.collect_text(out),
            }
        }
    }
}

/// Parses `text` and returns its root element.
///
/// A leading byte order mark is ignored. Comments, processing instructions
/// and the doctype (including an internal subset) are skipped.
pub fn parse(text: &str) -> Result<Element> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut reader = Reader::from_str(text);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader.read_event().map_err(|err| TmxError::Malformed {
            offset: reader.error_position(),
            message: err.to_string(),
        })?;

        match event {
            Event::Start(start) | Event::Empty(start) if root.is_some() && stack.is_empty() => {
                let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                return Err(malformed(&reader, format!("<{name}> after the root element")));
            }
            Event::Start(start) => {
                let element = element(&start).map_err(|err| malformed(&reader, err.to_string()))?;
                stack.push(element);
            }
            Event::Empty(start) => {
                let element = element(&start).map_err(|err| malformed(&reader, err.to_string()))?;
                attach(&mut stack, &mut root, element);
            }
            Event::End(end) => {
                let name = String::from_utf8_lossy(end.name().as_ref()).into_owned();
                let Some(element) = stack.pop() else {
                    return Err(malformed(&reader, format!("unexpected </{name}>")));
                };
                if element.name != name {
                    return Err(malformed(
                        &reader,
                        format!("expected </{}>, found </{name}>", element.name),
                    ));
                }
                attach(&mut stack, &mut root, element);
            }
            Event::Text(data) => {
                let text = data
                    .unescape()
                    .map_err(|err| malformed(&reader, err.to_string()))?;
                push_text(&mut stack, &text).map_err(|message| malformed(&reader, message))?;
            }
            Event::CData(data) => {
                let text = std::str::from_utf8(&data)
                    .map_err(|err| malformed(&reader, err.to_string()))?;
                push_text(&mut stack, text).map_err(|message| malformed(&reader, message))?;
            }
            Event::Eof => break,
            Event::Decl(_) | Event::PI(_) | Event::DocType(_) | Event::Comment(_) => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(malformed(&reader, format!("unclosed <{}>", open.name)));
    }
    root.ok_or_else(|| malformed(&reader, "no root element"))
}

fn malformed(reader: &Reader<&[u8]>, message: impl Into<String>) -> TmxError {
    TmxError::Malformed {
        offset: reader.buffer_position(),
        message: message.into(),
    }
}

fn element(start: &BytesStart<'_>) -> std::result::Result<Element, quick_xml::Error> {
    let mut attributes = Vec::new();
    for attribute in start.attributes() {
        let attribute = attribute?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        attributes.push((key, attribute.unescape_value()?.into_owned()));
    }

    Ok(Element {
        name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
        attributes,
        children: Vec::new(),
    })
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(Node::Element(element)),
        None => *root = Some(element),
    }
}

fn push_text(stack: &mut [Element], text: &str) -> std::result::Result<(), String> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(Node::Text(text.to_string())),
        None if text.trim().is_empty() => {}
        None => return Err("text outside the root element".to_string()),
    }
    Ok(())
}
