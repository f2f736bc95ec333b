use std::collections::hash_map::Entry;
use std::collections::HashMap;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use thiserror::Error;

use crate::xml::value::XmlValue;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("malformed XML: {0}")]
    Malformed(String),

    #[error("document ends before all elements are closed")]
    Truncated,
}

/// An element whose closing tag has not been seen yet.
struct Frame {
    name: String,
    fields: HashMap<String, XmlValue>,
    text: String,
}

impl Frame {
    fn new(name: String) -> Self {
        Self {
            name,
            fields: HashMap::new(),
            text: String::new(),
        }
    }

    fn into_value(self) -> XmlValue {
        let Frame {
            mut fields, text, ..
        } = self;
        if fields.is_empty() {
            return XmlValue::Text(text);
        }
        if !text.is_empty() {
            fields.insert("#text".to_string(), XmlValue::Text(text));
        }
        XmlValue::Map(fields)
    }

    /// Records a closed child. A repeated sibling name collapses into a list
    /// in document order.
    fn insert_child(&mut self, name: String, value: XmlValue) {
        match self.fields.entry(name) {
            Entry::Occupied(mut slot) => match slot.get_mut() {
                XmlValue::List(siblings) => siblings.push(value),
                other => {
                    let first = std::mem::replace(other, XmlValue::List(Vec::new()));
                    if let XmlValue::List(siblings) = other {
                        siblings.push(first);
                        siblings.push(value);
                    }
                }
            },
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
        }
    }
}

/// Decodes an XML document into an untyped [`XmlValue`] tree.
///
/// Attributes land under `@`-prefixed keys, text mixed with attributes or
/// children under `#text`, and an element with neither becomes plain text.
/// Namespace prefixes are kept as written (`media:content` stays
/// `media:content`).
pub fn decode(xml: &str) -> Result<XmlValue, DecodeError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack = vec![Frame::new(String::new())];

    loop {
        let event = reader
            .read_event()
            .map_err(|e| DecodeError::Malformed(e.to_string()))?;
        match event {
            Event::Start(start) => {
                stack.push(open_frame(&start)?);
            }
            Event::Empty(start) => {
                let frame = open_frame(&start)?;
                let name = frame.name.clone();
                let value = frame.into_value();
                if let Some(parent) = stack.last_mut() {
                    parent.insert_child(name, value);
                }
            }
            Event::End(_) => {
                let frame = match stack.pop() {
                    Some(frame) if !stack.is_empty() => frame,
                    _ => return Err(DecodeError::Malformed("unexpected closing tag".to_string())),
                };
                let name = frame.name.clone();
                let value = frame.into_value();
                if let Some(parent) = stack.last_mut() {
                    parent.insert_child(name, value);
                }
            }
            Event::Text(content) => {
                let content = content
                    .unescape()
                    .map_err(|e| DecodeError::Malformed(e.to_string()))?;
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&content);
                }
            }
            Event::CData(data) => {
                let raw = data.into_inner();
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&String::from_utf8_lossy(&raw));
                }
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions
            _ => {}
        }
    }

    if stack.len() != 1 {
        return Err(DecodeError::Truncated);
    }
    let document = stack.pop().ok_or(DecodeError::Truncated)?;
    Ok(XmlValue::Map(document.fields))
}

fn open_frame(start: &BytesStart<'_>) -> Result<Frame, DecodeError> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut frame = Frame::new(name);

    for attr in start.attributes() {
        let attr = attr.map_err(|e| DecodeError::Malformed(e.to_string()))?;
        let key = format!("@{}", String::from_utf8_lossy(attr.key.as_ref()));
        let value = attr
            .unescape_value()
            .map_err(|e| DecodeError::Malformed(e.to_string()))?
            .into_owned();
        frame.fields.insert(key, XmlValue::Text(value));
    }

    Ok(frame)
}
