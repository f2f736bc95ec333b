use std::collections::HashMap;

/// Untyped tree a decoded XML document becomes.
///
/// Feeds in the wild disagree on shape, so every accessor is total: a lookup
/// against the wrong variant or a missing key returns `None` instead of
/// panicking.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlValue {
    Text(String),
    List(Vec<XmlValue>),
    Map(HashMap<String, XmlValue>),
}

impl XmlValue {
    /// Looks up a child element or attribute entry by key.
    pub fn get(&self, key: &str) -> Option<&XmlValue> {
        match self {
            XmlValue::Map(fields) => fields.get(key),
            _ => None,
        }
    }

    /// Text content of this node: the string itself, or the `#text` entry of
    /// an element that also carries attributes or children.
    pub fn text(&self) -> Option<&str> {
        match self {
            XmlValue::Text(content) => Some(content.as_str()),
            XmlValue::Map(fields) => match fields.get("#text") {
                Some(XmlValue::Text(content)) => Some(content.as_str()),
                _ => None,
            },
            XmlValue::List(_) => None,
        }
    }

    /// Attribute value by name. If the node is a list (a repeated element),
    /// the first entry is examined.
    pub fn attr(&self, name: &str) -> Option<&str> {
        let node = self.as_items().first()?;
        match node {
            XmlValue::Map(fields) => match fields.get(format!("@{name}").as_str()) {
                Some(XmlValue::Text(content)) => Some(content.as_str()),
                _ => None,
            },
            _ => None,
        }
    }

    /// Views this node as a sequence. A lone element that decoded without a
    /// wrapping list becomes a one-element slice, so single-item feeds
    /// iterate the same way as multi-item ones.
    pub fn as_items(&self) -> &[XmlValue] {
        match self {
            XmlValue::List(items) => items.as_slice(),
            other => std::slice::from_ref(other),
        }
    }
}
