//! Serializable element tree
//!
//! This module defines the plain-data tree produced by encoding a live element.
//! Text children share the `tagName` field with elements and are told apart by
//! the reserved [`TEXT_MARKER`] tag.

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::CoreError;

/// Tag name reserved for text nodes in the wire format
pub const TEXT_MARKER: &str = "___text___";

/// A node of the serializable tree
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawNode")]
pub enum SerialNode {
    /// Element with tag name, attributes and ordered children
    Element {
        tag_name: String,
        attributes: IndexMap<String, String>,
        children: Vec<SerialNode>,
    },

    /// Non-blank text content
    Text { content: String },
}

impl SerialNode {
    /// Create an element with no attributes or children
    pub fn element(tag_name: &str) -> Self {
        SerialNode::Element {
            tag_name: tag_name.to_string(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Create a text node
    pub fn text(content: &str) -> Self {
        SerialNode::Text {
            content: content.to_string(),
        }
    }

    /// Builder: set an attribute. No-op on text nodes.
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        if let SerialNode::Element { attributes, .. } = &mut self {
            attributes.insert(name.to_string(), value.to_string());
        }
        self
    }

    /// Builder: append a child. No-op on text nodes.
    pub fn with_child(mut self, child: SerialNode) -> Self {
        if let SerialNode::Element { children, .. } = &mut self {
            children.push(child);
        }
        self
    }

    pub fn is_element(&self) -> bool {
        matches!(self, SerialNode::Element { .. })
    }

    pub fn is_text(&self) -> bool {
        matches!(self, SerialNode::Text { .. })
    }

    /// Tag name as it appears on the wire (the text marker for text nodes)
    pub fn tag_name(&self) -> &str {
        match self {
            SerialNode::Element { tag_name, .. } => tag_name,
            SerialNode::Text { .. } => TEXT_MARKER,
        }
    }

    /// Child nodes; always empty for text
    pub fn children(&self) -> &[SerialNode] {
        match self {
            SerialNode::Element { children, .. } => children,
            SerialNode::Text { .. } => &[],
        }
    }

    /// Get an attribute value by exact name
    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            SerialNode::Element { attributes, .. } => attributes.get(name).map(String::as_str),
            SerialNode::Text { .. } => None,
        }
    }

    /// Element nesting depth, the root element counting as 1 and text as 0
    pub fn depth(&self) -> usize {
        match self {
            SerialNode::Element { children, .. } => {
                1 + children.iter().map(SerialNode::depth).max().unwrap_or(0)
            }
            SerialNode::Text { .. } => 0,
        }
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            SerialNode::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
            SerialNode::Text { content } => out.push_str(content),
        }
    }
}

impl Serialize for SerialNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            SerialNode::Element {
                tag_name,
                attributes,
                children,
            } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("tagName", tag_name)?;
                map.serialize_entry("attributes", attributes)?;
                map.serialize_entry("children", children)?;
                map.end()
            }
            SerialNode::Text { content } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("tagName", TEXT_MARKER)?;
                map.serialize_entry("content", content)?;
                map.end()
            }
        }
    }
}

/// Wire shape shared by both variants
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNode {
    tag_name: String,
    #[serde(default)]
    attributes: IndexMap<String, String>,
    #[serde(default)]
    children: Vec<SerialNode>,
    content: Option<String>,
}

impl TryFrom<RawNode> for SerialNode {
    type Error = CoreError;

    fn try_from(raw: RawNode) -> std::result::Result<Self, Self::Error> {
        if raw.tag_name == TEXT_MARKER {
            let content = raw.content.ok_or(CoreError::MissingTextContent)?;
            return Ok(SerialNode::Text { content });
        }

        Ok(SerialNode::Element {
            tag_name: raw.tag_name,
            attributes: raw.attributes,
            children: raw.children,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SerialNode {
        SerialNode::element("DIV")
            .with_attr("id", "root")
            .with_child(SerialNode::text("Hello "))
            .with_child(SerialNode::element("SPAN").with_child(SerialNode::text("World")))
    }

    #[test]
    fn test_builders() {
        let node = sample();
        assert!(node.is_element());
        assert_eq!(node.tag_name(), "DIV");
        assert_eq!(node.attr("id"), Some("root"));
        assert_eq!(node.children().len(), 2);
    }

    #[test]
    fn test_text_node_ignores_builders() {
        let node = SerialNode::text("hi")
            .with_attr("class", "x")
            .with_child(SerialNode::element("B"));
        assert_eq!(node, SerialNode::text("hi"));
        assert_eq!(node.tag_name(), TEXT_MARKER);
        assert!(node.children().is_empty());
        assert_eq!(node.attr("class"), None);
    }

    #[test]
    fn test_depth() {
        assert_eq!(SerialNode::text("x").depth(), 0);
        assert_eq!(SerialNode::element("P").depth(), 1);
        assert_eq!(sample().depth(), 2);
    }

    #[test]
    fn test_text_content() {
        assert_eq!(sample().text_content(), "Hello World");
    }
}
