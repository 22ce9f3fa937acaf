//! Live DOM node structure.
//!
//! This module provides the element tree the codec reads from and builds. It
//! mirrors the DOM's node model (node type, node name, value, attributes,
//! children) so any parser can convert its output to it.

use indexmap::IndexMap;
use log::trace;

use crate::style::css_text;
use crate::utilities::{escape_html_attr, is_valid_tag_name, is_void};
use crate::{DomError, Result};

/// Node types matching DOM nodeType values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Element node (nodeType = 1)
    Element = 1,
    /// Text node (nodeType = 3)
    Text = 3,
    /// Comment node (nodeType = 8)
    Comment = 8,
    /// Document fragment node (nodeType = 11)
    DocumentFragment = 11,
}

/// A DOM node.
///
/// Element names are stored upper-cased in `node_name`, the way an HTML
/// document reports `tagName`. A node owns its children; nodes have no
/// parent link, so a freshly built tree is always detached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Node type
    pub node_type: NodeType,

    /// Node name ("DIV" for elements, "#text" for text nodes, ...)
    pub node_name: String,

    /// Content of text and comment nodes
    pub node_value: Option<String>,

    /// Attributes in insertion order; always empty for non-elements
    pub attributes: IndexMap<String, String>,

    /// Child nodes
    pub children: Vec<Node>,
}

impl Node {
    /// Create a new element node.
    ///
    /// The name is not validated; use [`Node::create_element`] for names that
    /// come from untrusted data.
    pub fn element(tag_name: &str) -> Self {
        Self {
            node_type: NodeType::Element,
            node_name: tag_name.to_uppercase(),
            node_value: None,
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut node = Self::element(tag_name);
        for (name, value) in attrs {
            node.set_attr(name, value);
        }
        node
    }

    /// Create an element, rejecting names that are not valid markup names
    pub fn create_element(tag_name: &str) -> Result<Self> {
        if !is_valid_tag_name(tag_name) {
            return Err(DomError::InvalidTagName(tag_name.to_string()));
        }
        Ok(Self::element(tag_name))
    }

    /// Create `amount` detached elements of the same kind
    pub fn create_elements(tag_name: &str, amount: usize) -> Result<Vec<Self>> {
        let template = Self::create_element(tag_name)?;
        trace!("creating {} <{}> elements", amount, template.tag_name());
        Ok(vec![template; amount])
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self {
            node_type: NodeType::Text,
            node_name: "#text".to_string(),
            node_value: Some(content.to_string()),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Create a new comment node
    pub fn comment(content: &str) -> Self {
        Self {
            node_type: NodeType::Comment,
            node_name: "#comment".to_string(),
            node_value: Some(content.to_string()),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Create a document fragment node
    pub fn document_fragment() -> Self {
        Self {
            node_type: NodeType::DocumentFragment,
            node_name: "#document-fragment".to_string(),
            node_value: None,
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Get the tag name (lowercase)
    pub fn tag_name(&self) -> String {
        self.node_name.to_lowercase()
    }

    /// Get an attribute value by name, ignoring ASCII case
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Check if an attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Set an attribute, replacing an existing one that differs only in case
    pub fn set_attr(&mut self, name: &str, value: &str) {
        let existing = self
            .attributes
            .keys()
            .position(|key| key.eq_ignore_ascii_case(name));

        match existing {
            Some(index) => {
                if let Some((_, slot)) = self.attributes.get_index_mut(index) {
                    *slot = value.to_string();
                }
            }
            None => {
                self.attributes.insert(name.to_string(), value.to_string());
            }
        }
    }

    /// Remove an attribute, returning its value
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let key = self
            .attributes
            .keys()
            .find(|key| key.eq_ignore_ascii_case(name))?
            .clone();
        self.attributes.shift_remove(&key)
    }

    /// Replace the inline style with the given declarations
    pub fn set_css<I, K, V>(&mut self, declarations: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let css = css_text(declarations);
        self.set_attr("style", &css);
        self
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    /// Get only element children
    pub fn element_children(&self) -> impl Iterator<Item = &Node> {
        self.children().filter(|n| n.is_element())
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Find the first element in this subtree (including itself) with the given id
    pub fn get_element_by_id(&self, id: &str) -> Option<&Node> {
        if self.is_element() && self.attr("id") == Some(id) {
            return Some(self);
        }
        self.element_children()
            .find_map(|child| child.get_element_by_id(id))
    }

    /// Mutable variant of [`Node::get_element_by_id`]
    pub fn get_element_by_id_mut(&mut self, id: &str) -> Option<&mut Node> {
        if self.is_element() && self.attr("id") == Some(id) {
            return Some(self);
        }
        self.children
            .iter_mut()
            .filter(|n| n.is_element())
            .find_map(|child| child.get_element_by_id_mut(id))
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        match self.node_type {
            NodeType::Text | NodeType::Comment => self.node_value.clone().unwrap_or_default(),
            _ => self
                .children()
                .filter(|child| child.node_type != NodeType::Comment)
                .map(|child| child.text_content())
                .collect::<Vec<_>>()
                .join(""),
        }
    }

    /// Reconstruct outer HTML
    pub fn outer_html(&self) -> String {
        match self.node_type {
            NodeType::Text => self.node_value.clone().unwrap_or_default(),
            NodeType::Comment => {
                format!("<!--{}-->", self.node_value.as_deref().unwrap_or_default())
            }
            NodeType::Element => {
                let tag = self.tag_name();
                let attrs = self.attributes_string();

                if is_void(&tag) {
                    if attrs.is_empty() {
                        format!("<{}>", tag)
                    } else {
                        format!("<{} {}>", tag, attrs)
                    }
                } else {
                    let inner = self.inner_html();
                    if attrs.is_empty() {
                        format!("<{}>{}</{}>", tag, inner, tag)
                    } else {
                        format!("<{} {}>{}</{}>", tag, attrs, inner, tag)
                    }
                }
            }
            NodeType::DocumentFragment => self.inner_html(),
        }
    }

    /// Reconstruct inner HTML
    pub fn inner_html(&self) -> String {
        self.children()
            .map(|child| child.outer_html())
            .collect::<Vec<_>>()
            .join("")
    }

    /// Get attributes as a string for HTML output
    fn attributes_string(&self) -> String {
        self.attributes
            .iter()
            .map(|(name, value)| {
                if value.is_empty() {
                    name.clone()
                } else {
                    format!("{}=\"{}\"", name, escape_html_attr(value))
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
