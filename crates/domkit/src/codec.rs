//! CodecService - conversion between live element trees and serializable data.

use indexmap::IndexMap;
use log::{debug, trace};

use domkit_core::{json, CodecOptions, CoreError, SerialNode};

use crate::node::{Node, NodeType};
use crate::utilities::trim_text;
use crate::{DomError, Result};

/// Encode a live element with default options
pub fn encode(node: &Node) -> Result<SerialNode> {
    CodecService::new().encode(node)
}

/// Decode a serializable element into a new detached live element with default options
pub fn decode(node: &SerialNode) -> Result<Node> {
    CodecService::new().decode(node)
}

/// The service for converting element trees to and from plain data
#[derive(Debug, Clone, Default)]
pub struct CodecService {
    options: CodecOptions,
}

impl CodecService {
    /// Create a new CodecService with default options
    pub fn new() -> Self {
        Self {
            options: CodecOptions::default(),
        }
    }

    /// Create a CodecService with custom options
    pub fn with_options(options: CodecOptions) -> Self {
        Self { options }
    }

    /// Get the current options
    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut CodecOptions {
        &mut self.options
    }

    /// Convert a live element and its descendants to plain data.
    ///
    /// Text children are trimmed and dropped when nothing is left. Comments
    /// and other non-element nodes are skipped. The input tree is not touched.
    pub fn encode(&self, node: &Node) -> Result<SerialNode> {
        if !node.is_element() {
            return Err(DomError::InvalidInput(format!(
                "cannot encode a {} node as a root element",
                node.node_name
            )));
        }

        let encoded = self.encode_element(node, 1)?;
        debug!("encoded <{}> ({} levels)", node.tag_name(), encoded.depth());
        Ok(encoded)
    }

    /// Rebuild a detached live element from plain data.
    ///
    /// Text children are appended exactly as stored. The root must be an
    /// element; element names go through [`Node::create_element`].
    pub fn decode(&self, node: &SerialNode) -> Result<Node> {
        match node {
            SerialNode::Element {
                tag_name,
                attributes,
                children,
            } => {
                let decoded = self.decode_element(tag_name, attributes, children, 1)?;
                debug!("decoded <{}>", decoded.tag_name());
                Ok(decoded)
            }
            SerialNode::Text { .. } => Err(DomError::InvalidInput(
                "cannot decode a text node as a root element".to_string(),
            )),
        }
    }

    /// Encode straight to a JSON string
    pub fn encode_json(&self, node: &Node) -> Result<String> {
        let encoded = self.encode(node)?;
        let out = if self.options.pretty_json {
            json::to_json_pretty(&encoded)?
        } else {
            json::to_json(&encoded)?
        };
        Ok(out)
    }

    /// Decode straight from a JSON string.
    ///
    /// The configured `max_depth` also bounds parsing, so anything
    /// `encode_json` produced under the same options parses back.
    pub fn decode_json(&self, input: &str) -> Result<Node> {
        let data =
            json::from_json_bounded(input, self.options.max_depth).map_err(|err| match err {
                CoreError::DepthExceeded { max_depth } => DomError::DepthExceeded { max_depth },
                other => DomError::Core(other),
            })?;
        self.decode(&data)
    }

    /// Parse an HTML fragment and encode its first top-level element
    #[cfg(feature = "html")]
    pub fn encode_html(&self, html: &str) -> Result<SerialNode> {
        let element = crate::html::parse_element(html)
            .ok_or_else(|| DomError::InvalidInput("no element found in HTML".to_string()))?;
        self.encode(&element)
    }

    fn encode_element(&self, node: &Node, depth: usize) -> Result<SerialNode> {
        self.check_depth(depth)?;

        let mut children = Vec::with_capacity(node.children.len());
        for child in node.children() {
            match child.node_type {
                NodeType::Text => {
                    let content = trim_text(child.node_value.as_deref().unwrap_or_default());
                    if content.is_empty() {
                        trace!("dropping blank text under <{}>", node.tag_name());
                        continue;
                    }
                    children.push(SerialNode::text(content));
                }
                NodeType::Element => children.push(self.encode_element(child, depth + 1)?),
                NodeType::Comment | NodeType::DocumentFragment => {}
            }
        }

        Ok(SerialNode::Element {
            tag_name: node.node_name.clone(),
            attributes: node.attributes.clone(),
            children,
        })
    }

    fn decode_element(
        &self,
        tag_name: &str,
        attributes: &IndexMap<String, String>,
        children: &[SerialNode],
        depth: usize,
    ) -> Result<Node> {
        self.check_depth(depth)?;

        let mut element = Node::create_element(tag_name)?;
        for (name, value) in attributes {
            element.set_attr(name, value);
        }

        for child in children {
            match child {
                SerialNode::Text { content } => element.add_child(Node::text(content)),
                SerialNode::Element {
                    tag_name,
                    attributes,
                    children,
                } => element.add_child(self.decode_element(tag_name, attributes, children, depth + 1)?),
            }
        }

        Ok(element)
    }

    fn check_depth(&self, depth: usize) -> Result<()> {
        if self.options.allows_depth(depth) {
            return Ok(());
        }
        Err(DomError::DepthExceeded {
            max_depth: self.options.max_depth.unwrap_or(depth),
        })
    }
}
