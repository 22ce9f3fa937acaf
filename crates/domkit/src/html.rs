//! HTML parsing support.
//!
//! This module parses HTML strings into the [`Node`] structure, so markup held
//! as text can go through the tree codec.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;

/// Parse an HTML fragment into a Node tree.
///
/// The returned root is the `html` element the HTML5 fragment algorithm
/// wraps the content in.
///
/// # Example
///
/// ```rust
/// use domkit::{encode, parse_html};
///
/// let root = parse_html("<p>Hello <em>World</em></p>");
/// let data = encode(&root).unwrap();
/// assert_eq!(data.text_content(), "HelloWorld");
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_fragment(html);
    scraper_to_node(document.root_element())
}

/// Parse an HTML fragment and return its first top-level element
pub fn parse_element(html: &str) -> Option<Node> {
    let mut root = parse_html(html);
    let index = root.children.iter().position(Node::is_element)?;
    Some(root.children.swap_remove(index))
}

/// Convert a scraper ElementRef to our Node structure
fn scraper_to_node(element: ElementRef) -> Node {
    let tag = element.value().name();

    // Collect attributes
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();

    let mut node = if attrs.is_empty() {
        Node::element(tag)
    } else {
        Node::element_with_attrs(tag, attrs)
    };

    // Process children
    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Comment(comment) => {
                node.add_child(Node::comment(&comment.comment));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element));
                }
            }
            _ => {}
        }
    }

    node
}
