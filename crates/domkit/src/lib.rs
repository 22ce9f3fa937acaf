//! # domkit
//!
//! Small DOM helpers: convert element trees to and from plain JSON-ready data,
//! and transcode a sigil-based inline markup dialect to and from HTML.
//!
//! ## Design
//!
//! The live tree is the [`Node`] structure, which any HTML parser can produce
//! (an HTML5 parser is bundled behind the default `html` feature). The
//! serializable side lives in `domkit-core` as [`SerialNode`], a pure value
//! type with no tie to the tree it came from.
//!
//! Both the codec and the transcoder are synchronous and hold no shared
//! mutable state. Diagnostics go through the `log` facade; install any logger
//! to see them.
//!
//! ## Example (tree codec)
//!
//! ```rust
//! use domkit::{decode, encode, Node};
//!
//! let mut div = Node::element_with_attrs("div", vec![("class", "a"), ("id", "b")]);
//! div.add_child(Node::text("  hi  "));
//!
//! let data = encode(&div).unwrap();
//! assert_eq!(data.children()[0].text_content(), "hi");
//!
//! let rebuilt = decode(&data).unwrap();
//! assert_eq!(rebuilt.outer_html(), r#"<div class="a" id="b">hi</div>"#);
//! ```
//!
//! ## Example (inline markup)
//!
//! ```rust
//! use domkit::markup::{to_html, to_markdown};
//!
//! let html = to_html("***bold*** and {[docs](https://example.com)}");
//! assert_eq!(
//!     html,
//!     "<b>bold</b> and <a href='https://example.com' target='_blank'>docs</a>"
//! );
//! assert_eq!(to_markdown(&html), "***bold*** and {[docs](https://example.com)}");
//! ```

pub mod codec;
pub mod data_url;
pub mod date;
pub mod device;
#[cfg(feature = "html")]
pub mod html;
pub mod markup;
pub mod node;
pub mod random;
pub mod style;
mod utilities;

pub use codec::{decode, encode, CodecService};
pub use domkit_core::{json, CodecOptions, SerialNode, DEFAULT_MAX_DEPTH, TEXT_MARKER};
#[cfg(feature = "html")]
pub use html::{parse_element, parse_html};
pub use node::{Node, NodeType};
pub use utilities::{is_valid_tag_name, is_void};

/// Error type for domkit operations
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid tag name: {0:?}")]
    InvalidTagName(String),

    #[error("Tree exceeds maximum depth of {max_depth}")]
    DepthExceeded { max_depth: usize },

    #[error("Invalid rule pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error(transparent)]
    Core(#[from] domkit_core::CoreError),
}

pub type Result<T> = std::result::Result<T, DomError>;
