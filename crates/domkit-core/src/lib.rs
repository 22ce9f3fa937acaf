//! domkit-core - Serializable element tree and its JSON wire format
//!
//! This crate provides the plain-data side of the domkit tree codec. A
//! [`SerialNode`] owns its whole subtree and has no link back to any document,
//! so it can be stored, sent over the wire and rebuilt into a live tree later.
//!
//! # Architecture
//!
//! ```text
//!                encode                      to_json
//! Live Node ──────────────▶ ┌────────────┐ ──────────▶ JSON String
//!                           │ SerialNode │
//! Live Node ◀────────────── └────────────┘ ◀────────── JSON String
//!                decode                      from_json
//! ```
//!
//! # Example
//!
//! ```rust
//! use domkit_core::{json, SerialNode};
//!
//! let node = SerialNode::element("P")
//!     .with_attr("class", "lead")
//!     .with_child(SerialNode::text("Hello"));
//!
//! let wire = json::to_json(&node).unwrap();
//! assert_eq!(
//!     wire,
//!     r#"{"tagName":"P","attributes":{"class":"lead"},"children":[{"tagName":"___text___","content":"Hello"}]}"#
//! );
//! assert_eq!(json::from_json(&wire).unwrap(), node);
//! ```

pub mod json;
mod options;
mod tree;

pub use options::{CodecOptions, DEFAULT_MAX_DEPTH};
pub use tree::{SerialNode, TEXT_MARKER};

/// Error type for serializable tree operations
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("text node is missing its `content` field")]
    MissingTextContent,

    #[error("Tree exceeds maximum depth of {max_depth}")]
    DepthExceeded { max_depth: usize },
}

pub type Result<T> = std::result::Result<T, CoreError>;
