//! JSON wire format
//!
//! Elements serialize as `{"tagName", "attributes", "children"}` and text as
//! `{"tagName": "___text___", "content"}`. On input, missing `attributes` and
//! `children` default to empty.
//!
//! Every element takes two JSON nesting levels (its object and its `children`
//! array). Parsing runs without serde_json's fixed recursion limit; instead the
//! input is scanned first and rejected when it nests deeper than the element
//! depth limit allows.

use serde::Deserialize;
use serde_json::Value;

use crate::options::DEFAULT_MAX_DEPTH;
use crate::tree::SerialNode;
use crate::{CoreError, Result};

/// Serialize a tree to a compact JSON string
pub fn to_json(node: &SerialNode) -> Result<String> {
    Ok(serde_json::to_string(node)?)
}

/// Serialize a tree to an indented JSON string
pub fn to_json_pretty(node: &SerialNode) -> Result<String> {
    Ok(serde_json::to_string_pretty(node)?)
}

/// Serialize a tree to a JSON value
pub fn to_value(node: &SerialNode) -> Result<Value> {
    Ok(serde_json::to_value(node)?)
}

/// Parse a tree from a JSON string, limited to [`DEFAULT_MAX_DEPTH`] elements deep
pub fn from_json(json: &str) -> Result<SerialNode> {
    from_json_bounded(json, Some(DEFAULT_MAX_DEPTH))
}

/// Parse a tree from a JSON string with an element depth limit.
///
/// `None` parses any depth; the stack is then the only bound.
pub fn from_json_bounded(json: &str, max_depth: Option<usize>) -> Result<SerialNode> {
    if let Some(max_depth) = max_depth {
        // Node objects sit on odd levels, so an element at depth d opens level 2d - 1
        // and its text children open level 2d + 1.
        let allowed = max_depth.saturating_mul(2).saturating_add(1);
        if nesting_depth(json) > allowed {
            return Err(CoreError::DepthExceeded { max_depth });
        }
    }

    let mut deserializer = serde_json::Deserializer::from_str(json);
    deserializer.disable_recursion_limit();
    let node = SerialNode::deserialize(&mut deserializer)?;
    deserializer.end()?;
    Ok(node)
}

/// Parse a tree from a JSON value
pub fn from_value(value: Value) -> Result<SerialNode> {
    Ok(serde_json::from_value(value)?)
}

/// Deepest `{`/`[` nesting outside string literals
fn nesting_depth(json: &str) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for byte in json.bytes() {
        if in_string {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'{' | b'[' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            b'}' | b']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    deepest
}
