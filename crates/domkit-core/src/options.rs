//! Configuration options for the tree codec

/// Default nesting limit for encode and decode
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Options for converting between live and serializable trees
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecOptions {
    /// Deepest element nesting accepted, counting the root as depth 1.
    /// `None` disables the check and recursion is bounded only by the stack.
    pub max_depth: Option<usize>,

    /// Indent JSON output
    pub pretty_json: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            pretty_json: false,
        }
    }
}

impl CodecOptions {
    /// Options without a depth limit
    pub fn unbounded() -> Self {
        Self {
            max_depth: None,
            ..Self::default()
        }
    }

    /// Check whether `depth` is within the configured limit
    pub fn allows_depth(&self, depth: usize) -> bool {
        self.max_depth.map_or(true, |max| depth <= max)
    }
}
