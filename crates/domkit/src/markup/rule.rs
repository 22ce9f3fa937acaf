//! Rule type for inline markup substitution.

use std::borrow::Cow;

use regex::Regex;

use crate::Result;

/// A rule replaces every non-overlapping match of its pattern, left to right
#[derive(Debug, Clone)]
pub struct Rule {
    /// Pattern to search for
    pattern: Regex,
    /// Replacement template; `${1}` style group references are expanded
    replacement: String,
}

impl Rule {
    /// Create a rule from a pattern source
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self::from_regex(Regex::new(pattern)?, replacement))
    }

    /// Create a rule from an already compiled pattern
    pub fn from_regex(pattern: Regex, replacement: &str) -> Self {
        Self {
            pattern,
            replacement: replacement.to_string(),
        }
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Apply this rule; borrows the input when nothing matched
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, self.replacement.as_str())
    }
}
