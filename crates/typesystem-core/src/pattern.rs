//! Wildcard patterns for diagnostic suppression.
//!
//! A pattern is compiled once into an ordered list of literal segments. `*`
//! separates segments and matches any run of characters; `\*` is a literal
//! asterisk inside a segment.
//!
//! Matching is unanchored: every segment must occur in the subject, in
//! order, each one starting at or after the end of the previous match.
//!
//! ```
//! use typesystem_core::GlobPattern;
//!
//! let pattern = GlobPattern::compile("enum * not found");
//! assert!(pattern.matches("warning: enum Foo::Bar not found in scope"));
//! assert!(!pattern.matches("not found: enum Foo"));
//! ```

use std::fmt;

/// A compiled wildcard pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobPattern {
    source: String,
    segments: Vec<String>,
}

impl GlobPattern {
    /// Compile a pattern string.
    ///
    /// Empty segments (leading, trailing or doubled `*`) are dropped.
    pub fn compile(pattern: &str) -> Self {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut chars = pattern.chars().peekable();

        while let Some(ch) = chars.next() {
            match ch {
                '\\' if chars.peek() == Some(&'*') => {
                    chars.next();
                    current.push('*');
                }
                '*' => {
                    if !current.is_empty() {
                        segments.push(std::mem::take(&mut current));
                    }
                }
                _ => current.push(ch),
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }

        Self {
            source: pattern.to_string(),
            segments,
        }
    }

    /// The pattern as it was written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Literal segments in match order, escapes already resolved.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// A pattern without segments (e.g. `""` or `"**"`) never matches.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Check whether `subject` contains every segment in order.
    pub fn matches(&self, subject: &str) -> bool {
        if self.segments.is_empty() {
            return false;
        }

        let mut from = 0;
        for segment in &self.segments {
            match subject[from..].find(segment.as_str()) {
                Some(offset) => from += offset + segment.len(),
                None => return false,
            }
        }
        true
    }
}

impl fmt::Display for GlobPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl From<&str> for GlobPattern {
    fn from(pattern: &str) -> Self {
        Self::compile(pattern)
    }
}
