//! Template entry.

/// A named code snippet that other configuration entries can instantiate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TemplateEntry {
    pub code: String,
}

impl TemplateEntry {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}
