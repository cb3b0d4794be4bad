//! Function type entry.

/// Payload of a free function declared in the configuration.
///
/// Overloads of one function share a single entity; each declared
/// signature is kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FunctionTypeEntry {
    pub signatures: Vec<String>,
}

impl FunctionTypeEntry {
    pub fn new(signature: impl Into<String>) -> Self {
        Self {
            signatures: vec![signature.into()],
        }
    }

    pub fn add_signature(&mut self, signature: impl Into<String>) {
        self.signatures.push(signature.into());
    }

    pub fn has_signature(&self, signature: &str) -> bool {
        self.signatures.iter().any(|s| s == signature)
    }
}
