//! Flags type entry.

use crate::TypeId;

/// Payload of a bitmask wrapper around an enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagsTypeEntry {
    /// Qualified C++ name the flags type is indexed under (e.g. `Qt::Alignment`).
    pub original_name: String,
    /// The enum the flags wrap.
    pub origin: Option<TypeId>,
}

impl FlagsTypeEntry {
    pub fn new(original_name: impl Into<String>) -> Self {
        Self {
            original_name: original_name.into(),
            origin: None,
        }
    }

    pub fn with_origin(mut self, origin: TypeId) -> Self {
        self.origin = Some(origin);
        self
    }
}
