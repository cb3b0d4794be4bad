//! Enum type entry.

use crate::TypeId;

/// Payload of an enum.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnumTypeEntry {
    /// Enumerator names declared in the configuration.
    pub values: Vec<String>,
    /// Enumerators excluded from the generated bindings.
    pub rejected_values: Vec<String>,
    /// Flags wrapper derived from this enum, if any.
    pub flags: Option<TypeId>,
}

impl EnumTypeEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values.extend(values.into_iter().map(Into::into));
        self
    }

    pub fn with_rejected_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rejected_values.extend(values.into_iter().map(Into::into));
        self
    }

    pub fn is_enum_value_rejected(&self, name: &str) -> bool {
        self.rejected_values.iter().any(|v| v == name)
    }
}
