//! Primitive type entry.

/// Payload of a primitive type.
///
/// Several primitive spellings can share one C++ name (platform-width
/// aliases, for instance). Exactly one of them should be the preferred
/// target type; the rest stay resolvable through the full lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimitiveTypeEntry {
    /// Name of the target-language API type, if it differs from the entity name.
    pub target_lang_api_name: Option<String>,
    /// Use this entry when converting from the target name back to C++.
    pub preferred_conversion: bool,
    /// Use this entry when several primitives share a C++ name.
    pub preferred_target_lang_type: bool,
    /// C++ type this primitive is a typedef of.
    pub aliased_type: Option<String>,
}

impl PrimitiveTypeEntry {
    pub fn new() -> Self {
        Self {
            target_lang_api_name: None,
            preferred_conversion: true,
            preferred_target_lang_type: true,
            aliased_type: None,
        }
    }

    pub fn with_preferred_conversion(mut self, preferred: bool) -> Self {
        self.preferred_conversion = preferred;
        self
    }

    pub fn with_preferred_target_lang_type(mut self, preferred: bool) -> Self {
        self.preferred_target_lang_type = preferred;
        self
    }

    pub fn with_target_lang_api_name(mut self, name: impl Into<String>) -> Self {
        self.target_lang_api_name = Some(name.into());
        self
    }

    pub fn with_aliased_type(mut self, name: impl Into<String>) -> Self {
        self.aliased_type = Some(name.into());
        self
    }
}

impl Default for PrimitiveTypeEntry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_defaults_are_preferred() {
        let entry = PrimitiveTypeEntry::new();
        assert!(entry.preferred_conversion);
        assert!(entry.preferred_target_lang_type);
        assert!(entry.target_lang_api_name.is_none());
    }

    #[test]
    fn primitive_alias() {
        let entry = PrimitiveTypeEntry::new()
            .with_preferred_target_lang_type(false)
            .with_aliased_type("long long");
        assert!(!entry.preferred_target_lang_type);
        assert_eq!(entry.aliased_type.as_deref(), Some("long long"));
    }
}
