//! Class type entry.
//!
//! Value types are copied across the language boundary, object types are
//! passed by identity. Both carry the same configuration payload.

use bitflags::bitflags;

use crate::{AddedFunction, FunctionModification};

/// Value or object semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplexKind {
    /// Copied by value (`value-type`).
    Value,
    /// Passed by pointer identity (`object-type`).
    Object,
}

bitflags! {
    /// Per-class generation switches.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TypeFlags: u32 {
        /// Treat the class as abstract even if it is not.
        const FORCE_ABSTRACT = 0x1;
        /// Emit deprecation warnings on use.
        const DEPRECATED = 0x2;
        /// Destroy instances on the main thread only.
        const DELETE_IN_MAIN_THREAD = 0x4;
    }
}

/// Payload of a value or object class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexTypeEntry {
    pub kind: ComplexKind,
    pub type_flags: TypeFlags,
    /// Headers the generated wrapper needs in addition to the class header.
    pub extra_includes: Vec<String>,
    /// Expression used to detect this class among polymorphic siblings.
    pub polymorphic_id_value: Option<String>,
    /// Member functions injected by the configuration.
    pub added_functions: Vec<AddedFunction>,
    /// Signature modifications scoped to this class.
    pub function_modifications: Vec<FunctionModification>,
}

impl ComplexTypeEntry {
    pub fn new(kind: ComplexKind) -> Self {
        Self {
            kind,
            type_flags: TypeFlags::empty(),
            extra_includes: Vec::new(),
            polymorphic_id_value: None,
            added_functions: Vec::new(),
            function_modifications: Vec::new(),
        }
    }

    pub fn value() -> Self {
        Self::new(ComplexKind::Value)
    }

    pub fn object() -> Self {
        Self::new(ComplexKind::Object)
    }

    pub fn with_flags(mut self, flags: TypeFlags) -> Self {
        self.type_flags |= flags;
        self
    }

    pub fn with_extra_include(mut self, include: impl Into<String>) -> Self {
        self.extra_includes.push(include.into());
        self
    }

    pub fn is_value(&self) -> bool {
        self.kind == ComplexKind::Value
    }

    pub fn is_object(&self) -> bool {
        self.kind == ComplexKind::Object
    }

    pub fn is_abstract_forced(&self) -> bool {
        self.type_flags.contains(TypeFlags::FORCE_ABSTRACT)
    }

    pub fn is_deprecated(&self) -> bool {
        self.type_flags.contains(TypeFlags::DEPRECATED)
    }

    /// Modifications registered on this class for `signature`.
    pub fn function_modifications(&self, signature: &str) -> Vec<&FunctionModification> {
        self.function_modifications
            .iter()
            .filter(|m| m.signature == signature)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_and_object() {
        assert!(ComplexTypeEntry::value().is_value());
        assert!(!ComplexTypeEntry::value().is_object());
        assert!(ComplexTypeEntry::object().is_object());
    }

    #[test]
    fn flags_accumulate() {
        let entry = ComplexTypeEntry::object()
            .with_flags(TypeFlags::FORCE_ABSTRACT)
            .with_flags(TypeFlags::DEPRECATED);
        assert!(entry.is_abstract_forced());
        assert!(entry.is_deprecated());
        assert!(!entry.type_flags.contains(TypeFlags::DELETE_IN_MAIN_THREAD));
    }

    #[test]
    fn class_scoped_modifications() {
        let mut entry = ComplexTypeEntry::object();
        entry
            .function_modifications
            .push(FunctionModification::new("exec()").with_rename("exec_"));
        entry
            .function_modifications
            .push(FunctionModification::new("exec()").with_remove(true));
        entry
            .function_modifications
            .push(FunctionModification::new("show()"));

        assert_eq!(entry.function_modifications("exec()").len(), 2);
        assert!(entry.function_modifications("hide()").is_empty());
    }
}
