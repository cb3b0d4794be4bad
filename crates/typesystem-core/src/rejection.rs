//! Rejection rules.
//!
//! A rule names a class and, optionally, one of its functions, fields or
//! enums. Every member is either an exact identifier or the wildcard `*`;
//! no other glob syntax applies here.

/// Wildcard accepted by every rejection member.
pub const WILDCARD: &str = "*";

/// A single rejection directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRejection {
    /// Class the rule applies to, or `*` for any class.
    pub class_name: String,
    /// Rejected function name, `*` if the rule is not about a function.
    pub function_name: String,
    /// Rejected field name, `*` if the rule is not about a field.
    pub field_name: String,
    /// Rejected enum name, `*` if the rule is not about an enum.
    pub enum_name: String,
}

impl TypeRejection {
    /// Create a rule from all four members.
    pub fn new(
        class_name: impl Into<String>,
        function_name: impl Into<String>,
        field_name: impl Into<String>,
        enum_name: impl Into<String>,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            function_name: function_name.into(),
            field_name: field_name.into(),
            enum_name: enum_name.into(),
        }
    }

    /// Reject a whole class.
    pub fn class(class_name: impl Into<String>) -> Self {
        Self::new(class_name, WILDCARD, WILDCARD, WILDCARD)
    }

    /// Reject a function, in `class_name` or in any class when `*`.
    pub fn function(class_name: impl Into<String>, function_name: impl Into<String>) -> Self {
        Self::new(class_name, function_name, WILDCARD, WILDCARD)
    }

    /// Reject a field, in `class_name` or in any class when `*`.
    pub fn field(class_name: impl Into<String>, field_name: impl Into<String>) -> Self {
        Self::new(class_name, WILDCARD, field_name, WILDCARD)
    }

    /// Reject an enum, in `class_name` or in any class when `*`.
    pub fn enumeration(class_name: impl Into<String>, enum_name: impl Into<String>) -> Self {
        Self::new(class_name, WILDCARD, WILDCARD, enum_name)
    }

    /// True if the rule drops the entire class.
    pub fn rejects_class(&self, class_name: &str) -> bool {
        self.class_name == class_name
            && self.function_name == WILDCARD
            && self.field_name == WILDCARD
            && self.enum_name == WILDCARD
    }

    /// True if the rule's class is `class_name` or the wildcard.
    pub fn applies_to_class(&self, class_name: &str) -> bool {
        self.class_name == class_name || self.class_name == WILDCARD
    }

    pub fn rejects_function(&self, class_name: &str, function_name: &str) -> bool {
        self.function_name == function_name && self.applies_to_class(class_name)
    }

    pub fn rejects_field(&self, class_name: &str, field_name: &str) -> bool {
        self.field_name == field_name && self.applies_to_class(class_name)
    }

    pub fn rejects_enum(&self, class_name: &str, enum_name: &str) -> bool {
        self.enum_name == enum_name && self.applies_to_class(class_name)
    }
}
