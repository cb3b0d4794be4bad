//! TypeEntry: one discovered C++ entity.
//!
//! The common fields (name, scope, generation switch, rename, package) live
//! on [`TypeEntry`]; kind-specific data lives in the closed
//! [`TypeEntryKind`] sum type. Names that depend on the scope chain are
//! computed by the registry, which owns every entry.

use std::fmt;

use crate::TypeId;

use super::{
    ComplexKind, ComplexTypeEntry, ContainerKind, ContainerTypeEntry, EnumTypeEntry,
    FlagsTypeEntry, FunctionTypeEntry, PrimitiveTypeEntry, TemplateEntry,
};

/// Name of the built-in void entity.
pub const VOID_TYPE_NAME: &str = "void";

/// Name of the built-in varargs entity.
pub const VARARGS_TYPE_NAME: &str = "...";

/// Kind-specific payload of a [`TypeEntry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeEntryKind {
    /// Primitive type (int, double, platform-width aliases, ...).
    Primitive(PrimitiveTypeEntry),
    /// Value or object class.
    Complex(ComplexTypeEntry),
    /// C++ namespace.
    Namespace,
    /// Enumeration.
    Enum(EnumTypeEntry),
    /// Bitmask wrapper around an enum.
    Flags(FlagsTypeEntry),
    /// Container template.
    Container(ContainerTypeEntry),
    /// Free function.
    Function(FunctionTypeEntry),
    /// Code template.
    Template(TemplateEntry),
    /// `void`.
    Void,
    /// `...`.
    Varargs,
}

/// Payload-free discriminant of [`TypeEntryKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Primitive,
    Value,
    Object,
    Namespace,
    Enum,
    Flags,
    Container,
    Function,
    Template,
    Void,
    Varargs,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntryKind::Primitive => "primitive-type",
            EntryKind::Value => "value-type",
            EntryKind::Object => "object-type",
            EntryKind::Namespace => "namespace-type",
            EntryKind::Enum => "enum-type",
            EntryKind::Flags => "flags-type",
            EntryKind::Container => "container-type",
            EntryKind::Function => "function",
            EntryKind::Template => "template",
            EntryKind::Void => "void",
            EntryKind::Varargs => "varargs",
        };
        f.write_str(name)
    }
}

/// Registry entry for one C++ entity.
///
/// `name` and `scope` are fixed at construction. The remaining fields are
/// configuration and may be adjusted before the entry is registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeEntry {
    name: String,
    scope: Option<TypeId>,
    /// False marks the entry hidden: it exists for C++ resolution but has no
    /// target-language name.
    pub generate: bool,
    /// Target-language identifier, if different from `name`.
    pub target_lang_name: Option<String>,
    /// Target package; only meaningful on entries without a scope.
    pub package: Option<String>,
    /// Header that declares the entity.
    pub include: Option<String>,
    pub kind: TypeEntryKind,
}

impl TypeEntry {
    /// Create a generated entry at global scope.
    pub fn new(name: impl Into<String>, kind: TypeEntryKind) -> Self {
        Self {
            name: name.into(),
            scope: None,
            generate: true,
            target_lang_name: None,
            package: None,
            include: None,
            kind,
        }
    }

    /// Create a generated entry inside `scope`.
    pub fn scoped(name: impl Into<String>, scope: Option<TypeId>, kind: TypeEntryKind) -> Self {
        let mut entry = Self::new(name, kind);
        entry.scope = scope;
        entry
    }

    // === Constructors ===

    pub fn primitive(name: impl Into<String>) -> Self {
        Self::new(name, TypeEntryKind::Primitive(PrimitiveTypeEntry::new()))
    }

    pub fn value_type(name: impl Into<String>) -> Self {
        Self::new(name, TypeEntryKind::Complex(ComplexTypeEntry::value()))
    }

    pub fn object_type(name: impl Into<String>) -> Self {
        Self::new(name, TypeEntryKind::Complex(ComplexTypeEntry::object()))
    }

    pub fn namespace(name: impl Into<String>) -> Self {
        Self::new(name, TypeEntryKind::Namespace)
    }

    pub fn enum_type(name: impl Into<String>) -> Self {
        Self::new(name, TypeEntryKind::Enum(EnumTypeEntry::new()))
    }

    pub fn flags(name: impl Into<String>, original_name: impl Into<String>) -> Self {
        Self::new(name, TypeEntryKind::Flags(FlagsTypeEntry::new(original_name)))
    }

    pub fn container(name: impl Into<String>, kind: ContainerKind) -> Self {
        Self::new(name, TypeEntryKind::Container(ContainerTypeEntry::new(kind)))
    }

    pub fn function(name: impl Into<String>, signature: impl Into<String>) -> Self {
        Self::new(name, TypeEntryKind::Function(FunctionTypeEntry::new(signature)))
    }

    pub fn template(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self::new(name, TypeEntryKind::Template(TemplateEntry::new(code)))
    }

    pub fn void() -> Self {
        Self::new(VOID_TYPE_NAME, TypeEntryKind::Void)
    }

    pub fn varargs() -> Self {
        Self::new(VARARGS_TYPE_NAME, TypeEntryKind::Varargs)
    }

    // === Builders ===

    /// Place the entry inside `scope`.
    pub fn in_scope(mut self, scope: TypeId) -> Self {
        self.scope = Some(scope);
        self
    }

    pub fn with_generate(mut self, generate: bool) -> Self {
        self.generate = generate;
        self
    }

    pub fn with_target_lang_name(mut self, name: impl Into<String>) -> Self {
        self.target_lang_name = Some(name.into());
        self
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn with_include(mut self, include: impl Into<String>) -> Self {
        self.include = Some(include.into());
        self
    }

    // === Accessors ===

    /// The scope-local C++ identifier.
    pub fn cpp_name(&self) -> &str {
        &self.name
    }

    /// The scope-local target identifier: the rename if set, else the C++ name.
    ///
    /// Does not look at `generate`.
    pub fn name(&self) -> &str {
        self.target_lang_name.as_deref().unwrap_or(&self.name)
    }

    /// Enclosing scope, `None` at the root of a chain.
    pub fn scope(&self) -> Option<TypeId> {
        self.scope
    }

    pub fn generate_code(&self) -> bool {
        self.generate
    }

    /// Discriminant of the payload.
    pub fn entry_kind(&self) -> EntryKind {
        match &self.kind {
            TypeEntryKind::Primitive(_) => EntryKind::Primitive,
            TypeEntryKind::Complex(c) => match c.kind {
                ComplexKind::Value => EntryKind::Value,
                ComplexKind::Object => EntryKind::Object,
            },
            TypeEntryKind::Namespace => EntryKind::Namespace,
            TypeEntryKind::Enum(_) => EntryKind::Enum,
            TypeEntryKind::Flags(_) => EntryKind::Flags,
            TypeEntryKind::Container(_) => EntryKind::Container,
            TypeEntryKind::Function(_) => EntryKind::Function,
            TypeEntryKind::Template(_) => EntryKind::Template,
            TypeEntryKind::Void => EntryKind::Void,
            TypeEntryKind::Varargs => EntryKind::Varargs,
        }
    }

    /// Preference predicate for single-result lookup.
    ///
    /// Every non-primitive qualifies; a primitive qualifies only when it is
    /// flagged as the preferred target type.
    pub fn is_lookup_preferred(&self) -> bool {
        match &self.kind {
            TypeEntryKind::Primitive(p) => p.preferred_target_lang_type,
            _ => true,
        }
    }

    // === Type Checks ===

    pub fn is_primitive(&self) -> bool {
        matches!(self.kind, TypeEntryKind::Primitive(_))
    }

    pub fn is_complex(&self) -> bool {
        matches!(self.kind, TypeEntryKind::Complex(_))
    }

    pub fn is_value(&self) -> bool {
        matches!(&self.kind, TypeEntryKind::Complex(c) if c.is_value())
    }

    pub fn is_object(&self) -> bool {
        matches!(&self.kind, TypeEntryKind::Complex(c) if c.is_object())
    }

    pub fn is_namespace(&self) -> bool {
        matches!(self.kind, TypeEntryKind::Namespace)
    }

    pub fn is_enum(&self) -> bool {
        matches!(self.kind, TypeEntryKind::Enum(_))
    }

    pub fn is_flags(&self) -> bool {
        matches!(self.kind, TypeEntryKind::Flags(_))
    }

    pub fn is_container(&self) -> bool {
        matches!(self.kind, TypeEntryKind::Container(_))
    }

    pub fn is_function(&self) -> bool {
        matches!(self.kind, TypeEntryKind::Function(_))
    }

    pub fn is_template(&self) -> bool {
        matches!(self.kind, TypeEntryKind::Template(_))
    }

    pub fn is_void(&self) -> bool {
        matches!(self.kind, TypeEntryKind::Void)
    }

    pub fn is_varargs(&self) -> bool {
        matches!(self.kind, TypeEntryKind::Varargs)
    }

    // === Downcasting ===

    pub fn as_primitive(&self) -> Option<&PrimitiveTypeEntry> {
        match &self.kind {
            TypeEntryKind::Primitive(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_complex(&self) -> Option<&ComplexTypeEntry> {
        match &self.kind {
            TypeEntryKind::Complex(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumTypeEntry> {
        match &self.kind {
            TypeEntryKind::Enum(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_flags(&self) -> Option<&FlagsTypeEntry> {
        match &self.kind {
            TypeEntryKind::Flags(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_container(&self) -> Option<&ContainerTypeEntry> {
        match &self.kind {
            TypeEntryKind::Container(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionTypeEntry> {
        match &self.kind {
            TypeEntryKind::Function(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_template(&self) -> Option<&TemplateEntry> {
        match &self.kind {
            TypeEntryKind::Template(e) => Some(e),
            _ => None,
        }
    }

    // === Mutable Downcasting ===

    pub fn as_primitive_mut(&mut self) -> Option<&mut PrimitiveTypeEntry> {
        match &mut self.kind {
            TypeEntryKind::Primitive(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_complex_mut(&mut self) -> Option<&mut ComplexTypeEntry> {
        match &mut self.kind {
            TypeEntryKind::Complex(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_enum_mut(&mut self) -> Option<&mut EnumTypeEntry> {
        match &mut self.kind {
            TypeEntryKind::Enum(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_function_mut(&mut self) -> Option<&mut FunctionTypeEntry> {
        match &mut self.kind {
            TypeEntryKind::Function(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TypeFlags;

    #[test]
    fn new_entry_defaults() {
        let entry = TypeEntry::value_type("ClassName");
        assert_eq!(entry.cpp_name(), "ClassName");
        assert_eq!(entry.name(), "ClassName");
        assert!(entry.scope().is_none());
        assert!(entry.generate_code());
        assert!(entry.package.is_none());
        assert_eq!(entry.entry_kind(), EntryKind::Value);
    }

    #[test]
    fn rename_changes_name_not_cpp_name() {
        let entry = TypeEntry::object_type("QObject").with_target_lang_name("Object");
        assert_eq!(entry.cpp_name(), "QObject");
        assert_eq!(entry.name(), "Object");
    }

    #[test]
    fn hidden_entry_keeps_its_name() {
        let entry = TypeEntry::namespace("Nsp").with_generate(false);
        assert!(!entry.generate_code());
        assert_eq!(entry.name(), "Nsp");
    }

    #[test]
    fn scoped_entry() {
        let entry = TypeEntry::enum_type("ClassEnum").in_scope(TypeId::new(4));
        assert_eq!(entry.scope(), Some(TypeId::new(4)));

        let entry = TypeEntry::scoped("B", Some(TypeId::new(2)), TypeEntryKind::Namespace);
        assert_eq!(entry.scope(), Some(TypeId::new(2)));
        assert!(entry.is_namespace());
    }

    #[test]
    fn builtins() {
        assert_eq!(TypeEntry::void().cpp_name(), "void");
        assert!(TypeEntry::void().is_void());
        assert_eq!(TypeEntry::varargs().cpp_name(), "...");
        assert!(TypeEntry::varargs().is_varargs());
    }

    #[test]
    fn lookup_preference() {
        assert!(TypeEntry::value_type("A").is_lookup_preferred());
        assert!(TypeEntry::primitive("int").is_lookup_preferred());

        let mut alias = TypeEntry::primitive("qint64");
        if let Some(p) = alias.as_primitive_mut() {
            p.preferred_target_lang_type = false;
        }
        assert!(!alias.is_lookup_preferred());
    }

    #[test]
    fn downcasting() {
        let entry = TypeEntry::container("QList", ContainerKind::List);
        assert!(entry.is_container());
        assert!(entry.as_container().is_some());
        assert!(entry.as_complex().is_none());
        assert!(entry.as_primitive().is_none());

        let entry = TypeEntry::flags("Alignment", "Qt::Alignment");
        assert_eq!(
            entry.as_flags().map(|f| f.original_name.as_str()),
            Some("Qt::Alignment")
        );
    }

    #[test]
    fn mutable_access() {
        let mut entry = TypeEntry::object_type("QWidget");
        if let Some(complex) = entry.as_complex_mut() {
            complex.type_flags |= TypeFlags::FORCE_ABSTRACT;
        }
        assert!(entry.as_complex().is_some_and(|c| c.is_abstract_forced()));
        assert!(entry.is_object());
        assert!(!entry.is_value());
    }

    #[test]
    fn entry_kind_display() {
        assert_eq!(EntryKind::Namespace.to_string(), "namespace-type");
        assert_eq!(TypeEntry::template("t", "code").entry_kind().to_string(), "template");
    }
}
