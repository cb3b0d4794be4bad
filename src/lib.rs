//! Type-metadata registry for C++ binding generation.
//!
//! The registry records every C++ entity a binding generator knows about
//! and answers two questions about it: how is it named on each side of the
//! binding, and do the configuration rules let it through.
//!
//! - `typesystem_core` holds the entity model and rule types.
//! - `typesystem_registry` holds the [`TypeDatabase`].
//! - `typesystem_loader` reads typesystem documents into a database.
//!
//! [`Context`] ties the three together for one generation run.

pub mod context;

pub use context::{Context, ContextError};

pub use typesystem_core::{
    AddedFunction, ComplexKind, ComplexTypeEntry, ContainerKind, ContainerTypeEntry, Diagnostic,
    DiagnosticKind, Diagnostics, EntryKind, EnumTypeEntry, FlagsTypeEntry, FunctionModification,
    FunctionTypeEntry, GlobPattern, PrimitiveTypeEntry, QualifiedName, RegistrationError,
    ReportHandler, TemplateEntry, TracingReporter, TypeEntry, TypeEntryKind, TypeFlags, TypeId,
    TypeRejection, entries,
};
pub use typesystem_loader::{
    DEFAULT_TYPESYSTEM_FILE, LoadError, PathResolver, TypesystemDocument, TypesystemLoader,
};
pub use typesystem_registry::{RuleStore, TypeArena, TypeDatabase, TypeRef};

/// Commonly used items.
pub mod prelude {
    pub use crate::context::{Context, ContextError};
    pub use typesystem_core::{Diagnostics, ReportHandler, TypeEntry, TypeId};
    pub use typesystem_registry::{TypeDatabase, TypeRef};
}
