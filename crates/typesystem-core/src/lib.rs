//! Core types for the typesystem registry.
//!
//! This crate holds the entity model and the plain-data rule types shared by
//! the registry and the configuration loader:
//!
//! - [`TypeEntry`] and its payloads in [`entries`]
//! - [`TypeId`] arena handles
//! - [`QualifiedName`] for taking C++ names apart
//! - [`GlobPattern`] for diagnostic suppression
//! - [`TypeRejection`], [`AddedFunction`], [`FunctionModification`]
//! - [`Diagnostics`] and the [`ReportHandler`] seam

pub mod diagnostics;
pub mod entries;
mod error;
mod ids;
mod modifications;
mod pattern;
mod qualified_name;
mod rejection;

pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, ReportHandler, TracingReporter};
pub use entries::{
    ComplexKind, ComplexTypeEntry, ContainerKind, ContainerTypeEntry, EntryKind, EnumTypeEntry,
    FlagsTypeEntry, FunctionTypeEntry, PrimitiveTypeEntry, TemplateEntry, TypeEntry,
    TypeEntryKind, TypeFlags, VARARGS_TYPE_NAME, VOID_TYPE_NAME,
};
pub use error::RegistrationError;
pub use ids::TypeId;
pub use modifications::{AddedFunction, FunctionModification};
pub use pattern::GlobPattern;
pub use qualified_name::{
    CPP_SCOPE_SEPARATOR, QualifiedName, TARGET_SCOPE_SEPARATOR, template_base_name,
};
pub use rejection::{TypeRejection, WILDCARD};
