//! Registry entry types.
//!
//! - [`TypeEntry`] - one discovered C++ entity and its target-language projection
//! - [`TypeEntryKind`] - closed set of entity kinds with their payloads
//!
//! Payloads:
//! - [`PrimitiveTypeEntry`] - primitive spellings and their target mapping
//! - [`ComplexTypeEntry`] - value and object classes
//! - [`EnumTypeEntry`], [`FlagsTypeEntry`] - enums and their bitmask wrappers
//! - [`ContainerTypeEntry`] - container templates with native conversions
//! - [`FunctionTypeEntry`] - free functions declared in the configuration
//! - [`TemplateEntry`] - reusable code snippets

mod complex;
mod container;
mod enum_entry;
mod flags;
mod function;
mod primitive;
mod template;
mod type_entry;

pub use complex::{ComplexKind, ComplexTypeEntry, TypeFlags};
pub use container::{ContainerKind, ContainerTypeEntry};
pub use enum_entry::EnumTypeEntry;
pub use flags::FlagsTypeEntry;
pub use function::FunctionTypeEntry;
pub use primitive::PrimitiveTypeEntry;
pub use template::TemplateEntry;

pub use type_entry::{EntryKind, TypeEntry, TypeEntryKind, VARARGS_TYPE_NAME, VOID_TYPE_NAME};
