//! Typesystem document loading.
//!
//! Documents are TOML files describing the C++ entities to bind, the rules
//! for rejecting parts of them, and the target package they land in. The
//! [`TypesystemLoader`] finds them through a search path, parses each one
//! once, and registers its contents in a
//! [`TypeDatabase`](typesystem_registry::TypeDatabase).

pub mod document;
mod error;
mod handler;
mod loader;
mod resolver;

pub use document::TypesystemDocument;
pub use error::{LoadError, Result};
pub use loader::{DEFAULT_TYPESYSTEM_FILE, TypesystemLoader};
pub use resolver::{PATH_LIST_SEPARATOR, PathResolver};
