//! Type-metadata registry.
//!
//! [`TypeDatabase`] owns every entity through a [`TypeArena`] and answers
//! lookups by qualified C++ name. [`TypeRef`] handles compute the scope-aware
//! names of an entity on demand. [`RuleStore`] holds the rejection,
//! suppression and function-injection rules read from configuration.

mod arena;
mod database;
mod rules;
mod signature;

pub use arena::{ScopeChain, TypeArena, TypeRef};
pub use database::{GLOBAL_NAMESPACE_CLASS_NAME, TypeDatabase};
pub use rules::RuleStore;
pub use signature::normalize_whitespace;
