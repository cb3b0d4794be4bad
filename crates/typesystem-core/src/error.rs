//! Error types for registering entities.

use thiserror::Error;

use crate::TypeId;

/// Errors raised when an entity cannot be added to the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// The entry names a scope that is not in the registry.
    #[error("unknown scope {scope} for '{name}'")]
    UnknownScope { name: String, scope: TypeId },

    /// A template was registered without a name.
    #[error("template name must not be empty")]
    EmptyTemplateName,

    /// An entry of the wrong kind was passed to a kind-specific registration.
    #[error("'{name}' is a {found}, expected a {expected}")]
    WrongKind {
        name: String,
        expected: &'static str,
        found: String,
    },
}
