//! Loading context.
//!
//! A `Context` owns one [`TypeDatabase`], the [`TypesystemLoader`] that
//! fills it, and the diagnostics produced while loading. Every context is
//! independent: there is no process-wide registry, and [`Context::reset`]
//! starts over with fresh state instead of clearing the old one in place.
//!
//! # Example
//!
//! ```no_run
//! use typesystem::Context;
//!
//! let mut ctx = Context::new();
//! ctx.add_typesystem_path("/usr/share/typesystems");
//! ctx.load_default().unwrap();
//!
//! if let Some(widget) = ctx.database().find_object_type("QWidget") {
//!     println!("{}", widget.qualified_target_lang_name());
//! }
//! ```

use std::path::Path;

use thiserror::Error;

use typesystem_core::{Diagnostics, RegistrationError, TypeEntry, TypeId};
use typesystem_loader::{DEFAULT_TYPESYSTEM_FILE, LoadError, TypesystemLoader};
use typesystem_registry::TypeDatabase;

/// Owner of the registry for one generation run.
#[derive(Debug, Default)]
pub struct Context {
    database: TypeDatabase,
    loader: TypesystemLoader,
    diagnostics: Diagnostics,
}

impl Context {
    /// Create a context with a fresh database and no search paths.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the database, the loader memo, search paths and diagnostics.
    pub fn reset(&mut self) {
        tracing::debug!(
            types = self.database.type_count(),
            documents = self.loader.parsed_count(),
            "resetting context"
        );
        *self = Self::new();
    }

    /// Add a separator-delimited list of typesystem search directories.
    pub fn add_typesystem_path(&mut self, paths: &str) {
        self.loader.add_typesystem_path(paths);
    }

    /// Load a typesystem document and its dependencies.
    ///
    /// Returns `Ok(false)` when the document cannot be found; the warning
    /// is in [`Context::diagnostics`].
    ///
    /// # Errors
    ///
    /// Returns `ContextError::Load` if the document cannot be read or parsed.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn load(&mut self, path: impl AsRef<Path>, generate: bool) -> Result<bool, ContextError> {
        let loaded =
            self.loader
                .parse_file(&mut self.database, path, generate, &mut self.diagnostics)?;
        Ok(loaded)
    }

    /// Load a document given as TOML text.
    pub fn load_str(&mut self, source: &str, origin: &str) -> Result<(), ContextError> {
        self.loader.parse_str(
            &mut self.database,
            source,
            Path::new(origin),
            true,
            &mut self.diagnostics,
        )?;
        Ok(())
    }

    /// Load [`DEFAULT_TYPESYSTEM_FILE`] through the search path.
    pub fn load_default(&mut self) -> Result<bool, ContextError> {
        self.load(DEFAULT_TYPESYSTEM_FILE, true)
    }

    /// Register an entity directly, bypassing configuration.
    pub fn add_type(&mut self, entry: TypeEntry) -> Result<TypeId, ContextError> {
        Ok(self.database.add_type(entry)?)
    }

    pub fn database(&self) -> &TypeDatabase {
        &self.database
    }

    /// Mutable database access for the code that merges parsed headers.
    pub fn database_mut(&mut self) -> &mut TypeDatabase {
        &mut self.database
    }

    pub fn loader(&self) -> &TypesystemLoader {
        &self.loader
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Take the collected diagnostics, leaving an empty collector.
    pub fn take_diagnostics(&mut self) -> Diagnostics {
        std::mem::take(&mut self.diagnostics)
    }

    /// Finish loading and keep only the database.
    pub fn into_database(self) -> TypeDatabase {
        self.database
    }
}

/// Errors that can occur during context operations.
#[derive(Debug, Error)]
pub enum ContextError {
    /// A typesystem document failed to load
    #[error(transparent)]
    Load(#[from] LoadError),

    /// An entity could not be registered
    #[error("failed to register type: {0}")]
    Registration(#[from] RegistrationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_context_is_empty() {
        let ctx = Context::new();
        assert_eq!(ctx.database().type_count(), 2);
        assert!(ctx.diagnostics().is_empty());
        assert_eq!(ctx.loader().parsed_count(), 0);
    }

    #[test]
    fn reset_discards_state() {
        let mut ctx = Context::new();
        ctx.add_type(TypeEntry::value_type("QPoint")).unwrap();
        ctx.load_str("imports = [\"QtCore\"]", "inline").unwrap();
        assert!(ctx.database().find_type("QPoint").is_some());

        ctx.reset();
        assert!(ctx.database().find_type("QPoint").is_none());
        assert!(ctx.database().required_target_imports().is_empty());
    }

    #[test]
    fn load_default_missing_is_a_warning() {
        let mut ctx = Context::new();
        ctx.add_typesystem_path("/nonexistent-typesystem-dir");
        assert!(!ctx.load_default().unwrap());
        assert_eq!(ctx.diagnostics().warning_count(), 1);

        let taken = ctx.take_diagnostics();
        assert_eq!(taken.count(), 1);
        assert!(ctx.diagnostics().is_empty());
    }

    #[test]
    fn registration_error_converts() {
        let mut ctx = Context::new();
        let result = ctx.add_type(TypeEntry::value_type("A").in_scope(TypeId::new(42)));
        assert!(matches!(result, Err(ContextError::Registration(_))));
    }

    #[test]
    fn parse_error_converts() {
        let mut ctx = Context::new();
        let result = ctx.load_str("package = ", "broken");
        assert!(matches!(result, Err(ContextError::Load(LoadError::Parse { .. }))));
    }
}
