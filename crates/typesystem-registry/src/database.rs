//! TypeDatabase - the type-metadata registry.
//!
//! # Storage Model
//!
//! - **Entities**: owned by a [`TypeArena`], addressed by [`TypeId`].
//! - **By qualified C++ name**: an ordered multimap from name to every entity
//!   registered under it. Several entries per name is a supported state
//!   (a primitive and its aliases, a flags type sharing a name with its
//!   enum). Single-result lookup picks the first entry satisfying
//!   [`TypeEntry::is_lookup_preferred`].
//! - **Flags**: secondary index by the flags type's original name, used for
//!   lookups that omit part of the scope.
//! - **Templates**: indexed by exact name, last registration wins. Templates
//!   are not part of the qualified-name multimap.
//! - **Rules**: a [`RuleStore`].
//!
//! # Lifecycle
//!
//! A database is built once per generation run. [`TypeDatabase::new`]
//! always returns a fresh instance seeded with the `void` and `...`
//! built-ins; there is no shared global instance. Entities are never removed.
//!
//! # Example
//!
//! ```
//! use typesystem_registry::TypeDatabase;
//! use typesystem_core::TypeEntry;
//!
//! let mut db = TypeDatabase::new();
//! let nsp = db.add_type(TypeEntry::namespace("Nsp").with_package("Foo")).unwrap();
//! db.add_type(TypeEntry::value_type("ClassName").in_scope(nsp)).unwrap();
//!
//! let class = db.find_type("Nsp::ClassName").unwrap();
//! assert_eq!(class.qualified_target_lang_name(), "Foo.Nsp.ClassName");
//! ```

use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashMap};

use typesystem_core::{RegistrationError, TypeEntry, TypeId, template_base_name};

use crate::arena::{TypeArena, TypeRef};
use crate::rules::RuleStore;

type OrderedMap<V> = IndexMap<String, V, FxBuildHasher>;

/// Class name used for functions at global scope.
pub const GLOBAL_NAMESPACE_CLASS_NAME: &str = "Global";

/// Type-metadata registry.
#[derive(Clone)]
pub struct TypeDatabase {
    arena: TypeArena,

    /// Qualified C++ name -> entities, in registration order.
    entries: OrderedMap<Vec<TypeId>>,

    /// Flags original name -> flags entity (last write wins).
    flags_entries: OrderedMap<TypeId>,

    /// Template name -> template entity (last write wins).
    templates: FxHashMap<String, TypeId>,

    /// Target-side modules the generated code must import.
    required_target_imports: Vec<String>,

    rules: RuleStore,
}

impl TypeDatabase {
    /// Create a fresh database with the built-in `void` and `...` entities.
    pub fn new() -> Self {
        let mut db = Self {
            arena: TypeArena::new(),
            entries: OrderedMap::default(),
            flags_entries: OrderedMap::default(),
            templates: FxHashMap::default(),
            required_target_imports: Vec::new(),
            rules: RuleStore::new(),
        };
        // Built-ins have no scope, so insertion cannot fail.
        for builtin in [TypeEntry::void(), TypeEntry::varargs()] {
            let _ = db.add_type(builtin);
        }
        db
    }

    // ==========================================================================
    // Registration
    // ==========================================================================

    /// Register an entity under its qualified C++ name.
    ///
    /// Never deduplicates: a second entity with the same qualified name is
    /// appended after the first. Fails only if the entity's scope is unknown.
    pub fn add_type(&mut self, entry: TypeEntry) -> Result<TypeId, RegistrationError> {
        let id = self.arena.insert(entry)?;
        let key = self.qualified_cpp_name(id);
        tracing::trace!(name = %key, %id, "registered type");
        self.entries.entry(key).or_default().push(id);
        Ok(id)
    }

    /// Register a flags entity and index it by its original name.
    pub fn add_flags_type(&mut self, entry: TypeEntry) -> Result<TypeId, RegistrationError> {
        let original_name = match entry.as_flags() {
            Some(flags) => flags.original_name.clone(),
            None => return Err(wrong_kind(&entry, "flags-type")),
        };
        let id = self.add_type(entry)?;
        self.flags_entries.insert(original_name, id);
        Ok(id)
    }

    /// Register a template entity by name.
    pub fn add_template(&mut self, entry: TypeEntry) -> Result<TypeId, RegistrationError> {
        if !entry.is_template() {
            return Err(wrong_kind(&entry, "template"));
        }
        if entry.cpp_name().is_empty() {
            return Err(RegistrationError::EmptyTemplateName);
        }
        let name = entry.cpp_name().to_string();
        let id = self.arena.insert(entry)?;
        self.templates.insert(name, id);
        Ok(id)
    }

    /// Record a target-side import; repeated names are ignored.
    pub fn add_required_target_import(&mut self, module_name: impl Into<String>) {
        let module_name = module_name.into();
        if !self.required_target_imports.contains(&module_name) {
            self.required_target_imports.push(module_name);
        }
    }

    pub fn required_target_imports(&self) -> &[String] {
        &self.required_target_imports
    }

    // ==========================================================================
    // Entity access
    // ==========================================================================

    pub fn arena(&self) -> &TypeArena {
        &self.arena
    }

    /// Naming handle for a registered id.
    pub fn entry(&self, id: TypeId) -> Option<TypeRef<'_>> {
        self.arena.entry(id)
    }

    /// Mutable access to an entity's configuration.
    pub fn entry_mut(&mut self, id: TypeId) -> Option<&mut TypeEntry> {
        self.arena.get_mut(id)
    }

    fn qualified_cpp_name(&self, id: TypeId) -> String {
        self.arena
            .entry(id)
            .map(|e| e.qualified_cpp_name())
            .unwrap_or_default()
    }

    fn refs<'a>(&'a self, ids: &'a [TypeId]) -> impl Iterator<Item = TypeRef<'a>> + 'a {
        ids.iter().filter_map(|&id| self.arena.entry(id))
    }

    // ==========================================================================
    // Lookup
    // ==========================================================================

    /// Every entity registered under `name`, in registration order.
    pub fn find_types(&self, name: &str) -> Vec<TypeRef<'_>> {
        match self.entries.get(name) {
            Some(ids) => self.refs(ids).collect(),
            None => Vec::new(),
        }
    }

    /// The canonical entity for `name`.
    ///
    /// First entry under `name` that is not a primitive, or is a primitive
    /// flagged as the preferred target type.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn find_type(&self, name: &str) -> Option<TypeRef<'_>> {
        let ids = self.entries.get(name)?;
        self.refs(ids).find(|e| e.is_lookup_preferred())
    }

    /// First primitive under `name` that is the preferred target type.
    pub fn find_primitive_type(&self, name: &str) -> Option<TypeRef<'_>> {
        let ids = self.entries.get(name)?;
        self.refs(ids)
            .find(|e| e.as_primitive().is_some_and(|p| p.preferred_target_lang_type))
    }

    pub fn find_complex_type(&self, name: &str) -> Option<TypeRef<'_>> {
        self.find_type(name).filter(|e| e.is_complex())
    }

    pub fn find_object_type(&self, name: &str) -> Option<TypeRef<'_>> {
        self.find_type(name).filter(|e| e.is_object())
    }

    pub fn find_namespace_type(&self, name: &str) -> Option<TypeRef<'_>> {
        self.find_type(name).filter(|e| e.is_namespace())
    }

    /// Container lookup; template arguments in `name` are ignored.
    pub fn find_container_type(&self, name: &str) -> Option<TypeRef<'_>> {
        self.find_type(template_base_name(name))
            .filter(|e| e.is_container())
    }

    pub fn find_function_type(&self, name: &str) -> Option<TypeRef<'_>> {
        self.find_type(name).filter(|e| e.is_function())
    }

    /// Resolve a flags type.
    ///
    /// Tries, in order: the qualified-name registry, the flags index by exact
    /// original name, then the first indexed original name that ends with
    /// `name`. The last step lets callers omit leading scopes; when several
    /// flags share a suffix the earliest registered one wins. An empty name
    /// matches nothing.
    pub fn find_flags_type(&self, name: &str) -> Option<TypeRef<'_>> {
        if name.is_empty() {
            return None;
        }
        if let Some(entry) = self.find_type(name).filter(|e| e.is_flags()) {
            return Some(entry);
        }
        if let Some(&id) = self.flags_entries.get(name) {
            return self.arena.entry(id);
        }
        self.flags_entries
            .iter()
            .find(|(key, _)| key.ends_with(name))
            .and_then(|(_, &id)| self.arena.entry(id))
    }

    /// First primitive whose target name is `target_lang_name` and that is
    /// the preferred conversion.
    pub fn find_target_lang_primitive_type(&self, target_lang_name: &str) -> Option<TypeRef<'_>> {
        self.iter_registered().find(|e| {
            e.as_primitive().is_some_and(|p| p.preferred_conversion)
                && e.name() == target_lang_name
        })
    }

    pub fn find_template(&self, name: &str) -> Option<TypeRef<'_>> {
        self.templates
            .get(name)
            .and_then(|&id| self.arena.entry(id))
    }

    /// Extra includes of the complex type `class_name`, empty if there is none.
    pub fn extra_includes(&self, class_name: &str) -> &[String] {
        match self.find_complex_type(class_name) {
            Some(class) => match class.entry().as_complex() {
                Some(complex) => &complex.extra_includes,
                None => &[],
            },
            None => &[],
        }
    }

    // ==========================================================================
    // Iteration
    // ==========================================================================

    fn iter_registered(&self) -> impl Iterator<Item = TypeRef<'_>> {
        self.entries.values().flat_map(move |ids| self.refs(ids))
    }

    /// The full multimap: each qualified name with all its entities.
    pub fn all_entries(&self) -> impl Iterator<Item = (&str, Vec<TypeRef<'_>>)> {
        self.entries
            .iter()
            .map(move |(name, ids)| (name.as_str(), self.refs(ids).collect()))
    }

    /// Each qualified name with its canonical entity; names without one are skipped.
    pub fn entries(&self) -> Vec<(&str, TypeRef<'_>)> {
        self.entries
            .keys()
            .filter_map(|name| self.find_type(name).map(|e| (name.as_str(), e)))
            .collect()
    }

    /// All primitives, every alias included, in registry order.
    pub fn primitive_types(&self) -> Vec<TypeRef<'_>> {
        self.iter_registered().filter(|e| e.is_primitive()).collect()
    }

    /// All containers in registry order.
    pub fn container_types(&self) -> Vec<TypeRef<'_>> {
        self.iter_registered().filter(|e| e.is_container()).collect()
    }

    /// Snapshot of the flags index.
    pub fn flags_entries(&self) -> Vec<(&str, TypeRef<'_>)> {
        self.flags_entries
            .iter()
            .filter_map(|(name, &id)| self.arena.entry(id).map(|e| (name.as_str(), e)))
            .collect()
    }

    /// Number of distinct qualified names.
    pub fn type_count(&self) -> usize {
        self.entries.len()
    }

    // ==========================================================================
    // Rules
    // ==========================================================================

    pub fn rules(&self) -> &RuleStore {
        &self.rules
    }

    pub fn rules_mut(&mut self) -> &mut RuleStore {
        &mut self.rules
    }

    /// Class name that hosts functions declared at global scope.
    pub fn global_namespace_class_name(&self) -> &'static str {
        GLOBAL_NAMESPACE_CLASS_NAME
    }
}

impl Default for TypeDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TypeDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeDatabase")
            .field("entities", &self.arena.len())
            .field("names", &self.entries.len())
            .field("flags", &self.flags_entries.len())
            .field("templates", &self.templates.len())
            .field("imports", &self.required_target_imports)
            .finish()
    }
}

fn wrong_kind(entry: &TypeEntry, expected: &'static str) -> RegistrationError {
    RegistrationError::WrongKind {
        name: entry.cpp_name().to_string(),
        expected,
        found: entry.entry_kind().to_string(),
    }
}
