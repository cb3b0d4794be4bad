//! Entity storage and scope-chain naming.
//!
//! [`TypeArena`] owns every [`TypeEntry`]. Entries point at their enclosing
//! scope by [`TypeId`], and a scope must already be in the arena when a
//! child is inserted, so every chain is finite and acyclic.
//!
//! Naming is computed on demand by walking the chain:
//!
//! | Function | Hidden ancestors | Separator | Rename |
//! |---|---|---|---|
//! | [`TypeRef::name`] | n/a | n/a | yes |
//! | [`TypeRef::qualified_cpp_name`] | included | `::` | no |
//! | [`TypeRef::target_lang_name`] | dropped | `.` | yes |
//! | [`TypeRef::qualified_target_lang_name`] | dropped | `.` | yes, plus package |

use std::fmt;
use std::ops::Deref;

use typesystem_core::{
    CPP_SCOPE_SEPARATOR, RegistrationError, TARGET_SCOPE_SEPARATOR, TypeEntry, TypeId,
};

/// Owner of all registered entities, indexed by [`TypeId`].
#[derive(Debug, Default, Clone)]
pub struct TypeArena {
    entries: Vec<TypeEntry>,
}

impl TypeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `entry` and return its id.
    ///
    /// Fails if the entry's scope is not already in the arena.
    pub fn insert(&mut self, entry: TypeEntry) -> Result<TypeId, RegistrationError> {
        if let Some(scope) = entry.scope()
            && scope.as_usize() >= self.entries.len()
        {
            return Err(RegistrationError::UnknownScope {
                name: entry.cpp_name().to_string(),
                scope,
            });
        }

        let id = TypeId::new(self.entries.len() as u32);
        self.entries.push(entry);
        Ok(id)
    }

    pub fn get(&self, id: TypeId) -> Option<&TypeEntry> {
        self.entries.get(id.as_usize())
    }

    /// Mutable access to the configurable fields of an entry.
    ///
    /// Name and scope are private to [`TypeEntry`] and cannot change here.
    pub fn get_mut(&mut self, id: TypeId) -> Option<&mut TypeEntry> {
        self.entries.get_mut(id.as_usize())
    }

    /// Get a naming handle for `id`.
    pub fn entry(&self, id: TypeId) -> Option<TypeRef<'_>> {
        self.get(id).map(|entry| TypeRef {
            arena: self,
            id,
            entry,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = TypeRef<'_>> {
        self.entries
            .iter()
            .enumerate()
            .map(move |(index, entry)| TypeRef {
                arena: self,
                id: TypeId::new(index as u32),
                entry,
            })
    }

    /// Walk from `id` outwards to the root of its scope chain, `id` first.
    pub fn scope_chain(&self, id: TypeId) -> ScopeChain<'_> {
        ScopeChain {
            arena: self,
            next: self.get(id),
        }
    }
}

/// Iterator over an entry and its enclosing scopes, innermost first.
pub struct ScopeChain<'a> {
    arena: &'a TypeArena,
    next: Option<&'a TypeEntry>,
}

impl<'a> Iterator for ScopeChain<'a> {
    type Item = &'a TypeEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.scope().and_then(|scope| self.arena.get(scope));
        Some(current)
    }
}

/// A registered entry together with the arena it lives in.
///
/// Derefs to [`TypeEntry`] and adds the names that depend on the scope chain.
#[derive(Clone, Copy)]
pub struct TypeRef<'a> {
    arena: &'a TypeArena,
    id: TypeId,
    entry: &'a TypeEntry,
}

impl<'a> TypeRef<'a> {
    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn entry(&self) -> &'a TypeEntry {
        self.entry
    }

    /// The enclosing scope, if any.
    pub fn parent(&self) -> Option<TypeRef<'a>> {
        self.entry.scope().and_then(|scope| self.arena.entry(scope))
    }

    /// Scope-local target identifier; ignores `generate`.
    pub fn name(&self) -> &'a str {
        self.entry.name()
    }

    /// C++ name qualified with every enclosing scope, hidden ones included.
    pub fn qualified_cpp_name(&self) -> String {
        let mut segments: Vec<&str> = self
            .arena
            .scope_chain(self.id)
            .map(TypeEntry::cpp_name)
            .collect();
        segments.reverse();
        segments.join(CPP_SCOPE_SEPARATOR)
    }

    /// Target name without package.
    ///
    /// Empty for a hidden entry. Otherwise the entry's name, prefixed by the
    /// parent's target name when that is not empty. A hidden parent therefore
    /// cuts the chain: neither it nor anything above it contributes a
    /// segment.
    pub fn target_lang_name(&self) -> String {
        if !self.entry.generate_code() {
            return String::new();
        }

        let mut segments: Vec<&str> = self
            .arena
            .scope_chain(self.id)
            .take_while(|entry| entry.generate_code())
            .map(TypeEntry::name)
            .collect();
        segments.reverse();
        segments.join(TARGET_SCOPE_SEPARATOR)
    }

    /// Package of the chain: the closest entry, self included, that sets one.
    pub fn target_lang_package(&self) -> Option<&'a str> {
        self.arena
            .scope_chain(self.id)
            .find_map(|entry| entry.package.as_deref())
    }

    /// Target name prefixed with the package; empty for hidden entries.
    pub fn qualified_target_lang_name(&self) -> String {
        let name = self.target_lang_name();
        if name.is_empty() {
            return name;
        }
        match self.target_lang_package() {
            Some(package) if !package.is_empty() => {
                format!("{package}{TARGET_SCOPE_SEPARATOR}{name}")
            }
            _ => name,
        }
    }
}

impl Deref for TypeRef<'_> {
    type Target = TypeEntry;

    fn deref(&self) -> &Self::Target {
        self.entry
    }
}

impl PartialEq for TypeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.arena, other.arena) && self.id == other.id
    }
}

impl Eq for TypeRef<'_> {}

impl fmt::Debug for TypeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRef")
            .field("id", &self.id)
            .field("kind", &self.entry.entry_kind())
            .field("name", &self.qualified_cpp_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insert(arena: &mut TypeArena, entry: TypeEntry) -> TypeId {
        arena.insert(entry).unwrap()
    }

    #[test]
    fn insert_assigns_sequential_ids() {
        let mut arena = TypeArena::new();
        let a = insert(&mut arena, TypeEntry::namespace("A"));
        let b = insert(&mut arena, TypeEntry::value_type("B").in_scope(a));
        assert_eq!(a, TypeId::new(0));
        assert_eq!(b, TypeId::new(1));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn insert_rejects_unknown_scope() {
        let mut arena = TypeArena::new();
        let result = arena.insert(TypeEntry::value_type("B").in_scope(TypeId::new(5)));
        assert_eq!(
            result,
            Err(RegistrationError::UnknownScope {
                name: "B".into(),
                scope: TypeId::new(5),
            })
        );
        assert!(arena.is_empty());
    }

    #[test]
    fn scope_chain_walks_outwards() {
        let mut arena = TypeArena::new();
        let a = insert(&mut arena, TypeEntry::value_type("A"));
        let b = insert(&mut arena, TypeEntry::value_type("B").in_scope(a));
        let c = insert(&mut arena, TypeEntry::value_type("C").in_scope(b));

        let names: Vec<_> = arena.scope_chain(c).map(TypeEntry::cpp_name).collect();
        assert_eq!(names, ["C", "B", "A"]);
    }

    #[test]
    fn root_entry_names() {
        let mut arena = TypeArena::new();
        let id = insert(&mut arena, TypeEntry::value_type("ClassName").with_package("Foo"));
        let e = arena.entry(id).unwrap();

        assert_eq!(e.name(), "ClassName");
        assert_eq!(e.qualified_cpp_name(), "ClassName");
        assert_eq!(e.target_lang_name(), "ClassName");
        assert_eq!(e.qualified_target_lang_name(), "Foo.ClassName");
    }

    #[test]
    fn no_package_means_no_prefix() {
        let mut arena = TypeArena::new();
        let id = insert(&mut arena, TypeEntry::value_type("ClassName"));
        let e = arena.entry(id).unwrap();
        assert_eq!(e.qualified_target_lang_name(), "ClassName");

        let id = insert(&mut arena, TypeEntry::value_type("Other").with_package(""));
        assert_eq!(arena.entry(id).unwrap().qualified_target_lang_name(), "Other");
    }

    #[test]
    fn rename_applies_to_target_names_only() {
        let mut arena = TypeArena::new();
        let nsp = insert(
            &mut arena,
            TypeEntry::namespace("Nsp").with_target_lang_name("Space").with_package("Foo"),
        );
        let cls = insert(
            &mut arena,
            TypeEntry::object_type("QObject").with_target_lang_name("Object").in_scope(nsp),
        );
        let e = arena.entry(cls).unwrap();

        assert_eq!(e.name(), "Object");
        assert_eq!(e.qualified_cpp_name(), "Nsp::QObject");
        assert_eq!(e.target_lang_name(), "Space.Object");
        assert_eq!(e.qualified_target_lang_name(), "Foo.Space.Object");
    }

    #[test]
    fn hidden_parent_cuts_chain() {
        let mut arena = TypeArena::new();
        let outer = insert(&mut arena, TypeEntry::namespace("Outer").with_package("Foo"));
        let hidden = insert(
            &mut arena,
            TypeEntry::namespace("Detail").with_generate(false).in_scope(outer),
        );
        let inner = insert(&mut arena, TypeEntry::value_type("Impl").in_scope(hidden));
        let e = arena.entry(inner).unwrap();

        assert_eq!(e.qualified_cpp_name(), "Outer::Detail::Impl");
        assert_eq!(e.target_lang_name(), "Impl");
        assert_eq!(e.qualified_target_lang_name(), "Foo.Impl");
    }

    #[test]
    fn parent_handle() {
        let mut arena = TypeArena::new();
        let a = insert(&mut arena, TypeEntry::value_type("A"));
        let b = insert(&mut arena, TypeEntry::value_type("B").in_scope(a));

        let b = arena.entry(b).unwrap();
        assert_eq!(b.parent().map(|p| p.id()), Some(a));
        assert!(b.parent().unwrap().parent().is_none());
    }

    #[test]
    fn get_mut_changes_configuration() {
        let mut arena = TypeArena::new();
        let id = insert(&mut arena, TypeEntry::value_type("A"));
        arena.get_mut(id).unwrap().generate = false;
        assert_eq!(arena.entry(id).unwrap().target_lang_name(), "");
    }

    #[test]
    fn iter_in_insertion_order() {
        let mut arena = TypeArena::new();
        insert(&mut arena, TypeEntry::void());
        insert(&mut arena, TypeEntry::varargs());
        let names: Vec<_> = arena.iter().map(|e| e.cpp_name().to_string()).collect();
        assert_eq!(names, ["void", "..."]);
    }
}
