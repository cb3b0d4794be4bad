//! Arena handles.
//!
//! A registered entity is addressed by its position in the registry arena.
//! Scope links between entities are stored as [`TypeId`]s, so an entity
//! refers to its enclosing scope without owning it.

use std::fmt;

/// Position of a registered entity in the arena.
///
/// The arena only grows, so an id stays valid for the lifetime of the
/// registry that issued it. Ordering follows registration order.
///
/// ```
/// use typesystem_core::TypeId;
///
/// let scope = TypeId::new(3);
/// assert_eq!(scope.as_usize(), 3);
/// assert_eq!(scope.to_string(), "type_3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(u32);

impl TypeId {
    #[inline]
    pub const fn new(slot: u32) -> Self {
        Self(slot)
    }

    /// Slot in the arena's entry vector.
    #[inline]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type_{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_is_preserved() {
        assert_eq!(TypeId::new(0).as_usize(), 0);
        assert_eq!(TypeId::new(u32::MAX).as_usize(), u32::MAX as usize);
    }

    #[test]
    fn later_registrations_sort_after_earlier_ones() {
        let mut ids = vec![TypeId::new(5), TypeId::new(1), TypeId::new(3)];
        ids.sort();
        assert_eq!(ids, [TypeId::new(1), TypeId::new(3), TypeId::new(5)]);
    }

    #[test]
    fn displays_as_slot_label() {
        assert_eq!(format!("{}", TypeId::new(7)), "type_7");
    }
}
