//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Unlike value objects, entities are compared by identifier only; two snapshots of the
/// same entity with different attribute values are still the same entity.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Identity comparison.
    fn same_identity_as(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        self.id() == other.id()
    }
}
