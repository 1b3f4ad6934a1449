//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two snapshots of the same entity may differ in every attribute except the id.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Whether `other` is a snapshot of the same entity.
    fn same_identity_as(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        self.id() == other.id()
    }
}
