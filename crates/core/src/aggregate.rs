//! Aggregate root trait for mutable domain containers.

/// Aggregate root marker + minimal interface.
///
/// An aggregate owns a consistency boundary: every change to the records it
/// holds goes through the aggregate's own operations.
pub trait AggregateRoot {
    /// Aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Monotonically increasing version of the aggregate's state.
    ///
    /// Incremented once per successful state change.
    fn version(&self) -> u64;
}
