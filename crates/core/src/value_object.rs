//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one. Interned value objects may additionally share storage, but
/// callers must only rely on `PartialEq`.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Label(String);
///
/// impl ValueObject for Label {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
