//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two entities with the same id are the same record, even if every other
/// field differs (e.g. a bill before and after an update).
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Whether `self` and `other` denote the same record.
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
