//! Element bound

/// Constraints for values stored in a collection.
///
/// `PartialEq` drives containment and search, which compare values
/// structurally rather than by identity. `Clone` lets snapshots and
/// peeking accessors hand out owned values instead of references into the
/// container.
pub trait Element: Clone + PartialEq {}

impl<T> Element for T where T: Clone + PartialEq {}
