//! The collection capability

use alloc::vec::Vec;

/// A finite container of elements of one type.
///
/// Every container in this workspace implements this trait. Containers also
/// implement [`core::fmt::Display`] when `T` does, rendering themselves as
/// `TypeName([...])`.
///
/// None of the implementations synchronize internally. Mutation goes
/// through `&mut self`, so sharing a container across threads requires an
/// external lock.
pub trait Collection<T> {
    /// Returns true if some stored element is equal to `element`.
    ///
    /// There is no lookup index; this is a linear scan.
    fn contains(&self, element: &T) -> bool;

    /// Removes all elements. Clearing an empty collection is a no-op.
    fn clear(&mut self);

    /// Returns true if the collection holds no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns the number of elements in the collection.
    fn size(&self) -> usize;

    /// Returns an ordered snapshot of the elements.
    ///
    /// The snapshot is a fresh vector (empty, never absent, when the
    /// collection is empty) and does not alias the collection's storage.
    fn values(&self) -> Vec<T>;
}
