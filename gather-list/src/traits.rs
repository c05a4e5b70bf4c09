//! List capabilities layered on top of [`Collection`].

use gather_core::{Collection, CollectionError, Element, Result};

/// An ordered, index-addressable collection.
///
/// Indices are signed so that negative positions are representable inputs;
/// every position outside `0..size()` yields `None` rather than panicking.
pub trait List<T: Element>: Collection<T> {
    /// Appends `element` to the end of the list.
    fn add(&mut self, element: T);

    /// Removes the first element equal to `element`.
    ///
    /// Returns true if an element was removed.
    fn remove(&mut self, element: &T) -> bool;

    /// Replaces the element at `index`, returning the value it overwrote.
    ///
    /// Returns `None` and leaves the list untouched when `index` is out of
    /// range.
    fn set(&mut self, index: isize, element: T) -> Option<T>;

    /// Returns a copy of the element at `index`, or `None` when out of range.
    fn get(&self, index: isize) -> Option<T>;

    /// Returns the lowest position holding an element equal to `element`.
    fn index_of(&self, element: &T) -> Option<usize>;

    /// Returns the highest position holding an element equal to `element`.
    fn last_index_of(&self, element: &T) -> Option<usize>;

    /// Like [`List::get`], reporting a bad index as an error.
    fn try_get(&self, index: isize) -> Result<T> {
        self.get(index)
            .ok_or(CollectionError::IndexOutOfRange { index, size: self.size() })
    }

    /// Like [`List::set`], reporting a bad index as an error.
    fn try_set(&mut self, index: isize, element: T) -> Result<T> {
        let size = self.size();
        self.set(index, element)
            .ok_or(CollectionError::IndexOutOfRange { index, size })
    }
}

/// A list with constant-time access to both ends.
pub trait Deque<T: Element>: List<T> {
    /// Inserts `element` at the head. O(1).
    fn add_first(&mut self, element: T);

    /// Appends `element` at the tail, same as [`List::add`]. O(1).
    fn add_last(&mut self, element: T);

    /// Removes and returns the head element. O(1).
    fn remove_first(&mut self) -> Option<T>;

    /// Removes and returns the tail element. O(1).
    fn remove_last(&mut self) -> Option<T>;

    /// Returns a copy of the head element. O(1).
    fn get_first(&self) -> Option<T>;

    /// Returns a copy of the tail element. O(1).
    fn get_last(&self) -> Option<T>;

    /// Reverses the list in place; the head becomes the tail and vice versa.
    ///
    /// O(n) time, O(1) extra space.
    fn reverse(&mut self);
}
