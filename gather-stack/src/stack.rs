//! Stack built by composition over a linked list.

use alloc::vec::Vec;
use core::fmt;

use gather_core::{fmt_sequence, Collection, Element};
use gather_list::linked_list::{IntoIter, Iter};
use gather_list::{Deque, LinkedList, List};

/// A last-in, first-out stack.
///
/// The top of the stack is the tail of the inner list, so `push`, `pop` and
/// `peek` are all O(1). [`Collection::values`] reports push order: the
/// oldest element comes first.
#[derive(Clone, PartialEq, Eq)]
pub struct Stack<T> {
    list: LinkedList<T>,
}

impl<T> Stack<T> {
    /// Create a new empty stack
    pub const fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }

    /// Iterate from the bottom (oldest) to the top (newest)
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T: Element> Stack<T> {
    /// Push an element on top of the stack.
    pub fn push(&mut self, element: T) {
        self.list.add(element);
    }

    /// Remove and return the top element.
    ///
    /// Popping an empty stack is not an error; it yields `None`.
    pub fn pop(&mut self) -> Option<T> {
        self.list.remove_last()
    }

    /// Return a copy of the top element without removing it.
    pub fn peek(&self) -> Option<T> {
        self.list.get_last()
    }
}

impl<T: Element> Collection<T> for Stack<T> {
    fn contains(&self, element: &T) -> bool {
        self.list.contains(element)
    }

    fn clear(&mut self) {
        self.list.clear();
    }

    fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    fn size(&self) -> usize {
        self.list.size()
    }

    fn values(&self) -> Vec<T> {
        self.list.values()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Stack").field(&self.list).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_sequence(f, "Stack", self.list.iter(), ", ")
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            list: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        self.list.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.list.iter()
    }
}
