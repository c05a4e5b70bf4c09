//! Contiguous list backed by a growable buffer.

use alloc::vec::Vec;
use core::fmt;
use core::mem;

use gather_core::{check_index, fmt_sequence, Collection, Element};
use tracing::trace;

use crate::traits::List;

/// Index-addressable list backed by a resizable contiguous buffer.
///
/// `get` and `set` are O(1); `add` is amortized O(1); `remove`,
/// `index_of` and `last_index_of` are O(n).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayList<T> {
    elements: Vec<T>,
}

impl<T> ArrayList<T> {
    /// Create a new empty list
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Create an empty list able to hold `capacity` elements before growing
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Iterate over the elements front to back
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> Collection<T> for ArrayList<T> {
    fn contains(&self, element: &T) -> bool {
        self.elements.iter().any(|e| e == element)
    }

    fn clear(&mut self) {
        trace!(size = self.elements.len(), "clearing array list");
        self.elements.clear();
    }

    fn size(&self) -> usize {
        self.elements.len()
    }

    fn values(&self) -> Vec<T> {
        self.elements.clone()
    }
}

impl<T: Element> List<T> for ArrayList<T> {
    fn add(&mut self, element: T) {
        self.elements.push(element);
    }

    fn remove(&mut self, element: &T) -> bool {
        match self.elements.iter().position(|e| e == element) {
            Some(position) => {
                self.elements.remove(position);
                true
            }
            None => false,
        }
    }

    fn set(&mut self, index: isize, element: T) -> Option<T> {
        let position = check_index(index, self.elements.len()).ok()?;
        Some(mem::replace(&mut self.elements[position], element))
    }

    fn get(&self, index: isize) -> Option<T> {
        let position = check_index(index, self.elements.len()).ok()?;
        self.elements.get(position).cloned()
    }

    fn index_of(&self, element: &T) -> Option<usize> {
        self.elements.iter().position(|e| e == element)
    }

    fn last_index_of(&self, element: &T) -> Option<usize> {
        self.elements.iter().rposition(|e| e == element)
    }
}

impl<T: fmt::Display> fmt::Display for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_sequence(f, "ArrayList", &self.elements, ", ")
    }
}

impl<T> From<Vec<T>> for ArrayList<T> {
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
