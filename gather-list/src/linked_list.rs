//! Doubly-linked list implementation
//!
//! Nodes are individually heap-allocated and linked in both directions.
//! The list owns every node exclusively; only element values (or shared
//! borrows through [`Iter`]) leave the container.
//!
//! Invariants upheld after every public call:
//! - `head` is `None` iff `tail` is `None` iff `size == 0`
//! - `head.prev` and `tail.next` are `None`
//! - for every node `n`, `n.next.prev == n` and `n.prev.next == n`
//! - `size` equals the number of nodes reachable from `head`

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ptr::NonNull;

use gather_core::{check_index, fmt_sequence, Collection, Element};
use tracing::trace;

use crate::node::{Link, Node};
use crate::traits::{Deque, List};

/// Doubly-linked list with O(1) insertion and removal at both ends.
pub struct LinkedList<T> {
    head: Link<T>,
    tail: Link<T>,
    size: usize,
    marker: PhantomData<Box<Node<T>>>,
}

// Safety: the list owns its nodes exclusively and hands out `&T` only
// through `&self`, so it is as thread-safe as `T` itself.
unsafe impl<T: Send> Send for LinkedList<T> {}
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T> LinkedList<T> {
    /// Create a new empty list
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            size: 0,
            marker: PhantomData,
        }
    }

    /// Iterate over the elements from head to tail
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            head: self.head,
            tail: self.tail,
            remaining: self.size,
            marker: PhantomData,
        }
    }

    /// Link a detached node after the tail
    fn push_back_node(&mut self, node: NonNull<Node<T>>) {
        unsafe {
            (*node.as_ptr()).prev = self.tail;
            (*node.as_ptr()).next = None;
            match self.tail {
                Some(tail) => (*tail.as_ptr()).next = Some(node),
                None => self.head = Some(node),
            }
        }
        self.tail = Some(node);
        self.size += 1;
    }

    /// Link a detached node before the head
    fn push_front_node(&mut self, node: NonNull<Node<T>>) {
        unsafe {
            (*node.as_ptr()).next = self.head;
            (*node.as_ptr()).prev = None;
            match self.head {
                Some(head) => (*head.as_ptr()).prev = Some(node),
                None => self.tail = Some(node),
            }
        }
        self.head = Some(node);
        self.size += 1;
    }

    fn pop_front_node(&mut self) -> Link<T> {
        let node = self.head?;
        unsafe { self.unlink_node(node) };
        Some(node)
    }

    fn pop_back_node(&mut self) -> Link<T> {
        let node = self.tail?;
        unsafe { self.unlink_node(node) };
        Some(node)
    }

    /// Remove `node` from the chain, re-pointing its neighbours and the
    /// endpoints it occupied.
    ///
    /// # Safety
    /// `node` must be linked into this list.
    unsafe fn unlink_node(&mut self, node: NonNull<Node<T>>) {
        let node = &mut *node.as_ptr();
        match node.prev {
            Some(prev) => (*prev.as_ptr()).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => (*next.as_ptr()).prev = node.prev,
            None => self.tail = node.prev,
        }
        node.prev = None;
        node.next = None;
        self.size -= 1;
    }

    /// Walk `position` steps from the head
    fn node_at(&self, position: usize) -> Link<T> {
        let mut current = self.head;
        for _ in 0..position {
            current = current.and_then(|node| unsafe { (*node.as_ptr()).next });
        }
        current
    }

    /// Release every node
    fn release_all(&mut self) {
        while let Some(node) = self.pop_front_node() {
            drop(unsafe { Node::free(node) });
        }
    }
}

impl<T: Element> Collection<T> for LinkedList<T> {
    fn contains(&self, element: &T) -> bool {
        self.iter().any(|e| e == element)
    }

    fn clear(&mut self) {
        trace!(size = self.size, "clearing linked list");
        self.release_all();
    }

    fn size(&self) -> usize {
        self.size
    }

    fn values(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Element> List<T> for LinkedList<T> {
    fn add(&mut self, element: T) {
        self.push_back_node(Node::alloc(element));
    }

    fn remove(&mut self, element: &T) -> bool {
        let mut current = self.head;
        while let Some(node) = current {
            unsafe {
                if (*node.as_ptr()).value == *element {
                    self.unlink_node(node);
                    drop(Node::free(node));
                    return true;
                }
                current = (*node.as_ptr()).next;
            }
        }
        false
    }

    fn set(&mut self, index: isize, element: T) -> Option<T> {
        let position = check_index(index, self.size).ok()?;
        let node = self.node_at(position)?;
        Some(mem::replace(unsafe { &mut (*node.as_ptr()).value }, element))
    }

    fn get(&self, index: isize) -> Option<T> {
        let position = check_index(index, self.size).ok()?;
        let node = self.node_at(position)?;
        Some(unsafe { (*node.as_ptr()).value.clone() })
    }

    fn index_of(&self, element: &T) -> Option<usize> {
        self.iter().position(|e| e == element)
    }

    fn last_index_of(&self, element: &T) -> Option<usize> {
        let mut position = self.size;
        let mut current = self.tail;
        while let Some(node) = current {
            position -= 1;
            unsafe {
                if (*node.as_ptr()).value == *element {
                    return Some(position);
                }
                current = (*node.as_ptr()).prev;
            }
        }
        None
    }
}

impl<T: Element> Deque<T> for LinkedList<T> {
    fn add_first(&mut self, element: T) {
        self.push_front_node(Node::alloc(element));
    }

    fn add_last(&mut self, element: T) {
        self.add(element);
    }

    fn remove_first(&mut self) -> Option<T> {
        self.pop_front_node().map(|node| unsafe { Node::free(node) })
    }

    fn remove_last(&mut self) -> Option<T> {
        self.pop_back_node().map(|node| unsafe { Node::free(node) })
    }

    fn get_first(&self) -> Option<T> {
        self.head.map(|node| unsafe { (*node.as_ptr()).value.clone() })
    }

    fn get_last(&self) -> Option<T> {
        self.tail.map(|node| unsafe { (*node.as_ptr()).value.clone() })
    }

    fn reverse(&mut self) {
        let mut current = self.head;
        while let Some(node) = current {
            unsafe {
                let node = &mut *node.as_ptr();
                mem::swap(&mut node.prev, &mut node.next);
                // The old `next` now sits in `prev`.
                current = node.prev;
            }
        }
        mem::swap(&mut self.head, &mut self.tail);
        trace!(size = self.size, "reversed linked list");
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.release_all();
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_sequence(f, "LinkedList", self.iter(), " <-> ")
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push_back_node(Node::alloc(element));
        }
    }
}

/// Borrowing iterator over a [`LinkedList`].
///
/// Walks `next` links from the front and `prev` links from the back.
pub struct Iter<'a, T> {
    head: Link<T>,
    tail: Link<T>,
    remaining: usize,
    marker: PhantomData<&'a Node<T>>,
}

// Safety: the iterator only yields `&T` from a list borrowed for `'a`, so it
// behaves like `&LinkedList<T>`, which is `Send` and `Sync` when `T: Sync`.
unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        self.head.map(|node| unsafe {
            let node = &*node.as_ptr();
            self.remaining -= 1;
            self.head = node.next;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        self.tail.map(|node| unsafe {
            let node = &*node.as_ptr();
            self.remaining -= 1;
            self.tail = node.prev;
            &node.value
        })
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Owning iterator over a [`LinkedList`].
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list
            .pop_front_node()
            .map(|node| unsafe { Node::free(node) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.size, Some(self.list.size))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list
            .pop_back_node()
            .map(|node| unsafe { Node::free(node) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}
