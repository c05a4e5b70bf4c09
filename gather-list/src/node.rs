//! Heap nodes for [`crate::LinkedList`].

use alloc::boxed::Box;
use core::ptr::NonNull;

pub(crate) type Link<T> = Option<NonNull<Node<T>>>;

/// A value with links to its neighbours.
///
/// Nodes are owned exclusively by one list; `prev` is a back-pointer within
/// that ownership, never an external alias.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) prev: Link<T>,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    /// Allocate a detached node.
    pub(crate) fn alloc(value: T) -> NonNull<Node<T>> {
        let node = Box::new(Node {
            value,
            prev: None,
            next: None,
        });
        NonNull::from(Box::leak(node))
    }

    /// Release a node and return its value
    ///
    /// # Safety
    /// `node` must come from [`Node::alloc`], must already be unlinked, and
    /// must not be used afterwards.
    pub(crate) unsafe fn free(node: NonNull<Node<T>>) -> T {
        let node = *Box::from_raw(node.as_ptr());
        node.value
    }
}
