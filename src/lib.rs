//! Gather - generic collections
//!
//! A dynamic array list, a doubly-linked list, and a stack built on the
//! linked list, all conforming to one [`Collection`] contract.
//!
//! ```
//! use gather::prelude::*;
//!
//! let mut list = LinkedList::new();
//! list.add(2);
//! list.add_first(1);
//! assert_eq!(list.to_string(), "LinkedList([1 <-> 2])");
//!
//! let mut stack = Stack::new();
//! stack.push("a");
//! assert_eq!(stack.pop(), Some("a"));
//! ```

#![cfg_attr(not(test), no_std)]

pub use gather_core::{check_index, Collection, CollectionError, Element, Result};
pub use gather_list::{ArrayList, Deque, LinkedList, List};
pub use gather_stack::Stack;

/// Containers and the traits needed to call their operations.
pub mod prelude {
    pub use gather_core::{Collection, Element};
    pub use gather_list::{ArrayList, Deque, LinkedList, List};
    pub use gather_stack::Stack;
}
