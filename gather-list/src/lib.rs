//! Index-addressable lists
//!
//! This crate provides two [`List`] implementations: [`ArrayList`], backed
//! by a contiguous growable buffer, and [`LinkedList`], a doubly-linked
//! list that additionally implements the head/tail operations of
//! [`Deque`].

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod array_list;
pub mod linked_list;
mod node;
pub mod traits;

pub use array_list::ArrayList;
pub use linked_list::LinkedList;
pub use traits::{Deque, List};

// Lists are exactly as thread-safe as their elements; nothing is shared
// between instances.
static_assertions::assert_impl_all!(ArrayList<u32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(LinkedList<u32>: Send, Sync, Clone, Default);
static_assertions::assert_not_impl_any!(LinkedList<alloc::rc::Rc<u32>>: Send, Sync);
static_assertions::assert_not_impl_any!(LinkedList<core::cell::Cell<u32>>: Sync);
static_assertions::assert_impl_all!(linked_list::Iter<'static, u32>: Send, Sync);
static_assertions::assert_not_impl_any!(linked_list::Iter<'static, core::cell::Cell<u32>>: Send, Sync);
