//! LIFO stack
//!
//! [`Stack`] holds no data of its own: every operation forwards to an
//! internally owned [`gather_list::LinkedList`].

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod stack;

pub use stack::Stack;

static_assertions::assert_impl_all!(Stack<u32>: Send, Sync, Clone, Default);
