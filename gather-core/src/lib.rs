//! Core collection contract
//!
//! This crate provides the capability shared by every container in the
//! workspace: the [`Element`] bound, the [`Collection`] trait, the bounds
//! check used by index-addressed lists, and the error type it reports.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod collection;
pub mod display;
pub mod element;
pub mod error;
pub mod index;

pub use collection::Collection;
pub use display::fmt_sequence;
pub use element::Element;
pub use error::{CollectionError, Result};
pub use index::check_index;
