//! Test framework for the gather collections
//!
//! This crate provides std-side helpers shared by the Gherkin acceptance
//! suite in `tests/`. Unlike the collection crates, it runs with std.

pub mod helpers;

pub use helpers::{init_tracing, parse_values};
