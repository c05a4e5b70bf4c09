//! Step definition modules for Cucumber feature tests.

pub mod array_list;
pub mod stack;

/// Parse the bracketed value list captured from a step.
pub fn values(captured: &str) -> Vec<i32> {
    gather_test_framework::parse_values(captured).expect("feature file lists integers")
}
