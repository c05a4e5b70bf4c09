//! Stack step definitions.

use cucumber::{given, then, when, World};
use gather_core::Collection;
use gather_stack::Stack;

use super::values;

/// Test context for stack scenarios.
#[derive(Debug, Default, World)]
pub struct StackWorld {
    stack: Stack<i32>,
    result: Option<i32>,
}

#[given("an empty stack")]
fn empty_stack(world: &mut StackWorld) {
    world.stack = Stack::new();
}

#[given(regex = r"^a stack with \[(.*)\] pushed$")]
fn stack_with(world: &mut StackWorld, captured: String) {
    for value in values(&captured) {
        world.stack.push(value);
    }
}

#[when(expr = "I push {int}")]
fn push(world: &mut StackWorld, value: i32) {
    world.stack.push(value);
}

#[when("I pop")]
fn pop(world: &mut StackWorld) {
    world.result = world.stack.pop();
}

#[when("I peek")]
fn peek(world: &mut StackWorld) {
    world.result = world.stack.peek();
}

#[when("I clear the stack")]
fn clear(world: &mut StackWorld) {
    world.stack.clear();
}

#[then(regex = r"^the stack values are \[(.*)\]$")]
fn stack_values(world: &mut StackWorld, captured: String) {
    assert_eq!(world.stack.values(), values(&captured));
}

#[then(expr = "the size is {int}")]
fn size_is(world: &mut StackWorld, size: usize) {
    assert_eq!(world.stack.size(), size);
}

#[then("the stack is empty")]
fn stack_empty(world: &mut StackWorld) {
    assert!(world.stack.is_empty());
}

#[then(expr = "the stack contains {int}")]
fn contains(world: &mut StackWorld, value: i32) {
    assert!(world.stack.contains(&value));
}

#[then(expr = "the stack does not contain {int}")]
fn not_contains(world: &mut StackWorld, value: i32) {
    assert!(!world.stack.contains(&value));
}

#[then(expr = "the result is {int}")]
fn result_is(world: &mut StackWorld, value: i32) {
    assert_eq!(world.result, Some(value));
}

#[then("there is no result")]
fn no_result(world: &mut StackWorld) {
    assert_eq!(world.result, None);
}

#[then(regex = r#"^it renders as "(.*)"$"#)]
fn renders_as(world: &mut StackWorld, expected: String) {
    assert_eq!(world.stack.to_string(), expected);
}
