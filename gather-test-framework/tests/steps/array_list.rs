//! ArrayList step definitions.

use cucumber::{given, then, when, World};
use gather_core::Collection;
use gather_list::{ArrayList, List};

use super::values;

/// Test context for array list scenarios.
#[derive(Debug, Default, World)]
pub struct ArrayListWorld {
    list: ArrayList<i32>,
    result: Option<i32>,
    position: Option<usize>,
    removed: bool,
}

// --- Given steps ---

#[given("an empty array list")]
fn empty_list(world: &mut ArrayListWorld) {
    world.list = ArrayList::new();
}

#[given(regex = r"^an array list containing \[(.*)\]$")]
fn list_containing(world: &mut ArrayListWorld, captured: String) {
    world.list = values(&captured).into_iter().collect();
}

// --- When steps ---

#[when(expr = "I add {int}")]
fn add(world: &mut ArrayListWorld, value: i32) {
    world.list.add(value);
}

#[when(expr = "I remove {int}")]
fn remove(world: &mut ArrayListWorld, value: i32) {
    world.removed = world.list.remove(&value);
}

#[when(expr = "I set index {int} to {int}")]
fn set(world: &mut ArrayListWorld, index: isize, value: i32) {
    world.result = world.list.set(index, value);
}

#[when(expr = "I get index {int}")]
fn get(world: &mut ArrayListWorld, index: isize) {
    world.result = world.list.get(index);
}

#[when(expr = "I look up the first index of {int}")]
fn first_index(world: &mut ArrayListWorld, value: i32) {
    world.position = world.list.index_of(&value);
}

#[when(expr = "I look up the last index of {int}")]
fn last_index(world: &mut ArrayListWorld, value: i32) {
    world.position = world.list.last_index_of(&value);
}

#[when("I clear the list")]
fn clear(world: &mut ArrayListWorld) {
    world.list.clear();
}

// --- Then steps ---

#[then(regex = r"^the list values are \[(.*)\]$")]
fn list_values(world: &mut ArrayListWorld, captured: String) {
    assert_eq!(world.list.values(), values(&captured));
}

#[then(expr = "the size is {int}")]
fn size_is(world: &mut ArrayListWorld, size: usize) {
    assert_eq!(world.list.size(), size);
    assert_eq!(world.list.is_empty(), size == 0);
}

#[then("the list is empty")]
fn list_empty(world: &mut ArrayListWorld) {
    assert!(world.list.is_empty());
}

#[then(expr = "the list does not contain {int}")]
fn not_contains(world: &mut ArrayListWorld, value: i32) {
    assert!(!world.list.contains(&value));
}

#[then(expr = "the result is {int}")]
fn result_is(world: &mut ArrayListWorld, value: i32) {
    assert_eq!(world.result, Some(value));
}

#[then("there is no result")]
fn no_result(world: &mut ArrayListWorld) {
    assert_eq!(world.result, None);
}

#[then(expr = "the position is {int}")]
fn position_is(world: &mut ArrayListWorld, position: usize) {
    assert_eq!(world.position, Some(position));
}

#[then("no position is found")]
fn no_position(world: &mut ArrayListWorld) {
    assert_eq!(world.position, None);
}

#[then("the removal succeeded")]
fn removal_succeeded(world: &mut ArrayListWorld) {
    assert!(world.removed);
}

#[then("the removal failed")]
fn removal_failed(world: &mut ArrayListWorld) {
    assert!(!world.removed);
}

#[then(regex = r#"^it renders as "(.*)"$"#)]
fn renders_as(world: &mut ArrayListWorld, expected: String) {
    assert_eq!(world.list.to_string(), expected);
}
