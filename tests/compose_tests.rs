//! Integration tests for static and runtime composition.

#![cfg(feature = "compose")]

use curlew::FunctionalError;
use curlew::compose::{Unary, compose, constant, flip, identity, pipe, unary};

fn add_one(value: i32) -> i32 {
    value + 1
}

fn double(value: i32) -> i32 {
    value * 2
}

fn stringify(value: i32) -> String {
    value.to_string()
}

// =============================================================================
// compose! / pipe!
// =============================================================================

#[test]
fn test_compose_applies_right_to_left() {
    assert_eq!(compose!(add_one, double)(5), 11);
    assert_eq!(compose!(stringify, add_one, double)(5), "11");
}

#[test]
fn test_pipe_applies_left_to_right() {
    assert_eq!(pipe!(add_one, double)(5), 12);
    assert_eq!(pipe!(add_one, double, stringify)(5), "12");
}

#[test]
fn test_single_function_is_unchanged() {
    assert_eq!(compose!(double)(4), 8);
    assert_eq!(pipe!(double)(4), 8);
}

#[test]
fn test_composition_with_helpers() {
    let always_seven = compose!(constant::<i32, i32>(7), double);
    assert_eq!(always_seven(100), 7);
    assert_eq!(compose!(identity, double)(3), 6);

    let divide = |numerator: i32, denominator: i32| numerator / denominator;
    assert_eq!(flip(divide)(2, 10), 5);
}

// =============================================================================
// Runtime compose / pipe
// =============================================================================

#[test]
fn test_runtime_compose_and_pipe() {
    let functions = [unary(add_one), unary(double)];
    let composed = compose(functions.clone()).unwrap();
    let piped = pipe(functions).unwrap();

    assert_eq!(composed.call(5), 11);
    assert_eq!(piped.call(5), 12);
    assert_eq!(composed.len(), 2);
}

#[test]
fn test_runtime_composition_rejects_empty_chain() {
    assert!(matches!(
        compose(Vec::<Unary<i32>>::new()),
        Err(FunctionalError::EmptyComposition { combinator: "compose" })
    ));
    assert!(matches!(
        pipe(Vec::<Unary<i32>>::new()),
        Err(FunctionalError::EmptyComposition { combinator: "pipe" })
    ));
}

#[test]
fn test_composed_converts_into_closure() {
    let composed = pipe([unary(add_one), unary(add_one)]).unwrap().into_fn();
    let results: Vec<i32> = [1, 2, 3].into_iter().map(composed).collect();
    assert_eq!(results, vec![3, 4, 5]);
}
