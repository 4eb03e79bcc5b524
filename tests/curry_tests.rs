//! Integration tests for the currying engine and the `curry!` macro.

#![cfg(feature = "compose")]

use curlew::FunctionalError;
use curlew::compose::{Applied, Curried, Excess, curry};
use rstest::rstest;

fn volume(sides: &[i64]) -> i64 {
    sides[0] * sides[1] * sides[2]
}

// =============================================================================
// Runtime currying
// =============================================================================

#[rstest]
#[case(vec![vec![2, 3, 4]])]
#[case(vec![vec![2], vec![3], vec![4]])]
#[case(vec![vec![2, 3], vec![4]])]
#[case(vec![vec![2], vec![3, 4]])]
fn test_every_grouping_agrees(#[case] groups: Vec<Vec<i64>>) {
    let curried = curry(volume, 3).unwrap();
    let mut applied = Applied::Partial(curried);
    for group in groups {
        applied = applied.call(group);
    }
    assert_eq!(applied.into_complete(), Some(24));
}

#[test]
fn test_partials_are_independent() {
    let curried = curry(volume, 3).unwrap();
    let width_two = curried.call([2]).into_partial().unwrap();

    let first = width_two.call([3]).into_partial().unwrap();
    let second = width_two.call([5]).into_partial().unwrap();

    assert_eq!(first.call([1]).into_complete(), Some(6));
    assert_eq!(second.call([1]).into_complete(), Some(10));
    assert_eq!(width_two.bound(), &[2]);
}

#[test]
fn test_empty_call_returns_the_same_partial() {
    let curried = curry(volume, 3).unwrap();
    let partial = curried.call([2]).into_partial().unwrap();
    let again = partial.call(Vec::new()).into_partial().unwrap();

    assert!(again.same_function(&partial));
    assert_eq!(again.bound(), partial.bound());
    assert_eq!(again.remaining(), 2);
}

#[test]
fn test_excess_arguments_are_dropped() {
    let count = curry(|numbers: &[i64]| numbers.len(), 2).unwrap();
    assert_eq!(count.call([1, 2, 3, 4]).into_complete(), Some(2));
    assert_eq!(count.excess(), Excess::Drop);
}

#[test]
fn test_variadic_forwards_excess() {
    let total = Curried::variadic(2, |numbers: &[i64]| numbers.iter().sum::<i64>()).unwrap();
    assert_eq!(total.call([1]).into_complete(), None);
    assert_eq!(total.call([1, 2, 3, 4]).into_complete(), Some(10));
}

#[rstest]
#[case(None)]
#[case(Some(0))]
fn test_arity_must_be_positive(#[case] arity: Option<usize>) {
    let result = curry(|numbers: &[i64]| numbers.len(), arity);
    assert_eq!(result.err(), Some(FunctionalError::ArityUndetermined));
}

// =============================================================================
// curry! macro
// =============================================================================

mod curry_macro_tests {
    use curlew::curry;

    fn join(first: String, second: String) -> String {
        format!("{first}{second}")
    }

    #[test]
    fn test_closure_arity_is_inferred() {
        let subtract = curry!(|minuend: i64, subtrahend: i64| minuend - subtrahend);
        assert_eq!(subtract.arity(), 2);

        let from_ten = subtract.call([10]).into_partial().unwrap();
        assert_eq!(from_ten.call([3]).into_complete(), Some(7));
    }

    #[test]
    fn test_function_path_with_arity() {
        let joined = curry!(join, 2);
        let hello = joined.apply("Hello, ".to_string()).into_partial().unwrap();
        assert_eq!(
            hello.apply("World".to_string()).into_complete(),
            Some("Hello, World".to_string())
        );
    }

    #[test]
    fn test_single_parameter_closure_runs_immediately() {
        let negate = curry!(|value: i32| -value);
        assert_eq!(negate.apply(4).into_complete(), Some(-4));
    }
}
