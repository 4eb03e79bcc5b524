//! Integration tests for placeholder-based partial application.

#![cfg(feature = "compose")]

use curlew::FunctionalError;
use curlew::compose::{Slot, partial};
use rstest::rstest;

fn subtract(numbers: &[i32]) -> i32 {
    numbers[0] - numbers[1]
}

fn describe(words: &[String]) -> String {
    words.join(" ")
}

// =============================================================================
// partial! macro
// =============================================================================

#[test]
fn test_leading_placeholder() {
    let minus_two = partial!(subtract, __, 2);
    assert_eq!(minus_two.call([1]), Ok(-1));
}

#[test]
fn test_trailing_placeholder() {
    let one_minus = partial!(subtract, 1, __);
    assert_eq!(one_minus.call([2]), Ok(-1));
}

#[test]
fn test_leftover_arguments_are_appended() {
    let sentence = partial!(describe, "a".to_string(), __, "c".to_string());
    assert_eq!(
        sentence.call(["b".to_string(), "d".to_string(), "e".to_string()]),
        Ok("a b c d e".to_string())
    );
}

#[test]
fn test_prefix_without_placeholders() {
    let ten_minus = partial!(subtract, 10);
    assert_eq!(ten_minus.call([4]), Ok(6));
    assert_eq!(ten_minus.holes(), 0);
}

// =============================================================================
// Runtime partial
// =============================================================================

#[rstest]
#[case(vec![Slot::Hole, Slot::Hole], vec![1], 1)]
#[case(vec![Slot::Bound(1), Slot::Hole, Slot::Hole], vec![], 1)]
#[case(vec![Slot::Hole, Slot::Bound(1), Slot::Hole], vec![5], 2)]
fn test_missing_rest_arguments_fail(
    #[case] slots: Vec<Slot<i32>>,
    #[case] rest: Vec<i32>,
    #[case] position: usize,
) {
    let filled = partial(|numbers: &[i32]| numbers.len(), slots);
    assert_eq!(filled.call(rest), Err(FunctionalError::UnfilledPlaceholder { position }));
}

#[test]
fn test_partials_can_be_reused() {
    let minus_two = partial(subtract, [Slot::Hole, Slot::Bound(2)]);
    let results: Vec<_> = (0..4).map(|n| minus_two.call([n])).collect();
    assert_eq!(results, vec![Ok(-2), Ok(-1), Ok(0), Ok(1)]);
}
