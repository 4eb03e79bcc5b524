#![cfg(feature = "compose")]
//! Property-based tests for currying and composition laws.
//!
//! ## Composition Laws
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
//! - **Pipe**: `pipe!(f, g) == compose!(g, f)`, and likewise for the runtime forms
//!
//! ## Curry Laws
//! - **Equivalence**: applying a curried function one argument at a time
//!   agrees with applying it all at once
//!
//! ## Partial Laws
//! - **Placeholder order**: holes are filled left to right

use curlew::compose::{Slot, compose, curry, identity, partial, pipe, unary};
use proptest::prelude::*;

// =============================================================================
// Composition Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_compose_identity(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(3);

        prop_assert_eq!(compose!(identity, function)(x), function(x));
        prop_assert_eq!(compose!(function, identity)(x), function(x));
    }

    #[test]
    fn prop_compose_associativity(x in any::<i32>()) {
        let f = |n: i32| n.wrapping_add(1);
        let g = |n: i32| n.wrapping_mul(2);
        let h = |n: i32| n.wrapping_sub(7);

        let left = compose!(f, compose!(g, h));
        let right = compose!(compose!(f, g), h);

        prop_assert_eq!(left(x), right(x));
    }

    #[test]
    fn prop_pipe_is_reversed_compose(x in any::<i32>()) {
        let f = |n: i32| n.wrapping_add(5);
        let g = |n: i32| n.wrapping_mul(-2);

        prop_assert_eq!(pipe!(f, g)(x), compose!(g, f)(x));
    }

    #[test]
    fn prop_runtime_forms_agree_with_macros(x in any::<i64>(), amounts in prop::collection::vec(any::<i64>(), 1..6)) {
        let chain: Vec<_> = amounts
            .iter()
            .map(|&amount| unary(move |n: i64| n.wrapping_mul(3).wrapping_add(amount)))
            .collect();

        let mut reversed = chain.clone();
        reversed.reverse();

        let composed = compose(chain.clone()).unwrap();
        let piped = pipe(reversed).unwrap();
        let folded = chain.iter().rev().fold(x, |value, function| function(value));

        prop_assert_eq!(composed.call(x), folded);
        prop_assert_eq!(piped.call(x), folded);
    }
}

// =============================================================================
// Curry Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_curry_equivalence(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        let combine = |numbers: &[i32]| numbers[0].wrapping_mul(numbers[1]).wrapping_sub(numbers[2]);
        let curried = curry(combine, 3).unwrap();

        let at_once = curried.call([a, b, c]).into_complete();
        let one_by_one = curried.call([a]).call([b]).call([c]).into_complete();

        prop_assert_eq!(at_once, Some(combine(&[a, b, c])));
        prop_assert_eq!(one_by_one, at_once);
    }

    #[test]
    fn prop_partial_fills_holes_in_order(a in any::<i16>(), b in any::<i16>(), c in any::<i16>()) {
        let listed = partial(
            |numbers: &[i16]| numbers.to_vec(),
            [Slot::Hole, Slot::Bound(b), Slot::Hole],
        );

        prop_assert_eq!(listed.call([a, c]), Ok(vec![a, b, c]));
    }
}
