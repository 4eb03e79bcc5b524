//! Small combinators and the placeholder token.
//!
//! - [`identity`]: returns its argument unchanged (I combinator)
//! - [`constant`]: ignores its input and returns a fixed value (K combinator)
//! - [`flip`]: swaps the arguments of a binary function (C combinator)
//! - [`Placeholder`] / [`__`]: marks a late-bound argument position

/// Hands its argument straight back.
///
/// Composing with `identity` on either side leaves a function unchanged.
///
/// ```
/// use curlew::compose::identity;
///
/// let names: Vec<&str> = ["ada", "bob"].into_iter().map(identity).collect();
/// assert_eq!(names, ["ada", "bob"]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Builds a function that discards its input and yields a clone of `value`.
///
/// ```
/// use curlew::compose::constant;
///
/// let fallback = constant(String::from("unknown"));
/// assert_eq!(fallback(17_u8), "unknown");
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function: `flip(f)(a, b) == f(b, a)`.
///
/// ```
/// use curlew::compose::flip;
///
/// let prefix = |head: &str, tail: &str| format!("{head}{tail}");
/// assert_eq!(flip(prefix)("lew", "cur"), "curlew");
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Marker for an argument position that is filled later.
///
/// There is exactly one placeholder value, [`__`]. It converts into
/// [`Slot::Hole`](crate::compose::Slot::Hole) for typed partial application
/// and into `Value::Placeholder` in the dynamic layer, where the threading
/// helper injects its current value at that position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placeholder;

/// The placeholder value.
///
/// [`partial!`](crate::partial) recognizes `__` as a token, so the constant
/// only needs importing for calls to [`partial`](crate::compose::partial).
///
/// ```
/// use curlew::compose::{Slot, __};
///
/// let slot: Slot<i32> = __.into();
/// assert_eq!(slot, Slot::Hole);
/// ```
#[allow(non_upper_case_globals)]
pub const __: Placeholder = Placeholder;

static_assertions::assert_impl_all!(Placeholder: Copy, Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_a_unit_of_composition() {
        let length = |text: &str| text.len();
        assert_eq!(crate::compose!(identity, length)("wader"), length("wader"));
        assert_eq!(crate::compose!(length, identity)("wader"), 5);
    }

    #[test]
    fn test_constant_ignores_every_input() {
        let seven = constant(7_i64);
        assert_eq!((0..3).map(&seven).sum::<i64>(), 21);
    }

    #[test]
    fn test_flip_reorders_mixed_types() {
        let repeat = |text: &str, times: usize| text.repeat(times);
        assert_eq!(flip(repeat)(2, "ab"), "abab");
    }

    #[test]
    fn test_placeholder_converts_to_a_hole() {
        let slot: crate::compose::Slot<u8> = __.into();
        assert_eq!(slot, crate::compose::Slot::Hole);
    }
}
