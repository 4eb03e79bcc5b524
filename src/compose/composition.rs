//! Runtime function composition.
//!
//! [`compose`] and [`pipe`] chain a list of unary functions known only at
//! runtime into a single [`Composed`] function. For statically known chains
//! of differently typed functions prefer the [`compose!`](crate::compose!)
//! and [`pipe!`](crate::pipe!) macros.

use std::fmt;
use std::rc::Rc;

use crate::error::{FunctionalError, Result};

/// A shared unary function, the building block of runtime compositions.
pub type Unary<T> = Rc<dyn Fn(T) -> T>;

/// Wraps a closure as a [`Unary`].
pub fn unary<T, F>(function: F) -> Unary<T>
where
    F: Fn(T) -> T + 'static,
{
    Rc::new(function)
}

/// A chain of unary functions applied in evaluation order.
pub struct Composed<T> {
    chain: Rc<[Unary<T>]>,
}

/// Composes functions right to left: `compose([f, g, h])(x) == f(g(h(x)))`.
///
/// # Errors
///
/// Returns [`FunctionalError::EmptyComposition`] if no function is given.
///
/// # Examples
///
/// ```rust
/// use curlew::compose::{compose, unary};
///
/// let add_one_after_doubling = compose([unary(|x: i32| x + 1), unary(|x: i32| x * 2)]).unwrap();
/// assert_eq!(add_one_after_doubling.call(5), 11);
/// ```
pub fn compose<T, I>(functions: I) -> Result<Composed<T>>
where
    I: IntoIterator<Item = Unary<T>>,
{
    let mut chain: Vec<Unary<T>> = functions.into_iter().collect();
    chain.reverse();
    Composed::from_chain(chain, "compose")
}

/// Composes functions left to right: `pipe([f, g, h])(x) == h(g(f(x)))`.
///
/// # Errors
///
/// Returns [`FunctionalError::EmptyComposition`] if no function is given.
///
/// # Examples
///
/// ```rust
/// use curlew::compose::{pipe, unary};
///
/// let double_after_adding_one = pipe([unary(|x: i32| x + 1), unary(|x: i32| x * 2)]).unwrap();
/// assert_eq!(double_after_adding_one.call(5), 12);
/// ```
pub fn pipe<T, I>(functions: I) -> Result<Composed<T>>
where
    I: IntoIterator<Item = Unary<T>>,
{
    Composed::from_chain(functions.into_iter().collect(), "pipe")
}

impl<T> Composed<T> {
    fn from_chain(chain: Vec<Unary<T>>, combinator: &'static str) -> Result<Self> {
        if chain.is_empty() {
            tracing::debug!(combinator, "rejected empty composition");
            return Err(FunctionalError::EmptyComposition { combinator });
        }
        Ok(Self {
            chain: chain.into(),
        })
    }

    /// Runs the chain on `input`.
    pub fn call(&self, input: T) -> T {
        self.chain
            .iter()
            .fold(input, |value, function| function(value))
    }

    /// Number of functions in the chain.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Always `false`: an empty composition cannot be built.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Converts the composition into a plain closure.
    pub fn into_fn(self) -> impl Fn(T) -> T {
        move |input| self.call(input)
    }
}

impl<T> Clone for Composed<T> {
    fn clone(&self) -> Self {
        Self {
            chain: Rc::clone(&self.chain),
        }
    }
}

impl<T> fmt::Debug for Composed<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Composed")
            .field("len", &self.chain.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_function_is_itself() {
        let square = compose([unary(|x: i32| x * x)]).unwrap();
        assert_eq!(square.call(7), 49);
    }

    #[test]
    fn test_compose_runs_rightmost_first() {
        let composed = compose([
            unary(|text: String| format!("{text}!")),
            unary(|text: String| text.to_uppercase()),
        ])
        .unwrap();
        assert_eq!(composed.call("hey".to_string()), "HEY!");
    }

    #[test]
    fn test_pipe_runs_leftmost_first() {
        let piped = pipe([unary(|x: i32| x - 1), unary(|x: i32| x * 3)]).unwrap();
        assert_eq!(piped.call(4), 9);
        assert_eq!(piped.len(), 2);
    }

    #[test]
    fn test_empty_compositions_fail() {
        let functions: Vec<Unary<i32>> = Vec::new();
        assert_eq!(
            compose(functions.clone()).err().map(|error| error.to_string()),
            Some("compose requires at least one function".to_string())
        );
        assert!(matches!(
            pipe(functions),
            Err(FunctionalError::EmptyComposition { combinator: "pipe" })
        ));
    }
}
