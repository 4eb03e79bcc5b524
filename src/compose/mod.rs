//! Currying, partial application and function composition.
//!
//! # Overview
//!
//! - [`Curried`] / [`curry`]: runtime currying with an explicit arity, plus
//!   the [`curry!`](crate::curry!) macro that infers the arity from a typed closure
//! - [`Partial`] / [`partial`] / [`partial!`]: pre-filled arguments with `__` placeholders
//! - [`compose`] / [`pipe`]: runtime composition of unary functions
//! - [`compose!`] / [`pipe!`]: statically typed composition
//!
//! # Helper Functions
//!
//! - [`identity`], [`constant`], [`flip`]
//!
//! # Examples
//!
//! ## Currying
//!
//! ```
//! use curlew::curry;
//!
//! let add = curry!(|first: i32, second: i32| first + second);
//! let add_five = add.apply(5).into_partial().unwrap();
//! assert_eq!(add_five.apply(3).into_complete(), Some(8));
//! ```
//!
//! ## Partial Application
//!
//! ```
//! use curlew::partial;
//!
//! fn subtract(numbers: &[i32]) -> i32 { numbers[0] - numbers[1] }
//!
//! // Use __ as a placeholder for the late-bound position.
//! // Note: Do NOT import __ - it is matched as a literal token by the macro.
//! let minus_two = partial!(subtract, __, 2);
//! assert_eq!(minus_two.call([1]), Ok(-1));
//! ```
//!
//! ## Composition
//!
//! ```
//! use curlew::{compose, pipe};
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! assert_eq!(compose!(add_one, double)(5), 11);
//! assert_eq!(pipe!(add_one, double)(5), 12);
//! ```
//!
//! # Laws
//!
//! - **Curry equivalence**: `curry(f, n).call([a1])...call([an]) == f(a1, ..., an)`
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
//! - **Pipe**: `pipe!(f, g) == compose!(g, f)`

mod compose_macro;
mod composition;
mod curried;
mod partial;
mod utils;

pub use composition::{Composed, Unary, compose, pipe, unary};
pub use curried::{Applied, Curried, Excess, curry};
pub use partial::{Partial, Slot, partial};
pub use utils::{__, Placeholder, constant, flip, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::curry;
pub use crate::partial;
pub use crate::pipe;
