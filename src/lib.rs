//! # curlew
//!
//! Curried, composable functions and lazy sequence adapters for building
//! point-free pipelines over vectors, strings and pull-based sequences.
//!
//! ## Overview
//!
//! - **Currying**: [`Curried`](compose::Curried) turns an N-ary function into a
//!   chain of partial applications, with the [`curry!`] macro inferring the
//!   arity from a typed closure
//! - **Partial application**: [`partial!`] and [`Partial`](compose::Partial)
//!   pre-fill arguments around the `__` placeholder
//! - **Composition**: [`compose!`], [`pipe!`] and their runtime counterparts
//! - **Lazy sequences**: the [`Cursor`](lazy::Cursor) protocol with Filter, Map,
//!   Take/Skip While/Until, `PartitionBy`, Range, Iterate and Cycle adapters
//! - **Dynamic layer**: [`Value`](dynamic::Value), a name-keyed
//!   [`Registry`](dynamic::Registry) of curried functions, and the
//!   [`Thread`](dynamic::Thread) chain helper
//!
//! ## Feature Flags
//!
//! - `compose`: Currying, partial application and composition
//! - `lazy`: Lazy cursors and sequence adapters
//! - `dynamic`: Value layer, function registry and threading helper
//! - `serde`: `Serialize` support for dynamic values
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use curlew::prelude::*;
//!
//! let odd_squares = lazy(vec![1, 2, 3, 4, 5, 6])
//!     .filter(|number: &i32| number % 2 == 1)
//!     .map(|number: &i32| number * number);
//!
//! assert_eq!(odd_squares.realize(), vec![1, 9, 25]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

// Lets `curry!` expansions resolve `::curlew` inside this crate's own tests.
extern crate self as curlew;

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use curlew::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{FunctionalError, Result};

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "lazy")]
    pub use crate::lazy::*;

    #[cfg(feature = "dynamic")]
    pub use crate::dynamic::*;
}

pub mod error;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "lazy")]
pub mod lazy;

#[cfg(feature = "dynamic")]
pub mod dynamic;

#[cfg(feature = "compose")]
pub use curlew_derive::curry;

pub use error::{FunctionalError, Result};
