//! Procedural macros for curlew.
//!
//! # Available Function-like Macros
//!
//! - [`curry!`]: Builds a runtime `Curried` value from a typed closure or a
//!   function path, inferring the arity from the closure's parameter list.
//!
//! # Example
//!
//! ```rust,ignore
//! use curlew::curry;
//!
//! let subtract = curry!(|minuend: i64, subtrahend: i64| minuend - subtrahend);
//! let from_ten = subtract.call([10]).into_partial().unwrap();
//! assert_eq!(from_ten.call([3]).into_complete(), Some(7));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod curry;

use proc_macro::TokenStream;

/// Converts a closure or a function with a known arity into a
/// `curlew::compose::Curried`.
///
/// # Forms
///
/// - `curry!(|a: T, b: T, c: T| body)`: arity is the number of closure parameters
/// - `curry!(function_name, 3)`: arity is given as an integer literal
///
/// Every parameter must share one type, since the curried value accumulates
/// its arguments in a single buffer. An arity of zero is rejected at compile
/// time.
///
/// # Example
///
/// ```rust,ignore
/// use curlew::curry;
///
/// fn volume(width: i64, height: i64, depth: i64) -> i64 {
///     width * height * depth
/// }
///
/// let curried = curry!(volume, 3);
/// assert_eq!(curried.call([2, 3, 4]).into_complete(), Some(24));
/// ```
#[proc_macro]
pub fn curry(input: TokenStream) -> TokenStream {
    curry::curry_impl(input)
}
