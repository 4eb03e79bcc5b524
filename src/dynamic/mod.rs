//! Dynamically typed values, a name-keyed function registry and a threading
//! helper.
//!
//! The statically typed [`compose`](crate::compose) and [`lazy`](crate::lazy)
//! modules are generic over element types. This module fixes the element type
//! to [`Value`] so heterogeneous pipelines can be assembled by name at
//! runtime:
//!
//! - [`Value`]: nil, booleans, numbers, characters, strings, lists, maps,
//!   functions, lazy sequences and the placeholder
//! - [`Function`]: a curried function over values
//! - [`Sequence`]: a restartable lazy sequence of values
//! - [`Registry`]: name to function lookup; [`Registry::core`] carries the
//!   built-in catalog
//! - [`Thread`] / [`thread`]: threads a value through named operations
//!
//! # Examples
//!
//! ```rust
//! use curlew::dynamic::{Registry, Value, thread};
//!
//! let registry = Registry::core();
//! let is_even = registry.resolve("is_even").unwrap();
//!
//! let evens = thread(&registry, Value::list([1, 2, 3, 4, 5, 6]))
//!     .call("filter", [Value::Function(is_even)])
//!     .and_then(|chain| chain.call("take", [Value::Int(2)]))
//!     .and_then(|chain| chain.value());
//! assert_eq!(evens, Ok(Value::list([2, 4])));
//! ```

mod catalog;
mod function;
mod registry;
mod sequence;
mod thread;
mod value;

pub use function::Function;
pub use registry::Registry;
pub use sequence::{Item, Sequence};
pub use thread::{Thread, thread};
pub use value::{Key, Record, Value};
