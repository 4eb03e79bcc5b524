//! Statically typed composition macros.
//!
//! [`compose!`] chains right to left and [`pipe!`] left to right. Both expand
//! to nested closures, so every link may change the value's type.

/// Composes functions right to left: `compose!(f, g, h)(x) == f(g(h(x)))`.
///
/// The runtime [`compose`](crate::compose::compose) function only chains
/// functions of one type; here the output of each function only has to match
/// the input of the one to its left.
///
/// # Syntax
///
/// - `compose!(f)` is `f`
/// - `compose!(f, g, ...)` nests to the right
/// - `compose!()` does not compile
///
/// # Examples
///
/// ```
/// use curlew::compose;
///
/// fn word_count(text: String) -> usize { text.split_whitespace().count() }
/// fn shout(text: &str) -> String { text.to_uppercase() }
///
/// let counted = compose!(word_count, shout);
/// assert_eq!(counted("a long-legged wader"), 3);
/// ```
///
/// Closures may capture their environment:
///
/// ```
/// use curlew::compose;
///
/// let offset = 7;
/// let shifted = compose!(|x: i64| x * 2, move |x: i64| x + offset);
/// assert_eq!(shifted(1), 16);
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        compile_error!("compose! requires at least one function")
    };

    ($function:expr $(,)?) => {
        $function
    };

    // compose!(f, g)(x) = f(g(x))
    ($outer_function:expr, $inner_function:expr $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |input| outer(inner(input))
    }};

    // compose!(f, g, h, ...) = compose!(f, compose!(g, h, ...))
    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner_composed(input))
    }};
}

/// Composes functions from left to right.
///
/// `pipe!(f, g, h)(x)` is equivalent to `h(g(f(x)))`, i.e.
/// `compose!(h, g, f)`. The result is a function; apply it to run the chain.
///
/// # Syntax
///
/// - `pipe!(f)` - Returns `f` unchanged
/// - `pipe!(f, g, ...)` - Returns `|x| ...g(f(x))`
/// - `pipe!()` - Rejected at compile time
///
/// # Examples
///
/// ```
/// use curlew::pipe;
///
/// fn square(x: i32) -> i32 { x * x }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn add_one(x: i32) -> i32 { x + 1 }
///
/// // 3 -> square(3)=9 -> double(9)=18 -> add_one(18)=19
/// let pipeline = pipe!(square, double, add_one);
/// assert_eq!(pipeline(3), 19);
/// ```
#[macro_export]
macro_rules! pipe {
    () => {
        compile_error!("pipe! requires at least one function")
    };

    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let rest_piped = $crate::pipe!($($remaining_functions),+);
        move |input| rest_piped(first(input))
    }};
}
