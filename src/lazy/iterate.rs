use std::fmt;

use super::Cursor;

/// The infinite sequence `seed, f(seed), f(f(seed)), ...`.
pub struct Iterate<T, F> {
    seed: T,
    function: F,
    current: Option<T>,
}

impl<T, F> Iterate<T, F>
where
    T: Clone,
    F: Fn(&T) -> T,
{
    /// Starts the sequence at `seed`.
    pub const fn new(seed: T, function: F) -> Self {
        Self {
            seed,
            function,
            current: None,
        }
    }
}

impl<T, F> Cursor for Iterate<T, F>
where
    T: Clone,
    F: Fn(&T) -> T,
{
    type Item = T;

    fn reset(&mut self) {
        self.current = None;
    }

    fn advance(&mut self) -> bool {
        let next = match &self.current {
            None => self.seed.clone(),
            Some(previous) => (self.function)(previous),
        };
        self.current = Some(next);
        true
    }

    fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Iterate<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Iterate")
            .field("seed", &self.seed)
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

/// Repeatedly applies `function`, starting from `seed`.
///
/// Never exhausted; bound it with [`Cursor::take`] or [`Cursor::take_while`].
///
/// # Examples
///
/// ```rust
/// use curlew::lazy::{Cursor, iterate};
///
/// let powers = iterate(1_u32, |n| n * 2).take(5);
/// assert_eq!(powers.realize(), vec![1, 2, 4, 8, 16]);
/// ```
pub fn iterate<T, F>(seed: T, function: F) -> Iterate<T, F>
where
    T: Clone,
    F: Fn(&T) -> T,
{
    Iterate::new(seed, function)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_element_is_seed() {
        let mut cursor = iterate(String::from("a"), |text| format!("{text}a"));
        assert_eq!(cursor.current(), None);
        assert!(cursor.advance());
        assert_eq!(cursor.current().map(String::as_str), Some("a"));
        assert!(cursor.advance());
        assert_eq!(cursor.current().map(String::as_str), Some("aa"));
    }

    #[test]
    fn test_bounded_by_take_until() {
        let collatz = iterate(6_u64, |n| if n % 2 == 0 { n / 2 } else { 3 * n + 1 })
            .take_until(|n: &u64| *n == 1);
        assert_eq!(collatz.realize(), vec![6, 3, 10, 5, 16, 8, 4, 2, 1]);
    }
}
