use std::fmt;

use super::{BoxedCursor, Cursor};

/// Applies a function to every upstream element.
pub struct Map<C, F, U> {
    function: F,
    upstream: C,
    current: Option<U>,
}

impl<C, F, U> Map<C, F, U>
where
    C: Cursor,
    F: Fn(&C::Item) -> U,
{
    /// Maps `upstream` through `function`.
    pub const fn new(function: F, upstream: C) -> Self {
        Self {
            function,
            upstream,
            current: None,
        }
    }
}

impl<C, F, U> Cursor for Map<C, F, U>
where
    C: Cursor,
    F: Fn(&C::Item) -> U,
{
    type Item = U;

    fn reset(&mut self) {
        self.upstream.reset();
        self.current = None;
    }

    fn advance(&mut self) -> bool {
        self.current = if self.upstream.advance() {
            self.upstream.current().map(|item| (self.function)(item))
        } else {
            None
        };
        self.current.is_some()
    }

    fn current(&self) -> Option<&U> {
        self.current.as_ref()
    }
}

impl<C: fmt::Debug, F, U: fmt::Debug> fmt::Debug for Map<C, F, U> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Map")
            .field("upstream", &self.upstream)
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

/// Positional zip over any number of cursors.
///
/// Advancing requires every upstream to produce an element, so the shortest
/// upstream governs the length. Zipping no cursor at all yields nothing.
pub struct Zip<'a, T> {
    upstreams: Vec<BoxedCursor<'a, T>>,
    current: Option<Vec<T>>,
    exhausted: bool,
}

impl<'a, T: Clone> Zip<'a, T> {
    /// Zips `upstreams` positionally.
    pub fn new<I>(upstreams: I) -> Self
    where
        I: IntoIterator<Item = BoxedCursor<'a, T>>,
    {
        Self {
            upstreams: upstreams.into_iter().collect(),
            current: None,
            exhausted: false,
        }
    }

    /// Number of zipped cursors.
    pub fn width(&self) -> usize {
        self.upstreams.len()
    }
}

impl<T: Clone> Cursor for Zip<'_, T> {
    type Item = Vec<T>;

    fn reset(&mut self) {
        for upstream in &mut self.upstreams {
            upstream.reset();
        }
        self.current = None;
        self.exhausted = false;
    }

    fn advance(&mut self) -> bool {
        if self.exhausted || self.upstreams.is_empty() {
            self.current = None;
            return false;
        }
        if !self.upstreams.iter_mut().all(|upstream| upstream.advance()) {
            self.exhausted = true;
            self.current = None;
            return false;
        }
        self.current = self
            .upstreams
            .iter()
            .map(|upstream| upstream.current().cloned())
            .collect();
        self.current.is_some()
    }

    fn current(&self) -> Option<&Vec<T>> {
        self.current.as_ref()
    }
}

impl<T: fmt::Debug> fmt::Debug for Zip<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Zip")
            .field("width", &self.upstreams.len())
            .field("current", &self.current)
            .field("exhausted", &self.exhausted)
            .finish()
    }
}

/// Maps a function over several cursors in lockstep.
///
/// The function receives one element per upstream, in upstream order.
///
/// # Examples
///
/// ```rust
/// use curlew::lazy::{Cursor, lazy, zip_with};
///
/// let sums = zip_with(
///     |pair: &Vec<i32>| pair[0] + pair[1],
///     [lazy(vec![1, 2, 3]).boxed(), lazy(vec![10, 20]).boxed()],
/// );
/// assert_eq!(sums.realize(), vec![11, 22]);
/// ```
pub fn zip_with<'a, T, U, F, I>(function: F, upstreams: I) -> Map<Zip<'a, T>, F, U>
where
    T: Clone,
    F: Fn(&Vec<T>) -> U,
    I: IntoIterator<Item = BoxedCursor<'a, T>>,
{
    Map::new(function, Zip::new(upstreams))
}
