use super::Cursor;

/// Repeats a finite upstream from the start whenever it is exhausted.
///
/// An empty upstream stays empty instead of spinning.
#[derive(Debug, Clone)]
pub struct Cycle<C> {
    upstream: C,
    done: bool,
}

impl<C: Cursor> Cycle<C> {
    /// Cycles `upstream` forever.
    pub const fn new(upstream: C) -> Self {
        Self {
            upstream,
            done: false,
        }
    }
}

impl<C: Cursor> Cursor for Cycle<C> {
    type Item = C::Item;

    fn reset(&mut self) {
        self.upstream.reset();
        self.done = false;
    }

    fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }
        if self.upstream.advance() {
            return true;
        }
        self.upstream.reset();
        self.done = !self.upstream.advance();
        !self.done
    }

    fn current(&self) -> Option<&C::Item> {
        self.upstream.current()
    }
}

/// Repeats `upstream` forever.
///
/// # Examples
///
/// ```rust
/// use curlew::lazy::{Cursor, cycle, lazy};
///
/// assert_eq!(cycle(lazy("ab")).take(5).realize(), vec!['a', 'b', 'a', 'b', 'a']);
/// ```
pub const fn cycle<C: Cursor>(upstream: C) -> Cycle<C> {
    Cycle::new(upstream)
}
