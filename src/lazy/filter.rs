use std::fmt;

use super::Cursor;

/// Passes through the upstream elements whose predicate result equals `keep`.
///
/// Built by [`Cursor::filter`] (`keep = true`) and [`Cursor::remove`]
/// (`keep = false`).
pub struct Filter<C, P> {
    predicate: P,
    upstream: C,
    keep: bool,
}

impl<C, P> Filter<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    /// Keeps the elements satisfying `predicate`.
    pub const fn new(predicate: P, upstream: C) -> Self {
        Self::with_keep(predicate, upstream, true)
    }

    /// Keeps the elements for which `predicate` returns `keep`.
    pub const fn with_keep(predicate: P, upstream: C, keep: bool) -> Self {
        Self {
            predicate,
            upstream,
            keep,
        }
    }
}

impl<C, P> Cursor for Filter<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn reset(&mut self) {
        self.upstream.reset();
    }

    fn advance(&mut self) -> bool {
        while self.upstream.advance() {
            if self
                .upstream
                .current()
                .is_some_and(|item| (self.predicate)(item) == self.keep)
            {
                return true;
            }
        }
        false
    }

    fn current(&self) -> Option<&C::Item> {
        self.upstream.current()
    }
}

impl<C: fmt::Debug, P> fmt::Debug for Filter<C, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Filter")
            .field("upstream", &self.upstream)
            .field("keep", &self.keep)
            .finish_non_exhaustive()
    }
}
