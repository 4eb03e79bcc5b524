use std::fmt;

use super::Cursor;

/// Yields at most `limit` upstream elements.
///
/// The upstream is never pulled beyond the limit, so `Take` safely bounds
/// infinite sources.
#[derive(Debug, Clone)]
pub struct Take<C> {
    limit: usize,
    taken: usize,
    upstream: C,
    done: bool,
}

impl<C: Cursor> Take<C> {
    /// Limits `upstream` to `limit` elements.
    pub const fn new(limit: usize, upstream: C) -> Self {
        Self {
            limit,
            taken: 0,
            upstream,
            done: false,
        }
    }
}

impl<C: Cursor> Cursor for Take<C> {
    type Item = C::Item;

    fn reset(&mut self) {
        self.upstream.reset();
        self.taken = 0;
        self.done = false;
    }

    fn advance(&mut self) -> bool {
        if !self.done && self.taken < self.limit && self.upstream.advance() {
            self.taken += 1;
            return true;
        }
        self.done = true;
        false
    }

    fn current(&self) -> Option<&C::Item> {
        if self.done || self.taken == 0 {
            None
        } else {
            self.upstream.current()
        }
    }
}

/// Yields upstream elements while the predicate holds.
///
/// The first element failing the predicate is not yielded and ends the cursor.
pub struct TakeWhile<C, P> {
    predicate: P,
    upstream: C,
    done: bool,
}

impl<C, P> TakeWhile<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    /// Takes from `upstream` while `predicate` holds.
    pub const fn new(predicate: P, upstream: C) -> Self {
        Self {
            predicate,
            upstream,
            done: false,
        }
    }
}

impl<C, P> Cursor for TakeWhile<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn reset(&mut self) {
        self.upstream.reset();
        self.done = false;
    }

    fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }
        let accepted = self.upstream.advance()
            && self
                .upstream
                .current()
                .is_some_and(|item| (self.predicate)(item));
        self.done = !accepted;
        accepted
    }

    fn current(&self) -> Option<&C::Item> {
        if self.done {
            None
        } else {
            self.upstream.current()
        }
    }
}

impl<C: fmt::Debug, P> fmt::Debug for TakeWhile<C, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TakeWhile")
            .field("upstream", &self.upstream)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

/// Yields upstream elements up to and including the first one satisfying the
/// predicate.
pub struct TakeUntil<C, P> {
    predicate: P,
    upstream: C,
    triggered: bool,
    done: bool,
}

impl<C, P> TakeUntil<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    /// Takes from `upstream` until `predicate` first holds.
    pub const fn new(predicate: P, upstream: C) -> Self {
        Self {
            predicate,
            upstream,
            triggered: false,
            done: false,
        }
    }
}

impl<C, P> Cursor for TakeUntil<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn reset(&mut self) {
        self.upstream.reset();
        self.triggered = false;
        self.done = false;
    }

    fn advance(&mut self) -> bool {
        if self.done || self.triggered || !self.upstream.advance() {
            self.done = true;
            return false;
        }
        self.triggered = self
            .upstream
            .current()
            .is_some_and(|item| (self.predicate)(item));
        true
    }

    fn current(&self) -> Option<&C::Item> {
        if self.done {
            None
        } else {
            self.upstream.current()
        }
    }
}

impl<C: fmt::Debug, P> fmt::Debug for TakeUntil<C, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TakeUntil")
            .field("upstream", &self.upstream)
            .field("triggered", &self.triggered)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}
