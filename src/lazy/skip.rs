use std::fmt;

use super::Cursor;

/// Discards the first `count` upstream elements.
#[derive(Debug, Clone)]
pub struct Skip<C> {
    count: usize,
    upstream: C,
    skipped: bool,
}

impl<C: Cursor> Skip<C> {
    /// Skips `count` elements of `upstream`.
    pub const fn new(count: usize, upstream: C) -> Self {
        Self {
            count,
            upstream,
            skipped: false,
        }
    }
}

impl<C: Cursor> Cursor for Skip<C> {
    type Item = C::Item;

    fn reset(&mut self) {
        self.upstream.reset();
        self.skipped = false;
    }

    fn advance(&mut self) -> bool {
        if !self.skipped {
            self.skipped = true;
            for _ in 0..self.count {
                if !self.upstream.advance() {
                    return false;
                }
            }
        }
        self.upstream.advance()
    }

    fn current(&self) -> Option<&C::Item> {
        if self.skipped {
            self.upstream.current()
        } else {
            None
        }
    }
}

/// Discards leading elements while the predicate holds.
///
/// The predicate is a one-shot trigger: once it first fails, that element
/// and everything after it pass through without being tested again.
pub struct SkipWhile<C, P> {
    predicate: P,
    upstream: C,
    triggered: bool,
}

impl<C, P> SkipWhile<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    /// Skips leading elements of `upstream` while `predicate` holds.
    pub const fn new(predicate: P, upstream: C) -> Self {
        Self {
            predicate,
            upstream,
            triggered: false,
        }
    }
}

impl<C, P> Cursor for SkipWhile<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn reset(&mut self) {
        self.upstream.reset();
        self.triggered = false;
    }

    fn advance(&mut self) -> bool {
        if self.triggered {
            return self.upstream.advance();
        }
        while self.upstream.advance() {
            if !self
                .upstream
                .current()
                .is_some_and(|item| (self.predicate)(item))
            {
                self.triggered = true;
                return true;
            }
        }
        false
    }

    fn current(&self) -> Option<&C::Item> {
        if self.triggered {
            self.upstream.current()
        } else {
            None
        }
    }
}

impl<C: fmt::Debug, P> fmt::Debug for SkipWhile<C, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SkipWhile")
            .field("upstream", &self.upstream)
            .field("triggered", &self.triggered)
            .finish_non_exhaustive()
    }
}

/// Discards leading elements until the predicate first holds.
///
/// The triggering element is yielded, so `skip_until(p)` behaves exactly like
/// `skip_while(|x| !p(x))`.
pub struct SkipUntil<C, P> {
    predicate: P,
    upstream: C,
    triggered: bool,
}

impl<C, P> SkipUntil<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    /// Skips leading elements of `upstream` until `predicate` holds.
    pub const fn new(predicate: P, upstream: C) -> Self {
        Self {
            predicate,
            upstream,
            triggered: false,
        }
    }
}

impl<C, P> Cursor for SkipUntil<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn reset(&mut self) {
        self.upstream.reset();
        self.triggered = false;
    }

    fn advance(&mut self) -> bool {
        if self.triggered {
            return self.upstream.advance();
        }
        while self.upstream.advance() {
            if self
                .upstream
                .current()
                .is_some_and(|item| (self.predicate)(item))
            {
                self.triggered = true;
                return true;
            }
        }
        false
    }

    fn current(&self) -> Option<&C::Item> {
        if self.triggered {
            self.upstream.current()
        } else {
            None
        }
    }
}

impl<C: fmt::Debug, P> fmt::Debug for SkipUntil<C, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SkipUntil")
            .field("upstream", &self.upstream)
            .field("triggered", &self.triggered)
            .finish_non_exhaustive()
    }
}
