//! Lazy, pull-based sequence adapters.
//!
//! Every adapter implements the [`Cursor`] protocol: a cursor starts (and
//! restarts after [`reset`](Cursor::reset)) positioned *before* its first
//! element; [`advance`](Cursor::advance) moves to the next element and
//! reports whether one exists; [`current`](Cursor::current) borrows it.
//! Work only happens when a consumer pulls, so infinite sources such as
//! [`Range::unbounded`], [`Cycle`] and [`Iterate`] are fine as long as
//! something downstream ([`Take`], [`TakeWhile`], ...) bounds them.
//!
//! # Examples
//!
//! ```rust
//! use curlew::lazy::{Cursor, cycle, lazy};
//!
//! assert_eq!(cycle(lazy(vec![1, 2, 3])).take(4).realize(), vec![1, 2, 3, 1]);
//!
//! let runs = lazy(vec![1, 3, 5, 2, 4, 7]).partition_by(|number: &i32| number % 2 != 0);
//! assert_eq!(runs.realize(), vec![vec![1, 3, 5], vec![2, 4], vec![7]]);
//! ```
//!
//! # Cursor state
//!
//! `current()` returns `None` before the first `advance()` and after the
//! cursor is exhausted; it never panics. Cursors are fused: once `advance()`
//! has returned `false` it keeps returning `false` until `reset()`.

mod cycle;
mod filter;
mod iterate;
mod map;
mod partition_by;
mod range;
mod skip;
mod source;
mod take;

pub use cycle::{Cycle, cycle};
pub use filter::Filter;
pub use iterate::{Iterate, iterate};
pub use map::{Map, Zip, zip_with};
pub use partition_by::PartitionBy;
pub use range::{Range, Step, range};
pub use skip::{Skip, SkipUntil, SkipWhile};
pub use source::{IterCursor, Sequenceable, VecCursor, from_iter, lazy};
pub use take::{Take, TakeUntil, TakeWhile};

/// A type-erased cursor.
pub type BoxedCursor<'a, T> = Box<dyn Cursor<Item = T> + 'a>;

/// The pull protocol shared by every lazy sequence.
pub trait Cursor {
    /// The element type.
    type Item;

    /// Rewinds to the position before the first element, clearing any
    /// one-shot adapter state.
    fn reset(&mut self);

    /// Moves to the next element. Returns `true` if one is available.
    fn advance(&mut self) -> bool;

    /// The element the cursor is positioned on, if any.
    fn current(&self) -> Option<&Self::Item>;

    /// Rewinds, then drains the cursor into a vector.
    ///
    /// Only terminates for finite cursors.
    fn realize(mut self) -> Vec<Self::Item>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        self.reset();
        let mut realized = Vec::new();
        while self.advance() {
            if let Some(item) = self.current() {
                realized.push(item.clone());
            }
        }
        realized
    }

    /// Bridges the cursor into an [`Iterator`] over cloned elements,
    /// continuing from the current position.
    fn values(self) -> Values<Self>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        Values { cursor: self }
    }

    /// Erases the cursor's concrete type.
    fn boxed<'a>(self) -> BoxedCursor<'a, Self::Item>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    /// Keeps elements for which `predicate` holds.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        Filter::new(predicate, self)
    }

    /// Drops elements for which `predicate` holds.
    fn remove<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        Filter::with_keep(predicate, self, false)
    }

    /// Transforms each element.
    fn map<U, F>(self, function: F) -> Map<Self, F, U>
    where
        Self: Sized,
        F: Fn(&Self::Item) -> U,
    {
        Map::new(function, self)
    }

    /// Yields at most `limit` elements.
    fn take(self, limit: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(limit, self)
    }

    /// Discards the first `count` elements.
    fn skip(self, count: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(count, self)
    }

    /// Yields elements while `predicate` holds.
    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        TakeWhile::new(predicate, self)
    }

    /// Yields elements up to and including the first one matching `predicate`.
    fn take_until<P>(self, predicate: P) -> TakeUntil<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        TakeUntil::new(predicate, self)
    }

    /// Discards leading elements while `predicate` holds.
    fn skip_while<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        SkipWhile::new(predicate, self)
    }

    /// Discards leading elements until `predicate` first holds.
    fn skip_until<P>(self, predicate: P) -> SkipUntil<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        SkipUntil::new(predicate, self)
    }

    /// Groups consecutive elements with equal keys into runs.
    fn partition_by<K, F>(self, key: F) -> PartitionBy<Self, F, K>
    where
        Self: Sized,
        Self::Item: Clone,
        F: Fn(&Self::Item) -> K,
        K: PartialEq,
    {
        PartitionBy::new(key, self)
    }

    /// Repeats the cursor from the start whenever it is exhausted.
    fn cycle(self) -> Cycle<Self>
    where
        Self: Sized,
    {
        Cycle::new(self)
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    fn reset(&mut self) {
        (**self).reset();
    }

    fn advance(&mut self) -> bool {
        (**self).advance()
    }

    fn current(&self) -> Option<&Self::Item> {
        (**self).current()
    }
}

/// An [`Iterator`] over the elements of a cursor, created by [`Cursor::values`].
#[derive(Debug, Clone)]
pub struct Values<C> {
    cursor: C,
}

impl<C> Iterator for Values<C>
where
    C: Cursor,
    C::Item: Clone,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.advance() {
            self.cursor.current().cloned()
        } else {
            None
        }
    }
}

/// Drains a cursor into a vector; the free-function form of [`Cursor::realize`].
pub fn realize<C>(cursor: C) -> Vec<C::Item>
where
    C: Cursor,
    C::Item: Clone,
{
    cursor.realize()
}
