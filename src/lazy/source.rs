//! Cursor sources: concrete collections, strings and Rust iterators.

use std::rc::Rc;

use super::Cursor;

/// A restartable cursor over a shared, immutable buffer.
///
/// Cloning a `VecCursor` shares the buffer; each clone keeps its own position.
#[derive(Debug, Clone)]
pub struct VecCursor<T> {
    items: Rc<[T]>,
    position: Option<usize>,
}

impl<T> VecCursor<T> {
    /// Wraps an already shared buffer.
    pub const fn from_shared(items: Rc<[T]>) -> Self {
        Self {
            items,
            position: None,
        }
    }

    /// Number of elements in the underlying buffer.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the underlying buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Cursor for VecCursor<T> {
    type Item = T;

    fn reset(&mut self) {
        self.position = None;
    }

    fn advance(&mut self) -> bool {
        let next = self
            .position
            .map_or(0, |position| (position + 1).min(self.items.len()));
        self.position = Some(next);
        next < self.items.len()
    }

    fn current(&self) -> Option<&T> {
        self.position.and_then(|position| self.items.get(position))
    }
}

/// A cursor over any cloneable iterator.
///
/// A pristine copy of the iterator is kept so that [`reset`](Cursor::reset) can replay
/// the sequence from the start.
#[derive(Debug, Clone)]
pub struct IterCursor<I: Iterator> {
    origin: I,
    live: I,
    current: Option<I::Item>,
    exhausted: bool,
}

impl<I: Iterator + Clone> IterCursor<I> {
    /// Wraps `iterator`.
    pub fn new(iterator: I) -> Self {
        Self {
            live: iterator.clone(),
            origin: iterator,
            current: None,
            exhausted: false,
        }
    }
}

impl<I: Iterator + Clone> Cursor for IterCursor<I> {
    type Item = I::Item;

    fn reset(&mut self) {
        self.live = self.origin.clone();
        self.current = None;
        self.exhausted = false;
    }

    fn advance(&mut self) -> bool {
        if self.exhausted {
            return false;
        }
        self.current = self.live.next();
        self.exhausted = self.current.is_none();
        !self.exhausted
    }

    fn current(&self) -> Option<&I::Item> {
        self.current.as_ref()
    }
}

/// Anything that can be turned into a [`Cursor`] by [`lazy`].
///
/// Strings are sequences of `char`s.
pub trait Sequenceable {
    /// The element type of the resulting cursor.
    type Item;
    /// The cursor type.
    type Cursor: Cursor<Item = Self::Item>;

    /// Converts `self` into a cursor positioned before its first element.
    fn into_cursor(self) -> Self::Cursor;
}

impl<T> Sequenceable for Vec<T> {
    type Item = T;
    type Cursor = VecCursor<T>;

    fn into_cursor(self) -> Self::Cursor {
        VecCursor::from_shared(self.into())
    }
}

impl<T: Clone> Sequenceable for &[T] {
    type Item = T;
    type Cursor = VecCursor<T>;

    fn into_cursor(self) -> Self::Cursor {
        VecCursor::from_shared(self.into())
    }
}

impl<T, const N: usize> Sequenceable for [T; N] {
    type Item = T;
    type Cursor = VecCursor<T>;

    fn into_cursor(self) -> Self::Cursor {
        VecCursor::from_shared(Rc::from(Vec::from(self)))
    }
}

impl<T> Sequenceable for Rc<[T]> {
    type Item = T;
    type Cursor = VecCursor<T>;

    fn into_cursor(self) -> Self::Cursor {
        VecCursor::from_shared(self)
    }
}

impl Sequenceable for &str {
    type Item = char;
    type Cursor = VecCursor<char>;

    fn into_cursor(self) -> Self::Cursor {
        VecCursor::from_shared(self.chars().collect())
    }
}

impl Sequenceable for String {
    type Item = char;
    type Cursor = VecCursor<char>;

    fn into_cursor(self) -> Self::Cursor {
        self.as_str().into_cursor()
    }
}

/// Wraps a concrete sequence as a cursor.
///
/// # Examples
///
/// ```rust
/// use curlew::lazy::{Cursor, lazy};
///
/// assert_eq!(lazy("abc").realize(), vec!['a', 'b', 'c']);
/// assert_eq!(lazy([1, 2, 3]).take(2).realize(), vec![1, 2]);
/// ```
pub fn lazy<S: Sequenceable>(source: S) -> S::Cursor {
    source.into_cursor()
}

/// Wraps a cloneable iterator as a cursor.
///
/// # Examples
///
/// ```rust
/// use curlew::lazy::{Cursor, from_iter};
///
/// let squares = from_iter((1..).map(|n: u64| n * n)).take(4);
/// assert_eq!(squares.realize(), vec![1, 4, 9, 16]);
/// ```
pub fn from_iter<I>(iterable: I) -> IterCursor<I::IntoIter>
where
    I: IntoIterator,
    I::IntoIter: Clone,
{
    IterCursor::new(iterable.into_iter())
}
