//! The runtime currying engine.
//!
//! A [`Curried`] value wraps a function over an argument slice together with
//! its declared arity. Calling it with fewer arguments than the arity yields
//! a new `Curried` capturing the accumulated prefix; calling it with enough
//! arguments invokes the function.
//!
//! # Examples
//!
//! ```rust
//! use curlew::compose::{Applied, curry};
//!
//! let volume = curry(|sides: &[i64]| sides[0] * sides[1] * sides[2], 3).unwrap();
//!
//! // Full and incremental application agree.
//! assert_eq!(volume.call([2, 3, 4]).into_complete(), Some(24));
//! assert_eq!(volume.call([2]).call([3]).call([4]).into_complete(), Some(24));
//!
//! // Partial results are ordinary values that can be reused.
//! let with_width = volume.call([2]);
//! assert!(matches!(with_width, Applied::Partial(_)));
//! ```

use std::fmt;
use std::num::NonZeroUsize;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::error::{FunctionalError, Result};

/// Number of bound arguments stored inline before spilling to the heap.
///
/// Arity 1, 2 and 3 functions never allocate while accumulating arguments.
const INLINE_ARGUMENTS: usize = 3;

type Arguments<A> = SmallVec<[A; INLINE_ARGUMENTS]>;

/// What a curried function does with arguments supplied beyond its arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Excess {
    /// Invoke the function with exactly `arity` arguments; the rest are dropped.
    Drop,
    /// Invoke the function with every accumulated argument.
    Forward,
}

/// A function converted into a chain of partial applications.
///
/// Each partial application is a fresh immutable value over its own argument
/// buffer; nothing is shared between separate `call`s except the underlying
/// function.
pub struct Curried<A, R> {
    function: Rc<dyn Fn(&[A]) -> R>,
    arity: NonZeroUsize,
    excess: Excess,
    bound: Arguments<A>,
}

/// The outcome of calling a [`Curried`] function.
pub enum Applied<A, R> {
    /// Not enough arguments yet; holds the continuation.
    Partial(Curried<A, R>),
    /// The underlying function ran and produced this result.
    Complete(R),
}

/// Curries `function` with the given arity.
///
/// Arguments beyond `arity` are dropped when the function is finally invoked.
///
/// # Errors
///
/// Returns [`FunctionalError::ArityUndetermined`] when `arity` is `None` or zero.
///
/// # Examples
///
/// ```rust
/// use curlew::compose::curry;
/// use curlew::FunctionalError;
///
/// let add = curry(|numbers: &[i32]| numbers[0] + numbers[1], 2).unwrap();
/// assert_eq!(add.call([1]).call([2]).into_complete(), Some(3));
///
/// let unknown = curry(|numbers: &[i32]| numbers.len(), None);
/// assert_eq!(unknown.err(), Some(FunctionalError::ArityUndetermined));
/// ```
pub fn curry<A, R, F>(function: F, arity: impl Into<Option<usize>>) -> Result<Curried<A, R>>
where
    A: Clone,
    F: Fn(&[A]) -> R + 'static,
{
    Curried::new(arity, function)
}

impl<A: Clone, R> Curried<A, R> {
    /// Creates a curried function that drops arguments beyond `arity`.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionalError::ArityUndetermined`] when `arity` is `None` or zero.
    pub fn new<F>(arity: impl Into<Option<usize>>, function: F) -> Result<Self>
    where
        F: Fn(&[A]) -> R + 'static,
    {
        let arity = arity
            .into()
            .and_then(NonZeroUsize::new)
            .ok_or_else(|| {
                tracing::debug!("rejected curry without a usable arity");
                FunctionalError::ArityUndetermined
            })?;
        Ok(Self::fixed(arity, function))
    }

    /// Creates a curried function from an arity known to be non-zero.
    ///
    /// This is the constructor the [`curry!`](crate::curry) macro expands to.
    pub fn fixed<F>(arity: NonZeroUsize, function: F) -> Self
    where
        F: Fn(&[A]) -> R + 'static,
    {
        Self {
            function: Rc::new(function),
            arity,
            excess: Excess::Drop,
            bound: SmallVec::new(),
        }
    }

    /// Creates a curried function that forwards every argument once at least
    /// `min_arity` have been accumulated.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionalError::ArityUndetermined`] when `min_arity` is zero.
    pub fn variadic<F>(min_arity: usize, function: F) -> Result<Self>
    where
        F: Fn(&[A]) -> R + 'static,
    {
        Ok(Self::new(min_arity, function)?.with_excess(Excess::Forward))
    }

    /// Replaces the excess-argument policy.
    #[must_use]
    pub fn with_excess(mut self, excess: Excess) -> Self {
        self.excess = excess;
        self
    }

    /// The declared arity.
    pub const fn arity(&self) -> usize {
        self.arity.get()
    }

    /// The excess-argument policy.
    pub const fn excess(&self) -> Excess {
        self.excess
    }

    /// The arguments accumulated so far.
    pub fn bound(&self) -> &[A] {
        &self.bound
    }

    /// How many more arguments are needed before the function runs.
    pub fn remaining(&self) -> usize {
        self.arity().saturating_sub(self.bound.len())
    }

    /// Supplies arguments.
    ///
    /// - No arguments: returns an identical partial (the function is not run).
    /// - Fewer than [`remaining`](Self::remaining): returns a new partial.
    /// - Otherwise: runs the function on the accumulated arguments.
    pub fn call<I>(&self, arguments: I) -> Applied<A, R>
    where
        I: IntoIterator<Item = A>,
    {
        let mut merged = self.bound.clone();
        let before = merged.len();
        merged.extend(arguments);

        if merged.len() == before {
            return Applied::Partial(self.clone());
        }
        if merged.len() < self.arity() {
            return Applied::Partial(Self {
                function: Rc::clone(&self.function),
                arity: self.arity,
                excess: self.excess,
                bound: merged,
            });
        }

        let used = match self.excess {
            Excess::Drop => &merged[..self.arity()],
            Excess::Forward => &merged[..],
        };
        Applied::Complete((self.function)(used))
    }

    /// Supplies a single argument.
    pub fn apply(&self, argument: A) -> Applied<A, R> {
        self.call(std::iter::once(argument))
    }

    /// Runs the function on the bound arguments without waiting for the
    /// arity. Only valid for functions that accept any number of arguments.
    #[cfg(feature = "dynamic")]
    pub(crate) fn run_bound(&self) -> R {
        (self.function)(&self.bound)
    }
}

impl<A: Clone, R> Clone for Curried<A, R> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
            arity: self.arity,
            excess: self.excess,
            bound: self.bound.clone(),
        }
    }
}

impl<A, R> Curried<A, R> {
    /// Returns `true` if both values share the same underlying function.
    pub fn same_function(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.function, &other.function)
    }
}

impl<A: fmt::Debug, R> fmt::Debug for Curried<A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Curried")
            .field("arity", &self.arity)
            .field("excess", &self.excess)
            .field("bound", &self.bound)
            .finish_non_exhaustive()
    }
}

impl<A: Clone, R> Applied<A, R> {
    /// Supplies more arguments.
    ///
    /// A complete result stays complete; the arguments are dropped, matching
    /// the drop-excess policy of [`curry`].
    #[must_use]
    pub fn call<I>(self, arguments: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        match self {
            Self::Partial(curried) => curried.call(arguments),
            complete @ Self::Complete(_) => complete,
        }
    }

    /// Returns `true` if the underlying function has run.
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// Returns the result if the underlying function has run.
    pub fn into_complete(self) -> Option<R> {
        match self {
            Self::Complete(result) => Some(result),
            Self::Partial(_) => None,
        }
    }

    /// Returns the continuation if more arguments are needed.
    pub fn into_partial(self) -> Option<Curried<A, R>> {
        match self {
            Self::Partial(curried) => Some(curried),
            Self::Complete(_) => None,
        }
    }
}

impl<A: fmt::Debug, R: fmt::Debug> fmt::Debug for Applied<A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Partial(curried) => formatter.debug_tuple("Partial").field(curried).finish(),
            Self::Complete(result) => formatter.debug_tuple("Complete").field(result).finish(),
        }
    }
}
