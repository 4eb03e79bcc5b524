//! Partial application with placeholder substitution.
//!
//! A [`Partial`] pre-fills some argument positions of a function over an
//! argument slice and leaves [`Slot::Hole`]s to be filled at call time. Rest
//! arguments fill holes left to right; anything left over is appended.

use std::fmt;
use std::rc::Rc;

use super::utils::Placeholder;
use crate::error::{FunctionalError, Result};

/// One argument position of a [`Partial`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot<A> {
    /// A value fixed when the partial was built.
    Bound(A),
    /// Filled by the next unused call argument.
    Hole,
}

impl<A> From<Placeholder> for Slot<A> {
    fn from(_: Placeholder) -> Self {
        Self::Hole
    }
}

/// A function with some of its arguments already supplied.
pub struct Partial<A, R> {
    function: Rc<dyn Fn(&[A]) -> R>,
    slots: Rc<[Slot<A>]>,
}

/// Builds a [`Partial`] from a function and its slot layout.
///
/// # Examples
///
/// ```rust
/// use curlew::compose::{Slot, partial};
///
/// let subtract = |numbers: &[i32]| numbers[0] - numbers[1];
///
/// let minus_two = partial(subtract, [Slot::Hole, Slot::Bound(2)]);
/// assert_eq!(minus_two.call([1]), Ok(-1));
///
/// let one_minus = partial(subtract, [Slot::Bound(1), Slot::Hole]);
/// assert_eq!(one_minus.call([2]), Ok(-1));
/// ```
pub fn partial<A, R, F, S>(function: F, slots: S) -> Partial<A, R>
where
    A: Clone,
    F: Fn(&[A]) -> R + 'static,
    S: IntoIterator<Item = Slot<A>>,
{
    Partial {
        function: Rc::new(function),
        slots: slots.into_iter().collect(),
    }
}

impl<A: Clone, R> Partial<A, R> {
    /// Number of placeholders waiting for call arguments.
    pub fn holes(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Hole))
            .count()
    }

    /// The slot layout this partial was built with.
    pub fn slots(&self) -> &[Slot<A>] {
        &self.slots
    }

    /// Calls the function, filling placeholders from `rest` and appending
    /// any remaining arguments.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionalError::UnfilledPlaceholder`] if `rest` runs out
    /// before every placeholder has a value.
    pub fn call<I>(&self, rest: I) -> Result<R>
    where
        I: IntoIterator<Item = A>,
    {
        let mut rest = rest.into_iter();
        let mut arguments = Vec::with_capacity(self.slots.len());

        for (position, slot) in self.slots.iter().enumerate() {
            let argument = match slot {
                Slot::Bound(value) => value.clone(),
                Slot::Hole => rest
                    .next()
                    .ok_or(FunctionalError::UnfilledPlaceholder { position })?,
            };
            arguments.push(argument);
        }
        arguments.extend(rest);

        Ok((self.function)(&arguments))
    }
}

impl<A, R> Clone for Partial<A, R> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
            slots: Rc::clone(&self.slots),
        }
    }
}

impl<A: fmt::Debug, R> fmt::Debug for Partial<A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Partial")
            .field("slots", &self.slots)
            .finish_non_exhaustive()
    }
}

/// Partially applies arguments to a function over an argument slice.
///
/// Use `__` (double underscore) as a placeholder for positions that are
/// filled at call time.
///
/// **Important**: Do NOT import `curlew::compose::__`. The `__` is matched
/// as a literal token by the macro.
///
/// # Syntax
///
/// - `partial!(f, value, __)` fixes the first position
/// - `partial!(f, __, value)` fixes the second position
/// - `partial!(f, value)` fixes the first position; call arguments are appended
///
/// # Examples
///
/// ```
/// use curlew::partial;
///
/// fn divide(numbers: &[f64]) -> f64 {
///     numbers[0] / numbers[1]
/// }
///
/// let half = partial!(divide, __, 2.0);
/// assert_eq!(half.call([10.0]), Ok(5.0));
///
/// let ten_over = partial!(divide, 10.0);
/// assert_eq!(ten_over.call([4.0]), Ok(2.5));
/// ```
#[macro_export]
macro_rules! partial {
    (@slots [$($slots:expr),*]) => {
        [$($slots),*]
    };

    (@slots [$($slots:expr),*] __ $(, $($rest:tt)*)?) => {
        $crate::partial!(@slots [$($slots,)* $crate::compose::Slot::Hole] $($($rest)*)?)
    };

    (@slots [$($slots:expr),*] $value:expr $(, $($rest:tt)*)?) => {
        $crate::partial!(@slots [$($slots,)* $crate::compose::Slot::Bound($value)] $($($rest)*)?)
    };

    ($function:expr $(, $($arguments:tt)*)?) => {
        $crate::compose::partial($function, $crate::partial!(@slots [] $($($arguments)*)?))
    };
}
