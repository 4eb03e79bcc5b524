use num_traits::{Bounded, CheckedAdd, Zero};

use super::Cursor;

/// Element types a [`Range`] can count in.
pub trait Step: Copy + PartialOrd + Zero + Bounded {
    /// `self + step`, or `None` once the sum leaves the type's range.
    fn forward(self, step: Self) -> Option<Self>;
}

macro_rules! checked_step {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Step for $integer {
                #[inline]
                fn forward(self, step: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &step)
                }
            }
        )*
    };
}

checked_step!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! finite_step {
    ($($float:ty),* $(,)?) => {
        $(
            impl Step for $float {
                #[inline]
                fn forward(self, step: Self) -> Option<Self> {
                    let next = self + step;
                    next.is_finite().then_some(next)
                }
            }
        )*
    };
}

finite_step!(f32, f64);

/// An arithmetic progression over an integer or floating point type.
///
/// With a non-negative step the range is valid while `current <= to`; with a
/// negative step it counts down and is valid while `current >= to`. Overflow
/// of the element type ends the range. A zero step repeats `from` forever.
///
/// Float progressions accumulate the step, so rounding error builds up along
/// the range the same way repeated addition does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range<T> {
    from: T,
    to: T,
    step: T,
    current: Option<T>,
    done: bool,
}

impl<T> Range<T>
where
    T: Step,
{
    /// Creates the progression `from, from + step, ...` bounded by `to`.
    pub fn new(from: T, to: T, step: T) -> Self {
        Self {
            from,
            to,
            step,
            current: None,
            done: false,
        }
    }

    /// Creates a progression bounded only by the limits of `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use curlew::lazy::{Cursor, Range};
    ///
    /// assert_eq!(Range::unbounded(0_i32, 3).take(3).realize(), vec![0, 3, 6]);
    /// assert_eq!(Range::unbounded(0_i32, -1).take(2).realize(), vec![0, -1]);
    /// ```
    pub fn unbounded(from: T, step: T) -> Self {
        let to = if step < T::zero() {
            T::min_value()
        } else {
            T::max_value()
        };
        Self::new(from, to, step)
    }

    fn within_bounds(&self, value: T) -> bool {
        if self.step < T::zero() {
            value >= self.to
        } else {
            value <= self.to
        }
    }
}

impl<T> Cursor for Range<T>
where
    T: Step,
{
    type Item = T;

    fn reset(&mut self) {
        self.current = None;
        self.done = false;
    }

    fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }
        let next = match self.current {
            None => Some(self.from),
            Some(current) => current.forward(self.step),
        };
        self.current = next.filter(|value| self.within_bounds(*value));
        self.done = self.current.is_none();
        !self.done
    }

    fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }
}

/// Creates the progression `from, from + step, ...` bounded by `to`.
///
/// # Examples
///
/// ```rust
/// use curlew::lazy::{Cursor, range};
///
/// assert_eq!(range(1, 10, 3).realize(), vec![1, 4, 7, 10]);
/// assert_eq!(range(5, 1, -2).realize(), vec![5, 3, 1]);
/// ```
pub fn range<T>(from: T, to: T, step: T) -> Range<T>
where
    T: Step,
{
    Range::new(from, to, step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inclusive_upper_bound() {
        assert_eq!(range(0, 4, 2).realize(), vec![0, 2, 4]);
        assert_eq!(range(0, 5, 2).realize(), vec![0, 2, 4]);
    }

    #[test]
    fn test_empty_when_from_exceeds_to() {
        let mut empty = range(3_u8, 1, 1);
        assert!(!empty.advance());
        assert_eq!(empty.current(), None);
    }

    #[test]
    fn test_overflow_terminates() {
        assert_eq!(range(250_u8, u8::MAX, 3).realize(), vec![250, 253]);
        assert_eq!(Range::unbounded(i8::MAX - 1, 1).realize(), vec![126, 127]);
    }

    #[test]
    fn test_fractional_steps() {
        assert_eq!(range(0.0_f64, 2.0, 0.5).realize(), vec![0.0, 0.5, 1.0, 1.5, 2.0]);
        assert_eq!(range(1.0_f32, -0.5, -0.75).realize(), vec![1.0, 0.25, -0.5]);
    }

    #[test]
    fn test_float_overflow_terminates() {
        assert_eq!(Range::unbounded(f64::MAX, f64::MAX).realize(), vec![f64::MAX]);
    }

    #[test]
    fn test_reset_returns_to_from() {
        let mut counting = range(1, 3, 1);
        assert!(counting.advance());
        assert!(counting.advance());
        counting.reset();
        assert!(counting.advance());
        assert_eq!(counting.current(), Some(&1));
    }
}
