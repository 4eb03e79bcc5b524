//! Dynamically typed curried functions.

use std::fmt;
use std::num::NonZeroUsize;
use std::rc::Rc;

use super::value::Value;
use crate::compose::{Applied, Curried, Excess, Slot, partial};
use crate::error::Result;

/// A curried function over [`Value`]s.
///
/// Supplying fewer arguments than the arity returns a new
/// [`Value::Function`] holding the accumulated prefix; supplying enough runs
/// the function.
///
/// # Examples
///
/// ```rust
/// use curlew::dynamic::{Function, Value};
///
/// let subtract = Function::new("subtract", 2, |arguments: &[Value]| {
///     Ok(Value::Int(arguments[0].as_int("subtract")? - arguments[1].as_int("subtract")?))
/// })
/// .unwrap();
///
/// let from_ten = subtract.call([Value::Int(10)]).unwrap();
/// assert_eq!(from_ten.type_name(), "function");
/// assert_eq!(subtract.call([Value::Int(10), Value::Int(4)]), Ok(Value::Int(6)));
/// ```
#[derive(Clone)]
pub struct Function {
    name: Rc<str>,
    curried: Rc<Curried<Value, Result<Value>>>,
    ready: bool,
}

impl Function {
    /// Creates a function of fixed arity; extra arguments are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionalError::ArityUndetermined`](crate::FunctionalError::ArityUndetermined)
    /// when `arity` is zero.
    pub fn new<F>(name: &str, arity: usize, function: F) -> Result<Self>
    where
        F: Fn(&[Value]) -> Result<Value> + 'static,
    {
        Ok(Self::from_curried(name, Curried::new(arity, function)?))
    }

    /// Creates a function that runs once `min_arity` arguments are present and
    /// receives every argument supplied.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionalError::ArityUndetermined`](crate::FunctionalError::ArityUndetermined)
    /// when `min_arity` is zero.
    pub fn variadic<F>(name: &str, min_arity: usize, function: F) -> Result<Self>
    where
        F: Fn(&[Value]) -> Result<Value> + 'static,
    {
        Ok(Self::from_curried(
            name,
            Curried::variadic(min_arity, function)?,
        ))
    }

    /// Creates a function from an arity known to be non-zero.
    pub fn native<F>(name: &str, arity: NonZeroUsize, excess: Excess, function: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value> + 'static,
    {
        Self::from_curried(name, Curried::fixed(arity, function).with_excess(excess))
    }

    /// Creates a function that runs on every call, including a call without
    /// arguments, and receives whatever it was given.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use curlew::dynamic::{Function, Value};
    ///
    /// let arguments = Function::ready("arguments", |arguments: &[Value]| Ok(Value::from(arguments.to_vec())));
    /// assert_eq!(arguments.call(Vec::new()), Ok(Value::list(Vec::<Value>::new())));
    /// assert_eq!(arguments.call([Value::Int(1)]), Ok(Value::list([1])));
    /// ```
    pub fn ready<F>(name: &str, function: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value> + 'static,
    {
        Self {
            ready: true,
            ..Self::native(name, NonZeroUsize::MIN, Excess::Forward, function)
        }
    }

    /// Wraps an existing curried function.
    pub fn from_curried(name: &str, curried: Curried<Value, Result<Value>>) -> Self {
        Self {
            name: name.into(),
            curried: Rc::new(curried),
            ready: false,
        }
    }

    /// The name the function was created with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared (or minimum) arity.
    pub fn arity(&self) -> usize {
        self.curried.arity()
    }

    /// How many more arguments are needed before the function runs.
    ///
    /// Always zero for [`ready`](Self::ready) functions.
    pub fn remaining(&self) -> usize {
        if self.ready { 0 } else { self.curried.remaining() }
    }

    /// Supplies arguments.
    ///
    /// A call without arguments returns the function unchanged unless it is
    /// [`ready`](Self::ready), in which case it runs.
    ///
    /// # Errors
    ///
    /// Propagates the error of the underlying function.
    pub fn call<I>(&self, arguments: I) -> Result<Value>
    where
        I: IntoIterator<Item = Value>,
    {
        let mut arguments = arguments.into_iter().peekable();
        if self.ready && arguments.peek().is_none() {
            return self.curried.run_bound();
        }
        match self.curried.call(arguments) {
            Applied::Partial(curried) => Ok(Value::Function(Self {
                name: Rc::clone(&self.name),
                curried: Rc::new(curried),
                ready: self.ready,
            })),
            Applied::Complete(result) => result,
        }
    }

    /// Supplies a single argument.
    ///
    /// # Errors
    ///
    /// Propagates the error of the underlying function.
    pub fn apply(&self, argument: Value) -> Result<Value> {
        self.call(std::iter::once(argument))
    }

    /// Pre-fills arguments; every [`Value::Placeholder`] in `bound` is filled
    /// from the call arguments left to right and leftovers are appended.
    ///
    /// The result needs one argument per placeholder before it runs. Without
    /// placeholders it is [`ready`](Self::ready): calling it with no arguments
    /// runs the function on the bound values alone.
    pub fn partial<I>(&self, bound: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        let slots: Vec<Slot<Value>> = bound
            .into_iter()
            .map(|value| {
                if value.is_placeholder() {
                    Slot::Hole
                } else {
                    Slot::Bound(value)
                }
            })
            .collect();
        let target = self.clone();
        let filled = partial(
            move |arguments: &[Value]| target.call(arguments.iter().cloned()),
            slots,
        );
        let holes = filled.holes();
        let run = move |rest: &[Value]| filled.call(rest.iter().cloned())?;
        match NonZeroUsize::new(holes) {
            Some(min_arity) => Self::native(&self.name, min_arity, Excess::Forward, run),
            None => Self::ready(&self.name, run),
        }
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.curried.same_function(&other.curried) && self.curried.bound() == other.curried.bound()
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Function")
            .field("name", &self.name)
            .field("arity", &self.curried.arity())
            .field("ready", &self.ready)
            .field("bound", &self.curried.bound())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FunctionalError;

    fn subtract() -> Function {
        Function::new("subtract", 2, |arguments: &[Value]| {
            Ok(Value::Int(
                arguments[0].as_int("subtract")? - arguments[1].as_int("subtract")?,
            ))
        })
        .unwrap()
    }

    #[test]
    fn test_partial_result_is_a_function_value() {
        let partial = subtract().apply(Value::Int(10)).unwrap();
        let Value::Function(from_ten) = partial else {
            panic!("expected a function");
        };
        assert_eq!(from_ten.remaining(), 1);
        assert_eq!(from_ten.apply(Value::Int(3)), Ok(Value::Int(7)));
    }

    #[test]
    fn test_errors_propagate() {
        let result = subtract().call([Value::from("a"), Value::Int(1)]);
        assert!(matches!(result, Err(FunctionalError::TypeMismatch { .. })));
    }

    #[test]
    fn test_placeholder_partial() {
        let minus_two = subtract().partial([Value::Placeholder, Value::Int(2)]);
        let one_minus = subtract().partial([Value::Int(1), Value::Placeholder]);
        assert_eq!(minus_two.apply(Value::Int(1)), Ok(Value::Int(-1)));
        assert_eq!(one_minus.apply(Value::Int(2)), Ok(Value::Int(-1)));
    }

    #[test]
    fn test_fully_bound_partial_runs_without_arguments() {
        let one_minus_two = subtract().partial([Value::Int(1), Value::Int(2)]);
        assert_eq!(one_minus_two.remaining(), 0);
        assert_eq!(one_minus_two.call(Vec::new()), Ok(Value::Int(-1)));
        assert_eq!(one_minus_two.call([Value::Int(9)]), Ok(Value::Int(-1)));
    }

    #[test]
    fn test_call_without_arguments_keeps_ordinary_functions() {
        let untouched = subtract().call(Vec::new()).unwrap();
        let Value::Function(untouched) = untouched else {
            panic!("expected a function");
        };
        assert_eq!(untouched.remaining(), 2);
    }

    #[test]
    fn test_functions_nest_inside_bound_arguments() {
        let apply_to_three = Function::new("apply_to_three", 2, |arguments: &[Value]| {
            arguments[0].as_function("apply_to_three")?.apply(arguments[1].clone())
        })
        .unwrap();
        let minus_two = subtract().partial([Value::Placeholder, Value::Int(2)]);
        let waiting = apply_to_three.apply(Value::Function(minus_two)).unwrap();
        let Value::Function(waiting) = waiting else {
            panic!("expected a function");
        };
        assert_eq!(waiting.apply(Value::Int(3)), Ok(Value::Int(1)));
        assert!(std::mem::size_of::<Value>() <= 48);
    }

    #[test]
    fn test_equality_tracks_bound_arguments() {
        let function = subtract();
        assert_eq!(function, function.clone());
        let bound = function.apply(Value::Int(1)).unwrap();
        assert_ne!(Value::Function(function), bound);
    }
}
