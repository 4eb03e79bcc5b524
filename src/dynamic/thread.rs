//! Threading a value through named operations.

use super::registry::Registry;
use super::value::Value;
use crate::error::{FunctionalError, Result};

/// A value being threaded through registry functions.
///
/// Each [`call`](Thread::call) resolves an operation by name, injects the
/// current value (the needle) at the first [`Value::Placeholder`] among the
/// arguments, or appends it when there is none, and keeps the result as the
/// new needle.
///
/// # Examples
///
/// ```rust
/// use curlew::dynamic::{Registry, Value, thread};
///
/// let registry = Registry::core();
/// let result = thread(&registry, 5)
///     .call("add_by", [Value::Int(1)])
///     .and_then(|chain| chain.call("multiply_by", [Value::Int(2)]))
///     .and_then(|chain| chain.value());
/// assert_eq!(result, Ok(Value::Int(12)));
/// ```
#[derive(Debug, Clone)]
pub struct Thread<'r> {
    registry: &'r Registry,
    needle: Value,
}

/// Starts a thread at `needle`.
pub fn thread(registry: &Registry, needle: impl Into<Value>) -> Thread<'_> {
    Thread::new(registry, needle)
}

impl<'r> Thread<'r> {
    /// Starts a thread at `needle`, resolving operations in `registry`.
    pub fn new(registry: &'r Registry, needle: impl Into<Value>) -> Self {
        Self {
            registry,
            needle: needle.into(),
        }
    }

    /// Runs the operation `name` with `arguments` plus the needle.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionalError::UnknownOperation`] if `name` is not
    /// registered, or the error raised by the operation.
    pub fn call<I>(self, name: &str, arguments: I) -> Result<Self>
    where
        I: IntoIterator<Item = Value>,
    {
        let function = self
            .registry
            .resolve(name)
            .map_err(|_| FunctionalError::UnknownOperation {
                name: name.to_owned(),
            })?;

        let mut arguments: Vec<Value> = arguments.into_iter().collect();
        let injected = match arguments.iter_mut().find(|argument| argument.is_placeholder()) {
            Some(slot) => {
                *slot = self.needle;
                true
            }
            None => {
                arguments.push(self.needle);
                false
            }
        };
        tracing::trace!(
            operation = name,
            arguments = arguments.len(),
            injected,
            "threading value"
        );

        Ok(Self {
            registry: self.registry,
            needle: function.call(arguments)?,
        })
    }

    /// The current value, without realizing it.
    pub const fn needle(&self) -> &Value {
        &self.needle
    }

    /// Ends the thread, realizing the needle if it is a lazy sequence.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while realizing the sequence.
    pub fn value(self) -> Result<Value> {
        match self.needle {
            Value::Sequence(sequence) => sequence.realize().map(Value::from),
            other => Ok(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_receives_needle() {
        let registry = Registry::core();
        let result = thread(&registry, Value::list([1, 2, 3]))
            .and_then_call("concat", [Value::Placeholder, Value::list([4])]);
        assert_eq!(result, Ok(Value::list([1, 2, 3, 4])));
    }

    #[test]
    fn test_needle_is_appended_by_default() {
        let registry = Registry::core();
        let result = thread(&registry, Value::list([1, 2, 3]))
            .and_then_call("concat", [Value::list([0])]);
        assert_eq!(result, Ok(Value::list([0, 1, 2, 3])));
    }

    #[test]
    fn test_unknown_operation() {
        let registry = Registry::core();
        let error = thread(&registry, 1).call("shuffle", Vec::new()).err();
        assert_eq!(
            error,
            Some(FunctionalError::UnknownOperation {
                name: "shuffle".to_string()
            })
        );
    }

    impl Thread<'_> {
        fn and_then_call<const N: usize>(self, name: &str, arguments: [Value; N]) -> Result<Value> {
            self.call(name, arguments)?.value()
        }
    }
}
