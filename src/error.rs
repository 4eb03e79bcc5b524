//! Error types shared by every curlew module.
//!
//! All failures are local and synchronous: they are returned to the immediate
//! caller and never retried or swallowed.

use std::fmt;

/// Represents errors that can occur while building or running pipelines.
///
/// # Examples
///
/// ```rust
/// use curlew::FunctionalError;
///
/// let error = FunctionalError::UnknownOperation {
///     name: "shuffle".to_string(),
/// };
/// assert_eq!(format!("{error}"), "unknown operation `shuffle`");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionalError {
    /// A curried function was requested without a usable arity.
    ArityUndetermined,
    /// `compose` or `pipe` was called without any function.
    EmptyComposition {
        /// The combinator that was called (`"compose"` or `"pipe"`).
        combinator: &'static str,
    },
    /// A threaded operation name is not registered.
    UnknownOperation {
        /// The requested operation name.
        name: String,
    },
    /// A registry lookup missed.
    UnknownFunction {
        /// The requested function name.
        name: String,
    },
    /// A sequence adapter was handed something that cannot be iterated.
    InvalidSequenceType {
        /// The kind of value that was found instead.
        found: &'static str,
    },
    /// A partially applied function ran out of arguments for its placeholders.
    UnfilledPlaceholder {
        /// Index of the first placeholder without an argument.
        position: usize,
    },
    /// A dynamic function received a value of the wrong kind.
    TypeMismatch {
        /// The operation that rejected the value.
        operation: &'static str,
        /// The kind of value the operation accepts.
        expected: &'static str,
        /// The kind of value that was found.
        found: &'static str,
    },
    /// Checked integer arithmetic overflowed or divided by zero.
    Arithmetic {
        /// The operation that failed.
        operation: &'static str,
    },
}

impl fmt::Display for FunctionalError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArityUndetermined => {
                write!(formatter, "cannot curry a function without a known arity")
            }
            Self::EmptyComposition { combinator } => {
                write!(formatter, "{combinator} requires at least one function")
            }
            Self::UnknownOperation { name } => write!(formatter, "unknown operation `{name}`"),
            Self::UnknownFunction { name } => write!(formatter, "unknown function `{name}`"),
            Self::InvalidSequenceType { found } => {
                write!(formatter, "expected a list, string or sequence, found {found}")
            }
            Self::UnfilledPlaceholder { position } => {
                write!(formatter, "no argument left for the placeholder at position {position}")
            }
            Self::TypeMismatch {
                operation,
                expected,
                found,
            } => write!(formatter, "{operation}: expected {expected}, found {found}"),
            Self::Arithmetic { operation } => {
                write!(formatter, "{operation}: integer overflow or division by zero")
            }
        }
    }
}

impl std::error::Error for FunctionalError {}

/// A `Result` alias with [`FunctionalError`] as the error type.
pub type Result<T> = std::result::Result<T, FunctionalError>;

static_assertions::assert_impl_all!(FunctionalError: Send, Sync, std::error::Error);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_composition_display() {
        let error = FunctionalError::EmptyComposition { combinator: "pipe" };
        assert_eq!(format!("{error}"), "pipe requires at least one function");
    }

    #[test]
    fn test_type_mismatch_display() {
        let error = FunctionalError::TypeMismatch {
            operation: "add_by",
            expected: "number",
            found: "string",
        };
        assert_eq!(format!("{error}"), "add_by: expected number, found string");
    }

    #[test]
    fn test_error_equality() {
        let first = FunctionalError::UnknownFunction {
            name: "map".to_string(),
        };
        let second = FunctionalError::UnknownFunction {
            name: "map".to_string(),
        };
        let third = FunctionalError::UnknownOperation {
            name: "map".to_string(),
        };
        assert_eq!(first, second);
        assert_ne!(first, third);
    }
}
