//! The dynamically typed value model.

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use super::function::Function;
use super::sequence::Sequence;
use crate::compose::Placeholder;
use crate::error::{FunctionalError, Result};

/// An insertion-ordered map from [`Key`]s to values.
pub type Record = IndexMap<Key, Value>;

/// A dynamically typed value flowing through registry functions.
///
/// Collections are reference counted, so cloning a `Value` is cheap and never
/// copies elements.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    /// The absent value.
    #[default]
    Nil,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A single character, as produced by iterating a string.
    Char(char),
    /// An immutable string.
    Str(Rc<str>),
    /// An ordered list.
    List(Rc<Vec<Value>>),
    /// An insertion-ordered map.
    Map(Rc<Record>),
    /// A callable, possibly partially applied.
    Function(Function),
    /// A lazy sequence.
    Sequence(Sequence),
    /// The late-bound argument marker.
    Placeholder,
}

/// The hashable subset of [`Value`], used as map keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// A boolean key.
    Bool(bool),
    /// An integer key.
    Int(i64),
    /// A character key.
    Char(char),
    /// A string key.
    Str(Rc<str>),
}

// =============================================================================
// Value
// =============================================================================

impl Value {
    /// Builds a list value.
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        Self::List(Rc::new(items.into_iter().map(Into::into).collect()))
    }

    /// Builds a map value from key/value pairs. Later duplicates win.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use curlew::dynamic::Value;
    ///
    /// let record = Value::record([("id", Value::from(3)), ("name", Value::from("alex"))]);
    /// assert_eq!(record.type_name(), "map");
    /// ```
    pub fn record<K, V, I>(entries: I) -> Self
    where
        K: Into<Key>,
        V: Into<Self>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Map(Rc::new(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        ))
    }

    /// A short name of the value's kind, used in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Char(_) => "char",
            Self::Str(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Function(_) => "function",
            Self::Sequence(_) => "sequence",
            Self::Placeholder => "placeholder",
        }
    }

    /// Truthiness as used by predicates: `nil`, `false`, zero and empty
    /// collections are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Nil => false,
            Self::Bool(flag) => *flag,
            Self::Int(number) => *number != 0,
            Self::Float(number) => *number != 0.0,
            Self::Str(text) => !text.is_empty(),
            Self::List(items) => !items.is_empty(),
            Self::Map(entries) => !entries.is_empty(),
            Self::Char(_) | Self::Function(_) | Self::Sequence(_) | Self::Placeholder => true,
        }
    }

    /// Returns `true` for [`Value::Placeholder`].
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }

    /// Borrows the callable, or reports a type mismatch for `operation`.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionalError::TypeMismatch`] if the value is not a function.
    pub fn as_function(&self, operation: &'static str) -> Result<&Function> {
        match self {
            Self::Function(function) => Ok(function),
            other => Err(other.mismatch(operation, "function")),
        }
    }

    /// Reads the value as an integer.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionalError::TypeMismatch`] if the value is not an integer.
    pub fn as_int(&self, operation: &'static str) -> Result<i64> {
        match self {
            Self::Int(number) => Ok(*number),
            other => Err(other.mismatch(operation, "int")),
        }
    }

    /// Reads the value as a count (a non-negative integer).
    ///
    /// # Errors
    ///
    /// Returns [`FunctionalError::TypeMismatch`] if the value is not a
    /// non-negative integer.
    pub fn as_count(&self, operation: &'static str) -> Result<usize> {
        match self {
            Self::Int(number) => usize::try_from(*number).map_err(|_| FunctionalError::TypeMismatch {
                operation,
                expected: "non-negative int",
                found: "negative int",
            }),
            other => Err(other.mismatch(operation, "non-negative int")),
        }
    }

    /// Looks up `key` in a map, or an integer index in a list.
    ///
    /// Anything else, and any missing entry, yields `None`.
    pub fn get(&self, key: &Key) -> Option<&Self> {
        match (self, key) {
            (Self::Map(entries), _) => entries.get(key),
            (Self::List(items), Key::Int(index)) => {
                usize::try_from(*index).ok().and_then(|index| items.get(index))
            }
            _ => None,
        }
    }

    pub(crate) const fn mismatch(&self, operation: &'static str, expected: &'static str) -> FunctionalError {
        FunctionalError::TypeMismatch {
            operation,
            expected,
            found: self.type_name(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(formatter, "nil"),
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Int(number) => write!(formatter, "{number}"),
            Self::Float(number) => write!(formatter, "{number}"),
            Self::Char(character) => write!(formatter, "{character}"),
            Self::Str(text) => write!(formatter, "{text}"),
            Self::List(items) => {
                write!(formatter, "[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{item}")?;
                }
                write!(formatter, "]")
            }
            Self::Map(entries) => {
                write!(formatter, "{{")?;
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{key}: {value}")?;
                }
                write!(formatter, "}}")
            }
            Self::Function(function) => write!(formatter, "<function {}>", function.name()),
            Self::Sequence(_) => write!(formatter, "<sequence>"),
            Self::Placeholder => write!(formatter, "__"),
        }
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Int(i64::from(number))
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Self::Int(number)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Float(number)
    }
}

impl From<char> for Value {
    fn from(character: char) -> Self {
        Self::Char(character)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Str(text.into())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Str(text.into())
    }
}

impl From<Vec<Self>> for Value {
    fn from(items: Vec<Self>) -> Self {
        Self::List(Rc::new(items))
    }
}

impl From<Record> for Value {
    fn from(entries: Record) -> Self {
        Self::Map(Rc::new(entries))
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

impl From<Sequence> for Value {
    fn from(sequence: Sequence) -> Self {
        Self::Sequence(sequence)
    }
}

impl From<Placeholder> for Value {
    fn from(_: Placeholder) -> Self {
        Self::Placeholder
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        match key {
            Key::Bool(flag) => Self::Bool(flag),
            Key::Int(number) => Self::Int(number),
            Key::Char(character) => Self::Char(character),
            Key::Str(text) => Self::Str(text),
        }
    }
}

impl<V: Into<Self>> From<Option<V>> for Value {
    fn from(option: Option<V>) -> Self {
        option.map_or(Self::Nil, Into::into)
    }
}

// =============================================================================
// Key
// =============================================================================

impl TryFrom<&Value> for Key {
    type Error = FunctionalError;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Bool(flag) => Ok(Self::Bool(*flag)),
            Value::Int(number) => Ok(Self::Int(*number)),
            Value::Char(character) => Ok(Self::Char(*character)),
            Value::Str(text) => Ok(Self::Str(Rc::clone(text))),
            other => Err(other.mismatch("key", "bool, int, char or string")),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Int(number) => write!(formatter, "{number}"),
            Self::Char(character) => write!(formatter, "{character}"),
            Self::Str(text) => write!(formatter, "{text}"),
        }
    }
}

impl From<&str> for Key {
    fn from(text: &str) -> Self {
        Self::Str(text.into())
    }
}

impl From<i64> for Key {
    fn from(number: i64) -> Self {
        Self::Int(number)
    }
}

impl From<i32> for Key {
    fn from(number: i32) -> Self {
        Self::Int(i64::from(number))
    }
}

impl From<char> for Key {
    fn from(character: char) -> Self {
        Self::Char(character)
    }
}

impl From<bool> for Key {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

static_assertions::assert_not_impl_any!(Value: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Bool(flag) => serializer.serialize_bool(*flag),
            Self::Int(number) => serializer.serialize_i64(*number),
            Self::Char(character) => serializer.serialize_char(*character),
            Self::Str(text) => serializer.serialize_str(text),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::{Error, SerializeMap, SerializeSeq};

        match self {
            Self::Nil => serializer.serialize_unit(),
            Self::Bool(flag) => serializer.serialize_bool(*flag),
            Self::Int(number) => serializer.serialize_i64(*number),
            Self::Float(number) => serializer.serialize_f64(*number),
            Self::Char(character) => serializer.serialize_char(*character),
            Self::Str(text) => serializer.serialize_str(text),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries.iter() {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Self::Function(_) | Self::Sequence(_) | Self::Placeholder => Err(S::Error::custom(
                format!("cannot serialize a {}", self.type_name()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Nil, false)]
    #[case(Value::Bool(false), false)]
    #[case(Value::Int(0), false)]
    #[case(Value::from(""), false)]
    #[case(Value::list(Vec::<Value>::new()), false)]
    #[case(Value::Int(-1), true)]
    #[case(Value::from("0"), true)]
    #[case(Value::Char('x'), true)]
    fn test_truthiness(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(value.is_truthy(), expected);
    }

    #[test]
    fn test_key_conversion_rejects_floats() {
        assert_eq!(
            Key::try_from(&Value::Float(1.5)),
            Err(FunctionalError::TypeMismatch {
                operation: "key",
                expected: "bool, int, char or string",
                found: "float",
            })
        );
        assert_eq!(Key::try_from(&Value::from("id")), Ok(Key::from("id")));
    }

    #[test]
    fn test_get_on_maps_and_lists() {
        let record = Value::record([("id", 3)]);
        assert_eq!(record.get(&Key::from("id")), Some(&Value::Int(3)));
        assert_eq!(record.get(&Key::from("name")), None);

        let list = Value::list([10, 20]);
        assert_eq!(list.get(&Key::Int(1)), Some(&Value::Int(20)));
        assert_eq!(list.get(&Key::Int(-1)), None);
    }

    #[test]
    fn test_display_nested() {
        let value = Value::list([Value::from(1), Value::record([("a", 'b')])]);
        assert_eq!(value.to_string(), "[1, {a: b}]");
    }

    #[test]
    fn test_as_count_rejects_negative() {
        assert!(Value::Int(-2).as_count("take").is_err());
        assert_eq!(Value::Int(2).as_count("take"), Ok(2));
    }
}
