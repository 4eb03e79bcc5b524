//! Name-keyed function lookup.

use indexmap::IndexMap;

use super::catalog;
use super::function::Function;
use crate::error::{FunctionalError, Result};

/// A mapping from names to [`Function`]s.
///
/// Registration is override-by-name: registering an existing name replaces
/// the previous function.
///
/// # Examples
///
/// ```rust
/// use curlew::dynamic::{Registry, Value};
///
/// let registry = Registry::core();
/// let add_one = registry.resolve("add_by").unwrap().apply(Value::Int(1)).unwrap();
/// assert_eq!(add_one.type_name(), "function");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Registry {
    functions: IndexMap<String, Function>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the core catalog.
    pub fn core() -> Self {
        let mut registry = Self::new();
        catalog::install(&mut registry);
        registry
    }

    /// Registers `function` under `name`, returning the function it replaced.
    pub fn register(&mut self, name: &str, function: Function) -> Option<Function> {
        let previous = self.functions.insert(name.to_owned(), function);
        if previous.is_some() {
            tracing::debug!(name, "overriding registered function");
        }
        previous
    }

    /// Looks up a function by name.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionalError::UnknownFunction`] if nothing is registered
    /// under `name`.
    pub fn resolve(&self, name: &str) -> Result<Function> {
        self.functions
            .get(name)
            .cloned()
            .ok_or_else(|| FunctionalError::UnknownFunction {
                name: name.to_owned(),
            })
    }

    /// Returns `true` if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    /// Number of registered functions.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamic::Value;

    #[test]
    fn test_unknown_function() {
        assert_eq!(
            Registry::new().resolve("missing").err(),
            Some(FunctionalError::UnknownFunction {
                name: "missing".to_string()
            })
        );
    }

    #[test]
    fn test_register_overrides() {
        let mut registry = Registry::core();
        let size = registry.len();
        let shout = Function::new("identity", 1, |_: &[Value]| Ok(Value::from("!"))).unwrap();

        assert!(registry.register("identity", shout).is_some());
        assert_eq!(registry.len(), size);
        assert_eq!(
            registry.resolve("identity").unwrap().apply(Value::Int(1)),
            Ok(Value::from("!"))
        );
    }

    #[test]
    fn test_core_names_are_unique() {
        let registry = Registry::core();
        assert_eq!(registry.names().count(), registry.len());
        assert!(registry.contains("partition_by"));
        assert!(!registry.is_empty());
    }
}
