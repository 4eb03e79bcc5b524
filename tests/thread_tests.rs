//! Integration tests for threading values through registry operations.

#![cfg(feature = "dynamic")]

use curlew::FunctionalError;
use curlew::dynamic::{Function, Registry, Thread, Value, thread};
use rstest::{fixture, rstest};

#[fixture]
fn registry() -> Registry {
    Registry::core()
}

// =============================================================================
// Chaining
// =============================================================================

#[rstest]
fn test_add_then_multiply(registry: Registry) {
    let result = thread(&registry, 5)
        .call("add_by", [Value::Int(1)])
        .and_then(|chain| chain.call("multiply_by", [Value::Int(2)]))
        .and_then(Thread::value);
    assert_eq!(result, Ok(Value::Int(12)));
}

#[rstest]
fn test_placeholder_selects_the_argument_position(registry: Registry) {
    let divided = thread(&registry, 10)
        .call("divide_by", [Value::Placeholder, Value::Int(100)])
        .and_then(Thread::value);
    assert_eq!(divided, Ok(Value::Int(10)));

    let appended = thread(&registry, 10)
        .call("divide_by", [Value::Int(100)])
        .and_then(Thread::value);
    assert_eq!(appended, Ok(Value::Float(0.1)));
}

#[rstest]
fn test_lazy_steps_are_realized_at_the_end(registry: Registry) {
    let is_odd = registry.resolve("is_odd").unwrap();
    let square = Function::new("square", 1, |arguments: &[Value]| {
        let number = arguments[0].as_int("square")?;
        Ok(Value::Int(number * number))
    })
    .unwrap();

    let chain = thread(&registry, Value::list([1, 2, 3, 4, 5, 6, 7]))
        .call("lazy", Vec::new())
        .and_then(|chain| chain.call("filter", [Value::Function(is_odd)]))
        .and_then(|chain| chain.call("map", [Value::Function(square)]))
        .and_then(|chain| chain.call("take", [Value::Int(3)]))
        .unwrap();

    assert_eq!(chain.needle().type_name(), "sequence");
    assert_eq!(chain.value(), Ok(Value::list([1, 9, 25])));
}

#[rstest]
fn test_infinite_source_bounded_in_the_chain(registry: Registry) {
    let double = registry
        .resolve("multiply_by")
        .and_then(|multiply| multiply.apply(Value::Int(2)))
        .unwrap();

    let powers = thread(&registry, 1)
        .call("iterate", [double])
        .and_then(|chain| chain.call("take", [Value::Int(5)]))
        .and_then(Thread::value);
    assert_eq!(powers, Ok(Value::list([1, 2, 4, 8, 16])));
}

#[rstest]
fn test_custom_registrations_are_threadable(mut registry: Registry) {
    let shout = Function::new("shout", 1, |arguments: &[Value]| {
        Ok(Value::from(format!("{}!", arguments[0])))
    })
    .unwrap();
    registry.register("shout", shout);

    let result = thread(&registry, "hey")
        .call("shout", Vec::new())
        .and_then(|chain| chain.call("reverse", Vec::new()))
        .and_then(Thread::value);
    assert_eq!(result, Ok(Value::from("!yeh")));
}

// =============================================================================
// Failures
// =============================================================================

#[rstest]
fn test_unknown_operation(registry: Registry) {
    let result = thread(&registry, 1).call("explode", Vec::new());
    assert_eq!(
        result.err(),
        Some(FunctionalError::UnknownOperation {
            name: "explode".to_string()
        })
    );
}

#[rstest]
fn test_operation_errors_stop_the_chain(registry: Registry) {
    let result = thread(&registry, "text")
        .call("add_by", [Value::Int(1)])
        .and_then(|chain| chain.call("multiply_by", [Value::Int(2)]));
    assert_eq!(
        result.err(),
        Some(FunctionalError::TypeMismatch {
            operation: "add_by",
            expected: "number",
            found: "string",
        })
    );
}
