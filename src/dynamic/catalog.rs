//! The core function catalog installed by [`Registry::core`](super::Registry::core).
//!
//! Sequence functions stay lazy when handed a [`Value::Sequence`] and return
//! concrete lists for lists, strings and maps. Every function takes its
//! configuration first and the data last, so partial applications thread
//! naturally.

use std::cell::{OnceCell, RefCell};
use std::num::NonZeroUsize;
use std::rc::Rc;

use super::function::Function;
use super::registry::Registry;
use super::sequence::Sequence;
use super::value::{Key, Record, Value};
use crate::compose::{Composed, Excess, Unary, compose, pipe, unary};
use crate::error::{FunctionalError, Result};

type Native = fn(&[Value]) -> Result<Value>;

const CATALOG: &[(&str, usize, Excess, Native)] = &[
    ("identity", 1, Excess::Drop, identity),
    ("always", 1, Excess::Drop, always),
    ("add_by", 2, Excess::Drop, add_by),
    ("subtract_by", 2, Excess::Drop, subtract_by),
    ("multiply_by", 2, Excess::Drop, multiply_by),
    ("divide_by", 2, Excess::Drop, divide_by),
    ("is_odd", 1, Excess::Drop, is_odd),
    ("is_even", 1, Excess::Drop, is_even),
    ("not", 1, Excess::Drop, not),
    ("once", 1, Excess::Drop, once),
    ("memoize", 2, Excess::Forward, memoize),
    ("juxt", 1, Excess::Forward, juxt),
    ("sum", 1, Excess::Drop, sum),
    ("count", 1, Excess::Drop, count),
    ("first", 1, Excess::Drop, first),
    ("last", 1, Excess::Drop, last),
    ("reverse", 1, Excess::Drop, reverse),
    ("concat", 1, Excess::Forward, concat),
    ("map", 2, Excess::Forward, map),
    ("mapkv", 2, Excess::Forward, mapkv),
    ("mapcat", 2, Excess::Forward, mapcat),
    ("filter", 2, Excess::Drop, filter),
    ("filterkv", 2, Excess::Drop, filterkv),
    ("remove", 2, Excess::Drop, remove),
    ("reduce", 2, Excess::Forward, reduce),
    ("reduce_right", 2, Excess::Forward, reduce_right),
    ("reducekv", 3, Excess::Drop, reducekv),
    ("take", 2, Excess::Drop, take),
    ("skip", 2, Excess::Drop, skip),
    ("take_while", 2, Excess::Drop, take_while),
    ("take_until", 2, Excess::Drop, take_until),
    ("skip_while", 2, Excess::Drop, skip_while),
    ("skip_until", 2, Excess::Drop, skip_until),
    ("partition_by", 2, Excess::Drop, partition_by),
    ("index_by", 3, Excess::Drop, index_by),
    ("group_by", 3, Excess::Drop, group_by),
    ("prop", 2, Excess::Drop, prop),
    ("pick", 1, Excess::Drop, pick),
    ("omit", 1, Excess::Drop, omit),
    ("where", 1, Excess::Drop, where_matches),
    ("project", 2, Excess::Drop, project),
    ("lazy", 1, Excess::Drop, lazy),
    ("value", 1, Excess::Drop, value),
    ("range", 3, Excess::Drop, range),
    ("iterate", 2, Excess::Drop, iterate),
    ("cycle", 1, Excess::Drop, cycle),
    ("compose", 1, Excess::Forward, compose_functions),
    ("pipe", 1, Excess::Forward, pipe_functions),
    ("partial", 1, Excess::Forward, partial),
];

pub(super) fn install(registry: &mut Registry) {
    for &(name, arity, excess, native) in CATALOG {
        let arity = NonZeroUsize::new(arity).unwrap_or(NonZeroUsize::MIN);
        registry.register(name, Function::native(name, arity, excess, native));
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Runs a sequence adapter lazily for sequences and eagerly for concrete input.
fn through_sequence<F>(source: &Value, adapt: F) -> Result<Value>
where
    F: FnOnce(&Sequence) -> Sequence,
{
    let adapted = adapt(&Sequence::from_value(source)?);
    if matches!(source, Value::Sequence(_)) {
        Ok(Value::Sequence(adapted))
    } else {
        adapted.realize().map(Value::from)
    }
}

fn elements(source: &Value) -> Result<Vec<Value>> {
    match source {
        Value::List(items) => Ok(items.as_ref().clone()),
        other => Sequence::from_value(other)?.realize(),
    }
}

fn native<F>(name: &str, function: F) -> Value
where
    F: Fn(&[Value]) -> Result<Value> + 'static,
{
    Value::Function(Function::native(name, NonZeroUsize::MIN, Excess::Drop, function))
}

#[allow(clippy::cast_precision_loss)]
fn to_float(number: &Value) -> f64 {
    match number {
        Value::Int(integer) => *integer as f64,
        Value::Float(float) => *float,
        _ => 0.0,
    }
}

/// `target <op> amount`, checked for integers and widened to floats when
/// either side is a float.
fn arithmetic(
    operation: &'static str,
    amount: &Value,
    target: &Value,
    integer: fn(i64, i64) -> Option<i64>,
    float: fn(f64, f64) -> f64,
) -> Result<Value> {
    match (target, amount) {
        (Value::Int(left), Value::Int(right)) => integer(*left, *right)
            .map(Value::Int)
            .ok_or(FunctionalError::Arithmetic { operation }),
        (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
            Ok(Value::Float(float(to_float(target), to_float(amount))))
        }
        (Value::Int(_) | Value::Float(_), other) | (other, _) => {
            Err(other.mismatch(operation, "number"))
        }
    }
}

// =============================================================================
// Basics and arithmetic
// =============================================================================

fn identity(arguments: &[Value]) -> Result<Value> {
    Ok(arguments[0].clone())
}

fn always(arguments: &[Value]) -> Result<Value> {
    let constant = arguments[0].clone();
    Ok(Value::Function(Function::ready("always", move |_| Ok(constant.clone()))))
}

fn add_by(arguments: &[Value]) -> Result<Value> {
    arithmetic("add_by", &arguments[0], &arguments[1], i64::checked_add, |x, n| x + n)
}

fn subtract_by(arguments: &[Value]) -> Result<Value> {
    arithmetic("subtract_by", &arguments[0], &arguments[1], i64::checked_sub, |x, n| x - n)
}

fn multiply_by(arguments: &[Value]) -> Result<Value> {
    arithmetic("multiply_by", &arguments[0], &arguments[1], i64::checked_mul, |x, n| x * n)
}

/// Integer division stays integral when exact and widens to a float otherwise.
fn divide_by(arguments: &[Value]) -> Result<Value> {
    const OPERATION: &str = "divide_by";
    match (&arguments[1], &arguments[0]) {
        (Value::Int(target), Value::Int(amount)) => match target.checked_rem(*amount) {
            Some(0) => target
                .checked_div(*amount)
                .map(Value::Int)
                .ok_or(FunctionalError::Arithmetic { operation: OPERATION }),
            Some(_) => Ok(Value::Float(to_float(&arguments[1]) / to_float(&arguments[0]))),
            None => Err(FunctionalError::Arithmetic { operation: OPERATION }),
        },
        _ => arithmetic(OPERATION, &arguments[0], &arguments[1], i64::checked_div, |x, n| x / n),
    }
}

fn is_odd(arguments: &[Value]) -> Result<Value> {
    Ok(Value::Bool(arguments[0].as_int("is_odd")? % 2 != 0))
}

fn is_even(arguments: &[Value]) -> Result<Value> {
    Ok(Value::Bool(arguments[0].as_int("is_even")? % 2 == 0))
}

/// Negates a predicate, or builds an inequality test against a plain value.
fn not(arguments: &[Value]) -> Result<Value> {
    match &arguments[0] {
        Value::Function(predicate) => {
            let predicate = predicate.clone();
            Ok(native("not", move |arguments| {
                Ok(Value::Bool(!predicate.call(arguments.iter().cloned())?.is_truthy()))
            }))
        }
        unexpected => {
            let unexpected = unexpected.clone();
            Ok(native("not", move |arguments| {
                Ok(Value::Bool(arguments[0] != unexpected))
            }))
        }
    }
}

fn sum(arguments: &[Value]) -> Result<Value> {
    elements(&arguments[0])?
        .iter()
        .try_fold(Value::Int(0), |total, number| {
            arithmetic("sum", number, &total, i64::checked_add, |x, n| x + n)
        })
}

fn count(arguments: &[Value]) -> Result<Value> {
    let length = match &arguments[0] {
        Value::Str(text) => text.chars().count(),
        Value::List(items) => items.len(),
        Value::Map(entries) => entries.len(),
        Value::Sequence(sequence) => sequence.realize()?.len(),
        other => {
            return Err(FunctionalError::InvalidSequenceType {
                found: other.type_name(),
            });
        }
    };
    i64::try_from(length)
        .map(Value::Int)
        .map_err(|_| FunctionalError::Arithmetic { operation: "count" })
}

// =============================================================================
// Collections
// =============================================================================

fn first(arguments: &[Value]) -> Result<Value> {
    let head = Sequence::from_value(&arguments[0])?.take(1).realize()?;
    Ok(Value::from(head.into_iter().next()))
}

fn last(arguments: &[Value]) -> Result<Value> {
    Ok(Value::from(elements(&arguments[0])?.pop()))
}

fn reverse(arguments: &[Value]) -> Result<Value> {
    if let Value::Str(text) = &arguments[0] {
        return Ok(Value::from(text.chars().rev().collect::<String>()));
    }
    let mut items = elements(&arguments[0])?;
    items.reverse();
    Ok(Value::from(items))
}

/// Joins lists into a list or strings into a string, depending on the first
/// argument; anything else is collected into a list.
fn concat(arguments: &[Value]) -> Result<Value> {
    match &arguments[0] {
        Value::List(_) | Value::Sequence(_) => {
            let mut joined = Vec::new();
            for part in arguments {
                match part {
                    Value::List(_) | Value::Sequence(_) => joined.extend(elements(part)?),
                    other => return Err(other.mismatch("concat", "list")),
                }
            }
            Ok(Value::from(joined))
        }
        Value::Str(_) | Value::Char(_) => {
            let mut joined = String::new();
            for part in arguments {
                match part {
                    Value::Str(text) => joined.push_str(text),
                    Value::Char(character) => joined.push(*character),
                    other => return Err(other.mismatch("concat", "string")),
                }
            }
            Ok(Value::from(joined))
        }
        _ => Ok(Value::from(arguments.to_vec())),
    }
}

/// `map(f, xs)` or `map(f, xs, ys, ...)`; several sources are zipped
/// positionally and the shortest governs the length.
fn map(arguments: &[Value]) -> Result<Value> {
    let function = arguments[0].as_function("map")?;
    map_over(function, &arguments[1..], Sequence::from_value)
}

/// `map` over `[key, value]` pairs: list positions, string positions or map
/// keys paired with the elements.
fn mapkv(arguments: &[Value]) -> Result<Value> {
    let function = arguments[0].as_function("mapkv")?;
    map_over(function, &arguments[1..], Sequence::entries)
}

fn map_over(function: &Function, sources: &[Value], view: fn(&Value) -> Result<Sequence>) -> Result<Value> {
    let sequences = sources.iter().map(view).collect::<Result<Vec<_>>>()?;
    let mapped = match sequences.as_slice() {
        [single] => single.map(function),
        several => Sequence::zip_map(function, several),
    };
    if sources.iter().any(|source| matches!(source, Value::Sequence(_))) {
        Ok(Value::Sequence(mapped))
    } else {
        mapped.realize().map(Value::from)
    }
}

/// Maps, then flattens the results one level.
fn mapcat(arguments: &[Value]) -> Result<Value> {
    let mut flattened = Vec::new();
    for part in elements(&map(arguments)?)? {
        match part {
            Value::List(_) | Value::Sequence(_) => flattened.extend(elements(&part)?),
            other => flattened.push(other),
        }
    }
    Ok(Value::from(flattened))
}

fn filter(arguments: &[Value]) -> Result<Value> {
    let predicate = arguments[0].as_function("filter")?;
    through_sequence(&arguments[1], |sequence| sequence.filter(predicate))
}

/// Keeps the `[key, value]` pairs accepted by the predicate, as a map from
/// key to value.
fn filterkv(arguments: &[Value]) -> Result<Value> {
    let predicate = arguments[0].as_function("filterkv")?;
    let mut kept = Record::new();
    for pair in Sequence::entries(&arguments[1])?.filter(predicate).realize()? {
        if let (Some(key), Some(field)) = (pair.get(&Key::Int(0)), pair.get(&Key::Int(1))) {
            kept.insert(Key::try_from(key)?, field.clone());
        }
    }
    Ok(Value::from(kept))
}

fn remove(arguments: &[Value]) -> Result<Value> {
    let predicate = arguments[0].as_function("remove")?;
    through_sequence(&arguments[1], |sequence| sequence.remove(predicate))
}

/// `reduce(f, xs)` seeds with the first element; `reduce(f, initial, xs)`
/// seeds with `initial`. Reducing nothing yields `nil`.
fn reduce(arguments: &[Value]) -> Result<Value> {
    fold("reduce", arguments, false)
}

/// `reduce` starting from the last element.
fn reduce_right(arguments: &[Value]) -> Result<Value> {
    fold("reduce_right", arguments, true)
}

fn fold(operation: &'static str, arguments: &[Value], from_right: bool) -> Result<Value> {
    let function = arguments[0].as_function(operation)?;
    let (initial, source) = match &arguments[1..] {
        [initial, source, ..] => (Some(initial.clone()), source),
        [source] => (None, source),
        [] => return Ok(Value::Nil),
    };

    let mut items = elements(source)?;
    if from_right {
        items.reverse();
    }
    let mut items = items.into_iter();
    let Some(seed) = initial.or_else(|| items.next()) else {
        return Ok(Value::Nil);
    };
    items.try_fold(seed, |accumulator, item| function.call([accumulator, item]))
}

/// `reducekv(f, initial, xs)` folds `f(accumulator, [key, value])`.
fn reducekv(arguments: &[Value]) -> Result<Value> {
    let function = arguments[0].as_function("reducekv")?;
    Sequence::entries(&arguments[2])?
        .realize()?
        .into_iter()
        .try_fold(arguments[1].clone(), |accumulator, pair| {
            function.call([accumulator, pair])
        })
}

fn take(arguments: &[Value]) -> Result<Value> {
    let limit = arguments[0].as_count("take")?;
    through_sequence(&arguments[1], |sequence| sequence.take(limit))
}

fn skip(arguments: &[Value]) -> Result<Value> {
    let count = arguments[0].as_count("skip")?;
    through_sequence(&arguments[1], |sequence| sequence.skip(count))
}

fn take_while(arguments: &[Value]) -> Result<Value> {
    let predicate = arguments[0].as_function("take_while")?;
    through_sequence(&arguments[1], |sequence| sequence.take_while(predicate))
}

fn take_until(arguments: &[Value]) -> Result<Value> {
    let predicate = arguments[0].as_function("take_until")?;
    through_sequence(&arguments[1], |sequence| sequence.take_until(predicate))
}

fn skip_while(arguments: &[Value]) -> Result<Value> {
    let predicate = arguments[0].as_function("skip_while")?;
    through_sequence(&arguments[1], |sequence| sequence.skip_while(predicate))
}

fn skip_until(arguments: &[Value]) -> Result<Value> {
    let predicate = arguments[0].as_function("skip_until")?;
    through_sequence(&arguments[1], |sequence| sequence.skip_until(predicate))
}

fn partition_by(arguments: &[Value]) -> Result<Value> {
    let key = arguments[0].as_function("partition_by")?;
    through_sequence(&arguments[1], |sequence| sequence.partition_by(key))
}

// =============================================================================
// Records
// =============================================================================

/// How a record contributes one level of an index path.
enum Selector {
    /// The value stored under a key.
    Field(Key),
    /// A function of the value stored under a key.
    Transformed(Key, Function),
    /// A function of the whole record.
    Computed(Function),
}

impl Selector {
    fn parse(selector: &Value) -> Result<Self> {
        match selector {
            Value::Function(function) => Ok(Self::Computed(function.clone())),
            other => Key::try_from(other).map(Self::Field),
        }
    }

    fn parse_all(keys: &Value) -> Result<Vec<Self>> {
        match keys {
            Value::List(selectors) => selectors.iter().map(Self::parse).collect(),
            Value::Map(transforms) => transforms
                .iter()
                .map(|(key, transform)| match transform {
                    Value::Function(function) => Ok(Self::Transformed(key.clone(), function.clone())),
                    other => Self::parse(other),
                })
                .collect(),
            single => Ok(vec![Self::parse(single)?]),
        }
    }

    fn select(&self, record: &Value) -> Result<Value> {
        match self {
            Self::Field(key) => Ok(record.get(key).cloned().unwrap_or_default()),
            Self::Transformed(key, function) => match record.get(key) {
                Some(field) => function.apply(field.clone()),
                None => Ok(Value::Nil),
            },
            Self::Computed(function) => function.apply(record.clone()),
        }
    }
}

/// What an index stores for each record.
enum Projection {
    Whole,
    Field(Key),
    Picked(Vec<Key>),
    Computed(Function),
}

impl Projection {
    fn parse(values: &Value) -> Result<Self> {
        match values {
            Value::Nil => Ok(Self::Whole),
            Value::Function(function) => Ok(Self::Computed(function.clone())),
            Value::List(_) => pick_keys(values).map(Self::Picked),
            other => Key::try_from(other).map(Self::Field),
        }
    }

    fn project(&self, record: &Value) -> Result<Value> {
        match self {
            Self::Whole => Ok(record.clone()),
            Self::Field(key) => Ok(record.get(key).cloned().unwrap_or_default()),
            Self::Picked(keys) => Ok(picked(record, keys)),
            Self::Computed(function) => function.apply(record.clone()),
        }
    }
}

fn insert_at(level: &mut Record, path: &[Key], value: Value, grouped: bool) {
    let Some((head, rest)) = path.split_first() else {
        return;
    };
    if rest.is_empty() {
        if !grouped {
            level.insert(head.clone(), value);
            return;
        }
        let slot = level
            .entry(head.clone())
            .or_insert_with(|| Value::from(Vec::<Value>::new()));
        match slot {
            Value::List(group) => Rc::make_mut(group).push(value),
            other => *other = Value::from(vec![value]),
        }
        return;
    }

    let slot = level
        .entry(head.clone())
        .or_insert_with(|| Value::from(Record::new()));
    if !matches!(slot, Value::Map(_)) {
        *slot = Value::from(Record::new());
    }
    if let Value::Map(nested) = slot {
        insert_at(Rc::make_mut(nested), rest, value, grouped);
    }
}

/// Shared body of `index_by` and `group_by`. Records missing a key are
/// skipped.
fn index(arguments: &[Value], grouped: bool) -> Result<Value> {
    let selectors = Selector::parse_all(&arguments[0])?;
    let projection = Projection::parse(&arguments[1])?;

    let mut indexed = Record::new();
    'records: for record in elements(&arguments[2])? {
        let mut path = Vec::with_capacity(selectors.len());
        for selector in &selectors {
            let key = selector.select(&record)?;
            if key == Value::Nil {
                continue 'records;
            }
            path.push(Key::try_from(&key)?);
        }
        let value = projection.project(&record)?;
        insert_at(&mut indexed, &path, value, grouped);
    }
    Ok(Value::from(indexed))
}

/// Maps each record's key to one value; later records win.
fn index_by(arguments: &[Value]) -> Result<Value> {
    index(arguments, false)
}

/// Maps each record's key to the list of values sharing it.
fn group_by(arguments: &[Value]) -> Result<Value> {
    index(arguments, true)
}

fn prop(arguments: &[Value]) -> Result<Value> {
    let key = Key::try_from(&arguments[0])?;
    Ok(arguments[1].get(&key).cloned().unwrap_or_default())
}

fn pick_keys(names: &Value) -> Result<Vec<Key>> {
    match names {
        Value::List(names) => names.iter().map(Key::try_from).collect(),
        single => Ok(vec![Key::try_from(single)?]),
    }
}

fn picked(record: &Value, keys: &[Key]) -> Value {
    Value::record(
        keys.iter()
            .filter_map(|key| record.get(key).map(|field| (key.clone(), field.clone()))),
    )
}

fn picker(keys: Vec<Key>) -> Function {
    Function::native("pick", NonZeroUsize::MIN, Excess::Drop, move |arguments| {
        Ok(picked(&arguments[0], &keys))
    })
}

fn pick(arguments: &[Value]) -> Result<Value> {
    Ok(Value::Function(picker(pick_keys(&arguments[0])?)))
}

/// A function dropping the named keys from a map.
fn omit(arguments: &[Value]) -> Result<Value> {
    let keys = pick_keys(&arguments[0])?;
    Ok(native("omit", move |arguments| match &arguments[0] {
        Value::Map(entries) => Ok(Value::from(
            entries
                .iter()
                .filter(|(key, _)| !keys.contains(key))
                .map(|(key, field)| (key.clone(), field.clone()))
                .collect::<Record>(),
        )),
        other => Err(other.mismatch("omit", "map")),
    }))
}

/// A predicate over records: every key of `conditions` must hold a value
/// equal to the expected one, or satisfy it when it is a function.
fn where_matches(arguments: &[Value]) -> Result<Value> {
    let Value::Map(conditions) = &arguments[0] else {
        return Err(arguments[0].mismatch("where", "map"));
    };
    let conditions = Rc::clone(conditions);
    Ok(native("where", move |arguments| {
        for (key, expected) in conditions.iter() {
            let field = arguments[0].get(key).cloned().unwrap_or_default();
            let holds = match expected {
                Value::Function(test) => test.apply(field)?.is_truthy(),
                expected => field == *expected,
            };
            if !holds {
                return Ok(Value::Bool(false));
            }
        }
        Ok(Value::Bool(true))
    }))
}

fn project(arguments: &[Value]) -> Result<Value> {
    let picker = picker(pick_keys(&arguments[0])?);
    through_sequence(&arguments[1], |sequence| sequence.map(&picker))
}

// =============================================================================
// Laziness and combinators
// =============================================================================

fn lazy(arguments: &[Value]) -> Result<Value> {
    Sequence::from_value(&arguments[0]).map(Value::Sequence)
}

fn value(arguments: &[Value]) -> Result<Value> {
    match &arguments[0] {
        Value::Sequence(sequence) => sequence.realize().map(Value::from),
        other => Ok(other.clone()),
    }
}

/// Integer bounds give an integer range; any float among them gives a float
/// range.
fn range(arguments: &[Value]) -> Result<Value> {
    match &arguments[..3] {
        [Value::Int(from), Value::Int(to), Value::Int(step)] => {
            Ok(Value::Sequence(Sequence::range(*from, *to, *step)))
        }
        bounds => {
            if let Some(other) = bounds
                .iter()
                .find(|bound| !matches!(bound, Value::Int(_) | Value::Float(_)))
            {
                return Err(other.mismatch("range", "number"));
            }
            Ok(Value::Sequence(Sequence::float_range(
                to_float(&bounds[0]),
                to_float(&bounds[1]),
                to_float(&bounds[2]),
            )))
        }
    }
}

fn iterate(arguments: &[Value]) -> Result<Value> {
    let function = arguments[0].as_function("iterate")?;
    Ok(Value::Sequence(Sequence::iterate(
        function.clone(),
        arguments[1].clone(),
    )))
}

fn cycle(arguments: &[Value]) -> Result<Value> {
    Ok(Value::Sequence(Sequence::from_value(&arguments[0])?.cycle()))
}

/// A function that runs `f` on its first call and replays that result on
/// every later call.
fn once(arguments: &[Value]) -> Result<Value> {
    let function = arguments[0].as_function("once")?.clone();
    let outcome: Rc<OnceCell<Result<Value>>> = Rc::new(OnceCell::new());
    Ok(Value::Function(Function::ready("once", move |arguments| {
        if let Some(done) = outcome.get() {
            return done.clone();
        }
        let result = function.call(arguments.iter().cloned());
        let _ = outcome.set(result.clone());
        result
    })))
}

/// `memoize(f, key_fn)` or `memoize(f, key_fn, limit)`: caches successful
/// results of `f` under `key_fn(arguments)`. With a limit the oldest entry
/// is evicted first.
fn memoize(arguments: &[Value]) -> Result<Value> {
    let function = arguments[0].as_function("memoize")?.clone();
    let cache_key = arguments[1].as_function("memoize")?.clone();
    let limit = match arguments.get(2) {
        None | Some(Value::Nil) => None,
        Some(limit) => Some(limit.as_count("memoize")?),
    };
    let cache: Rc<RefCell<Record>> = Rc::default();

    Ok(Value::Function(Function::native(
        "memoize",
        NonZeroUsize::MIN,
        Excess::Forward,
        move |arguments| {
            let key = Key::try_from(&cache_key.call(arguments.iter().cloned())?)?;
            if let Some(hit) = cache.borrow().get(&key) {
                return Ok(hit.clone());
            }
            let result = function.call(arguments.iter().cloned())?;
            let mut cache = cache.borrow_mut();
            if limit.is_some_and(|limit| cache.len() >= limit) {
                cache.shift_remove_index(0);
            }
            if limit != Some(0) {
                cache.insert(key, result.clone());
            }
            Ok(result)
        },
    )))
}

/// `juxt(f, g, ...)`: a function returning `[f(x), g(x), ...]`.
fn juxt(arguments: &[Value]) -> Result<Value> {
    let functions = arguments
        .iter()
        .map(|function| function.as_function("juxt").cloned())
        .collect::<Result<Vec<_>>>()?;
    Ok(native("juxt", move |arguments| {
        functions
            .iter()
            .map(|function| function.apply(arguments[0].clone()))
            .collect::<Result<Vec<_>>>()
            .map(Value::from)
    }))
}

fn links(operation: &'static str, functions: &[Value]) -> Result<Vec<Unary<Result<Value>>>> {
    functions
        .iter()
        .map(|function| -> Result<Unary<Result<Value>>> {
            let function = function.as_function(operation)?.clone();
            Ok(unary(move |input: Result<Value>| {
                input.and_then(|value| function.apply(value))
            }))
        })
        .collect()
}

fn composed(name: &str, chain: Composed<Result<Value>>) -> Value {
    native(name, move |arguments| chain.call(Ok(arguments[0].clone())))
}

fn compose_functions(arguments: &[Value]) -> Result<Value> {
    Ok(composed("compose", compose(links("compose", arguments)?)?))
}

fn pipe_functions(arguments: &[Value]) -> Result<Value> {
    Ok(composed("pipe", pipe(links("pipe", arguments)?)?))
}

fn partial(arguments: &[Value]) -> Result<Value> {
    let function = arguments[0].as_function("partial")?;
    Ok(Value::Function(function.partial(arguments[1..].iter().cloned())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(add_by, 1, 5, Value::Int(6))]
    #[case(subtract_by, 1, 5, Value::Int(4))]
    #[case(multiply_by, 3, 5, Value::Int(15))]
    #[case(divide_by, 5, 10, Value::Int(2))]
    #[case(divide_by, 4, 10, Value::Float(2.5))]
    fn test_arithmetic_takes_operand_first(
        #[case] operation: Native,
        #[case] amount: i64,
        #[case] target: i64,
        #[case] expected: Value,
    ) {
        assert_eq!(operation(&[Value::Int(amount), Value::Int(target)]), Ok(expected));
    }

    #[test]
    fn test_arithmetic_failures() {
        assert_eq!(
            add_by(&[Value::Int(1), Value::Int(i64::MAX)]),
            Err(FunctionalError::Arithmetic { operation: "add_by" })
        );
        assert_eq!(
            divide_by(&[Value::Int(0), Value::Int(1)]),
            Err(FunctionalError::Arithmetic { operation: "divide_by" })
        );
        assert_eq!(
            add_by(&[Value::Int(1), Value::from("x")]),
            Err(FunctionalError::TypeMismatch {
                operation: "add_by",
                expected: "number",
                found: "string",
            })
        );
    }

    #[test]
    fn test_mixed_arithmetic_widens() {
        assert_eq!(add_by(&[Value::Float(0.5), Value::Int(1)]), Ok(Value::Float(1.5)));
    }

    #[test]
    fn test_concat_by_first_argument() {
        assert_eq!(
            concat(&[Value::list([1]), Value::list([2, 3])]),
            Ok(Value::list([1, 2, 3]))
        );
        assert_eq!(concat(&[Value::from("ab"), Value::Char('c')]), Ok(Value::from("abc")));
        assert_eq!(concat(&[Value::Int(1), Value::Int(2)]), Ok(Value::list([1, 2])));
    }

    #[test]
    fn test_reverse_string_and_list() {
        assert_eq!(reverse(&[Value::from("abc")]), Ok(Value::from("cba")));
        assert_eq!(reverse(&[Value::list([1, 2])]), Ok(Value::list([2, 1])));
        assert_eq!(
            reverse(&[Value::Int(7)]),
            Err(FunctionalError::InvalidSequenceType { found: "int" })
        );
    }

    #[rstest]
    #[case(Value::Int(5), "int")]
    #[case(Value::Bool(false), "bool")]
    #[case(Value::Nil, "nil")]
    fn test_count_rejects_scalars(#[case] scalar: Value, #[case] found: &'static str) {
        assert_eq!(count(&[scalar]), Err(FunctionalError::InvalidSequenceType { found }));
    }

    #[test]
    fn test_count_of_collections() {
        assert_eq!(count(&[Value::from("héllo")]), Ok(Value::Int(5)));
        assert_eq!(count(&[Value::record([("a", 1)])]), Ok(Value::Int(1)));
    }

    #[test]
    fn test_range_with_fractional_step() {
        let Ok(Value::Sequence(halves)) = range(&[Value::Int(0), Value::Float(1.5), Value::Float(0.5)]) else {
            panic!("expected a sequence");
        };
        assert_eq!(
            halves.realize(),
            Ok(vec![Value::Float(0.0), Value::Float(0.5), Value::Float(1.0), Value::Float(1.5)])
        );
        assert!(matches!(
            range(&[Value::Int(0), Value::from("x"), Value::Int(1)]),
            Err(FunctionalError::TypeMismatch { operation: "range", .. })
        ));
    }

    #[test]
    fn test_first_and_last() {
        let numbers = Value::list([4, 5, 6]);
        assert_eq!(first(std::slice::from_ref(&numbers)), Ok(Value::Int(4)));
        assert_eq!(last(std::slice::from_ref(&numbers)), Ok(Value::Int(6)));
        assert_eq!(first(&[Value::list(Vec::<Value>::new())]), Ok(Value::Nil));
    }

    #[test]
    fn test_prop_missing_is_nil() {
        let record = Value::record([("id", 1)]);
        assert_eq!(prop(&[Value::from("id"), record.clone()]), Ok(Value::Int(1)));
        assert_eq!(prop(&[Value::from("name"), record]), Ok(Value::Nil));
    }

    #[test]
    fn test_group_by_nested_path() {
        let records = Value::list([
            Value::record([("team", Value::from("red")), ("role", Value::from("a"))]),
            Value::record([("team", Value::from("red")), ("role", Value::from("b"))]),
            Value::record([("team", Value::from("blue")), ("role", Value::from("a"))]),
        ]);
        let grouped = group_by(&[Value::list(["team", "role"]), Value::from("role"), records]).unwrap();
        let expected = Value::record([
            (
                "red",
                Value::record([("a", Value::list(["a"])), ("b", Value::list(["b"]))]),
            ),
            ("blue", Value::record([("a", Value::list(["a"]))])),
        ]);
        assert_eq!(grouped, expected);
    }
}
