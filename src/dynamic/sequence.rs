//! Lazy sequences of dynamic values.
//!
//! A [`Sequence`] is an immutable recipe for cursors rather than a cursor
//! itself, so the same value can be realized, mapped or cycled any number of
//! times. Items are `Result<Value>`: an error raised by a callback travels
//! down the pipeline as an item and is returned by [`Sequence::realize`].

use std::fmt;
use std::rc::Rc;

use super::function::Function;
use super::value::Value;
use crate::error::{FunctionalError, Result};
use crate::lazy::{BoxedCursor, Cursor, Iterate, Range, VecCursor, Zip};

/// One element of a dynamic sequence.
pub type Item = Result<Value>;

/// An element paired with a predicate verdict.
type Judged = Result<(Value, bool)>;

type Recipe = Rc<dyn Fn() -> BoxedCursor<'static, Item>>;

/// A lazy, restartable sequence of [`Value`]s.
#[derive(Clone)]
pub struct Sequence {
    recipe: Recipe,
}

impl Sequence {
    /// Creates a sequence from a cursor factory.
    pub fn new<F>(recipe: F) -> Self
    where
        F: Fn() -> BoxedCursor<'static, Item> + 'static,
    {
        Self {
            recipe: Rc::new(recipe),
        }
    }

    /// A sequence over a fixed list of values.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        let items: Rc<[Value]> = values.into_iter().collect();
        Self::new(move || {
            VecCursor::from_shared(Rc::clone(&items))
                .map(|value: &Value| -> Item { Ok(value.clone()) })
                .boxed()
        })
    }

    /// Views a list, string, map (its values) or sequence as a sequence.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionalError::InvalidSequenceType`] for anything else.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Sequence(sequence) => Ok(sequence.clone()),
            Value::List(items) => Ok(Self::from_values(items.iter().cloned())),
            Value::Str(text) => Ok(Self::from_values(text.chars().map(Value::Char))),
            Value::Map(entries) => Ok(Self::from_values(entries.values().cloned())),
            other => Err(FunctionalError::InvalidSequenceType {
                found: other.type_name(),
            }),
        }
    }

    /// Key/value pairs as two-element lists `[key, value]`.
    ///
    /// Maps yield their entries; every other sequenceable value pairs each
    /// element with its position, counted lazily alongside the elements.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionalError::InvalidSequenceType`] for scalars.
    pub fn entries(value: &Value) -> Result<Self> {
        if let Value::Map(entries) = value {
            return Ok(Self::from_values(
                entries
                    .iter()
                    .map(|(key, field)| Value::list([Value::from(key.clone()), field.clone()])),
            ));
        }
        let elements = Self::from_value(value)?;
        let positions = Self::range(0, i64::MAX, 1);
        Ok(Self::new(move || {
            Zip::new([positions.cursor(), elements.cursor()])
                .map(|pair: &Vec<Item>| -> Item {
                    pair.iter().cloned().collect::<Result<Vec<_>>>().map(Value::from)
                })
                .boxed()
        }))
    }

    /// The integer progression `from, from + step, ...` bounded by `to`.
    pub fn range(from: i64, to: i64, step: i64) -> Self {
        Self::new(move || {
            Range::new(from, to, step)
                .map(|number: &i64| -> Item { Ok(Value::Int(*number)) })
                .boxed()
        })
    }

    /// The float progression `from, from + step, ...` bounded by `to`.
    pub fn float_range(from: f64, to: f64, step: f64) -> Self {
        Self::new(move || {
            Range::new(from, to, step)
                .map(|number: &f64| -> Item { Ok(Value::Float(*number)) })
                .boxed()
        })
    }

    /// The infinite sequence `seed, f(seed), f(f(seed)), ...`.
    pub fn iterate(function: Function, seed: Value) -> Self {
        Self::new(move || {
            let function = function.clone();
            Iterate::new(Ok(seed.clone()), move |previous: &Item| {
                previous.clone().and_then(|value| function.apply(value))
            })
            .boxed()
        })
    }

    /// A fresh cursor positioned before the first element.
    pub fn cursor(&self) -> BoxedCursor<'static, Item> {
        (self.recipe)()
    }

    /// Drains the sequence into a vector, stopping at the first error.
    ///
    /// Only terminates for finite sequences.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while producing the elements.
    pub fn realize(&self) -> Result<Vec<Value>> {
        self.cursor().values().collect()
    }

    fn adapt<F>(&self, adapter: F) -> Self
    where
        F: Fn(BoxedCursor<'static, Item>) -> BoxedCursor<'static, Item> + 'static,
    {
        let upstream = self.clone();
        Self::new(move || adapter(upstream.cursor()))
    }

    fn judged(&self, predicate: &Function) -> BoxedCursor<'static, Judged> {
        let predicate = predicate.clone();
        self.cursor()
            .map(move |item: &Item| -> Judged {
                let value = item.clone()?;
                let verdict = predicate.apply(value.clone())?.is_truthy();
                Ok((value, verdict))
            })
            .boxed()
    }

    fn judge_with<F>(&self, predicate: &Function, adapter: F) -> Self
    where
        F: Fn(BoxedCursor<'static, Judged>) -> BoxedCursor<'static, Judged> + 'static,
    {
        let upstream = self.clone();
        let predicate = predicate.clone();
        Self::new(move || {
            adapter(upstream.judged(&predicate))
                .map(release)
                .boxed()
        })
    }

    /// Applies `function` to every element.
    pub fn map(&self, function: &Function) -> Self {
        let function = function.clone();
        self.adapt(move |cursor| {
            let function = function.clone();
            cursor
                .map(move |item: &Item| item.clone().and_then(|value| function.apply(value)))
                .boxed()
        })
    }

    /// Applies `function` to the elements of several sequences in lockstep;
    /// the shortest sequence governs the length.
    pub fn zip_map(function: &Function, sequences: &[Self]) -> Self {
        let function = function.clone();
        let sequences: Rc<[Self]> = sequences.into();
        Self::new(move || {
            let function = function.clone();
            Zip::new(sequences.iter().map(Self::cursor))
                .map(move |items: &Vec<Item>| -> Item {
                    let arguments = items.iter().cloned().collect::<Result<Vec<_>>>()?;
                    function.call(arguments)
                })
                .boxed()
        })
    }

    /// Keeps the elements for which `predicate` returns a truthy value.
    pub fn filter(&self, predicate: &Function) -> Self {
        self.judge_with(predicate, |cursor| {
            cursor
                .filter(|judged: &Judged| judged.as_ref().map_or(true, |(_, verdict)| *verdict))
                .boxed()
        })
    }

    /// Drops the elements for which `predicate` returns a truthy value.
    pub fn remove(&self, predicate: &Function) -> Self {
        self.judge_with(predicate, |cursor| {
            cursor
                .filter(|judged: &Judged| judged.as_ref().map_or(true, |(_, verdict)| !*verdict))
                .boxed()
        })
    }

    /// At most `limit` elements.
    pub fn take(&self, limit: usize) -> Self {
        self.adapt(move |cursor| cursor.take(limit).boxed())
    }

    /// Everything after the first `count` elements.
    pub fn skip(&self, count: usize) -> Self {
        self.adapt(move |cursor| cursor.skip(count).boxed())
    }

    /// Elements while `predicate` is truthy.
    pub fn take_while(&self, predicate: &Function) -> Self {
        self.judge_with(predicate, |cursor| {
            cursor
                .take_while(|judged: &Judged| judged.as_ref().map_or(true, |(_, verdict)| *verdict))
                .boxed()
        })
    }

    /// Elements up to and including the first one for which `predicate` is truthy.
    pub fn take_until(&self, predicate: &Function) -> Self {
        self.judge_with(predicate, |cursor| {
            cursor
                .take_until(|judged: &Judged| judged.as_ref().is_ok_and(|(_, verdict)| *verdict))
                .boxed()
        })
    }

    /// Elements from the first one for which `predicate` is falsy onwards.
    pub fn skip_while(&self, predicate: &Function) -> Self {
        self.judge_with(predicate, |cursor| {
            cursor
                .skip_while(|judged: &Judged| judged.as_ref().is_ok_and(|(_, verdict)| *verdict))
                .boxed()
        })
    }

    /// Elements from the first one for which `predicate` is truthy onwards.
    pub fn skip_until(&self, predicate: &Function) -> Self {
        self.judge_with(predicate, |cursor| {
            cursor
                .skip_until(|judged: &Judged| judged.as_ref().map_or(true, |(_, verdict)| *verdict))
                .boxed()
        })
    }

    /// Runs of consecutive elements for which `key` returns equal values.
    /// Each element of the result is a list.
    pub fn partition_by(&self, key: &Function) -> Self {
        let upstream = self.clone();
        let key = key.clone();
        Self::new(move || {
            let key = key.clone();
            upstream
                .cursor()
                .map(move |item: &Item| -> Result<(Value, Value)> {
                    let value = item.clone()?;
                    let run_key = key.apply(value.clone())?;
                    Ok((value, run_key))
                })
                .partition_by(|keyed: &Result<(Value, Value)>| {
                    keyed.as_ref().ok().map(|(_, run_key)| run_key.clone())
                })
                .map(|run: &Vec<Result<(Value, Value)>>| {
                    run.iter()
                        .map(|keyed| keyed.clone().map(|(value, _)| value))
                        .collect::<Result<Vec<_>>>()
                        .map(Value::from)
                })
                .boxed()
        })
    }

    /// Repeats the sequence forever. An empty sequence stays empty.
    pub fn cycle(&self) -> Self {
        self.adapt(|cursor| cursor.cycle().boxed())
    }
}

fn release(judged: &Judged) -> Item {
    judged.clone().map(|(value, _)| value)
}

impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.recipe, &other.recipe)
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Sequence").finish_non_exhaustive()
    }
}
