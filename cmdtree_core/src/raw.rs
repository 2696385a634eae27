use std::collections::HashMap;

use crate::constant::*;
use crate::model::{ArgValue, Value};

mod tokenizer;

/// An untyped value, as found on the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// The marker of a flag given without a value (`--flag` is `true`, `--no-flag` is `false`).
    Bool(bool),
    /// A value that does not look like a number.
    Str(String),
    /// A value that looks like a whole number.
    Int(i64),
    /// A value that looks like a fractional number.
    Float(f64),
    /// The values of a flag given more than once, in order.
    List(Vec<RawValue>),
}

impl RawValue {
    /// Normalize to a sequence: a scalar becomes a one-element sequence.
    pub(crate) fn into_list(self) -> Vec<RawValue> {
        match self {
            RawValue::List(values) => values,
            other => vec![other],
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Str(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Str(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        RawValue::Int(value as i64)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Int(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Float(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Bool(value)
    }
}

impl<V: Into<RawValue>> From<Vec<V>> for RawValue {
    fn from(values: Vec<V>) -> Self {
        RawValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<Value> for RawValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(value) => RawValue::Str(value),
            Value::Integer(value) => RawValue::Int(value),
            Value::Number(value) => RawValue::Float(value),
            Value::Boolean(value) => RawValue::Bool(value),
        }
    }
}

impl From<ArgValue> for RawValue {
    fn from(value: ArgValue) -> Self {
        match value {
            ArgValue::Single(value) => RawValue::from(value),
            ArgValue::Many(values) => RawValue::from(values),
        }
    }
}

/// The tokenized command line: flags by name, plus the bare positional tokens in order.
///
/// Build one from the process tokens with [`RawArgs::from_tokens`], or directly:
/// ```
/// # use cmdtree_core as cmdtree;
/// use cmdtree::{RawArgs, RawValue};
///
/// let raw = RawArgs::new()
///     .positionals(["deploy", "web"])
///     .flag("replicas", 3)
///     .flag("region", vec!["eu", "us"]);
///
/// assert_eq!(raw.tokens(), &["deploy".to_string(), "web".to_string()]);
/// assert_eq!(raw.get("replicas"), Some(&RawValue::Int(3)));
/// assert!(!raw.is_help());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawArgs {
    positionals: Vec<String>,
    flags: HashMap<String, RawValue>,
}

impl RawArgs {
    /// Create empty raw arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional token.
    pub fn positional(mut self, token: impl Into<String>) -> Self {
        self.positionals.push(token.into());
        self
    }

    /// Append several positional tokens.
    pub fn positionals<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.positionals.extend(tokens.into_iter().map(Into::into));
        self
    }

    /// Set the flag `name`, replacing any previous value.
    pub fn flag(mut self, name: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.flags.insert(name.into(), value.into());
        self
    }

    /// Request help.
    pub fn help(self) -> Self {
        self.flag(HELP_NAME, true)
    }

    /// The value of the flag `name`, if it was given.
    pub fn get(&self, name: &str) -> Option<&RawValue> {
        self.flags.get(name)
    }

    /// The positional tokens.
    pub fn tokens(&self) -> &[String] {
        &self.positionals
    }

    /// Whether help was requested.
    pub fn is_help(&self) -> bool {
        matches!(self.flags.get(HELP_NAME), Some(RawValue::Bool(true)))
    }

    /// Add a value to the flag `name`.
    /// A repeated flag accumulates its values into a [`RawValue::List`], while a repeated marker keeps the latest.
    pub(crate) fn append(&mut self, name: impl Into<String>, value: RawValue) {
        let name = name.into();

        let merged = match self.flags.remove(&name) {
            None | Some(RawValue::Bool(_)) if matches!(value, RawValue::Bool(_)) => value,
            None => value,
            Some(RawValue::List(mut values)) => {
                values.push(value);
                RawValue::List(values)
            }
            Some(existing) => RawValue::List(vec![existing, value]),
        };

        self.flags.insert(name, merged);
    }

    pub(crate) fn push_positional(&mut self, token: impl Into<String>) {
        self.positionals.push(token.into());
    }
}
