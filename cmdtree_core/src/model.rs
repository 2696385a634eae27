use std::collections::HashMap;

/// The primitive type an argument is coerced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Text, kept as given (numbers are stringified).
    String,
    /// A whole number, stored as `i64`.
    Integer,
    /// Any number, stored as `f64`.
    Number,
    /// A switch: present means `true`, anything else `false`.
    Boolean,
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::String => write!(f, "string"),
            Type::Integer => write!(f, "integer"),
            Type::Number => write!(f, "number"),
            Type::Boolean => write!(f, "boolean"),
        }
    }
}

/// A single coerced value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// See [`Type::String`].
    String(String),
    /// See [`Type::Integer`].
    Integer(i64),
    /// See [`Type::Number`].
    Number(f64),
    /// See [`Type::Boolean`].
    Boolean(bool),
}

impl Value {
    /// The primitive type of this value.
    pub fn kind(&self) -> Type {
        match self {
            Value::String(_) => Type::String,
            Value::Integer(_) => Type::Integer,
            Value::Number(_) => Type::Number,
            Value::Boolean(_) => Type::Boolean,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(value) => write!(f, "{value}"),
            Value::Integer(value) => write!(f, "{value}"),
            Value::Number(value) => write!(f, "{value}"),
            Value::Boolean(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

/// The resolved value of one argument: a scalar, or a sequence for array arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    /// The value of a scalar argument.
    Single(Value),
    /// The values of an array argument, in the order given.
    Many(Vec<Value>),
}

impl std::fmt::Display for ArgValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArgValue::Single(value) => write!(f, "{value}"),
            ArgValue::Many(values) => write!(f, "[{}]", join(values)),
        }
    }
}

impl From<Value> for ArgValue {
    fn from(value: Value) -> Self {
        ArgValue::Single(value)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::Single(Value::from(value))
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        ArgValue::Single(Value::from(value))
    }
}

impl From<i32> for ArgValue {
    fn from(value: i32) -> Self {
        ArgValue::Single(Value::from(value))
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        ArgValue::Single(Value::from(value))
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        ArgValue::Single(Value::from(value))
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        ArgValue::Single(Value::from(value))
    }
}

impl<V: Into<Value>> From<Vec<V>> for ArgValue {
    fn from(values: Vec<V>) -> Self {
        ArgValue::Many(values.into_iter().map(Into::into).collect())
    }
}

pub(crate) fn join(values: &[Value]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}

/// The typed arguments of a resolved command, keyed by argument name.
///
/// Holds exactly the arguments that were supplied, defaulted, required, or boolean.
/// An optional argument that was not supplied has no entry.
///
/// ### Example
/// ```
/// # use cmdtree_core as cmdtree;
/// use cmdtree::{ArgValue, ResolvedArgs};
///
/// let args: ResolvedArgs = [
///     ("name", ArgValue::from("abc")),
///     ("ids", ArgValue::from(vec![1, 2])),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(args.string("name"), Some("abc"));
/// assert_eq!(args.integers("ids"), Some(vec![1, 2]));
/// assert_eq!(args.string("missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedArgs {
    values: HashMap<String, ArgValue>,
}

impl ResolvedArgs {
    pub(crate) fn insert(&mut self, name: impl Into<String>, value: ArgValue) {
        self.values.insert(name.into(), value);
    }

    /// The resolved value of the argument `name`, if it has one.
    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values.get(name)
    }

    /// Whether the argument `name` has a resolved value.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// The number of resolved arguments.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no argument was resolved.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the resolved arguments, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The value of a scalar `string` argument.
    pub fn string(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(ArgValue::Single(Value::String(value))) => Some(value.as_str()),
            _ => None,
        }
    }

    /// The value of a scalar `integer` argument.
    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.get(name) {
            Some(ArgValue::Single(Value::Integer(value))) => Some(*value),
            _ => None,
        }
    }

    /// The value of a scalar `number` argument.
    pub fn number(&self, name: &str) -> Option<f64> {
        match self.get(name) {
            Some(ArgValue::Single(Value::Number(value))) => Some(*value),
            _ => None,
        }
    }

    /// The value of a `boolean` argument; `false` when there is none.
    pub fn flag(&self, name: &str) -> bool {
        matches!(self.get(name), Some(ArgValue::Single(Value::Boolean(true))))
    }

    /// The values of an array `string` argument.
    pub fn strings(&self, name: &str) -> Option<Vec<&str>> {
        self.many(name, |value| match value {
            Value::String(value) => Some(value.as_str()),
            _ => None,
        })
    }

    /// The values of an array `integer` argument.
    pub fn integers(&self, name: &str) -> Option<Vec<i64>> {
        self.many(name, |value| match value {
            Value::Integer(value) => Some(*value),
            _ => None,
        })
    }

    /// The values of an array `number` argument.
    pub fn numbers(&self, name: &str) -> Option<Vec<f64>> {
        self.many(name, |value| match value {
            Value::Number(value) => Some(*value),
            _ => None,
        })
    }

    fn many<'s, T>(&'s self, name: &str, extract: impl Fn(&'s Value) -> Option<T>) -> Option<Vec<T>> {
        match self.get(name) {
            Some(ArgValue::Many(values)) => values.iter().map(extract).collect(),
            _ => None,
        }
    }
}

impl<K: Into<String>> FromIterator<(K, ArgValue)> for ResolvedArgs {
    fn from_iter<I: IntoIterator<Item = (K, ArgValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Type::String, "string")]
    #[case(Type::Integer, "integer")]
    #[case(Type::Number, "number")]
    #[case(Type::Boolean, "boolean")]
    fn type_display(#[case] kind: Type, #[case] expected: &str) {
        assert_eq!(kind.to_string(), expected);
    }

    #[rstest]
    #[case(Value::from("abc"), "abc")]
    #[case(Value::from(0), "0")]
    #[case(Value::from(-12i64), "-12")]
    #[case(Value::from(66.66), "66.66")]
    #[case(Value::from(2.0), "2")]
    #[case(Value::from(true), "true")]
    fn value_display(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[test]
    fn arg_value_display() {
        assert_eq!(ArgValue::from(123).to_string(), "123");
        assert_eq!(ArgValue::from(vec!["abc", "def"]).to_string(), "[abc, def]");
        assert_eq!(ArgValue::Many(Vec::default()).to_string(), "[]");
    }

    #[test]
    fn resolved_args_accessors() {
        // Setup
        let args: ResolvedArgs = [
            ("s", ArgValue::from("str")),
            ("i", ArgValue::from(0)),
            ("n", ArgValue::from(1.5)),
            ("b", ArgValue::from(true)),
            ("ss", ArgValue::from(vec!["a", "b"])),
            ("is", ArgValue::from(vec![1, 2])),
            ("ns", ArgValue::from(vec![0.5])),
        ]
        .into_iter()
        .collect();

        // Verify
        assert_eq!(args.len(), 7);
        assert_eq!(args.string("s"), Some("str"));
        assert_eq!(args.integer("i"), Some(0));
        assert_eq!(args.number("n"), Some(1.5));
        assert!(args.flag("b"));
        assert_eq!(args.strings("ss"), Some(vec!["a", "b"]));
        assert_eq!(args.integers("is"), Some(vec![1, 2]));
        assert_eq!(args.numbers("ns"), Some(vec![0.5]));
    }

    #[test]
    fn resolved_args_mismatched_accessors() {
        // Setup
        let args: ResolvedArgs = [("s", ArgValue::from("str")), ("ss", ArgValue::from(vec!["a"]))]
            .into_iter()
            .collect();

        // Verify
        assert_eq!(args.integer("s"), None);
        assert_eq!(args.string("ss"), None);
        assert_eq!(args.integers("ss"), None);
        assert!(!args.flag("s"));
        assert!(!args.flag("absent"));
        assert!(!args.contains("absent"));
    }
}
