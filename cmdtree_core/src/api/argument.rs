use crate::model::{ArgValue, Type, Value};

/// A named, typed argument of a [`Command`](crate::Command).
///
/// On the command line an argument is given as `--NAME VALUE` (or `-ALIAS VALUE` when an alias is declared).
/// By default an argument is a required scalar; `boolean` arguments are never required, since absence means `false`.
///
/// ### Example
/// ```
/// # use cmdtree_core as cmdtree;
/// use cmdtree::{Argument, Type};
///
/// let region = Argument::string("region")
///     .alias("r")
///     .array()
///     .choices(["eu", "us"])
///     .default_value(vec!["eu"])
///     .help("Regions to deploy to.");
///
/// assert_eq!(region.name(), "region");
/// assert_eq!(region.kind(), Type::String);
/// assert!(region.is_array());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub(crate) name: String,
    pub(crate) kind: Type,
    pub(crate) array: bool,
    pub(crate) optional: bool,
    pub(crate) alias: Option<String>,
    pub(crate) choices: Option<Vec<Value>>,
    pub(crate) default: Option<ArgValue>,
    pub(crate) description: Option<String>,
}

impl Argument {
    /// Create a required scalar argument.
    pub fn new(name: impl Into<String>, kind: Type) -> Self {
        Self {
            name: name.into(),
            kind,
            array: false,
            optional: false,
            alias: None,
            choices: None,
            default: None,
            description: None,
        }
    }

    /// Create a [`Type::String`] argument.
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, Type::String)
    }

    /// Create a [`Type::Integer`] argument.
    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, Type::Integer)
    }

    /// Create a [`Type::Number`] argument.
    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, Type::Number)
    }

    /// Create a [`Type::Boolean`] argument.
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, Type::Boolean)
    }

    /// Resolve to a sequence of values instead of a single value.
    /// A single value on the command line becomes a one-element sequence.
    ///
    /// Arrays of `boolean` are rejected when the command is resolved.
    pub fn array(mut self) -> Self {
        self.array = true;
        self
    }

    /// Omit the argument from the resolved record when it is not given, rather than failing.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Also accept values under the flag `alias`.
    /// If repeated, only the final alias will apply.
    ///
    /// Values given under both the name and the alias are merged, name first.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias.replace(alias.into());
        self
    }

    /// Restrict the resolved value(s) to the given choices.
    /// If repeated, only the final set of choices will apply.
    pub fn choices<I, V>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.choices
            .replace(choices.into_iter().map(Into::into).collect());
        self
    }

    /// Use `value` when the argument is not given.
    /// The default goes through the same coercion and validation as a value from the command line.
    pub fn default_value(mut self, value: impl Into<ArgValue>) -> Self {
        self.default.replace(value.into());
        self
    }

    /// Document the help message for this argument.
    /// If repeated, only the final help message will apply.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.description.replace(description.into());
        self
    }

    /// The name of this argument, which is also its key in the resolved record.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared primitive type.
    pub fn kind(&self) -> Type {
        self.kind
    }

    /// Whether this argument resolves to a sequence.
    pub fn is_array(&self) -> bool {
        self.array
    }

    /// Whether this argument may be left out of the resolved record.
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    // Shown as [optional] in the help, since it can never fail as missing.
    pub(crate) fn has_fallback(&self) -> bool {
        self.optional || self.default.is_some()
    }
}
