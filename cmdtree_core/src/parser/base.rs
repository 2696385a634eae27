use thiserror::Error;

use crate::model::{join, Type, Value};

/// A mistake in the declaration of the command tree, detected when the [`Cli`](crate::Cli) is built.
#[derive(Debug, Error)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

/// The reason an invocation could not be resolved.
/// The display text is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A positional token that names no sub-command (or any token left over at a command).
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    /// A command list was invoked without a sub-command.
    /// The user is shown the help of the list (see [`Outcome::message`](crate::Outcome::message)), not this text.
    #[error("missing command")]
    MissingCommand,
    /// An argument declared as an array of booleans.
    #[error("arrays not supported for boolean type")]
    BooleanArray,
    /// A required argument with no value and no default.
    #[error("argument {name} required: expected {kind}{}", suffix(.array))]
    Required {
        /// The argument name.
        name: String,
        /// The declared type.
        kind: Type,
        /// Whether the argument is an array.
        array: bool,
    },
    /// A non-boolean argument given as a bare flag, without a value.
    #[error("{name}: expected {kind}{}", suffix(.array))]
    MissingValue {
        /// The argument name.
        name: String,
        /// The declared type.
        kind: Type,
        /// Whether the argument is an array.
        array: bool,
    },
    /// A value that cannot be coerced to the declared type.
    #[error("{field}: expected {expected}")]
    Mismatch {
        /// The argument name.
        field: String,
        /// The declared type.
        expected: Type,
    },
    /// An element of an array argument outside of its choices.
    #[error("{name}: invalid value {value} at index {index}. valid choices: {}", join(.choices))]
    InvalidChoiceAt {
        /// The argument name.
        name: String,
        /// The offending value.
        value: Value,
        /// The position of the offending value.
        index: usize,
        /// The declared choices.
        choices: Vec<Value>,
    },
    /// A scalar argument outside of its choices.
    #[error("{name}: invalid value {value}. valid choices: {}", join(.choices))]
    InvalidChoice {
        /// The argument name.
        name: String,
        /// The offending value.
        value: Value,
        /// The declared choices.
        choices: Vec<Value>,
    },
}

fn suffix(array: &bool) -> &'static str {
    if *array {
        "[]"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ParseError::UnknownCommand("x".to_string()), "unknown command: x")]
    #[case(ParseError::MissingCommand, "missing command")]
    #[case(ParseError::BooleanArray, "arrays not supported for boolean type")]
    #[case(
        ParseError::Required { name: "a".to_string(), kind: Type::String, array: false },
        "argument a required: expected string"
    )]
    #[case(
        ParseError::Required { name: "a".to_string(), kind: Type::Integer, array: true },
        "argument a required: expected integer[]"
    )]
    #[case(
        ParseError::MissingValue { name: "a".to_string(), kind: Type::String, array: false },
        "a: expected string"
    )]
    #[case(
        ParseError::MissingValue { name: "a".to_string(), kind: Type::Number, array: true },
        "a: expected number[]"
    )]
    #[case(
        ParseError::Mismatch { field: "a".to_string(), expected: Type::Number },
        "a: expected number"
    )]
    #[case(
        ParseError::InvalidChoiceAt {
            name: "a".to_string(),
            value: Value::from("z"),
            index: 1,
            choices: vec![Value::from("x"), Value::from("y")],
        },
        "a: invalid value z at index 1. valid choices: x, y"
    )]
    #[case(
        ParseError::InvalidChoice {
            name: "a".to_string(),
            value: Value::from(3),
            choices: vec![Value::from(1), Value::from(2)],
        },
        "a: invalid value 3. valid choices: 1, 2"
    )]
    fn display(#[case] error: ParseError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn config_error() {
        assert_eq!(
            ConfigError("abc".to_string()).to_string(),
            "Config error: abc"
        );
    }
}
