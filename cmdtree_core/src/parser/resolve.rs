use crate::api::Argument;
use crate::model::{ArgValue, ResolvedArgs, Type, Value};
use crate::parser::coerce::coerce;
use crate::parser::ParseError;
use crate::raw::{RawArgs, RawValue};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Resolve the raw flags against the arguments of a command, in declaration order.
/// The first failure aborts the resolution.
pub(crate) fn resolve(raw: &RawArgs, arguments: &[Argument]) -> Result<ResolvedArgs, ParseError> {
    let mut resolved = ResolvedArgs::default();

    for argument in arguments {
        if let Some(value) = resolve_argument(raw, argument)? {
            resolved.insert(&argument.name, value);
        }
    }

    Ok(resolved)
}

fn resolve_argument(raw: &RawArgs, argument: &Argument) -> Result<Option<ArgValue>, ParseError> {
    if argument.array && argument.kind == Type::Boolean {
        return Err(ParseError::BooleanArray);
    }

    let value = match merge_alias(raw, argument) {
        Some(value) => value,
        None => match &argument.default {
            Some(default) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Applying default for '{}': {default}.", argument.name);
                }

                RawValue::from(default.clone())
            }
            None => return absent(argument),
        },
    };

    if matches!(value, RawValue::Bool(_)) && argument.kind != Type::Boolean {
        return Err(ParseError::MissingValue {
            name: argument.name.clone(),
            kind: argument.kind,
            array: argument.array,
        });
    }

    if argument.array {
        let values = value
            .into_list()
            .iter()
            .map(|v| coerce(v, argument.kind, &argument.name))
            .collect::<Result<Vec<Value>, ParseError>>()?;

        if let Some(choices) = &argument.choices {
            if let Some((index, value)) = values.iter().enumerate().find(|(_, v)| !choices.contains(v)) {
                return Err(ParseError::InvalidChoiceAt {
                    name: argument.name.clone(),
                    value: value.clone(),
                    index,
                    choices: choices.clone(),
                });
            }
        }

        Ok(Some(ArgValue::Many(values)))
    } else {
        let value = coerce(&value, argument.kind, &argument.name)?;

        if let Some(choices) = &argument.choices {
            if !choices.contains(&value) {
                return Err(ParseError::InvalidChoice {
                    name: argument.name.clone(),
                    value,
                    choices: choices.clone(),
                });
            }
        }

        Ok(Some(ArgValue::Single(value)))
    }
}

fn absent(argument: &Argument) -> Result<Option<ArgValue>, ParseError> {
    if argument.kind == Type::Boolean {
        Ok(Some(ArgValue::Single(Value::Boolean(false))))
    } else if argument.optional {
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Omitting optional '{}'.", argument.name);
        }

        Ok(None)
    } else {
        Err(ParseError::Required {
            name: argument.name.clone(),
            kind: argument.kind,
            array: argument.array,
        })
    }
}

/// The raw value of `argument`, gathered from its name and its alias (name first).
pub(crate) fn merge_alias(raw: &RawArgs, argument: &Argument) -> Option<RawValue> {
    let primary = raw.get(&argument.name);
    let aliased = argument.alias.as_ref().and_then(|alias| raw.get(alias));

    match (primary, aliased) {
        (Some(primary), Some(aliased)) => {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Merging alias values for '{}'.", argument.name);
            }

            let mut values = primary.clone().into_list();
            values.extend(aliased.clone().into_list());
            Some(RawValue::List(values))
        }
        (primary, aliased) => primary.or(aliased).cloned(),
    }
}
