use crate::model::{Type, Value};
use crate::parser::ParseError;
use crate::raw::RawValue;

// 2^63, the first f64 above i64::MAX.
const INTEGER_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Coerce a single raw value to `kind`, naming `field` in the error.
///
/// * `string` accepts text as is, and numbers in their shortest form (`123`, not `123.0`).
/// * `integer` accepts whole numbers.
/// * `number` accepts any number.
/// * `boolean` never fails: only the `true` marker is `true`.
pub(crate) fn coerce(raw: &RawValue, kind: Type, field: &str) -> Result<Value, ParseError> {
    let mismatch = || ParseError::Mismatch {
        field: field.to_string(),
        expected: kind,
    };

    match kind {
        Type::String => match raw {
            RawValue::Str(value) => Ok(Value::String(value.clone())),
            RawValue::Int(value) => Ok(Value::String(value.to_string())),
            RawValue::Float(value) => Ok(Value::String(value.to_string())),
            _ => Err(mismatch()),
        },
        Type::Integer => match raw {
            RawValue::Int(value) => Ok(Value::Integer(*value)),
            RawValue::Float(value) if is_integral(*value) => Ok(Value::Integer(*value as i64)),
            _ => Err(mismatch()),
        },
        Type::Number => match raw {
            RawValue::Int(value) => Ok(Value::Number(*value as f64)),
            RawValue::Float(value) => Ok(Value::Number(*value)),
            _ => Err(mismatch()),
        },
        Type::Boolean => Ok(Value::Boolean(matches!(raw, RawValue::Bool(true)))),
    }
}

fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0 && value >= -INTEGER_LIMIT && value < INTEGER_LIMIT
}
