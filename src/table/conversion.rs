// Author: Dustin Pilgrim
// License: MIT

use crate::parser::{parse_bool, parse_number};
use crate::{Value, VarsError};

fn type_error(expected: &str, value: &Value, code: u32) -> VarsError {
    VarsError::TypeError {
        message: format!("Expected {}, got {} {}", expected, value.type_name(), value),
        hint: Some(format!("Use a {} value in your definitions", expected)),
        code: Some(code),
    }
}

/// Object members are stored verbatim, so numbers there arrive as strings.
fn number_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => Some(*n),
        Value::String(s) => parse_number(s),
        _ => None,
    }
}

impl TryFrom<Value> for String {
    type Error = VarsError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(type_error("string", &value, 401)),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = VarsError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        number_of(&value).ok_or_else(|| type_error("number", &value, 402))
    }
}

impl TryFrom<Value> for i64 {
    type Error = VarsError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match number_of(&value) {
            Some(n) if n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 => Ok(n as i64),
            Some(n) => Err(VarsError::TypeError {
                message: format!("Number {} is not a whole number in i64 range", n),
                hint: Some("Use an integer value".into()),
                code: Some(404),
            }),
            None => Err(type_error("number", &value, 402)),
        }
    }
}

impl TryFrom<Value> for u16 {
    type Error = VarsError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match number_of(&value) {
            Some(n) if n.fract() == 0.0 && n >= 0.0 && n <= u16::MAX as f64 => Ok(n as u16),
            Some(n) => Err(VarsError::TypeError {
                message: format!("Number {} out of range for u16", n),
                hint: Some("Use a whole number between 0 and 65535".into()),
                code: Some(403),
            }),
            None => Err(type_error("number", &value, 402)),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = VarsError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match &value {
            Value::Bool(b) => Ok(*b),
            Value::String(s) => parse_bool(s).ok_or_else(|| type_error("bool", &value, 405)),
            _ => Err(type_error("bool", &value, 405)),
        }
    }
}

impl TryFrom<Value> for Vec<String> {
    type Error = VarsError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::List(items) => Ok(items),
            _ => Err(type_error("list", &value, 406)),
        }
    }
}
