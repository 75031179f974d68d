//! Typed accessors over raw JSON values.
//!
//! Every entity parser is built from these helpers. A required key that is
//! absent yields [`ParseError::MissingField`]; a present key holding the wrong
//! JSON type yields [`ParseError::TypeMismatch`], including for the
//! `*_or_none` variants. Absence is decided by key presence only, so an
//! explicit `null` is a type mismatch rather than "absent".

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::types::{UntilDate, UtcDateTime};
use crate::ParseError;

/// Decoded JSON object, the shape every entity is read from.
pub type Object = Map<String, Value>;

/// Conversion from an untyped result value into a typed entity.
pub trait FromTelegramResult: Sized {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError>;
}

/// Marker for flags Telegram only ever sends as `true`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct True;

impl Serialize for True {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bool(true)
    }
}

pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(number) if number.is_i64() || number.is_u64() => "integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

// ----------------------------------------------------------------------------
// Top-level result guards
// ----------------------------------------------------------------------------

pub fn expect_object(value: &Value) -> Result<&Object, ParseError> {
    value.as_object().ok_or(ParseError::UnexpectedResultType {
        expected: "object",
        actual: json_type_name(value),
    })
}

pub fn expect_list(value: &Value) -> Result<&Vec<Value>, ParseError> {
    value.as_array().ok_or(ParseError::UnexpectedResultType {
        expected: "list",
        actual: json_type_name(value),
    })
}

pub fn expect_true(value: &Value) -> Result<bool, ParseError> {
    match value {
        Value::Bool(true) => Ok(true),
        other => Err(ParseError::UnexpectedResultType {
            expected: "true",
            actual: json_type_name(other),
        }),
    }
}

pub fn expect_integer(value: &Value) -> Result<i64, ParseError> {
    value.as_i64().ok_or(ParseError::UnexpectedResultType {
        expected: "integer",
        actual: non_i64_type_name(value),
    })
}

pub fn expect_string(value: &Value) -> Result<String, ParseError> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or(ParseError::UnexpectedResultType {
            expected: "string",
            actual: json_type_name(value),
        })
}

/// Parses a top-level list result element by element.
pub fn list_of<T: FromTelegramResult>(value: &Value) -> Result<Vec<T>, ParseError> {
    expect_list(value)?
        .iter()
        .map(T::from_telegram_result)
        .collect()
}

// ----------------------------------------------------------------------------
// Primitive fields
// ----------------------------------------------------------------------------

fn required<'a>(object: &'a Object, key: &str) -> Result<&'a Value, ParseError> {
    object.get(key).ok_or_else(|| ParseError::missing_field(key))
}

fn to_string(value: &Value, key: &str) -> Result<String, ParseError> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| ParseError::type_mismatch(key, "string", json_type_name(value)))
}

fn to_integer(value: &Value, key: &str) -> Result<i64, ParseError> {
    value
        .as_i64()
        .ok_or_else(|| ParseError::type_mismatch(key, "integer", non_i64_type_name(value)))
}

/// Type name for a value that did not fit an `i64`. Integers above
/// `i64::MAX` are reported as out of range rather than as "integer".
fn non_i64_type_name(value: &Value) -> &'static str {
    match value {
        Value::Number(number) if number.is_u64() => "integer out of range",
        other => json_type_name(other),
    }
}

fn to_float(value: &Value, key: &str) -> Result<f64, ParseError> {
    match value {
        Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| ParseError::type_mismatch(key, "float", "integer")),
        other => Err(ParseError::type_mismatch(key, "float", json_type_name(other))),
    }
}

fn to_boolean(value: &Value, key: &str) -> Result<bool, ParseError> {
    value
        .as_bool()
        .ok_or_else(|| ParseError::type_mismatch(key, "boolean", json_type_name(value)))
}

fn to_timestamp(value: &Value, key: &str) -> Result<UtcDateTime, ParseError> {
    let seconds = to_integer(value, key)?;
    UtcDateTime::from_unix_timestamp(seconds)
        .ok_or_else(|| ParseError::type_mismatch(key, "unix timestamp", "integer"))
}

fn optional<T>(
    object: &Object,
    key: &str,
    convert: impl FnOnce(&Value, &str) -> Result<T, ParseError>,
) -> Result<Option<T>, ParseError> {
    object.get(key).map(|value| convert(value, key)).transpose()
}

pub fn get_string(object: &Object, key: &str) -> Result<String, ParseError> {
    to_string(required(object, key)?, key)
}

pub fn get_string_or_none(object: &Object, key: &str) -> Result<Option<String>, ParseError> {
    optional(object, key, to_string)
}

pub fn get_integer(object: &Object, key: &str) -> Result<i64, ParseError> {
    to_integer(required(object, key)?, key)
}

pub fn get_integer_or_none(object: &Object, key: &str) -> Result<Option<i64>, ParseError> {
    optional(object, key, to_integer)
}

pub fn get_float(object: &Object, key: &str) -> Result<f64, ParseError> {
    to_float(required(object, key)?, key)
}

pub fn get_float_or_none(object: &Object, key: &str) -> Result<Option<f64>, ParseError> {
    optional(object, key, to_float)
}

pub fn get_boolean(object: &Object, key: &str) -> Result<bool, ParseError> {
    to_boolean(required(object, key)?, key)
}

pub fn get_boolean_or_none(object: &Object, key: &str) -> Result<Option<bool>, ParseError> {
    optional(object, key, to_boolean)
}

/// Reads a flag that is either omitted or exactly `true`; `false` is rejected.
pub fn get_true_or_none(object: &Object, key: &str) -> Result<Option<True>, ParseError> {
    match object.get(key) {
        None => Ok(None),
        Some(Value::Bool(true)) => Ok(Some(True)),
        Some(other) => Err(ParseError::type_mismatch(key, "true", json_type_name(other))),
    }
}

pub fn get_timestamp(object: &Object, key: &str) -> Result<UtcDateTime, ParseError> {
    to_timestamp(required(object, key)?, key)
}

pub fn get_timestamp_or_none(object: &Object, key: &str) -> Result<Option<UtcDateTime>, ParseError> {
    optional(object, key, to_timestamp)
}

/// Reads a required expiry where `0` means "never expires".
pub fn get_until_date(object: &Object, key: &str) -> Result<UntilDate, ParseError> {
    match get_integer(object, key)? {
        0 => Ok(UntilDate::Forever),
        _ => get_timestamp(object, key).map(UntilDate::Date),
    }
}

fn to_list<'a>(value: &'a Value, key: &str) -> Result<&'a Vec<Value>, ParseError> {
    value
        .as_array()
        .ok_or_else(|| ParseError::type_mismatch(key, "list", json_type_name(value)))
}

pub fn get_string_list(object: &Object, key: &str) -> Result<Vec<String>, ParseError> {
    to_list(required(object, key)?, key)?
        .iter()
        .map(|item| to_string(item, key))
        .collect()
}

pub fn get_string_list_or_none(object: &Object, key: &str) -> Result<Option<Vec<String>>, ParseError> {
    match object.get(key) {
        None => Ok(None),
        Some(_) => get_string_list(object, key).map(Some),
    }
}

pub fn get_integer_list(object: &Object, key: &str) -> Result<Vec<i64>, ParseError> {
    to_list(required(object, key)?, key)?
        .iter()
        .map(|item| to_integer(item, key))
        .collect()
}

pub fn get_integer_list_or_none(object: &Object, key: &str) -> Result<Option<Vec<i64>>, ParseError> {
    match object.get(key) {
        None => Ok(None),
        Some(_) => get_integer_list(object, key).map(Some),
    }
}

// ----------------------------------------------------------------------------
// Nested entities
// ----------------------------------------------------------------------------

pub fn get_object<T: FromTelegramResult>(object: &Object, key: &str) -> Result<T, ParseError> {
    T::from_telegram_result(required(object, key)?)
}

pub fn get_object_or_none<T: FromTelegramResult>(
    object: &Object,
    key: &str,
) -> Result<Option<T>, ParseError> {
    object.get(key).map(T::from_telegram_result).transpose()
}

pub fn get_list<T: FromTelegramResult>(object: &Object, key: &str) -> Result<Vec<T>, ParseError> {
    to_list(required(object, key)?, key)?
        .iter()
        .map(T::from_telegram_result)
        .collect()
}

pub fn get_list_or_none<T: FromTelegramResult>(
    object: &Object,
    key: &str,
) -> Result<Option<Vec<T>>, ParseError> {
    match object.get(key) {
        None => Ok(None),
        Some(_) => get_list(object, key).map(Some),
    }
}

/// Reads a list of lists, as used by keyboard layouts.
pub fn get_nested_list<T: FromTelegramResult>(
    object: &Object,
    key: &str,
) -> Result<Vec<Vec<T>>, ParseError> {
    to_list(required(object, key)?, key)?
        .iter()
        .map(|row| {
            to_list(row, key)?
                .iter()
                .map(T::from_telegram_result)
                .collect()
        })
        .collect()
}

impl<T: FromTelegramResult> FromTelegramResult for Box<T> {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        T::from_telegram_result(value).map(Box::new)
    }
}
