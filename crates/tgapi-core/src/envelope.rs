//! Decoding of the `{ok, result | description}` wrapper around every Bot API
//! response.
//!
//! A response is one of three things:
//!
//! - a well-formed success, whose `result` is handed to an entity parser
//! - a well-formed failure (`ok: false`), returned as [`FailResult`]
//! - a malformed body, reported as [`ResponseError`]

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{ResponseError, ResponseFormatError};
use crate::value::{json_type_name, Object};
use crate::ParseError;

/// Outcome of a well-formed response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TelegramResult<T> {
    Success(T),
    Fail(FailResult),
}

impl<T> TelegramResult<T> {
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Fail(_) => None,
        }
    }

    pub fn fail(&self) -> Option<&FailResult> {
        match self {
            Self::Success(_) => None,
            Self::Fail(fail) => Some(fail),
        }
    }

    pub fn into_result(self) -> Result<T, FailResult> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Fail(fail) => Err(fail),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> TelegramResult<U> {
        match self {
            Self::Success(value) => TelegramResult::Success(f(value)),
            Self::Fail(fail) => TelegramResult::Fail(fail),
        }
    }
}

/// Failure reported by Telegram with `ok: false`. This is a value, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FailResult {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ResponseParameters>,
}

impl FailResult {
    pub fn new(description: Option<String>, error_code: Option<i64>) -> Self {
        Self {
            ok: false,
            description,
            error_code,
            parameters: None,
        }
    }

    /// Seconds to wait before retrying, when Telegram asked for it.
    pub fn retry_after(&self) -> Option<i64> {
        self.parameters.as_ref().and_then(|parameters| parameters.retry_after)
    }

    fn from_envelope(raw: &Object) -> Self {
        Self {
            ok: false,
            description: lenient(raw, "description", |value| value.as_str().map(str::to_owned)),
            error_code: lenient(raw, "error_code", Value::as_i64),
            parameters: lenient(raw, "parameters", ResponseParameters::from_value),
        }
    }
}

/// Hints attached to a failure, e.g. flood-wait or group migration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResponseParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migrate_to_chat_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<i64>,
}

impl ResponseParameters {
    fn from_value(value: &Value) -> Option<Self> {
        let raw = value.as_object()?;
        Some(Self {
            migrate_to_chat_id: lenient(raw, "migrate_to_chat_id", Value::as_i64),
            retry_after: lenient(raw, "retry_after", Value::as_i64),
        })
    }
}

/// Reads an optional failure field, dropping it when it has an unexpected type.
fn lenient<T>(raw: &Object, key: &str, convert: impl FnOnce(&Value) -> Option<T>) -> Option<T> {
    let value = raw.get(key)?;
    let converted = convert(value);
    if converted.is_none() {
        debug!(key, actual = json_type_name(value), "ignoring malformed failure field");
    }
    converted
}

/// Decodes a response body and, on success, runs `parser` on its `result`.
pub fn parse_response<T>(
    status: u16,
    body: &str,
    parser: impl FnOnce(&Value) -> Result<T, ParseError>,
) -> Result<TelegramResult<T>, ResponseError> {
    let decoded: Value = serde_json::from_str(body)
        .map_err(|_| ResponseFormatError::InvalidJson { status })?;

    let raw = decoded.as_object().ok_or(ResponseFormatError::NotAnObject {
        actual: json_type_name(&decoded),
    })?;

    let ok = raw
        .get("ok")
        .and_then(Value::as_bool)
        .ok_or(ResponseFormatError::IncorrectOk { status })?;

    if !ok {
        return Ok(TelegramResult::Fail(FailResult::from_envelope(raw)));
    }

    let result = raw
        .get("result")
        .ok_or(ResponseFormatError::MissingResult { status })?;

    Ok(TelegramResult::Success(parser(result)?))
}
