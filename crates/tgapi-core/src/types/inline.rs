use serde::Serialize;
use serde_json::Value;

use crate::types::{Location, MaybeInaccessibleMessage, User};
use crate::value::{
    expect_object, get_object, get_object_or_none, get_string, get_string_or_none,
    FromTelegramResult,
};
use crate::ParseError;

/// An incoming inline query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InlineQuery {
    pub id: String,
    pub from: User,
    pub query: String,
    pub offset: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl FromTelegramResult for InlineQuery {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            id: get_string(raw, "id")?,
            from: get_object(raw, "from")?,
            query: get_string(raw, "query")?,
            offset: get_string(raw, "offset")?,
            chat_type: get_string_or_none(raw, "chat_type")?,
            location: get_object_or_none(raw, "location")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChosenInlineResult {
    pub result_id: String,
    pub from: User,
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_message_id: Option<String>,
}

impl FromTelegramResult for ChosenInlineResult {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            result_id: get_string(raw, "result_id")?,
            from: get_object(raw, "from")?,
            query: get_string(raw, "query")?,
            location: get_object_or_none(raw, "location")?,
            inline_message_id: get_string_or_none(raw, "inline_message_id")?,
        })
    }
}

/// A press on an inline keyboard callback button.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallbackQuery {
    pub id: String,
    pub from: User,
    pub chat_instance: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<MaybeInaccessibleMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_short_name: Option<String>,
}

impl FromTelegramResult for CallbackQuery {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            id: get_string(raw, "id")?,
            from: get_object(raw, "from")?,
            chat_instance: get_string(raw, "chat_instance")?,
            message: get_object_or_none(raw, "message")?,
            inline_message_id: get_string_or_none(raw, "inline_message_id")?,
            data: get_string_or_none(raw, "data")?,
            game_short_name: get_string_or_none(raw, "game_short_name")?,
        })
    }
}
