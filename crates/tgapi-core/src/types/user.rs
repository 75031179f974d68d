use serde::Serialize;
use serde_json::Value;

use crate::types::PhotoSize;
use crate::value::{
    expect_object, get_boolean, get_boolean_or_none, get_integer, get_integer_or_none,
    get_nested_list, get_string, get_string_or_none, get_true_or_none, FromTelegramResult, True,
};
use crate::ParseError;

/// A Telegram user or bot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: i64,
    pub is_bot: bool,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_premium: Option<True>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_to_attachment_menu: Option<True>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_join_groups: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_read_all_group_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_inline_queries: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_connect_to_business: Option<bool>,
}

impl User {
    pub fn new(id: i64, is_bot: bool, first_name: impl Into<String>) -> Self {
        Self {
            id,
            is_bot,
            first_name: first_name.into(),
            last_name: None,
            username: None,
            language_code: None,
            is_premium: None,
            added_to_attachment_menu: None,
            can_join_groups: None,
            can_read_all_group_messages: None,
            supports_inline_queries: None,
            can_connect_to_business: None,
        }
    }
}

impl FromTelegramResult for User {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            id: get_integer(raw, "id")?,
            is_bot: get_boolean(raw, "is_bot")?,
            first_name: get_string(raw, "first_name")?,
            last_name: get_string_or_none(raw, "last_name")?,
            username: get_string_or_none(raw, "username")?,
            language_code: get_string_or_none(raw, "language_code")?,
            is_premium: get_true_or_none(raw, "is_premium")?,
            added_to_attachment_menu: get_true_or_none(raw, "added_to_attachment_menu")?,
            can_join_groups: get_boolean_or_none(raw, "can_join_groups")?,
            can_read_all_group_messages: get_boolean_or_none(raw, "can_read_all_group_messages")?,
            supports_inline_queries: get_boolean_or_none(raw, "supports_inline_queries")?,
            can_connect_to_business: get_boolean_or_none(raw, "can_connect_to_business")?,
        })
    }
}

/// A user's profile pictures, each in several sizes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfilePhotos {
    pub total_count: i64,
    pub photos: Vec<Vec<PhotoSize>>,
}

impl FromTelegramResult for UserProfilePhotos {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            total_count: get_integer(raw, "total_count")?,
            photos: get_nested_list(raw, "photos")?,
        })
    }
}

/// A file ready to be downloaded via `file_path`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct File {
    pub file_id: String,
    pub file_unique_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

impl FromTelegramResult for File {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            file_id: get_string(raw, "file_id")?,
            file_unique_id: get_string(raw, "file_unique_id")?,
            file_size: get_integer_or_none(raw, "file_size")?,
            file_path: get_string_or_none(raw, "file_path")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Birthdate {
    pub day: i64,
    pub month: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
}

impl FromTelegramResult for Birthdate {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            day: get_integer(raw, "day")?,
            month: get_integer(raw, "month")?,
            year: get_integer_or_none(raw, "year")?,
        })
    }
}
