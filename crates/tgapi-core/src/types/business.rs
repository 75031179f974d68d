use serde::Serialize;
use serde_json::Value;

use crate::types::{Chat, Location, Sticker, User, UtcDateTime};
use crate::value::{
    expect_object, get_boolean, get_integer, get_integer_list, get_list, get_object,
    get_object_or_none, get_string, get_string_or_none, get_timestamp, FromTelegramResult,
};
use crate::ParseError;

/// Intro shown on a business account's empty chat.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessIntro {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sticker: Option<Sticker>,
}

impl FromTelegramResult for BusinessIntro {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            title: get_string_or_none(raw, "title")?,
            message: get_string_or_none(raw, "message")?,
            sticker: get_object_or_none(raw, "sticker")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessLocation {
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl FromTelegramResult for BusinessLocation {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            address: get_string(raw, "address")?,
            location: get_object_or_none(raw, "location")?,
        })
    }
}

/// Minutes counted from the start of the week, Monday 00:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BusinessOpeningHoursInterval {
    pub opening_minute: i64,
    pub closing_minute: i64,
}

impl FromTelegramResult for BusinessOpeningHoursInterval {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            opening_minute: get_integer(raw, "opening_minute")?,
            closing_minute: get_integer(raw, "closing_minute")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessOpeningHours {
    pub time_zone_name: String,
    pub opening_hours: Vec<BusinessOpeningHoursInterval>,
}

impl FromTelegramResult for BusinessOpeningHours {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            time_zone_name: get_string(raw, "time_zone_name")?,
            opening_hours: get_list(raw, "opening_hours")?,
        })
    }
}

/// Connection of the bot with a business account.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessConnection {
    pub id: String,
    pub user: User,
    pub user_chat_id: i64,
    pub date: UtcDateTime,
    pub can_reply: bool,
    pub is_enabled: bool,
}

impl FromTelegramResult for BusinessConnection {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            id: get_string(raw, "id")?,
            user: get_object(raw, "user")?,
            user_chat_id: get_integer(raw, "user_chat_id")?,
            date: get_timestamp(raw, "date")?,
            can_reply: get_boolean(raw, "can_reply")?,
            is_enabled: get_boolean(raw, "is_enabled")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessMessagesDeleted {
    pub business_connection_id: String,
    pub chat: Chat,
    pub message_ids: Vec<i64>,
}

impl FromTelegramResult for BusinessMessagesDeleted {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            business_connection_id: get_string(raw, "business_connection_id")?,
            chat: get_object(raw, "chat")?,
            message_ids: get_integer_list(raw, "message_ids")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn intro_fields_are_all_optional() {
        let intro = BusinessIntro::from_telegram_result(&json!({})).expect("valid intro");
        assert_eq!(intro.title, None);
        assert_eq!(intro.message, None);
        assert_eq!(intro.sticker, None);
    }

    #[test]
    fn opening_hours_keep_interval_order() {
        let hours = BusinessOpeningHours::from_telegram_result(&json!({
            "time_zone_name": "Europe/Berlin",
            "opening_hours": [
                { "opening_minute": 540, "closing_minute": 1080 },
                { "opening_minute": 1980, "closing_minute": 2520 },
            ],
        }))
        .expect("valid opening hours");

        assert_eq!(
            hours.opening_hours,
            vec![
                BusinessOpeningHoursInterval { opening_minute: 540, closing_minute: 1080 },
                BusinessOpeningHoursInterval { opening_minute: 1980, closing_minute: 2520 },
            ]
        );
    }

    #[test]
    fn deleted_message_ids_must_be_integers() {
        let error = BusinessMessagesDeleted::from_telegram_result(&json!({
            "business_connection_id": "b1",
            "chat": { "id": 1, "type": "private" },
            "message_ids": [1, "2"],
        }))
        .expect_err("ids are integers");

        assert_eq!(error, ParseError::type_mismatch("message_ids", "integer", "string"));
    }
}
