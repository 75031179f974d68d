use serde::Serialize;
use serde_json::Value;

use crate::types::Chat;
use crate::value::{
    expect_object, get_float, get_float_or_none, get_integer, get_integer_or_none, get_object,
    get_object_or_none, get_string, get_string_or_none, FromTelegramResult,
};
use crate::ParseError;

/// One size of a photo or a file/sticker thumbnail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhotoSize {
    pub file_id: String,
    pub file_unique_id: String,
    pub width: i64,
    pub height: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
}

impl FromTelegramResult for PhotoSize {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            file_id: get_string(raw, "file_id")?,
            file_unique_id: get_string(raw, "file_unique_id")?,
            width: get_integer(raw, "width")?,
            height: get_integer(raw, "height")?,
            file_size: get_integer_or_none(raw, "file_size")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Animation {
    pub file_id: String,
    pub file_unique_id: String,
    pub width: i64,
    pub height: i64,
    pub duration: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<PhotoSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
}

impl FromTelegramResult for Animation {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            file_id: get_string(raw, "file_id")?,
            file_unique_id: get_string(raw, "file_unique_id")?,
            width: get_integer(raw, "width")?,
            height: get_integer(raw, "height")?,
            duration: get_integer(raw, "duration")?,
            thumbnail: get_object_or_none(raw, "thumbnail")?,
            file_name: get_string_or_none(raw, "file_name")?,
            mime_type: get_string_or_none(raw, "mime_type")?,
            file_size: get_integer_or_none(raw, "file_size")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Audio {
    pub file_id: String,
    pub file_unique_id: String,
    pub duration: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<PhotoSize>,
}

impl FromTelegramResult for Audio {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            file_id: get_string(raw, "file_id")?,
            file_unique_id: get_string(raw, "file_unique_id")?,
            duration: get_integer(raw, "duration")?,
            performer: get_string_or_none(raw, "performer")?,
            title: get_string_or_none(raw, "title")?,
            file_name: get_string_or_none(raw, "file_name")?,
            mime_type: get_string_or_none(raw, "mime_type")?,
            file_size: get_integer_or_none(raw, "file_size")?,
            thumbnail: get_object_or_none(raw, "thumbnail")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub file_id: String,
    pub file_unique_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<PhotoSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
}

impl FromTelegramResult for Document {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            file_id: get_string(raw, "file_id")?,
            file_unique_id: get_string(raw, "file_unique_id")?,
            thumbnail: get_object_or_none(raw, "thumbnail")?,
            file_name: get_string_or_none(raw, "file_name")?,
            mime_type: get_string_or_none(raw, "mime_type")?,
            file_size: get_integer_or_none(raw, "file_size")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Video {
    pub file_id: String,
    pub file_unique_id: String,
    pub width: i64,
    pub height: i64,
    pub duration: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<PhotoSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
}

impl FromTelegramResult for Video {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            file_id: get_string(raw, "file_id")?,
            file_unique_id: get_string(raw, "file_unique_id")?,
            width: get_integer(raw, "width")?,
            height: get_integer(raw, "height")?,
            duration: get_integer(raw, "duration")?,
            thumbnail: get_object_or_none(raw, "thumbnail")?,
            file_name: get_string_or_none(raw, "file_name")?,
            mime_type: get_string_or_none(raw, "mime_type")?,
            file_size: get_integer_or_none(raw, "file_size")?,
        })
    }
}

/// A round video message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoNote {
    pub file_id: String,
    pub file_unique_id: String,
    pub length: i64,
    pub duration: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<PhotoSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
}

impl FromTelegramResult for VideoNote {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            file_id: get_string(raw, "file_id")?,
            file_unique_id: get_string(raw, "file_unique_id")?,
            length: get_integer(raw, "length")?,
            duration: get_integer(raw, "duration")?,
            thumbnail: get_object_or_none(raw, "thumbnail")?,
            file_size: get_integer_or_none(raw, "file_size")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Voice {
    pub file_id: String,
    pub file_unique_id: String,
    pub duration: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
}

impl FromTelegramResult for Voice {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            file_id: get_string(raw, "file_id")?,
            file_unique_id: get_string(raw, "file_unique_id")?,
            duration: get_integer(raw, "duration")?,
            mime_type: get_string_or_none(raw, "mime_type")?,
            file_size: get_integer_or_none(raw, "file_size")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contact {
    pub phone_number: String,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcard: Option<String>,
}

impl FromTelegramResult for Contact {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            phone_number: get_string(raw, "phone_number")?,
            first_name: get_string(raw, "first_name")?,
            last_name: get_string_or_none(raw, "last_name")?,
            user_id: get_integer_or_none(raw, "user_id")?,
            vcard: get_string_or_none(raw, "vcard")?,
        })
    }
}

/// An animated emoji with a random value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dice {
    pub emoji: String,
    pub value: i64,
}

impl FromTelegramResult for Dice {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            emoji: get_string(raw, "emoji")?,
            value: get_integer(raw, "value")?,
        })
    }
}

/// A point on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_accuracy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_period: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proximity_alert_radius: Option<i64>,
}

impl FromTelegramResult for Location {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            latitude: get_float(raw, "latitude")?,
            longitude: get_float(raw, "longitude")?,
            horizontal_accuracy: get_float_or_none(raw, "horizontal_accuracy")?,
            live_period: get_integer_or_none(raw, "live_period")?,
            heading: get_integer_or_none(raw, "heading")?,
            proximity_alert_radius: get_integer_or_none(raw, "proximity_alert_radius")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Venue {
    pub location: Location,
    pub title: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foursquare_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foursquare_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_place_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_place_type: Option<String>,
}

impl FromTelegramResult for Venue {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            location: get_object(raw, "location")?,
            title: get_string(raw, "title")?,
            address: get_string(raw, "address")?,
            foursquare_id: get_string_or_none(raw, "foursquare_id")?,
            foursquare_type: get_string_or_none(raw, "foursquare_type")?,
            google_place_id: get_string_or_none(raw, "google_place_id")?,
            google_place_type: get_string_or_none(raw, "google_place_type")?,
        })
    }
}

/// A forwarded story.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Story {
    pub chat: Chat,
    pub id: i64,
}

impl FromTelegramResult for Story {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            chat: get_object(raw, "chat")?,
            id: get_integer(raw, "id")?,
        })
    }
}
