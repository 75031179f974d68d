use serde::Serialize;
use serde_json::Value;

use crate::types::{File, PhotoSize};
use crate::value::{
    expect_object, get_boolean, get_float, get_integer, get_integer_or_none, get_list,
    get_object_or_none, get_string, get_string_or_none, get_true_or_none, FromTelegramResult,
    True,
};
use crate::ParseError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sticker {
    pub file_id: String,
    pub file_unique_id: String,
    #[serde(rename = "type")]
    pub sticker_type: String,
    pub width: i64,
    pub height: i64,
    pub is_animated: bool,
    pub is_video: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<PhotoSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_animation: Option<File>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask_position: Option<MaskPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_emoji_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub needs_repainting: Option<True>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
}

impl FromTelegramResult for Sticker {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            file_id: get_string(raw, "file_id")?,
            file_unique_id: get_string(raw, "file_unique_id")?,
            sticker_type: get_string(raw, "type")?,
            width: get_integer(raw, "width")?,
            height: get_integer(raw, "height")?,
            is_animated: get_boolean(raw, "is_animated")?,
            is_video: get_boolean(raw, "is_video")?,
            thumbnail: get_object_or_none(raw, "thumbnail")?,
            emoji: get_string_or_none(raw, "emoji")?,
            set_name: get_string_or_none(raw, "set_name")?,
            premium_animation: get_object_or_none(raw, "premium_animation")?,
            mask_position: get_object_or_none(raw, "mask_position")?,
            custom_emoji_id: get_string_or_none(raw, "custom_emoji_id")?,
            needs_repainting: get_true_or_none(raw, "needs_repainting")?,
            file_size: get_integer_or_none(raw, "file_size")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StickerSet {
    pub name: String,
    pub title: String,
    pub sticker_type: String,
    pub stickers: Vec<Sticker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<PhotoSize>,
}

impl FromTelegramResult for StickerSet {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            name: get_string(raw, "name")?,
            title: get_string(raw, "title")?,
            sticker_type: get_string(raw, "sticker_type")?,
            stickers: get_list(raw, "stickers")?,
            thumbnail: get_object_or_none(raw, "thumbnail")?,
        })
    }
}

/// Where a mask is placed on a face.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaskPosition {
    pub point: String,
    pub x_shift: f64,
    pub y_shift: f64,
    pub scale: f64,
}

impl FromTelegramResult for MaskPosition {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            point: get_string(raw, "point")?,
            x_shift: get_float(raw, "x_shift")?,
            y_shift: get_float(raw, "y_shift")?,
            scale: get_float(raw, "scale")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sticker_set_parses_every_sticker() {
        let set = StickerSet::from_telegram_result(&json!({
            "name": "animals",
            "title": "Animals",
            "sticker_type": "regular",
            "stickers": [{
                "file_id": "s1",
                "file_unique_id": "us1",
                "type": "regular",
                "width": 512,
                "height": 512,
                "is_animated": false,
                "is_video": false,
                "emoji": "🐱",
            }],
        }))
        .expect("valid sticker set");

        assert_eq!(set.stickers.len(), 1);
        assert_eq!(set.stickers[0].emoji.as_deref(), Some("🐱"));
        assert_eq!(set.thumbnail, None);
    }

    #[test]
    fn mask_position_reads_floats() {
        let mask = MaskPosition::from_telegram_result(&json!({
            "point": "eyes",
            "x_shift": -0.5,
            "y_shift": 0,
            "scale": 1.25,
        }))
        .expect("valid mask position");

        assert_eq!(mask.x_shift, -0.5);
        assert_eq!(mask.y_shift, 0.0);
    }
}
