use serde::Serialize;

use crate::request::InputFileOrString;

/// An album item for `sendMediaGroup`.
///
/// `media` is an upload, a `file_id` or a URL. Uploads serialize as `null`
/// here; the sending method replaces them with `attach://` references.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputMedia {
    Photo(InputMediaPhoto),
    Video(InputMediaVideo),
    Audio(InputMediaAudio),
    Document(InputMediaDocument),
}

impl InputMedia {
    pub fn media(&self) -> &InputFileOrString {
        match self {
            Self::Photo(photo) => &photo.media,
            Self::Video(video) => &video.media,
            Self::Audio(audio) => &audio.media,
            Self::Document(document) => &document.media,
        }
    }
}

impl From<InputMediaPhoto> for InputMedia {
    fn from(photo: InputMediaPhoto) -> Self {
        Self::Photo(photo)
    }
}

impl From<InputMediaVideo> for InputMedia {
    fn from(video: InputMediaVideo) -> Self {
        Self::Video(video)
    }
}

impl From<InputMediaAudio> for InputMedia {
    fn from(audio: InputMediaAudio) -> Self {
        Self::Audio(audio)
    }
}

impl From<InputMediaDocument> for InputMedia {
    fn from(document: InputMediaDocument) -> Self {
        Self::Document(document)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputMediaPhoto {
    pub media: InputFileOrString,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_spoiler: Option<bool>,
}

impl InputMediaPhoto {
    pub fn new(media: impl Into<InputFileOrString>) -> Self {
        Self {
            media: media.into(),
            caption: None,
            parse_mode: None,
            has_spoiler: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputMediaVideo {
    pub media: InputFileOrString,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_streaming: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_spoiler: Option<bool>,
}

impl InputMediaVideo {
    pub fn new(media: impl Into<InputFileOrString>) -> Self {
        Self {
            media: media.into(),
            caption: None,
            parse_mode: None,
            width: None,
            height: None,
            duration: None,
            supports_streaming: None,
            has_spoiler: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputMediaAudio {
    pub media: InputFileOrString,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl InputMediaAudio {
    pub fn new(media: impl Into<InputFileOrString>) -> Self {
        Self {
            media: media.into(),
            caption: None,
            parse_mode: None,
            duration: None,
            performer: None,
            title: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputMediaDocument {
    pub media: InputFileOrString,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_content_type_detection: Option<bool>,
}

impl InputMediaDocument {
    pub fn new(media: impl Into<InputFileOrString>) -> Self {
        Self {
            media: media.into(),
            caption: None,
            parse_mode: None,
            disable_content_type_detection: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn media_serializes_with_its_type() {
        let photo = InputMedia::from(InputMediaPhoto::new("AgACAgIAAxkBAAE").with_caption("sea"));

        assert_eq!(
            serde_json::to_value(&photo).expect("serializable"),
            json!({ "type": "photo", "media": "AgACAgIAAxkBAAE", "caption": "sea" })
        );
        assert_eq!(photo.media(), &InputFileOrString::from("AgACAgIAAxkBAAE"));
    }
}
