use serde::Serialize;
use serde_json::Value;

use crate::value::{
    expect_object, get_integer, get_string, get_string_or_none, FromTelegramResult,
};
use crate::ParseError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForumTopic {
    pub message_thread_id: i64,
    pub name: String,
    pub icon_color: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_custom_emoji_id: Option<String>,
}

impl FromTelegramResult for ForumTopic {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            message_thread_id: get_integer(raw, "message_thread_id")?,
            name: get_string(raw, "name")?,
            icon_color: get_integer(raw, "icon_color")?,
            icon_custom_emoji_id: get_string_or_none(raw, "icon_custom_emoji_id")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForumTopicCreated {
    pub name: String,
    pub icon_color: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_custom_emoji_id: Option<String>,
}

impl FromTelegramResult for ForumTopicCreated {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            name: get_string(raw, "name")?,
            icon_color: get_integer(raw, "icon_color")?,
            icon_custom_emoji_id: get_string_or_none(raw, "icon_custom_emoji_id")?,
        })
    }
}

/// An edited topic. An empty `icon_custom_emoji_id` means the icon was removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForumTopicEdited {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_custom_emoji_id: Option<String>,
}

impl FromTelegramResult for ForumTopicEdited {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            name: get_string_or_none(raw, "name")?,
            icon_custom_emoji_id: get_string_or_none(raw, "icon_custom_emoji_id")?,
        })
    }
}

macro_rules! service_marker {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
        pub struct $name {}

        impl FromTelegramResult for $name {
            fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
                expect_object(value)?;
                Ok(Self {})
            }
        }
    };
}

service_marker!(
    /// Service message: a forum topic was closed.
    ForumTopicClosed
);
service_marker!(
    /// Service message: a forum topic was reopened.
    ForumTopicReopened
);
service_marker!(
    /// Service message: the General topic was hidden.
    GeneralForumTopicHidden
);
service_marker!(
    /// Service message: the General topic was unhidden.
    GeneralForumTopicUnhidden
);
