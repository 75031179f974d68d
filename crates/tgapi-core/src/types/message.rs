use serde::Serialize;
use serde_json::Value;

use crate::error::VariantFamily;
use crate::types::{
    Animation, Audio, Chat, ChatBoostAdded, Contact, Dice, Document, ForumTopicClosed,
    ForumTopicCreated, ForumTopicEdited, ForumTopicReopened, GeneralForumTopicHidden,
    GeneralForumTopicUnhidden, InlineKeyboardMarkup, Invoice, Location, PhotoSize, Poll, Sticker,
    Story, SuccessfulPayment, User, UtcDateTime, Venue, Video, VideoNote, Voice,
};
use crate::value::{
    expect_object, get_boolean_or_none, get_integer, get_integer_or_none, get_list_or_none,
    get_object, get_object_or_none, get_string, get_string_or_none, get_timestamp,
    get_timestamp_or_none, get_true_or_none, FromTelegramResult, True,
};
use crate::ParseError;

/// A message. Only the fields a bot commonly inspects are decoded; unknown
/// keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub message_id: i64,
    pub date: UtcDateTime,
    pub chat: Chat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_chat: Option<Chat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_boost_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_business_bot: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_connection_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_origin: Option<MessageOrigin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_topic_message: Option<True>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_automatic_forward: Option<True>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message: Option<Box<Message>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<TextQuote>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_story: Option<Story>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub via_bot: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_date: Option<UtcDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_protected_content: Option<True>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_from_offline: Option<True>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_signature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_preview_options: Option<LinkPreviewOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<Audio>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<Document>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<Vec<PhotoSize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sticker: Option<Sticker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story: Option<Story>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<Video>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_note: Option<VideoNote>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<Voice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_caption_above_media: Option<True>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_media_spoiler: Option<True>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dice: Option<Dice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poll: Option<Poll>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<Venue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_chat_members: Option<Vec<User>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_chat_member: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_chat_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_chat_photo: Option<Vec<PhotoSize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_chat_photo: Option<True>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_chat_created: Option<True>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supergroup_chat_created: Option<True>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_chat_created: Option<True>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_auto_delete_timer_changed: Option<MessageAutoDeleteTimerChanged>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migrate_to_chat_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migrate_from_chat_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinned_message: Option<Box<MaybeInaccessibleMessage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice: Option<Invoice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub successful_payment: Option<SuccessfulPayment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connected_website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_app_data: Option<WebAppData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost_added: Option<ChatBoostAdded>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forum_topic_created: Option<ForumTopicCreated>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forum_topic_edited: Option<ForumTopicEdited>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forum_topic_closed: Option<ForumTopicClosed>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forum_topic_reopened: Option<ForumTopicReopened>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general_forum_topic_hidden: Option<GeneralForumTopicHidden>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general_forum_topic_unhidden: Option<GeneralForumTopicUnhidden>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl FromTelegramResult for Message {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            message_id: get_integer(raw, "message_id")?,
            date: get_timestamp(raw, "date")?,
            chat: get_object(raw, "chat")?,
            message_thread_id: get_integer_or_none(raw, "message_thread_id")?,
            from: get_object_or_none(raw, "from")?,
            sender_chat: get_object_or_none(raw, "sender_chat")?,
            sender_boost_count: get_integer_or_none(raw, "sender_boost_count")?,
            sender_business_bot: get_object_or_none(raw, "sender_business_bot")?,
            business_connection_id: get_string_or_none(raw, "business_connection_id")?,
            forward_origin: get_object_or_none(raw, "forward_origin")?,
            is_topic_message: get_true_or_none(raw, "is_topic_message")?,
            is_automatic_forward: get_true_or_none(raw, "is_automatic_forward")?,
            reply_to_message: get_object_or_none(raw, "reply_to_message")?,
            quote: get_object_or_none(raw, "quote")?,
            reply_to_story: get_object_or_none(raw, "reply_to_story")?,
            via_bot: get_object_or_none(raw, "via_bot")?,
            edit_date: get_timestamp_or_none(raw, "edit_date")?,
            has_protected_content: get_true_or_none(raw, "has_protected_content")?,
            is_from_offline: get_true_or_none(raw, "is_from_offline")?,
            media_group_id: get_string_or_none(raw, "media_group_id")?,
            author_signature: get_string_or_none(raw, "author_signature")?,
            text: get_string_or_none(raw, "text")?,
            entities: get_list_or_none(raw, "entities")?,
            link_preview_options: get_object_or_none(raw, "link_preview_options")?,
            effect_id: get_string_or_none(raw, "effect_id")?,
            animation: get_object_or_none(raw, "animation")?,
            audio: get_object_or_none(raw, "audio")?,
            document: get_object_or_none(raw, "document")?,
            photo: get_list_or_none(raw, "photo")?,
            sticker: get_object_or_none(raw, "sticker")?,
            story: get_object_or_none(raw, "story")?,
            video: get_object_or_none(raw, "video")?,
            video_note: get_object_or_none(raw, "video_note")?,
            voice: get_object_or_none(raw, "voice")?,
            caption: get_string_or_none(raw, "caption")?,
            caption_entities: get_list_or_none(raw, "caption_entities")?,
            show_caption_above_media: get_true_or_none(raw, "show_caption_above_media")?,
            has_media_spoiler: get_true_or_none(raw, "has_media_spoiler")?,
            contact: get_object_or_none(raw, "contact")?,
            dice: get_object_or_none(raw, "dice")?,
            poll: get_object_or_none(raw, "poll")?,
            venue: get_object_or_none(raw, "venue")?,
            location: get_object_or_none(raw, "location")?,
            new_chat_members: get_list_or_none(raw, "new_chat_members")?,
            left_chat_member: get_object_or_none(raw, "left_chat_member")?,
            new_chat_title: get_string_or_none(raw, "new_chat_title")?,
            new_chat_photo: get_list_or_none(raw, "new_chat_photo")?,
            delete_chat_photo: get_true_or_none(raw, "delete_chat_photo")?,
            group_chat_created: get_true_or_none(raw, "group_chat_created")?,
            supergroup_chat_created: get_true_or_none(raw, "supergroup_chat_created")?,
            channel_chat_created: get_true_or_none(raw, "channel_chat_created")?,
            message_auto_delete_timer_changed: get_object_or_none(
                raw,
                "message_auto_delete_timer_changed",
            )?,
            migrate_to_chat_id: get_integer_or_none(raw, "migrate_to_chat_id")?,
            migrate_from_chat_id: get_integer_or_none(raw, "migrate_from_chat_id")?,
            pinned_message: get_object_or_none(raw, "pinned_message")?,
            invoice: get_object_or_none(raw, "invoice")?,
            successful_payment: get_object_or_none(raw, "successful_payment")?,
            connected_website: get_string_or_none(raw, "connected_website")?,
            web_app_data: get_object_or_none(raw, "web_app_data")?,
            boost_added: get_object_or_none(raw, "boost_added")?,
            forum_topic_created: get_object_or_none(raw, "forum_topic_created")?,
            forum_topic_edited: get_object_or_none(raw, "forum_topic_edited")?,
            forum_topic_closed: get_object_or_none(raw, "forum_topic_closed")?,
            forum_topic_reopened: get_object_or_none(raw, "forum_topic_reopened")?,
            general_forum_topic_hidden: get_object_or_none(raw, "general_forum_topic_hidden")?,
            general_forum_topic_unhidden: get_object_or_none(raw, "general_forum_topic_unhidden")?,
            reply_markup: get_object_or_none(raw, "reply_markup")?,
        })
    }
}

/// A message the bot can no longer read. Telegram reports it with `date` 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InaccessibleMessage {
    pub chat: Chat,
    pub message_id: i64,
}

impl FromTelegramResult for InaccessibleMessage {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            chat: get_object(raw, "chat")?,
            message_id: get_integer(raw, "message_id")?,
        })
    }
}

/// Either a full message or a placeholder for an inaccessible one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MaybeInaccessibleMessage {
    Message(Box<Message>),
    Inaccessible(InaccessibleMessage),
}

impl MaybeInaccessibleMessage {
    pub fn chat(&self) -> &Chat {
        match self {
            Self::Message(message) => &message.chat,
            Self::Inaccessible(message) => &message.chat,
        }
    }

    pub fn message_id(&self) -> i64 {
        match self {
            Self::Message(message) => message.message_id,
            Self::Inaccessible(message) => message.message_id,
        }
    }

    pub fn as_message(&self) -> Option<&Message> {
        match self {
            Self::Message(message) => Some(message),
            Self::Inaccessible(_) => None,
        }
    }
}

impl FromTelegramResult for MaybeInaccessibleMessage {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        match get_integer(expect_object(value)?, "date")? {
            0 => InaccessibleMessage::from_telegram_result(value).map(Self::Inaccessible),
            _ => Message::from_telegram_result(value).map(|message| Self::Message(Box::new(message))),
        }
    }
}

/// Identifier of a sent message, as returned by `copyMessage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MessageId {
    pub message_id: i64,
}

impl FromTelegramResult for MessageId {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            message_id: get_integer(raw, "message_id")?,
        })
    }
}

/// A special entity in a text, such as a hashtag, link or bold span.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageEntity {
    #[serde(rename = "type")]
    pub entity_type: String,
    pub offset: i64,
    pub length: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_emoji_id: Option<String>,
}

impl MessageEntity {
    pub fn new(entity_type: impl Into<String>, offset: i64, length: i64) -> Self {
        Self {
            entity_type: entity_type.into(),
            offset,
            length,
            url: None,
            user: None,
            language: None,
            custom_emoji_id: None,
        }
    }
}

impl FromTelegramResult for MessageEntity {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            entity_type: get_string(raw, "type")?,
            offset: get_integer(raw, "offset")?,
            length: get_integer(raw, "length")?,
            url: get_string_or_none(raw, "url")?,
            user: get_object_or_none(raw, "user")?,
            language: get_string_or_none(raw, "language")?,
            custom_emoji_id: get_string_or_none(raw, "custom_emoji_id")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextQuote {
    pub text: String,
    pub position: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_manual: Option<True>,
}

impl FromTelegramResult for TextQuote {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            text: get_string(raw, "text")?,
            position: get_integer(raw, "position")?,
            entities: get_list_or_none(raw, "entities")?,
            is_manual: get_true_or_none(raw, "is_manual")?,
        })
    }
}

/// Link preview options. Also accepted by `sendMessage`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkPreviewOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefer_small_media: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefer_large_media: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_above_text: Option<bool>,
}

impl LinkPreviewOptions {
    pub fn disabled() -> Self {
        Self {
            is_disabled: Some(true),
            ..Self::default()
        }
    }
}

impl FromTelegramResult for LinkPreviewOptions {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            is_disabled: get_boolean_or_none(raw, "is_disabled")?,
            url: get_string_or_none(raw, "url")?,
            prefer_small_media: get_boolean_or_none(raw, "prefer_small_media")?,
            prefer_large_media: get_boolean_or_none(raw, "prefer_large_media")?,
            show_above_text: get_boolean_or_none(raw, "show_above_text")?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MessageAutoDeleteTimerChanged {
    pub message_auto_delete_time: i64,
}

impl FromTelegramResult for MessageAutoDeleteTimerChanged {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            message_auto_delete_time: get_integer(raw, "message_auto_delete_time")?,
        })
    }
}

/// Data sent from a Web App to the bot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebAppData {
    pub data: String,
    pub button_text: String,
}

impl FromTelegramResult for WebAppData {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            data: get_string(raw, "data")?,
            button_text: get_string(raw, "button_text")?,
        })
    }
}

/// Where a forwarded message originally came from, selected by `type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum MessageOrigin {
    #[serde(rename = "user")]
    User(MessageOriginUser),
    #[serde(rename = "hidden_user")]
    HiddenUser(MessageOriginHiddenUser),
    #[serde(rename = "chat")]
    Chat(MessageOriginChat),
    #[serde(rename = "channel")]
    Channel(MessageOriginChannel),
}

impl MessageOrigin {
    pub const DISCRIMINATORS: [&'static str; 4] = [
        MessageOriginUser::TYPE,
        MessageOriginHiddenUser::TYPE,
        MessageOriginChat::TYPE,
        MessageOriginChannel::TYPE,
    ];

    pub fn origin_type(&self) -> &'static str {
        match self {
            Self::User(_) => MessageOriginUser::TYPE,
            Self::HiddenUser(_) => MessageOriginHiddenUser::TYPE,
            Self::Chat(_) => MessageOriginChat::TYPE,
            Self::Channel(_) => MessageOriginChannel::TYPE,
        }
    }

    pub fn date(&self) -> UtcDateTime {
        match self {
            Self::User(origin) => origin.date,
            Self::HiddenUser(origin) => origin.date,
            Self::Chat(origin) => origin.date,
            Self::Channel(origin) => origin.date,
        }
    }
}

impl FromTelegramResult for MessageOrigin {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let origin_type = get_string(expect_object(value)?, "type")?;
        match origin_type.as_str() {
            MessageOriginUser::TYPE => MessageOriginUser::from_telegram_result(value).map(Self::User),
            MessageOriginHiddenUser::TYPE => {
                MessageOriginHiddenUser::from_telegram_result(value).map(Self::HiddenUser)
            }
            MessageOriginChat::TYPE => MessageOriginChat::from_telegram_result(value).map(Self::Chat),
            MessageOriginChannel::TYPE => {
                MessageOriginChannel::from_telegram_result(value).map(Self::Channel)
            }
            _ => Err(ParseError::unknown_variant(
                VariantFamily::MessageOrigin,
                origin_type,
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageOriginUser {
    pub date: UtcDateTime,
    pub sender_user: User,
}

impl MessageOriginUser {
    pub const TYPE: &'static str = "user";
}

impl FromTelegramResult for MessageOriginUser {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            date: get_timestamp(raw, "date")?,
            sender_user: get_object(raw, "sender_user")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageOriginHiddenUser {
    pub date: UtcDateTime,
    pub sender_user_name: String,
}

impl MessageOriginHiddenUser {
    pub const TYPE: &'static str = "hidden_user";
}

impl FromTelegramResult for MessageOriginHiddenUser {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            date: get_timestamp(raw, "date")?,
            sender_user_name: get_string(raw, "sender_user_name")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageOriginChat {
    pub date: UtcDateTime,
    pub sender_chat: Chat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_signature: Option<String>,
}

impl MessageOriginChat {
    pub const TYPE: &'static str = "chat";
}

impl FromTelegramResult for MessageOriginChat {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            date: get_timestamp(raw, "date")?,
            sender_chat: get_object(raw, "sender_chat")?,
            author_signature: get_string_or_none(raw, "author_signature")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageOriginChannel {
    pub date: UtcDateTime,
    pub chat: Chat,
    pub message_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_signature: Option<String>,
}

impl MessageOriginChannel {
    pub const TYPE: &'static str = "channel";
}

impl FromTelegramResult for MessageOriginChannel {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            date: get_timestamp(raw, "date")?,
            chat: get_object(raw, "chat")?,
            message_id: get_integer(raw, "message_id")?,
            author_signature: get_string_or_none(raw, "author_signature")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn chat() -> Value {
        json!({ "id": 10, "type": "private", "first_name": "Ann" })
    }

    #[test]
    fn parses_text_message_with_entities() {
        let message = Message::from_telegram_result(&json!({
            "message_id": 5,
            "date": 1_620_000_000,
            "chat": chat(),
            "text": "/start now",
            "entities": [{ "type": "bot_command", "offset": 0, "length": 6 }],
        }))
        .expect("valid message");

        assert_eq!(message.text.as_deref(), Some("/start now"));
        assert_eq!(
            message.entities,
            Some(vec![MessageEntity::new("bot_command", 0, 6)])
        );
        assert_eq!(message.from, None);
    }

    #[test]
    fn reply_to_message_is_parsed_recursively() {
        let message = Message::from_telegram_result(&json!({
            "message_id": 2,
            "date": 1_620_000_100,
            "chat": chat(),
            "reply_to_message": {
                "message_id": 1,
                "date": 1_620_000_000,
                "chat": chat(),
                "text": "first",
            },
        }))
        .expect("valid message");

        let reply = message.reply_to_message.expect("reply present");
        assert_eq!(reply.message_id, 1);
        assert_eq!(reply.text.as_deref(), Some("first"));
    }

    #[test]
    fn zero_date_means_inaccessible() {
        let pinned = MaybeInaccessibleMessage::from_telegram_result(&json!({
            "chat": chat(),
            "message_id": 77,
            "date": 0,
        }))
        .expect("valid inaccessible message");

        assert!(matches!(pinned, MaybeInaccessibleMessage::Inaccessible(_)));
        assert_eq!(pinned.message_id(), 77);
        assert!(pinned.as_message().is_none());
    }

    #[test]
    fn nonzero_date_means_full_message() {
        let pinned = MaybeInaccessibleMessage::from_telegram_result(&json!({
            "chat": chat(),
            "message_id": 78,
            "date": 1_620_000_000,
        }))
        .expect("valid message");

        assert_eq!(pinned.as_message().map(|m| m.message_id), Some(78));
        assert_eq!(pinned.chat().id, 10);
    }

    #[test]
    fn forward_origin_dispatches_on_type() {
        let origin = MessageOrigin::from_telegram_result(&json!({
            "type": "hidden_user",
            "date": 1_620_000_000,
            "sender_user_name": "Anonymous",
        }))
        .expect("valid origin");

        assert_eq!(origin.origin_type(), "hidden_user");
        assert_eq!(origin.date().unix_timestamp(), 1_620_000_000);
    }

    #[test]
    fn unknown_origin_type_is_rejected() {
        let error = MessageOrigin::from_telegram_result(&json!({
            "type": "bot",
            "date": 1,
        }))
        .expect_err("bot is not an origin type");

        assert_eq!(error.to_string(), "Unknown message origin type. Got \"bot\".");
    }
}
