use serde::Serialize;
use serde_json::Value;

use crate::request::{
    serialize_data, ChatId, HttpMethod, InputFile, InputFileOrString, RequestFileCollector,
    TelegramMethod, TelegramRequest,
};
use crate::types::{
    InlineKeyboardMarkup, InputMedia, LinkPreviewOptions, Message, MessageEntity, MessageId,
    ReactionType,
};
use crate::value::{expect_true, list_of, FromTelegramResult, Object};
use crate::ParseError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SendMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_connection_id: Option<String>,
    pub chat_id: ChatId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i64>,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_preview_options: Option<LinkPreviewOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_effect_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl SendMessage {
    pub fn new(chat_id: impl Into<ChatId>, text: impl Into<String>) -> Self {
        Self {
            business_connection_id: None,
            chat_id: chat_id.into(),
            message_thread_id: None,
            text: text.into(),
            parse_mode: None,
            entities: None,
            link_preview_options: None,
            disable_notification: None,
            protect_content: None,
            message_effect_id: None,
            reply_markup: None,
        }
    }

    pub fn with_parse_mode(mut self, parse_mode: impl Into<String>) -> Self {
        self.parse_mode = Some(parse_mode.into());
        self
    }

    pub fn with_reply_markup(mut self, reply_markup: InlineKeyboardMarkup) -> Self {
        self.reply_markup = Some(reply_markup);
        self
    }
}

telegram_method!(
    SendMessage,
    "sendMessage",
    Post,
    Message,
    Message::from_telegram_result
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForwardMessage {
    pub chat_id: ChatId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i64>,
    pub from_chat_id: ChatId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_content: Option<bool>,
    pub message_id: i64,
}

impl ForwardMessage {
    pub fn new(chat_id: impl Into<ChatId>, from_chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            message_thread_id: None,
            from_chat_id: from_chat_id.into(),
            disable_notification: None,
            protect_content: None,
            message_id,
        }
    }
}

telegram_method!(
    ForwardMessage,
    "forwardMessage",
    Post,
    Message,
    Message::from_telegram_result
);

/// Copies a message without a link to the original. Returns only the new id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyMessage {
    pub chat_id: ChatId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i64>,
    pub from_chat_id: ChatId,
    pub message_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl CopyMessage {
    pub fn new(chat_id: impl Into<ChatId>, from_chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            message_thread_id: None,
            from_chat_id: from_chat_id.into(),
            message_id,
            caption: None,
            parse_mode: None,
            disable_notification: None,
            protect_content: None,
            reply_markup: None,
        }
    }
}

telegram_method!(
    CopyMessage,
    "copyMessage",
    Post,
    MessageId,
    MessageId::from_telegram_result
);

/// Sends a photo by upload, `file_id` or URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendPhoto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_connection_id: Option<String>,
    pub chat_id: ChatId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i64>,
    #[serde(skip_serializing_if = "InputFileOrString::is_file")]
    pub photo: InputFileOrString,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_spoiler: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl SendPhoto {
    pub fn new(chat_id: impl Into<ChatId>, photo: impl Into<InputFileOrString>) -> Self {
        Self {
            business_connection_id: None,
            chat_id: chat_id.into(),
            message_thread_id: None,
            photo: photo.into(),
            caption: None,
            parse_mode: None,
            has_spoiler: None,
            disable_notification: None,
            protect_content: None,
            reply_markup: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

impl TelegramRequest for SendPhoto {
    fn http_method(&self) -> HttpMethod {
        HttpMethod::Post
    }

    fn api_method(&self) -> &'static str {
        "sendPhoto"
    }

    fn data(&self) -> Result<Object, serde_json::Error> {
        serialize_data(self)
    }

    fn files(&self) -> Vec<(String, InputFile)> {
        self.photo
            .as_file()
            .map(|file| vec![(String::from("photo"), file.clone())])
            .unwrap_or_default()
    }
}

impl TelegramMethod for SendPhoto {
    type Output = Message;

    fn prepare_result(&self, result: &Value) -> Result<Message, ParseError> {
        Message::from_telegram_result(result)
    }
}

/// Sends 2-10 photos, videos, audios or documents as an album.
///
/// Uploaded items are sent as multipart parts `file0`, `file1`, ... and
/// referenced from `media` as `attach://fileN`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SendMediaGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_connection_id: Option<String>,
    pub chat_id: ChatId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i64>,
    #[serde(skip)]
    pub media: Vec<InputMedia>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_effect_id: Option<String>,
}

impl SendMediaGroup {
    pub fn new(chat_id: impl Into<ChatId>, media: Vec<InputMedia>) -> Self {
        Self {
            business_connection_id: None,
            chat_id: chat_id.into(),
            message_thread_id: None,
            media,
            disable_notification: None,
            protect_content: None,
            message_effect_id: None,
        }
    }

    pub fn with_disable_notification(mut self, disable_notification: bool) -> Self {
        self.disable_notification = Some(disable_notification);
        self
    }

    /// Serialized `media` list and the uploads it references.
    fn collect_media(&self) -> Result<(Value, RequestFileCollector), serde_json::Error> {
        let mut collector = RequestFileCollector::default();
        let mut items = Vec::with_capacity(self.media.len());
        for item in &self.media {
            let mut value = serde_json::to_value(item)?;
            if let Value::Object(object) = &mut value {
                object.insert(
                    String::from("media"),
                    Value::String(collector.attach(item.media())),
                );
            }
            items.push(value);
        }
        Ok((Value::Array(items), collector))
    }
}

impl TelegramRequest for SendMediaGroup {
    fn http_method(&self) -> HttpMethod {
        HttpMethod::Post
    }

    fn api_method(&self) -> &'static str {
        "sendMediaGroup"
    }

    fn data(&self) -> Result<Object, serde_json::Error> {
        let mut data = serialize_data(self)?;
        let (media, _) = self.collect_media()?;
        data.insert(String::from("media"), media);
        Ok(data)
    }

    fn files(&self) -> Vec<(String, InputFile)> {
        let mut collector = RequestFileCollector::default();
        for item in &self.media {
            collector.attach(item.media());
        }
        collector.into_files()
    }
}

impl TelegramMethod for SendMediaGroup {
    type Output = Vec<Message>;

    fn prepare_result(&self, result: &Value) -> Result<Vec<Message>, ParseError> {
        list_of::<Message>(result)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SendLocation {
    pub chat_id: ChatId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i64>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl SendLocation {
    pub fn new(chat_id: impl Into<ChatId>, latitude: f64, longitude: f64) -> Self {
        Self {
            chat_id: chat_id.into(),
            message_thread_id: None,
            latitude,
            longitude,
            horizontal_accuracy: None,
            live_period: None,
            heading: None,
            proximity_alert_radius: None,
            disable_notification: None,
            reply_markup: None,
        }
    }
}

telegram_method!(
    SendLocation,
    "sendLocation",
    Post,
    Message,
    Message::from_telegram_result
);

/// Shows a status such as "typing" for up to five seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendChatAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_connection_id: Option<String>,
    pub chat_id: ChatId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i64>,
    pub action: String,
}

impl SendChatAction {
    pub fn new(chat_id: impl Into<ChatId>, action: impl Into<String>) -> Self {
        Self {
            business_connection_id: None,
            chat_id: chat_id.into(),
            message_thread_id: None,
            action: action.into(),
        }
    }
}

telegram_method!(SendChatAction, "sendChatAction", Post, bool, expect_true);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetMessageReaction {
    pub chat_id: ChatId,
    pub message_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reaction: Option<Vec<ReactionType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_big: Option<bool>,
}

impl SetMessageReaction {
    pub fn new(chat_id: impl Into<ChatId>, message_id: i64, reaction: Vec<ReactionType>) -> Self {
        Self {
            chat_id: chat_id.into(),
            message_id,
            reaction: Some(reaction),
            is_big: None,
        }
    }
}

telegram_method!(
    SetMessageReaction,
    "setMessageReaction",
    Post,
    bool,
    expect_true
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteMessage {
    pub chat_id: ChatId,
    pub message_id: i64,
}

impl DeleteMessage {
    pub fn new(chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            message_id,
        }
    }
}

telegram_method!(DeleteMessage, "deleteMessage", Post, bool, expect_true);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerCallbackQuery {
    pub callback_query_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_alert: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_time: Option<i64>,
}

impl AnswerCallbackQuery {
    pub fn new(callback_query_id: impl Into<String>) -> Self {
        Self {
            callback_query_id: callback_query_id.into(),
            text: None,
            show_alert: None,
            url: None,
            cache_time: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

telegram_method!(
    AnswerCallbackQuery,
    "answerCallbackQuery",
    Post,
    bool,
    expect_true
);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::{InlineKeyboardButton, InputMediaDocument, InputMediaPhoto, InputMediaVideo};

    #[test]
    fn send_message_data() {
        let method = SendMessage::new(12_i64, "Hello")
            .with_parse_mode("HTML")
            .with_reply_markup(InlineKeyboardMarkup::new(vec![vec![
                InlineKeyboardButton::callback("Ok", "ok"),
            ]]));

        assert_eq!(method.api_method(), "sendMessage");
        assert_eq!(
            Value::Object(method.data().expect("serializable")),
            json!({
                "chat_id": 12,
                "text": "Hello",
                "parse_mode": "HTML",
                "reply_markup": { "inline_keyboard": [[{ "text": "Ok", "callback_data": "ok" }]] },
            })
        );
    }

    #[test]
    fn send_photo_by_file_id_has_no_uploads() {
        let method = SendPhoto::new(12_i64, "AgACAgIAAxkBAAE");
        assert!(method.files().is_empty());
        assert_eq!(
            method.data().expect("serializable").get("photo"),
            Some(&json!("AgACAgIAAxkBAAE"))
        );
    }

    #[test]
    fn send_photo_upload_moves_file_out_of_data() {
        let method = SendPhoto::new(12_i64, InputFile::new(b"png".to_vec()).with_filename("a.png"))
            .with_caption("Look");

        let data = method.data().expect("serializable");
        assert!(!data.contains_key("photo"));
        assert_eq!(data.get("caption"), Some(&json!("Look")));

        let files = method.files();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].0, "photo");
        assert_eq!(files[0].1.filename.as_deref(), Some("a.png"));
    }

    #[test]
    fn send_media_group_references_uploads_by_attach_name() {
        let upload = InputFile::new(b"jpg".to_vec()).with_filename("beach.jpg");
        let method = SendMediaGroup::new(
            12_i64,
            vec![
                InputMediaPhoto::new("https://example.org/sea.jpg").into(),
                InputMediaPhoto::new(upload.clone()).with_caption("Beach").into(),
                InputMediaVideo::new("BAACAgIAAxkBAAI").into(),
                InputMediaDocument::new(InputFile::new(b"pdf".to_vec())).into(),
            ],
        );

        assert_eq!(
            Value::Object(method.data().expect("serializable")),
            json!({
                "chat_id": 12,
                "media": [
                    { "type": "photo", "media": "https://example.org/sea.jpg" },
                    { "type": "photo", "media": "attach://file0", "caption": "Beach" },
                    { "type": "video", "media": "BAACAgIAAxkBAAI" },
                    { "type": "document", "media": "attach://file1" },
                ],
            })
        );

        let files = method.files();
        assert_eq!(
            files.iter().map(|(name, _)| name.as_str()).collect::<Vec<_>>(),
            vec!["file0", "file1"]
        );
        assert_eq!(files[0].1, upload);
    }

    #[test]
    fn send_media_group_without_uploads_has_no_files() {
        let method = SendMediaGroup::new(
            12_i64,
            vec![
                InputMediaPhoto::new("AgACAgIAAxkBAAE").into(),
                InputMediaPhoto::new("AgACAgIAAxkBAAF").into(),
            ],
        );

        assert!(method.files().is_empty());
        assert_eq!(method.api_method(), "sendMediaGroup");
        assert_eq!(
            method.prepare_result(&json!([])),
            Ok(Vec::new())
        );
    }

    #[test]
    fn set_message_reaction_serializes_tagged_reactions() {
        let method = SetMessageReaction::new(1_i64, 2, vec![ReactionType::emoji("👍")]);
        assert_eq!(
            Value::Object(method.data().expect("serializable")),
            json!({ "chat_id": 1, "message_id": 2, "reaction": [{ "type": "emoji", "emoji": "👍" }] })
        );
    }

    #[test]
    fn copy_message_returns_message_id() {
        let method = CopyMessage::new(1_i64, 2_i64, 3);
        assert_eq!(
            method.prepare_result(&json!({ "message_id": 99 })),
            Ok(MessageId { message_id: 99 })
        );
    }

    #[test]
    fn answer_callback_query_posts() {
        let method = AnswerCallbackQuery::new("cb").with_text("Done");
        assert_eq!(method.http_method(), HttpMethod::Post);
        assert_eq!(method.prepare_result(&json!(true)), Ok(true));
    }
}
