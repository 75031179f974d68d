use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::types::{
    BusinessConnection, BusinessMessagesDeleted, CallbackQuery, ChatBoostRemoved,
    ChatBoostUpdated, ChatJoinRequest, ChatMemberUpdated, ChosenInlineResult, InlineQuery,
    Message, MessageReactionCountUpdated, MessageReactionUpdated, Poll, PollAnswer,
    PreCheckoutQuery, ShippingQuery, UtcDateTime,
};
use crate::value::{
    expect_object, get_boolean, get_integer, get_integer_or_none, get_object_or_none, get_string,
    get_string_list_or_none, get_string_or_none, get_timestamp_or_none, FromTelegramResult,
};
use crate::ParseError;

/// Failure to read a webhook request body as an [`Update`].
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("Failed to decode JSON update: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// An incoming update. At most one of the optional fields is set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited_message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_post: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited_channel_post: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_connection: Option<BusinessConnection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited_business_message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_business_messages: Option<BusinessMessagesDeleted>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_reaction: Option<MessageReactionUpdated>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_reaction_count: Option<MessageReactionCountUpdated>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_query: Option<InlineQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chosen_inline_result: Option<ChosenInlineResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_query: Option<CallbackQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_query: Option<ShippingQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_checkout_query: Option<PreCheckoutQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poll: Option<Poll>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poll_answer: Option<PollAnswer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_chat_member: Option<ChatMemberUpdated>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_member: Option<ChatMemberUpdated>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_join_request: Option<ChatJoinRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_boost: Option<ChatBoostUpdated>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed_chat_boost: Option<ChatBoostRemoved>,
}

impl Update {
    /// Parses a webhook request body.
    pub fn from_json(body: &str) -> Result<Self, WebhookError> {
        let value: Value = serde_json::from_str(body)?;
        Ok(Self::from_telegram_result(&value)?)
    }

    /// Name of the populated payload field, or `None` for an update type
    /// this crate does not decode.
    pub fn kind(&self) -> Option<&'static str> {
        let kinds = [
            (self.message.is_some(), "message"),
            (self.edited_message.is_some(), "edited_message"),
            (self.channel_post.is_some(), "channel_post"),
            (self.edited_channel_post.is_some(), "edited_channel_post"),
            (self.business_connection.is_some(), "business_connection"),
            (self.business_message.is_some(), "business_message"),
            (self.edited_business_message.is_some(), "edited_business_message"),
            (self.deleted_business_messages.is_some(), "deleted_business_messages"),
            (self.message_reaction.is_some(), "message_reaction"),
            (self.message_reaction_count.is_some(), "message_reaction_count"),
            (self.inline_query.is_some(), "inline_query"),
            (self.chosen_inline_result.is_some(), "chosen_inline_result"),
            (self.callback_query.is_some(), "callback_query"),
            (self.shipping_query.is_some(), "shipping_query"),
            (self.pre_checkout_query.is_some(), "pre_checkout_query"),
            (self.poll.is_some(), "poll"),
            (self.poll_answer.is_some(), "poll_answer"),
            (self.my_chat_member.is_some(), "my_chat_member"),
            (self.chat_member.is_some(), "chat_member"),
            (self.chat_join_request.is_some(), "chat_join_request"),
            (self.chat_boost.is_some(), "chat_boost"),
            (self.removed_chat_boost.is_some(), "removed_chat_boost"),
        ];
        kinds
            .into_iter()
            .find_map(|(present, name)| present.then_some(name))
    }
}

impl FromTelegramResult for Update {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            update_id: get_integer(raw, "update_id")?,
            message: get_object_or_none(raw, "message")?,
            edited_message: get_object_or_none(raw, "edited_message")?,
            channel_post: get_object_or_none(raw, "channel_post")?,
            edited_channel_post: get_object_or_none(raw, "edited_channel_post")?,
            business_connection: get_object_or_none(raw, "business_connection")?,
            business_message: get_object_or_none(raw, "business_message")?,
            edited_business_message: get_object_or_none(raw, "edited_business_message")?,
            deleted_business_messages: get_object_or_none(raw, "deleted_business_messages")?,
            message_reaction: get_object_or_none(raw, "message_reaction")?,
            message_reaction_count: get_object_or_none(raw, "message_reaction_count")?,
            inline_query: get_object_or_none(raw, "inline_query")?,
            chosen_inline_result: get_object_or_none(raw, "chosen_inline_result")?,
            callback_query: get_object_or_none(raw, "callback_query")?,
            shipping_query: get_object_or_none(raw, "shipping_query")?,
            pre_checkout_query: get_object_or_none(raw, "pre_checkout_query")?,
            poll: get_object_or_none(raw, "poll")?,
            poll_answer: get_object_or_none(raw, "poll_answer")?,
            my_chat_member: get_object_or_none(raw, "my_chat_member")?,
            chat_member: get_object_or_none(raw, "chat_member")?,
            chat_join_request: get_object_or_none(raw, "chat_join_request")?,
            chat_boost: get_object_or_none(raw, "chat_boost")?,
            removed_chat_boost: get_object_or_none(raw, "removed_chat_boost")?,
        })
    }
}

/// Current webhook status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookInfo {
    pub url: String,
    pub has_custom_certificate: bool,
    pub pending_update_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error_date: Option<UtcDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_synchronization_error_date: Option<UtcDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_updates: Option<Vec<String>>,
}

impl FromTelegramResult for WebhookInfo {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            url: get_string(raw, "url")?,
            has_custom_certificate: get_boolean(raw, "has_custom_certificate")?,
            pending_update_count: get_integer(raw, "pending_update_count")?,
            ip_address: get_string_or_none(raw, "ip_address")?,
            last_error_date: get_timestamp_or_none(raw, "last_error_date")?,
            last_error_message: get_string_or_none(raw, "last_error_message")?,
            last_synchronization_error_date: get_timestamp_or_none(
                raw,
                "last_synchronization_error_date",
            )?,
            max_connections: get_integer_or_none(raw, "max_connections")?,
            allowed_updates: get_string_list_or_none(raw, "allowed_updates")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn webhook_body_with_message() {
        let update = Update::from_json(
            r#"{"update_id":10,"message":{"message_id":1,"date":1620000000,"chat":{"id":5,"type":"private"},"text":"hi"}}"#,
        )
        .expect("valid update");

        assert_eq!(update.update_id, 10);
        assert_eq!(update.kind(), Some("message"));
        assert_eq!(
            update.message.and_then(|message| message.text).as_deref(),
            Some("hi")
        );
    }

    #[test]
    fn update_without_payload_has_no_kind() {
        let update = Update::from_json(r#"{"update_id":11}"#).expect("valid update");
        assert_eq!(update.kind(), None);
    }

    #[test]
    fn invalid_webhook_json() {
        let error = Update::from_json("{not json").expect_err("invalid json");
        assert!(matches!(error, WebhookError::InvalidJson(_)));
    }

    #[test]
    fn webhook_body_missing_update_id() {
        let error = Update::from_json("{}").expect_err("update_id is required");
        assert!(matches!(
            error,
            WebhookError::Parse(ParseError::MissingField { ref key }) if key == "update_id"
        ));
    }

    #[test]
    fn webhook_info_with_error_details() {
        let info = WebhookInfo::from_telegram_result(&serde_json::json!({
            "url": "https://example.org/hook",
            "has_custom_certificate": false,
            "pending_update_count": 3,
            "last_error_date": 1_620_000_000,
            "last_error_message": "Connection refused",
            "allowed_updates": ["message", "callback_query"],
        }))
        .expect("valid webhook info");

        assert_eq!(info.pending_update_count, 3);
        assert_eq!(info.last_error_message.as_deref(), Some("Connection refused"));
        assert_eq!(
            info.allowed_updates,
            Some(vec!["message".to_owned(), "callback_query".to_owned()])
        );
    }
}
