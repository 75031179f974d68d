use serde::Serialize;
use serde_json::Value;

use crate::error::VariantFamily;
use crate::types::{Chat, ChatInviteLink, UntilDate, User, UtcDateTime};
use crate::value::{
    expect_object, get_boolean, get_boolean_or_none, get_object, get_object_or_none, get_string,
    get_string_or_none, get_timestamp, get_until_date, FromTelegramResult,
};
use crate::ParseError;

/// Membership of a user in a chat, selected by the `status` field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status")]
pub enum ChatMember {
    #[serde(rename = "creator")]
    Owner(ChatMemberOwner),
    #[serde(rename = "administrator")]
    Administrator(ChatMemberAdministrator),
    #[serde(rename = "member")]
    Member(ChatMemberMember),
    #[serde(rename = "restricted")]
    Restricted(ChatMemberRestricted),
    #[serde(rename = "left")]
    Left(ChatMemberLeft),
    #[serde(rename = "kicked")]
    Banned(ChatMemberBanned),
}

impl ChatMember {
    pub const DISCRIMINATORS: [&'static str; 6] = [
        ChatMemberOwner::STATUS,
        ChatMemberAdministrator::STATUS,
        ChatMemberMember::STATUS,
        ChatMemberRestricted::STATUS,
        ChatMemberLeft::STATUS,
        ChatMemberBanned::STATUS,
    ];

    pub fn status(&self) -> &'static str {
        match self {
            Self::Owner(_) => ChatMemberOwner::STATUS,
            Self::Administrator(_) => ChatMemberAdministrator::STATUS,
            Self::Member(_) => ChatMemberMember::STATUS,
            Self::Restricted(_) => ChatMemberRestricted::STATUS,
            Self::Left(_) => ChatMemberLeft::STATUS,
            Self::Banned(_) => ChatMemberBanned::STATUS,
        }
    }

    pub fn user(&self) -> &User {
        match self {
            Self::Owner(member) => &member.user,
            Self::Administrator(member) => &member.user,
            Self::Member(member) => &member.user,
            Self::Restricted(member) => &member.user,
            Self::Left(member) => &member.user,
            Self::Banned(member) => &member.user,
        }
    }
}

impl FromTelegramResult for ChatMember {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let status = get_string(expect_object(value)?, "status")?;
        match status.as_str() {
            ChatMemberOwner::STATUS => ChatMemberOwner::from_telegram_result(value).map(Self::Owner),
            ChatMemberAdministrator::STATUS => {
                ChatMemberAdministrator::from_telegram_result(value).map(Self::Administrator)
            }
            ChatMemberMember::STATUS => {
                ChatMemberMember::from_telegram_result(value).map(Self::Member)
            }
            ChatMemberRestricted::STATUS => {
                ChatMemberRestricted::from_telegram_result(value).map(Self::Restricted)
            }
            ChatMemberLeft::STATUS => ChatMemberLeft::from_telegram_result(value).map(Self::Left),
            ChatMemberBanned::STATUS => {
                ChatMemberBanned::from_telegram_result(value).map(Self::Banned)
            }
            _ => Err(ParseError::unknown_variant(VariantFamily::ChatMember, status)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMemberOwner {
    pub user: User,
    pub is_anonymous: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_title: Option<String>,
}

impl ChatMemberOwner {
    pub const STATUS: &'static str = "creator";
}

impl FromTelegramResult for ChatMemberOwner {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            user: get_object(raw, "user")?,
            is_anonymous: get_boolean(raw, "is_anonymous")?,
            custom_title: get_string_or_none(raw, "custom_title")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMemberAdministrator {
    pub user: User,
    pub can_be_edited: bool,
    pub is_anonymous: bool,
    pub can_manage_chat: bool,
    pub can_delete_messages: bool,
    pub can_manage_video_chats: bool,
    pub can_restrict_members: bool,
    pub can_promote_members: bool,
    pub can_change_info: bool,
    pub can_invite_users: bool,
    pub can_post_stories: bool,
    pub can_edit_stories: bool,
    pub can_delete_stories: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_post_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_edit_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_pin_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_manage_topics: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_title: Option<String>,
}

impl ChatMemberAdministrator {
    pub const STATUS: &'static str = "administrator";
}

impl FromTelegramResult for ChatMemberAdministrator {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            user: get_object(raw, "user")?,
            can_be_edited: get_boolean(raw, "can_be_edited")?,
            is_anonymous: get_boolean(raw, "is_anonymous")?,
            can_manage_chat: get_boolean(raw, "can_manage_chat")?,
            can_delete_messages: get_boolean(raw, "can_delete_messages")?,
            can_manage_video_chats: get_boolean(raw, "can_manage_video_chats")?,
            can_restrict_members: get_boolean(raw, "can_restrict_members")?,
            can_promote_members: get_boolean(raw, "can_promote_members")?,
            can_change_info: get_boolean(raw, "can_change_info")?,
            can_invite_users: get_boolean(raw, "can_invite_users")?,
            can_post_stories: get_boolean(raw, "can_post_stories")?,
            can_edit_stories: get_boolean(raw, "can_edit_stories")?,
            can_delete_stories: get_boolean(raw, "can_delete_stories")?,
            can_post_messages: get_boolean_or_none(raw, "can_post_messages")?,
            can_edit_messages: get_boolean_or_none(raw, "can_edit_messages")?,
            can_pin_messages: get_boolean_or_none(raw, "can_pin_messages")?,
            can_manage_topics: get_boolean_or_none(raw, "can_manage_topics")?,
            custom_title: get_string_or_none(raw, "custom_title")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMemberMember {
    pub user: User,
}

impl ChatMemberMember {
    pub const STATUS: &'static str = "member";
}

impl FromTelegramResult for ChatMemberMember {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            user: get_object(raw, "user")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMemberRestricted {
    pub user: User,
    pub is_member: bool,
    pub can_send_messages: bool,
    pub can_send_audios: bool,
    pub can_send_documents: bool,
    pub can_send_photos: bool,
    pub can_send_videos: bool,
    pub can_send_video_notes: bool,
    pub can_send_voice_notes: bool,
    pub can_send_polls: bool,
    pub can_send_other_messages: bool,
    pub can_add_web_page_previews: bool,
    pub can_change_info: bool,
    pub can_invite_users: bool,
    pub can_pin_messages: bool,
    pub can_manage_topics: bool,
    pub until_date: UntilDate,
}

impl ChatMemberRestricted {
    pub const STATUS: &'static str = "restricted";
}

impl FromTelegramResult for ChatMemberRestricted {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            user: get_object(raw, "user")?,
            is_member: get_boolean(raw, "is_member")?,
            can_send_messages: get_boolean(raw, "can_send_messages")?,
            can_send_audios: get_boolean(raw, "can_send_audios")?,
            can_send_documents: get_boolean(raw, "can_send_documents")?,
            can_send_photos: get_boolean(raw, "can_send_photos")?,
            can_send_videos: get_boolean(raw, "can_send_videos")?,
            can_send_video_notes: get_boolean(raw, "can_send_video_notes")?,
            can_send_voice_notes: get_boolean(raw, "can_send_voice_notes")?,
            can_send_polls: get_boolean(raw, "can_send_polls")?,
            can_send_other_messages: get_boolean(raw, "can_send_other_messages")?,
            can_add_web_page_previews: get_boolean(raw, "can_add_web_page_previews")?,
            can_change_info: get_boolean(raw, "can_change_info")?,
            can_invite_users: get_boolean(raw, "can_invite_users")?,
            can_pin_messages: get_boolean(raw, "can_pin_messages")?,
            can_manage_topics: get_boolean(raw, "can_manage_topics")?,
            until_date: get_until_date(raw, "until_date")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMemberLeft {
    pub user: User,
}

impl ChatMemberLeft {
    pub const STATUS: &'static str = "left";
}

impl FromTelegramResult for ChatMemberLeft {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            user: get_object(raw, "user")?,
        })
    }
}

/// A user banned from the chat. `until_date` of `0` is a permanent ban.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMemberBanned {
    pub user: User,
    pub until_date: UntilDate,
}

impl ChatMemberBanned {
    pub const STATUS: &'static str = "kicked";
}

impl FromTelegramResult for ChatMemberBanned {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        let until_date = get_until_date(raw, "until_date")?;
        Ok(Self {
            user: get_object(raw, "user")?,
            until_date,
        })
    }
}

/// Change of a chat member's status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMemberUpdated {
    pub chat: Chat,
    pub from: User,
    pub date: UtcDateTime,
    pub old_chat_member: ChatMember,
    pub new_chat_member: ChatMember,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invite_link: Option<ChatInviteLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub via_join_request: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub via_chat_folder_invite_link: Option<bool>,
}

impl FromTelegramResult for ChatMemberUpdated {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            chat: get_object(raw, "chat")?,
            from: get_object(raw, "from")?,
            date: get_timestamp(raw, "date")?,
            old_chat_member: get_object(raw, "old_chat_member")?,
            new_chat_member: get_object(raw, "new_chat_member")?,
            invite_link: get_object_or_none(raw, "invite_link")?,
            via_join_request: get_boolean_or_none(raw, "via_join_request")?,
            via_chat_folder_invite_link: get_boolean_or_none(raw, "via_chat_folder_invite_link")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user() -> Value {
        json!({ "id": 42, "is_bot": false, "first_name": "Sam" })
    }

    #[test]
    fn banned_with_zero_until_date_is_forever() {
        let member = ChatMember::from_telegram_result(&json!({
            "status": "kicked",
            "user": user(),
            "until_date": 0,
        }))
        .expect("valid banned member");

        let ChatMember::Banned(banned) = member else {
            panic!("expected banned member");
        };
        assert_eq!(banned.until_date, UntilDate::Forever);
    }

    #[test]
    fn banned_with_timestamp_keeps_the_date() {
        let banned = ChatMemberBanned::from_telegram_result(&json!({
            "user": user(),
            "until_date": 1_620_000_000,
        }))
        .expect("valid banned member");

        let date = banned.until_date.date().expect("has date");
        assert_eq!(date.unix_timestamp(), 1_620_000_000);
    }

    #[test]
    fn status_is_read_before_dispatch() {
        let error = ChatMember::from_telegram_result(&json!({ "user": user() }))
            .expect_err("status is required");
        assert_eq!(error, ParseError::missing_field("status"));

        let error = ChatMember::from_telegram_result(&json!({ "status": 1, "user": user() }))
            .expect_err("status must be a string");
        assert_eq!(error, ParseError::type_mismatch("status", "string", "integer"));
    }

    #[test]
    fn unknown_status_names_the_family() {
        let error = ChatMember::from_telegram_result(&json!({
            "status": "owner",
            "user": user(),
        }))
        .expect_err("owner is not a documented status");

        assert_eq!(error.to_string(), "Unknown chat member status. Got \"owner\".");
    }

    #[test]
    fn member_serializes_with_status_tag() {
        let member = ChatMember::Member(ChatMemberMember {
            user: User::new(42, false, "Sam"),
        });

        let encoded = serde_json::to_value(&member).expect("serializable");
        assert_eq!(encoded["status"], "member");
        assert_eq!(encoded["user"]["id"], 42);
    }
}
