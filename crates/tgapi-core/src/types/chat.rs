use serde::Serialize;
use serde_json::Value;

use crate::types::{
    Birthdate, BusinessIntro, BusinessLocation, BusinessOpeningHours, Location, Message,
    ReactionType, User, UtcDateTime,
};
use crate::value::{
    expect_object, get_boolean, get_boolean_or_none, get_integer, get_integer_or_none,
    get_list_or_none, get_object, get_object_or_none, get_string, get_string_list_or_none,
    get_string_or_none, get_timestamp, get_timestamp_or_none, get_true_or_none,
    FromTelegramResult, True,
};
use crate::ParseError;

/// A chat as embedded in messages and updates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chat {
    pub id: i64,
    #[serde(rename = "type")]
    pub chat_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_forum: Option<True>,
}

impl Chat {
    pub fn new(id: i64, chat_type: impl Into<String>) -> Self {
        Self {
            id,
            chat_type: chat_type.into(),
            title: None,
            username: None,
            first_name: None,
            last_name: None,
            is_forum: None,
        }
    }
}

impl FromTelegramResult for Chat {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            id: get_integer(raw, "id")?,
            chat_type: get_string(raw, "type")?,
            title: get_string_or_none(raw, "title")?,
            username: get_string_or_none(raw, "username")?,
            first_name: get_string_or_none(raw, "first_name")?,
            last_name: get_string_or_none(raw, "last_name")?,
            is_forum: get_true_or_none(raw, "is_forum")?,
        })
    }
}

/// Full chat description returned by `getChat`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatFullInfo {
    pub id: i64,
    #[serde(rename = "type")]
    pub chat_type: String,
    pub accent_color_id: i64,
    pub max_reaction_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_forum: Option<True>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<ChatPhoto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_usernames: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<Birthdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_intro: Option<BusinessIntro>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_location: Option<BusinessLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_opening_hours: Option<BusinessOpeningHours>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_chat: Option<Chat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_reactions: Option<Vec<ReactionType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_custom_emoji_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_accent_color_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_background_custom_emoji_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji_status_custom_emoji_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji_status_expiration_date: Option<UtcDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_private_forwards: Option<True>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_restricted_voice_and_video_messages: Option<True>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_to_send_messages: Option<True>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_by_request: Option<True>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invite_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinned_message: Option<Box<Message>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<ChatPermissions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_paid_media: Option<True>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slow_mode_delay: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unrestrict_boost_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_auto_delete_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_aggressive_anti_spam_enabled: Option<True>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_hidden_members: Option<True>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_protected_content: Option<True>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_visible_history: Option<True>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sticker_set_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_set_sticker_set: Option<True>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_emoji_sticker_set_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_chat_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<ChatLocation>,
}

impl FromTelegramResult for ChatFullInfo {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            id: get_integer(raw, "id")?,
            chat_type: get_string(raw, "type")?,
            accent_color_id: get_integer(raw, "accent_color_id")?,
            max_reaction_count: get_integer(raw, "max_reaction_count")?,
            title: get_string_or_none(raw, "title")?,
            username: get_string_or_none(raw, "username")?,
            first_name: get_string_or_none(raw, "first_name")?,
            last_name: get_string_or_none(raw, "last_name")?,
            is_forum: get_true_or_none(raw, "is_forum")?,
            photo: get_object_or_none(raw, "photo")?,
            active_usernames: get_string_list_or_none(raw, "active_usernames")?,
            birthdate: get_object_or_none(raw, "birthdate")?,
            business_intro: get_object_or_none(raw, "business_intro")?,
            business_location: get_object_or_none(raw, "business_location")?,
            business_opening_hours: get_object_or_none(raw, "business_opening_hours")?,
            personal_chat: get_object_or_none(raw, "personal_chat")?,
            available_reactions: get_list_or_none(raw, "available_reactions")?,
            background_custom_emoji_id: get_string_or_none(raw, "background_custom_emoji_id")?,
            profile_accent_color_id: get_integer_or_none(raw, "profile_accent_color_id")?,
            profile_background_custom_emoji_id: get_string_or_none(
                raw,
                "profile_background_custom_emoji_id",
            )?,
            emoji_status_custom_emoji_id: get_string_or_none(raw, "emoji_status_custom_emoji_id")?,
            emoji_status_expiration_date: get_timestamp_or_none(
                raw,
                "emoji_status_expiration_date",
            )?,
            bio: get_string_or_none(raw, "bio")?,
            has_private_forwards: get_true_or_none(raw, "has_private_forwards")?,
            has_restricted_voice_and_video_messages: get_true_or_none(
                raw,
                "has_restricted_voice_and_video_messages",
            )?,
            join_to_send_messages: get_true_or_none(raw, "join_to_send_messages")?,
            join_by_request: get_true_or_none(raw, "join_by_request")?,
            description: get_string_or_none(raw, "description")?,
            invite_link: get_string_or_none(raw, "invite_link")?,
            pinned_message: get_object_or_none(raw, "pinned_message")?,
            permissions: get_object_or_none(raw, "permissions")?,
            can_send_paid_media: get_true_or_none(raw, "can_send_paid_media")?,
            slow_mode_delay: get_integer_or_none(raw, "slow_mode_delay")?,
            unrestrict_boost_count: get_integer_or_none(raw, "unrestrict_boost_count")?,
            message_auto_delete_time: get_integer_or_none(raw, "message_auto_delete_time")?,
            has_aggressive_anti_spam_enabled: get_true_or_none(
                raw,
                "has_aggressive_anti_spam_enabled",
            )?,
            has_hidden_members: get_true_or_none(raw, "has_hidden_members")?,
            has_protected_content: get_true_or_none(raw, "has_protected_content")?,
            has_visible_history: get_true_or_none(raw, "has_visible_history")?,
            sticker_set_name: get_string_or_none(raw, "sticker_set_name")?,
            can_set_sticker_set: get_true_or_none(raw, "can_set_sticker_set")?,
            custom_emoji_sticker_set_name: get_string_or_none(
                raw,
                "custom_emoji_sticker_set_name",
            )?,
            linked_chat_id: get_integer_or_none(raw, "linked_chat_id")?,
            location: get_object_or_none(raw, "location")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatPhoto {
    pub small_file_id: String,
    pub small_file_unique_id: String,
    pub big_file_id: String,
    pub big_file_unique_id: String,
}

impl FromTelegramResult for ChatPhoto {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            small_file_id: get_string(raw, "small_file_id")?,
            small_file_unique_id: get_string(raw, "small_file_unique_id")?,
            big_file_id: get_string(raw, "big_file_id")?,
            big_file_unique_id: get_string(raw, "big_file_unique_id")?,
        })
    }
}

/// What non-administrator members may do. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChatPermissions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_audios: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_documents: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_photos: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_videos: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_video_notes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_voice_notes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_polls: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_other_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_add_web_page_previews: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_change_info: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_invite_users: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_pin_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_manage_topics: Option<bool>,
}

impl FromTelegramResult for ChatPermissions {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            can_send_messages: get_boolean_or_none(raw, "can_send_messages")?,
            can_send_audios: get_boolean_or_none(raw, "can_send_audios")?,
            can_send_documents: get_boolean_or_none(raw, "can_send_documents")?,
            can_send_photos: get_boolean_or_none(raw, "can_send_photos")?,
            can_send_videos: get_boolean_or_none(raw, "can_send_videos")?,
            can_send_video_notes: get_boolean_or_none(raw, "can_send_video_notes")?,
            can_send_voice_notes: get_boolean_or_none(raw, "can_send_voice_notes")?,
            can_send_polls: get_boolean_or_none(raw, "can_send_polls")?,
            can_send_other_messages: get_boolean_or_none(raw, "can_send_other_messages")?,
            can_add_web_page_previews: get_boolean_or_none(raw, "can_add_web_page_previews")?,
            can_change_info: get_boolean_or_none(raw, "can_change_info")?,
            can_invite_users: get_boolean_or_none(raw, "can_invite_users")?,
            can_pin_messages: get_boolean_or_none(raw, "can_pin_messages")?,
            can_manage_topics: get_boolean_or_none(raw, "can_manage_topics")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatLocation {
    pub location: Location,
    pub address: String,
}

impl FromTelegramResult for ChatLocation {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            location: get_object(raw, "location")?,
            address: get_string(raw, "address")?,
        })
    }
}

/// Rights of an administrator in a chat.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatAdministratorRights {
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
}

impl FromTelegramResult for ChatAdministratorRights {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
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
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatInviteLink {
    pub invite_link: String,
    pub creator: User,
    pub creates_join_request: bool,
    pub is_primary: bool,
    pub is_revoked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_date: Option<UtcDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_join_request_count: Option<i64>,
}

impl FromTelegramResult for ChatInviteLink {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            invite_link: get_string(raw, "invite_link")?,
            creator: get_object(raw, "creator")?,
            creates_join_request: get_boolean(raw, "creates_join_request")?,
            is_primary: get_boolean(raw, "is_primary")?,
            is_revoked: get_boolean(raw, "is_revoked")?,
            name: get_string_or_none(raw, "name")?,
            expire_date: get_timestamp_or_none(raw, "expire_date")?,
            member_limit: get_integer_or_none(raw, "member_limit")?,
            pending_join_request_count: get_integer_or_none(raw, "pending_join_request_count")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatJoinRequest {
    pub chat: Chat,
    pub from: User,
    pub user_chat_id: i64,
    pub date: UtcDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invite_link: Option<ChatInviteLink>,
}

impl FromTelegramResult for ChatJoinRequest {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            chat: get_object(raw, "chat")?,
            from: get_object(raw, "from")?,
            user_chat_id: get_integer(raw, "user_chat_id")?,
            date: get_timestamp(raw, "date")?,
            bio: get_string_or_none(raw, "bio")?,
            invite_link: get_object_or_none(raw, "invite_link")?,
        })
    }
}
