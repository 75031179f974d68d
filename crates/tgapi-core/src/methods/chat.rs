use serde::Serialize;

use crate::request::ChatId;
use crate::types::{
    BusinessConnection, ChatFullInfo, ChatMember, File, UserChatBoosts, UserProfilePhotos,
};
use crate::value::{expect_integer, expect_true, list_of, FromTelegramResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetUserProfilePhotos {
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

impl GetUserProfilePhotos {
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            offset: None,
            limit: None,
        }
    }
}

telegram_method!(
    GetUserProfilePhotos,
    "getUserProfilePhotos",
    Get,
    UserProfilePhotos,
    UserProfilePhotos::from_telegram_result
);

/// Prepares a file for download and returns its `file_path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetFile {
    pub file_id: String,
}

impl GetFile {
    pub fn new(file_id: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
        }
    }
}

telegram_method!(GetFile, "getFile", Get, File, File::from_telegram_result);

/// Bans a user. An `until_date` of `0` or none bans forever.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BanChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revoke_messages: Option<bool>,
}

impl BanChatMember {
    pub fn new(chat_id: impl Into<ChatId>, user_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            user_id,
            until_date: None,
            revoke_messages: None,
        }
    }
}

telegram_method!(BanChatMember, "banChatMember", Post, bool, expect_true);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnbanChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_if_banned: Option<bool>,
}

impl UnbanChatMember {
    pub fn new(chat_id: impl Into<ChatId>, user_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            user_id,
            only_if_banned: None,
        }
    }
}

telegram_method!(UnbanChatMember, "unbanChatMember", Post, bool, expect_true);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaveChat {
    pub chat_id: ChatId,
}

telegram_method!(LeaveChat, "leaveChat", Post, bool, expect_true);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetChat {
    pub chat_id: ChatId,
}

impl GetChat {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: chat_id.into(),
        }
    }
}

telegram_method!(
    GetChat,
    "getChat",
    Get,
    ChatFullInfo,
    ChatFullInfo::from_telegram_result
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetChatAdministrators {
    pub chat_id: ChatId,
}

telegram_method!(
    GetChatAdministrators,
    "getChatAdministrators",
    Get,
    Vec<ChatMember>,
    list_of::<ChatMember>
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetChatMemberCount {
    pub chat_id: ChatId,
}

telegram_method!(
    GetChatMemberCount,
    "getChatMemberCount",
    Get,
    i64,
    expect_integer
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
}

impl GetChatMember {
    pub fn new(chat_id: impl Into<ChatId>, user_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            user_id,
        }
    }
}

telegram_method!(
    GetChatMember,
    "getChatMember",
    Get,
    ChatMember,
    ChatMember::from_telegram_result
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetUserChatBoosts {
    pub chat_id: ChatId,
    pub user_id: i64,
}

telegram_method!(
    GetUserChatBoosts,
    "getUserChatBoosts",
    Get,
    UserChatBoosts,
    UserChatBoosts::from_telegram_result
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetBusinessConnection {
    pub business_connection_id: String,
}

telegram_method!(
    GetBusinessConnection,
    "getBusinessConnection",
    Get,
    BusinessConnection,
    BusinessConnection::from_telegram_result
);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::request::{HttpMethod, TelegramMethod, TelegramRequest};
    use crate::types::UntilDate;

    #[test]
    fn ban_chat_member_accepts_channel_username() {
        let method = BanChatMember::new("@channel", 42);
        assert_eq!(method.http_method(), HttpMethod::Post);
        assert_eq!(
            serde_json::Value::Object(method.data().expect("serializable")),
            json!({ "chat_id": "@channel", "user_id": 42 })
        );
    }

    #[test]
    fn get_chat_member_dispatches_on_status() {
        let member = GetChatMember::new(-100_i64, 42)
            .prepare_result(&json!({
                "status": "kicked",
                "user": { "id": 42, "is_bot": false, "first_name": "Sam" },
                "until_date": 0,
            }))
            .expect("valid member");

        assert_eq!(member.status(), "kicked");
        let ChatMember::Banned(banned) = member else {
            panic!("expected banned member");
        };
        assert_eq!(banned.until_date, UntilDate::Forever);
    }

    #[test]
    fn member_count_is_an_integer_result() {
        let method = GetChatMemberCount {
            chat_id: ChatId::Id(-100),
        };
        assert_eq!(method.http_method(), HttpMethod::Get);
        assert_eq!(method.prepare_result(&json!(17)), Ok(17));
    }
}
