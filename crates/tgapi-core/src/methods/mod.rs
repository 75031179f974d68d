//! # Bot API methods
//!
//! One struct per remote call. Each implements [`TelegramRequest`] (name, verb,
//! parameters) and [`TelegramMethod`] (how its `result` is parsed).
//!
//! | Module | Methods |
//! |--------|---------|
//! | [`bot`] | getMe, logOut, close, commands, name, descriptions, menu button |
//! | [`chat`] | getChat, members, bans, profile photos, files, boosts, business |
//! | [`message`] | send (text, photo, album, location), forward, copy, delete, reactions, callback answers |
//! | [`payment`] | getStarTransactions |
//! | [`sticker`] | getStickerSet, getForumTopicIconStickers |
//! | [`update`] | getUpdates, webhooks |
//!
//! Methods whose name starts with `get` are sent as GET, everything else as
//! POST.

/// Implements [`TelegramRequest`](crate::TelegramRequest) and
/// [`TelegramMethod`](crate::TelegramMethod) for a serializable method struct.
macro_rules! telegram_method {
    ($method:ty, $api_method:literal, $http_method:ident, $output:ty, $prepare:expr) => {
        impl $crate::request::TelegramRequest for $method {
            fn http_method(&self) -> $crate::request::HttpMethod {
                $crate::request::HttpMethod::$http_method
            }

            fn api_method(&self) -> &'static str {
                $api_method
            }

            fn data(&self) -> Result<$crate::value::Object, serde_json::Error> {
                $crate::request::serialize_data(self)
            }
        }

        impl $crate::request::TelegramMethod for $method {
            type Output = $output;

            fn prepare_result(
                &self,
                result: &serde_json::Value,
            ) -> Result<Self::Output, $crate::ParseError> {
                ($prepare)(result)
            }
        }
    };
}

pub mod bot;
pub mod chat;
pub mod message;
pub mod payment;
pub mod sticker;
pub mod update;

pub use bot::{
    Close, DeleteMyCommands, GetChatMenuButton, GetMe, GetMyCommands, GetMyDescription,
    GetMyName, GetMyShortDescription, LogOut, SetChatMenuButton, SetMyCommands,
    SetMyDescription, SetMyName, SetMyShortDescription,
};
pub use chat::{
    BanChatMember, GetBusinessConnection, GetChat, GetChatAdministrators, GetChatMember,
    GetChatMemberCount, GetFile, GetUserChatBoosts, GetUserProfilePhotos, LeaveChat,
    UnbanChatMember,
};
pub use message::{
    AnswerCallbackQuery, CopyMessage, DeleteMessage, ForwardMessage, SendChatAction,
    SendLocation, SendMediaGroup, SendMessage, SendPhoto, SetMessageReaction,
};
pub use payment::GetStarTransactions;
pub use sticker::{GetForumTopicIconStickers, GetStickerSet};
pub use update::{DeleteWebhook, GetUpdates, GetWebhookInfo, SetWebhook};
