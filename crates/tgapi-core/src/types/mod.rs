//! # Telegram Entities
//!
//! Typed records parsed from Bot API results.
//!
//! ## Overview
//!
//! Every entity implements [`FromTelegramResult`](crate::FromTelegramResult)
//! and follows the same rules:
//!
//! - **Object guard**: the raw value must be a JSON object
//! - **Fail-fast**: the first missing or mistyped field aborts the parse
//! - **Presence-driven optionals**: optional nested objects are parsed only
//!   when their key is present
//! - **Immutable**: entities are plain values, built once
//!
//! ## Polymorphic families
//!
//! | Type | Discriminator | Variants |
//! |------|---------------|----------|
//! | [`ChatMember`] | `status` | creator, administrator, member, restricted, left, kicked |
//! | [`ChatBoostSource`] | `source` | premium, gift_code, giveaway |
//! | [`ReactionType`] | `type` | emoji, custom_emoji |
//! | [`RevenueWithdrawalState`] | `type` | pending, succeeded, failed |
//! | [`TransactionPartner`] | `type` | fragment, user, other |
//! | [`MessageOrigin`] | `type` | user, hidden_user, chat, channel |
//! | [`MenuButton`] | `type` | commands, web_app, default |
//! | [`MaybeInaccessibleMessage`] | `date` | `0` → inaccessible, otherwise message |
//!
//! ## Special fields
//!
//! - Ban and restriction expiry is an [`UntilDate`]; `0` means
//!   [`UntilDate::Forever`].
//! - Flags Telegram only sends when set are `Option<True>`.

mod boost;
mod business;
mod chat;
mod chat_member;
mod forum;
mod inline;
mod input_media;
mod keyboard;
mod media;
mod message;
mod payment;
mod poll;
mod reaction;
mod sticker;
mod timestamp;
mod update;
mod user;

pub use boost::{
    ChatBoost, ChatBoostAdded, ChatBoostRemoved, ChatBoostSource, ChatBoostSourceGiftCode,
    ChatBoostSourceGiveaway, ChatBoostSourcePremium, ChatBoostUpdated, UserChatBoosts,
};
pub use business::{
    BusinessConnection, BusinessIntro, BusinessLocation, BusinessMessagesDeleted,
    BusinessOpeningHours, BusinessOpeningHoursInterval,
};
pub use chat::{
    Chat, ChatAdministratorRights, ChatFullInfo, ChatInviteLink, ChatJoinRequest, ChatLocation,
    ChatPermissions, ChatPhoto,
};
pub use chat_member::{
    ChatMember, ChatMemberAdministrator, ChatMemberBanned, ChatMemberLeft, ChatMemberMember,
    ChatMemberOwner, ChatMemberRestricted, ChatMemberUpdated,
};
pub use forum::{
    ForumTopic, ForumTopicClosed, ForumTopicCreated, ForumTopicEdited, ForumTopicReopened,
    GeneralForumTopicHidden, GeneralForumTopicUnhidden,
};
pub use inline::{CallbackQuery, ChosenInlineResult, InlineQuery};
pub use input_media::{
    InputMedia, InputMediaAudio, InputMediaDocument, InputMediaPhoto, InputMediaVideo,
};
pub use keyboard::{
    BotCommand, BotDescription, BotName, BotShortDescription, InlineKeyboardButton,
    InlineKeyboardMarkup, LoginUrl, MenuButton, MenuButtonCommands, MenuButtonDefault,
    MenuButtonWebApp, WebAppInfo,
};
pub use media::{
    Animation, Audio, Contact, Dice, Document, Location, PhotoSize, Story, Venue, Video,
    VideoNote, Voice,
};
pub use message::{
    InaccessibleMessage, LinkPreviewOptions, MaybeInaccessibleMessage, Message,
    MessageAutoDeleteTimerChanged, MessageEntity, MessageId, MessageOrigin, MessageOriginChannel,
    MessageOriginChat, MessageOriginHiddenUser, MessageOriginUser, TextQuote, WebAppData,
};
pub use payment::{
    Invoice, OrderInfo, PreCheckoutQuery, RevenueWithdrawalState, RevenueWithdrawalStateFailed,
    RevenueWithdrawalStatePending, RevenueWithdrawalStateSucceeded, ShippingAddress,
    ShippingQuery, StarTransaction, StarTransactions, SuccessfulPayment, TransactionPartner,
    TransactionPartnerFragment, TransactionPartnerOther, TransactionPartnerUser,
};
pub use poll::{Poll, PollAnswer, PollOption};
pub use reaction::{
    MessageReactionCountUpdated, MessageReactionUpdated, ReactionCount, ReactionType,
    ReactionTypeCustomEmoji, ReactionTypeEmoji,
};
pub use sticker::{MaskPosition, Sticker, StickerSet};
pub use timestamp::{UntilDate, UtcDateTime};
pub use update::{Update, WebhookError, WebhookInfo};
pub use user::{Birthdate, File, User, UserProfilePhotos};
