use serde::Serialize;
use serde_json::Value;

use crate::error::VariantFamily;
use crate::types::{Chat, User, UtcDateTime};
use crate::value::{
    expect_object, get_integer, get_list, get_object, get_object_or_none, get_string,
    get_timestamp, get_true_or_none, FromTelegramResult, True,
};
use crate::ParseError;

/// Origin of a chat boost, selected by the `source` field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source")]
pub enum ChatBoostSource {
    #[serde(rename = "premium")]
    Premium(ChatBoostSourcePremium),
    #[serde(rename = "gift_code")]
    GiftCode(ChatBoostSourceGiftCode),
    #[serde(rename = "giveaway")]
    Giveaway(ChatBoostSourceGiveaway),
}

impl ChatBoostSource {
    pub const DISCRIMINATORS: [&'static str; 3] = [
        ChatBoostSourcePremium::SOURCE,
        ChatBoostSourceGiftCode::SOURCE,
        ChatBoostSourceGiveaway::SOURCE,
    ];

    pub fn source(&self) -> &'static str {
        match self {
            Self::Premium(_) => ChatBoostSourcePremium::SOURCE,
            Self::GiftCode(_) => ChatBoostSourceGiftCode::SOURCE,
            Self::Giveaway(_) => ChatBoostSourceGiveaway::SOURCE,
        }
    }

    /// A giveaway boost has no user until the prize is claimed.
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Premium(source) => Some(&source.user),
            Self::GiftCode(source) => Some(&source.user),
            Self::Giveaway(source) => source.user.as_ref(),
        }
    }
}

impl FromTelegramResult for ChatBoostSource {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let source = get_string(expect_object(value)?, "source")?;
        match source.as_str() {
            ChatBoostSourcePremium::SOURCE => {
                ChatBoostSourcePremium::from_telegram_result(value).map(Self::Premium)
            }
            ChatBoostSourceGiftCode::SOURCE => {
                ChatBoostSourceGiftCode::from_telegram_result(value).map(Self::GiftCode)
            }
            ChatBoostSourceGiveaway::SOURCE => {
                ChatBoostSourceGiveaway::from_telegram_result(value).map(Self::Giveaway)
            }
            _ => Err(ParseError::unknown_variant(VariantFamily::ChatBoostSource, source)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatBoostSourcePremium {
    pub user: User,
}

impl ChatBoostSourcePremium {
    pub const SOURCE: &'static str = "premium";
}

impl FromTelegramResult for ChatBoostSourcePremium {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            user: get_object(raw, "user")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatBoostSourceGiftCode {
    pub user: User,
}

impl ChatBoostSourceGiftCode {
    pub const SOURCE: &'static str = "gift_code";
}

impl FromTelegramResult for ChatBoostSourceGiftCode {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            user: get_object(raw, "user")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatBoostSourceGiveaway {
    pub giveaway_message_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_unclaimed: Option<True>,
}

impl ChatBoostSourceGiveaway {
    pub const SOURCE: &'static str = "giveaway";
}

impl FromTelegramResult for ChatBoostSourceGiveaway {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            giveaway_message_id: get_integer(raw, "giveaway_message_id")?,
            user: get_object_or_none(raw, "user")?,
            is_unclaimed: get_true_or_none(raw, "is_unclaimed")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatBoost {
    pub boost_id: String,
    pub add_date: UtcDateTime,
    pub expiration_date: UtcDateTime,
    pub source: ChatBoostSource,
}

impl FromTelegramResult for ChatBoost {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            boost_id: get_string(raw, "boost_id")?,
            add_date: get_timestamp(raw, "add_date")?,
            expiration_date: get_timestamp(raw, "expiration_date")?,
            source: get_object(raw, "source")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatBoostUpdated {
    pub chat: Chat,
    pub boost: ChatBoost,
}

impl FromTelegramResult for ChatBoostUpdated {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            chat: get_object(raw, "chat")?,
            boost: get_object(raw, "boost")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatBoostRemoved {
    pub chat: Chat,
    pub boost_id: String,
    pub remove_date: UtcDateTime,
    pub source: ChatBoostSource,
}

impl FromTelegramResult for ChatBoostRemoved {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            chat: get_object(raw, "chat")?,
            boost_id: get_string(raw, "boost_id")?,
            remove_date: get_timestamp(raw, "remove_date")?,
            source: get_object(raw, "source")?,
        })
    }
}

/// Service message: a user boosted the chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChatBoostAdded {
    pub boost_count: i64,
}

impl FromTelegramResult for ChatBoostAdded {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            boost_count: get_integer(raw, "boost_count")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserChatBoosts {
    pub boosts: Vec<ChatBoost>,
}

impl FromTelegramResult for UserChatBoosts {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            boosts: get_list(raw, "boosts")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn giveaway_source_without_user() {
        let source = ChatBoostSource::from_telegram_result(&json!({
            "source": "giveaway",
            "giveaway_message_id": 12,
            "is_unclaimed": true,
        }))
        .expect("valid giveaway source");

        assert_eq!(source.source(), "giveaway");
        assert_eq!(source.user(), None);
        let ChatBoostSource::Giveaway(giveaway) = source else {
            panic!("expected giveaway");
        };
        assert_eq!(giveaway.is_unclaimed, Some(True));
    }

    #[test]
    fn unclaimed_flag_rejects_false() {
        let error = ChatBoostSourceGiveaway::from_telegram_result(&json!({
            "giveaway_message_id": 12,
            "is_unclaimed": false,
        }))
        .expect_err("false is not allowed");

        assert_eq!(error, ParseError::type_mismatch("is_unclaimed", "true", "boolean"));
    }

    #[test]
    fn premium_source_requires_user() {
        let error = ChatBoostSource::from_telegram_result(&json!({ "source": "premium" }))
            .expect_err("user is required");
        assert_eq!(error, ParseError::missing_field("user"));
    }

    #[test]
    fn unknown_boost_source() {
        let error = ChatBoostSource::from_telegram_result(&json!({ "source": "stars" }))
            .expect_err("stars is unknown");
        assert_eq!(error.to_string(), "Unknown chat boost source. Got \"stars\".");
    }
}
