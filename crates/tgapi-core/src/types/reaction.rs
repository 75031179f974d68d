use serde::Serialize;
use serde_json::Value;

use crate::error::VariantFamily;
use crate::types::{Chat, User, UtcDateTime};
use crate::value::{
    expect_object, get_integer, get_list, get_object, get_object_or_none, get_string,
    get_timestamp, FromTelegramResult,
};
use crate::ParseError;

/// A reaction, selected by `type`. Also sent in `setMessageReaction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum ReactionType {
    #[serde(rename = "emoji")]
    Emoji(ReactionTypeEmoji),
    #[serde(rename = "custom_emoji")]
    CustomEmoji(ReactionTypeCustomEmoji),
}

impl ReactionType {
    pub const DISCRIMINATORS: [&'static str; 2] =
        [ReactionTypeEmoji::TYPE, ReactionTypeCustomEmoji::TYPE];

    pub fn emoji(emoji: impl Into<String>) -> Self {
        Self::Emoji(ReactionTypeEmoji {
            emoji: emoji.into(),
        })
    }

    pub fn custom_emoji(custom_emoji_id: impl Into<String>) -> Self {
        Self::CustomEmoji(ReactionTypeCustomEmoji {
            custom_emoji_id: custom_emoji_id.into(),
        })
    }

    pub fn reaction_type(&self) -> &'static str {
        match self {
            Self::Emoji(_) => ReactionTypeEmoji::TYPE,
            Self::CustomEmoji(_) => ReactionTypeCustomEmoji::TYPE,
        }
    }
}

impl FromTelegramResult for ReactionType {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let reaction_type = get_string(expect_object(value)?, "type")?;
        match reaction_type.as_str() {
            ReactionTypeEmoji::TYPE => ReactionTypeEmoji::from_telegram_result(value).map(Self::Emoji),
            ReactionTypeCustomEmoji::TYPE => {
                ReactionTypeCustomEmoji::from_telegram_result(value).map(Self::CustomEmoji)
            }
            _ => Err(ParseError::unknown_variant(
                VariantFamily::ReactionType,
                reaction_type,
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionTypeEmoji {
    pub emoji: String,
}

impl ReactionTypeEmoji {
    pub const TYPE: &'static str = "emoji";
}

impl FromTelegramResult for ReactionTypeEmoji {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            emoji: get_string(raw, "emoji")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionTypeCustomEmoji {
    pub custom_emoji_id: String,
}

impl ReactionTypeCustomEmoji {
    pub const TYPE: &'static str = "custom_emoji";
}

impl FromTelegramResult for ReactionTypeCustomEmoji {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            custom_emoji_id: get_string(raw, "custom_emoji_id")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionCount {
    #[serde(rename = "type")]
    pub reaction: ReactionType,
    pub total_count: i64,
}

impl FromTelegramResult for ReactionCount {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            reaction: get_object(raw, "type")?,
            total_count: get_integer(raw, "total_count")?,
        })
    }
}

/// A user changed their reactions on a message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageReactionUpdated {
    pub chat: Chat,
    pub message_id: i64,
    pub date: UtcDateTime,
    pub old_reaction: Vec<ReactionType>,
    pub new_reaction: Vec<ReactionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor_chat: Option<Chat>,
}

impl FromTelegramResult for MessageReactionUpdated {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            chat: get_object(raw, "chat")?,
            message_id: get_integer(raw, "message_id")?,
            date: get_timestamp(raw, "date")?,
            old_reaction: get_list(raw, "old_reaction")?,
            new_reaction: get_list(raw, "new_reaction")?,
            user: get_object_or_none(raw, "user")?,
            actor_chat: get_object_or_none(raw, "actor_chat")?,
        })
    }
}

/// Anonymous reaction totals on a message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageReactionCountUpdated {
    pub chat: Chat,
    pub message_id: i64,
    pub date: UtcDateTime,
    pub reactions: Vec<ReactionCount>,
}

impl FromTelegramResult for MessageReactionCountUpdated {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            chat: get_object(raw, "chat")?,
            message_id: get_integer(raw, "message_id")?,
            date: get_timestamp(raw, "date")?,
            reactions: get_list(raw, "reactions")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn custom_emoji_reaction_from_result() {
        let reaction = ReactionType::from_telegram_result(&json!({
            "type": "custom_emoji",
            "custom_emoji_id": "👍",
        }))
        .expect("valid reaction");

        assert_eq!(reaction.reaction_type(), "custom_emoji");
        assert_eq!(reaction, ReactionType::custom_emoji("👍"));
    }

    #[test]
    fn emoji_reaction_serializes_for_requests() {
        let encoded = serde_json::to_value(ReactionType::emoji("🔥")).expect("serializable");
        assert_eq!(encoded, json!({ "type": "emoji", "emoji": "🔥" }));
    }

    #[test]
    fn reaction_count_reads_nested_type_object() {
        let count = ReactionCount::from_telegram_result(&json!({
            "type": { "type": "emoji", "emoji": "❤" },
            "total_count": 3,
        }))
        .expect("valid reaction count");

        assert_eq!(count.reaction, ReactionType::emoji("❤"));
        assert_eq!(count.total_count, 3);
    }

    #[test]
    fn unknown_reaction_type() {
        let error = ReactionType::from_telegram_result(&json!({ "type": "paid" }))
            .expect_err("paid is unknown");
        assert_eq!(error.to_string(), "Unknown reaction type. Got \"paid\".");
    }
}
