use serde::Serialize;
use serde_json::Value;

use crate::types::{Chat, MessageEntity, User, UtcDateTime};
use crate::value::{
    expect_object, get_boolean, get_integer, get_integer_list, get_integer_or_none, get_list,
    get_list_or_none, get_object_or_none, get_string, get_string_or_none, get_timestamp_or_none,
    FromTelegramResult,
};
use crate::ParseError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PollOption {
    pub text: String,
    pub voter_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_entities: Option<Vec<MessageEntity>>,
}

impl FromTelegramResult for PollOption {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            text: get_string(raw, "text")?,
            voter_count: get_integer(raw, "voter_count")?,
            text_entities: get_list_or_none(raw, "text_entities")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Poll {
    pub id: String,
    pub question: String,
    pub options: Vec<PollOption>,
    pub total_voter_count: i64,
    pub is_closed: bool,
    pub is_anonymous: bool,
    #[serde(rename = "type")]
    pub poll_type: String,
    pub allows_multiple_answers: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_option_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation_entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_period: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_date: Option<UtcDateTime>,
}

impl FromTelegramResult for Poll {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            id: get_string(raw, "id")?,
            question: get_string(raw, "question")?,
            options: get_list(raw, "options")?,
            total_voter_count: get_integer(raw, "total_voter_count")?,
            is_closed: get_boolean(raw, "is_closed")?,
            is_anonymous: get_boolean(raw, "is_anonymous")?,
            poll_type: get_string(raw, "type")?,
            allows_multiple_answers: get_boolean(raw, "allows_multiple_answers")?,
            question_entities: get_list_or_none(raw, "question_entities")?,
            correct_option_id: get_integer_or_none(raw, "correct_option_id")?,
            explanation: get_string_or_none(raw, "explanation")?,
            explanation_entities: get_list_or_none(raw, "explanation_entities")?,
            open_period: get_integer_or_none(raw, "open_period")?,
            close_date: get_timestamp_or_none(raw, "close_date")?,
        })
    }
}

/// A user's answer in a non-anonymous poll. An empty `option_ids` means the
/// vote was retracted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PollAnswer {
    pub poll_id: String,
    pub option_ids: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voter_chat: Option<Chat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl FromTelegramResult for PollAnswer {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            poll_id: get_string(raw, "poll_id")?,
            option_ids: get_integer_list(raw, "option_ids")?,
            voter_chat: get_object_or_none(raw, "voter_chat")?,
            user: get_object_or_none(raw, "user")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_quiz_poll() {
        let poll = Poll::from_telegram_result(&json!({
            "id": "p1",
            "question": "2 + 2?",
            "options": [
                { "text": "3", "voter_count": 1 },
                { "text": "4", "voter_count": 5 },
            ],
            "total_voter_count": 6,
            "is_closed": true,
            "is_anonymous": true,
            "type": "quiz",
            "allows_multiple_answers": false,
            "correct_option_id": 1,
        }))
        .expect("valid poll");

        assert_eq!(poll.poll_type, "quiz");
        assert_eq!(poll.options[1].voter_count, 5);
        assert_eq!(poll.correct_option_id, Some(1));
    }

    #[test]
    fn retracted_answer_has_no_options() {
        let answer = PollAnswer::from_telegram_result(&json!({
            "poll_id": "p1",
            "option_ids": [],
        }))
        .expect("valid answer");

        assert!(answer.option_ids.is_empty());
    }
}
