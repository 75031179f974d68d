//! Behavior-driven tests for turning Bot API responses into typed entities.
//!
//! These tests exercise the envelope parser and the entity parsers together,
//! the way a caller sees them: a status code and a body go in, a typed value,
//! a remote failure or a structural error comes out.

use serde_json::json;
use tgapi_core::envelope::parse_response;
use tgapi_core::types::{
    ChatMember, MaybeInaccessibleMessage, Message, UntilDate, Update, User, WebhookInfo,
};
use tgapi_core::value::{expect_true, list_of};
use tgapi_core::{FromTelegramResult, ParseError, ResponseError, ResponseFormatError, True};

fn body(value: serde_json::Value) -> String {
    value.to_string()
}

// =============================================================================
// Envelope: success, remote failure, malformed body
// =============================================================================

#[test]
fn caller_receives_typed_entity_for_successful_response() {
    // Given: A successful getMe response
    let response = body(json!({
        "ok": true,
        "result": {
            "id": 1001,
            "is_bot": true,
            "first_name": "Relay",
            "username": "relay_bot",
            "can_join_groups": true,
        },
    }));

    // When: The body is parsed as a User
    let user = parse_response(200, &response, User::from_telegram_result)
        .expect("well-formed response")
        .success()
        .expect("success result");

    // Then: Every field carries the raw value
    assert_eq!(user.id, 1001);
    assert!(user.is_bot);
    assert_eq!(user.first_name, "Relay");
    assert_eq!(user.username.as_deref(), Some("relay_bot"));
    assert_eq!(user.can_join_groups, Some(true));

    // And: Fields the response omitted stay absent
    assert_eq!(user.last_name, None);
    assert_eq!(user.is_premium, None);
}

#[test]
fn remote_failure_is_a_value_not_an_error() {
    // Given: Telegram rejects the call
    let response = body(json!({
        "ok": false,
        "description": "Bad Request: chat not found",
        "error_code": 400,
    }));

    // When: The body is parsed
    let result = parse_response(400, &response, User::from_telegram_result)
        .expect("failures are not errors");

    // Then: The caller gets a FailResult describing the rejection
    let fail = result.fail().expect("fail result");
    assert_eq!(fail.description.as_deref(), Some("Bad Request: chat not found"));
    assert_eq!(fail.error_code, Some(400));
    assert_eq!(fail.parameters, None);
}

#[test]
fn migration_hint_is_exposed_on_failure() {
    // Given: A group was upgraded to a supergroup
    let response = body(json!({
        "ok": false,
        "description": "Bad Request: group chat was upgraded to a supergroup chat",
        "error_code": 400,
        "parameters": { "migrate_to_chat_id": -1001234567890_i64 },
    }));

    // When: The body is parsed
    let result = parse_response(400, &response, expect_true).expect("well-formed failure");

    // Then: The new chat id is available
    let parameters = result
        .fail()
        .and_then(|fail| fail.parameters)
        .expect("parameters present");
    assert_eq!(parameters.migrate_to_chat_id, Some(-1001234567890));
    assert_eq!(parameters.retry_after, None);
}

#[test]
fn each_malformed_envelope_reports_its_own_message() {
    let cases = [
        (
            502,
            "<html>Bad Gateway</html>",
            "Failed to decode JSON response. Status code: 502.",
        ),
        (
            200,
            r#""hello""#,
            "Expected telegram response as array. Got \"string\".",
        ),
        (200, "[1,2]", "Expected telegram response as array. Got \"list\"."),
        (
            200,
            r#"{"ok":"yes","result":true}"#,
            "Incorrect \"ok\" field in response. Status code: 200.",
        ),
        (
            200,
            r#"{"result":true}"#,
            "Incorrect \"ok\" field in response. Status code: 200.",
        ),
        (
            201,
            r#"{"ok":true}"#,
            "Not found \"result\" field in response. Status code: 201.",
        ),
    ];

    for (status, response, message) in cases {
        // Given: A malformed body
        // When: It is parsed
        let error = parse_response(status, response, expect_true).expect_err("malformed body");

        // Then: The error is a format error with the exact message
        assert!(matches!(error, ResponseError::Format(_)), "{response}");
        assert_eq!(error.to_string(), message, "{response}");
    }
}

#[test]
fn scalar_root_names_the_json_type() {
    // Given: A body that is a bare number
    // When: It is parsed
    let error = parse_response(200, "42", expect_true).expect_err("not an object");

    // Then: The actual type is named
    assert_eq!(
        error,
        ResponseError::Format(ResponseFormatError::NotAnObject { actual: "integer" })
    );
}

// =============================================================================
// Entities: fail-fast structural errors
// =============================================================================

#[test]
fn first_missing_field_aborts_the_whole_parse() {
    // Given: A user without id and first_name
    let response = body(json!({ "ok": true, "result": { "is_bot": false } }));

    // When: It is parsed
    let error = parse_response(200, &response, User::from_telegram_result)
        .expect_err("missing fields");

    // Then: Only the first violation is reported
    assert_eq!(
        error,
        ResponseError::Parse(ParseError::missing_field("id"))
    );
    assert_eq!(error.to_string(), "Not found key \"id\" in result object.");
}

#[test]
fn wrong_primitive_type_names_key_and_types() {
    // Given: A user whose id is a string
    let raw = json!({ "id": "1001", "is_bot": true, "first_name": "Relay" });

    // When: It is parsed
    let error = User::from_telegram_result(&raw).expect_err("id is a string");

    // Then: The error names the key, the expected and the actual type
    assert_eq!(
        error.to_string(),
        "Invalid type of value for key \"id\". Expected type is \"integer\", but got \"string\"."
    );
}

#[test]
fn nested_error_aborts_enclosing_entity() {
    // Given: A message whose chat lacks a type
    let raw = json!({
        "message_id": 5,
        "date": 1_700_000_000,
        "chat": { "id": 10 },
        "text": "hi",
    });

    // When: The message is parsed
    let error = Message::from_telegram_result(&raw).expect_err("broken chat");

    // Then: The nested failure surfaces unchanged
    assert_eq!(error, ParseError::missing_field("type"));
}

#[test]
fn non_object_result_is_rejected_before_field_access() {
    // Given: A result that should be a user but is a list
    let response = body(json!({ "ok": true, "result": [] }));

    // When: It is parsed as a User
    let error = parse_response(200, &response, User::from_telegram_result)
        .expect_err("list result");

    // Then: The result type is reported
    assert_eq!(
        error.to_string(),
        "Expected result as object. Got \"list\"."
    );
}

// =============================================================================
// Entities: special fields
// =============================================================================

#[test]
fn true_only_flag_accepts_true_and_rejects_false() {
    // Given: A premium user and one with an explicit false flag
    let premium = json!({ "id": 1, "is_bot": false, "first_name": "A", "is_premium": true });
    let explicit_false = json!({ "id": 1, "is_bot": false, "first_name": "A", "is_premium": false });

    // When: Both are parsed
    let parsed = User::from_telegram_result(&premium).expect("valid user");
    let error = User::from_telegram_result(&explicit_false).expect_err("false is not allowed");

    // Then: true yields the marker, false is a type mismatch
    assert_eq!(parsed.is_premium, Some(True));
    assert_eq!(
        error,
        ParseError::type_mismatch("is_premium", "true", "boolean")
    );
}

#[test]
fn zero_ban_expiry_means_forever() {
    // Given: Two banned members, one permanent and one temporary
    let permanent = json!({
        "status": "kicked",
        "user": { "id": 7, "is_bot": false, "first_name": "Spam" },
        "until_date": 0,
    });
    let temporary = json!({
        "status": "kicked",
        "user": { "id": 7, "is_bot": false, "first_name": "Spam" },
        "until_date": 1_800_000_000,
    });

    // When: Both are parsed
    let permanent = ChatMember::from_telegram_result(&permanent).expect("valid member");
    let temporary = ChatMember::from_telegram_result(&temporary).expect("valid member");

    // Then: Zero is the perpetual marker, not the epoch
    let (ChatMember::Banned(permanent), ChatMember::Banned(temporary)) = (permanent, temporary)
    else {
        panic!("expected banned members");
    };
    assert_eq!(permanent.until_date, UntilDate::Forever);
    assert_eq!(
        temporary.until_date.date().map(|date| date.unix_timestamp()),
        Some(1_800_000_000)
    );
}

#[test]
fn pinned_message_with_zero_date_is_inaccessible() {
    // Given: A service message pinning a message the bot cannot see
    let raw = json!({
        "message_id": 20,
        "date": 1_700_000_100,
        "chat": { "id": -100, "type": "supergroup", "title": "Team" },
        "pinned_message": {
            "message_id": 19,
            "date": 0,
            "chat": { "id": -100, "type": "supergroup", "title": "Team" },
        },
    });

    // When: The message is parsed
    let message = Message::from_telegram_result(&raw).expect("valid message");

    // Then: The pinned message is the inaccessible variant
    let pinned = message.pinned_message.expect("pinned message present");
    assert!(matches!(*pinned, MaybeInaccessibleMessage::Inaccessible(_)));
    assert_eq!(pinned.message_id(), 19);
    assert_eq!(pinned.chat().title.as_deref(), Some("Team"));
}

#[test]
fn optional_nested_entity_is_fully_parsed_when_present() {
    // Given: A reply to another message
    let raw = json!({
        "message_id": 2,
        "date": 1_700_000_002,
        "chat": { "id": 10, "type": "private", "first_name": "Ann" },
        "text": "agreed",
        "reply_to_message": {
            "message_id": 1,
            "date": 1_700_000_001,
            "chat": { "id": 10, "type": "private", "first_name": "Ann" },
            "text": "lunch?",
        },
    });

    // When: It is parsed
    let message = Message::from_telegram_result(&raw).expect("valid message");

    // Then: The reply is a complete message, not a stub
    let reply = message.reply_to_message.expect("reply present");
    assert_eq!(reply.message_id, 1);
    assert_eq!(reply.text.as_deref(), Some("lunch?"));
    assert_eq!(reply.chat.first_name.as_deref(), Some("Ann"));
    assert!(reply.reply_to_message.is_none());
}

#[test]
fn explicit_null_for_optional_field_is_a_type_mismatch() {
    // Given: A user whose last_name is null instead of omitted
    let raw = json!({ "id": 1, "is_bot": false, "first_name": "A", "last_name": null });

    // When: It is parsed
    let error = User::from_telegram_result(&raw).expect_err("null is not a string");

    // Then: The key and the null type are reported
    assert_eq!(error, ParseError::type_mismatch("last_name", "string", "null"));
}

#[test]
fn parsing_twice_yields_equal_independent_entities() {
    // Given: A webhook info payload
    let raw = json!({
        "url": "https://example.org/hook",
        "has_custom_certificate": false,
        "pending_update_count": 3,
        "allowed_updates": ["message", "callback_query"],
    });

    // When: It is parsed twice
    let first = WebhookInfo::from_telegram_result(&raw).expect("valid info");
    let second = WebhookInfo::from_telegram_result(&raw).expect("valid info");

    // Then: Both values are equal
    assert_eq!(first, second);
    assert_eq!(first.pending_update_count, 3);
}

#[test]
fn update_list_fails_on_first_bad_update() {
    // Given: A getUpdates result whose second update is broken
    let response = body(json!({
        "ok": true,
        "result": [{ "update_id": 1 }, { "update_id": "2" }, { "update_id": 3 }],
    }));

    // When: It is parsed as a list of updates
    let error = parse_response(200, &response, list_of::<Update>).expect_err("bad update");

    // Then: The whole list fails
    assert_eq!(
        error,
        ResponseError::Parse(ParseError::type_mismatch("update_id", "integer", "string"))
    );
}
