//! Behavior-driven tests for the Bot API facade.
//!
//! A stub transport stands in for the network: it records what the facade
//! sends and replays canned Telegram responses.

use std::sync::Arc;

use serde_json::{json, Value};
use tgapi_core::methods::{
    BanChatMember, GetChatMemberCount, GetMyCommands, GetStickerSet, GetUpdates,
    SendMediaGroup, SendMessage, SendPhoto, SetMyCommands,
};
use tgapi_core::types::{
    BotCommand, InlineKeyboardButton, InlineKeyboardMarkup, InputMediaPhoto, InputMediaVideo,
};
use tgapi_core::{
    ChatId, ClientError, HttpMethod, InputFile, ParseError, ResponseFormatError, StubTransport,
    TelegramBotApi, TelegramResult, TransportError, TransportResponse,
};

fn api_with(stub: StubTransport) -> (TelegramBotApi, Arc<StubTransport>) {
    let stub = Arc::new(stub);
    (TelegramBotApi::new(stub.clone()), stub)
}

fn ok(result: Value) -> String {
    json!({ "ok": true, "result": result }).to_string()
}

// =============================================================================
// Requests on the wire
// =============================================================================

#[tokio::test]
async fn bot_sends_a_message_and_gets_it_back_typed() {
    // Given: Telegram accepts the message
    let (api, stub) = api_with(StubTransport::ok_json(ok(json!({
        "message_id": 501,
        "date": 1_700_000_000,
        "chat": { "id": 12, "type": "private", "first_name": "Ann" },
        "text": "Pick one",
        "reply_markup": {
            "inline_keyboard": [[{ "text": "Yes", "callback_data": "yes" }]],
        },
    }))));

    // When: The bot sends a message with an inline keyboard
    let method = SendMessage::new(12_i64, "Pick one").with_reply_markup(
        InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback("Yes", "yes")]]),
    );
    let message = api
        .send(&method)
        .await
        .expect("well-formed response")
        .success()
        .expect("accepted");

    // Then: The sent message comes back as a typed entity
    assert_eq!(message.message_id, 501);
    assert_eq!(message.text.as_deref(), Some("Pick one"));
    assert!(message.reply_markup.is_some());

    // And: The request went out as a POST with only the given parameters
    let requests = stub.recorded_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].api_method, "sendMessage");
    assert_eq!(requests[0].http_method, HttpMethod::Post);
    assert_eq!(
        Value::Object(requests[0].data.clone()),
        json!({
            "chat_id": 12,
            "text": "Pick one",
            "reply_markup": {
                "inline_keyboard": [[{ "text": "Yes", "callback_data": "yes" }]],
            },
        })
    );
    assert!(requests[0].files.is_empty());
}

#[tokio::test]
async fn getters_go_out_as_get_with_absent_options_omitted() {
    // Given: No pending updates
    let (api, stub) = api_with(StubTransport::ok_json(ok(json!([]))));

    // When: The bot polls with only a timeout
    let updates = api
        .get_updates(&GetUpdates::default().with_timeout(25))
        .await
        .expect("well-formed response")
        .success()
        .expect("accepted");

    // Then: No updates, and the request carried only the timeout
    assert!(updates.is_empty());
    let requests = stub.recorded_requests();
    let request = &requests[0];
    assert_eq!(request.http_method, HttpMethod::Get);
    assert_eq!(Value::Object(request.data.clone()), json!({ "timeout": 25 }));
}

#[tokio::test]
async fn uploads_travel_beside_the_parameters() {
    // Given: Telegram accepts the photo
    let (api, stub) = api_with(StubTransport::ok_json(ok(json!({
        "message_id": 9,
        "date": 1_700_000_000,
        "chat": { "id": 12, "type": "private", "first_name": "Ann" },
        "photo": [{ "file_id": "p1", "file_unique_id": "u1", "width": 90, "height": 60 }],
        "caption": "cat",
    }))));

    // When: The bot uploads a new photo
    let photo = InputFile::new(b"\x89PNG".to_vec()).with_filename("cat.png");
    let method = SendPhoto::new(ChatId::Id(12), photo.clone()).with_caption("cat");
    let message = api
        .send(&method)
        .await
        .expect("well-formed response")
        .success()
        .expect("accepted");

    // Then: The file is carried separately and the data omits it
    let requests = stub.recorded_requests();
    let request = &requests[0];
    assert_eq!(request.files, vec![(String::from("photo"), photo)]);
    assert_eq!(
        Value::Object(request.data.clone()),
        json!({ "chat_id": 12, "caption": "cat" })
    );
    assert_eq!(message.photo.map(|sizes| sizes.len()), Some(1));
}

#[tokio::test]
async fn album_uploads_are_attached_by_generated_name() {
    // Given: Telegram accepts a two-item album
    let sent = |message_id: i64| {
        json!({
            "message_id": message_id,
            "date": 1_700_000_000,
            "chat": { "id": 12, "type": "private", "first_name": "Ann" },
            "media_group_id": "13",
        })
    };
    let (api, stub) = api_with(StubTransport::ok_json(ok(json!([sent(20), sent(21)]))));

    // When: The bot sends one new upload next to an already known video
    let photo = InputFile::new(b"\xFF\xD8".to_vec()).with_filename("trip.jpg");
    let method = SendMediaGroup::new(
        12_i64,
        vec![
            InputMediaPhoto::new(photo.clone()).with_caption("Trip").into(),
            InputMediaVideo::new("BAACAgIAAxkBAAI").into(),
        ],
    );
    let messages = api
        .send(&method)
        .await
        .expect("well-formed response")
        .success()
        .expect("accepted");

    // Then: Both sent messages come back typed
    assert_eq!(
        messages.iter().map(|message| message.message_id).collect::<Vec<_>>(),
        vec![20, 21]
    );

    // And: The upload travels as file0 and the media list points at it
    let requests = stub.recorded_requests();
    let request = &requests[0];
    assert_eq!(request.api_method, "sendMediaGroup");
    assert_eq!(request.files, vec![(String::from("file0"), photo)]);
    assert_eq!(
        request.data.get("media"),
        Some(&json!([
            { "type": "photo", "media": "attach://file0", "caption": "Trip" },
            { "type": "video", "media": "BAACAgIAAxkBAAI" },
        ]))
    );
}

#[tokio::test]
async fn true_results_become_booleans() {
    // Given: Telegram confirms the command list was stored
    let (api, stub) = api_with(StubTransport::ok_json(ok(json!(true))));

    // When: The bot sets its commands
    let stored = api
        .send(&SetMyCommands::new(vec![BotCommand::new("start", "Start the bot")]))
        .await
        .expect("well-formed response");

    // Then: The result is true and the commands were serialized
    assert_eq!(stored, TelegramResult::Success(true));
    assert_eq!(
        stub.recorded_requests()[0].data.get("commands"),
        Some(&json!([{ "command": "start", "description": "Start the bot" }]))
    );
}

#[tokio::test]
async fn list_results_parse_every_element() {
    // Given: Two registered commands
    let (api, _) = api_with(StubTransport::ok_json(ok(json!([
        { "command": "start", "description": "Start" },
        { "command": "help", "description": "Help" },
    ]))));

    // When: The bot reads them back
    let commands = api
        .send(&GetMyCommands::default())
        .await
        .expect("well-formed response")
        .success()
        .expect("accepted");

    // Then: Both are typed
    assert_eq!(
        commands.iter().map(|command| command.command.as_str()).collect::<Vec<_>>(),
        vec!["start", "help"]
    );
}

// =============================================================================
// Failures
// =============================================================================

#[tokio::test]
async fn flood_wait_is_reported_as_fail_result() {
    // Given: Telegram is rate limiting the bot
    let (api, _) = api_with(StubTransport::new(TransportResponse::new(
        429,
        r#"{"ok":false,"error_code":429,"description":"Too Many Requests: retry after 5","parameters":{"retry_after":5}}"#,
    )));

    // When: The bot tries to ban a user
    let result = api
        .send(&BanChatMember::new("@group", 7))
        .await
        .expect("failures are not errors");

    // Then: The caller can see how long to wait
    let fail = result.fail().expect("fail result");
    assert_eq!(fail.error_code, Some(429));
    assert_eq!(fail.retry_after(), Some(5));
    assert!(!fail.ok);
}

#[tokio::test]
async fn malformed_body_is_a_response_format_error() {
    // Given: A proxy answered with HTML
    let (api, _) = api_with(StubTransport::new(TransportResponse::new(
        502,
        "<html>bad gateway</html>",
    )));

    // When: The bot calls getMe
    let error = api.get_me().await.expect_err("not json");

    // Then: The error is a format error carrying the status
    assert_eq!(
        error.as_format_error(),
        Some(&ResponseFormatError::InvalidJson { status: 502 })
    );
}

#[tokio::test]
async fn unexpected_result_shape_is_a_parse_error() {
    // Given: A member count that came back as a string
    let (api, _) = api_with(StubTransport::ok_json(ok(json!("17"))));

    // When: The bot asks for the member count
    let error = api
        .send(&GetChatMemberCount {
            chat_id: ChatId::from("@group"),
        })
        .await
        .expect_err("string result");

    // Then: The parse error names the expected and actual types
    assert_eq!(
        error.as_parse_error(),
        Some(&ParseError::UnexpectedResultType {
            expected: "integer",
            actual: "string"
        })
    );
}

#[tokio::test]
async fn transport_failure_surfaces_as_transport_error() {
    // Given: The network is down
    let (api, stub) = api_with(StubTransport::failing(TransportError::new(
        "connection failed: refused",
    )));

    // When: The bot calls getStickerSet
    let error = api
        .send(&GetStickerSet::new("animals"))
        .await
        .expect_err("transport error");

    // Then: The error is a transport error and the request was attempted once
    assert!(matches!(error, ClientError::Transport(_)));
    assert_eq!(error.to_string(), "transport error: connection failed: refused");
    assert_eq!(stub.recorded_requests().len(), 1);
}

// =============================================================================
// Untyped requests
// =============================================================================

#[tokio::test]
async fn any_request_can_be_sent_for_its_raw_result() {
    // Given: A heterogeneous request stored behind a trait object
    let (api, _) = api_with(StubTransport::ok_json(ok(json!({ "message_id": 3 }))));
    let request: Box<dyn tgapi_core::TelegramRequest> =
        Box::new(tgapi_core::methods::CopyMessage::new(1_i64, 2_i64, 3));

    // When: It is sent without a typed parser
    let result = api.send_request(request.as_ref()).await.expect("well-formed response");

    // Then: The envelope is checked and the raw result returned
    assert_eq!(result, TelegramResult::Success(json!({ "message_id": 3 })));
}
