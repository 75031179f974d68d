use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::request::{HttpMethod, InputFile, TelegramRequest};
use crate::value::Object;

/// A serialized Bot API call, ready for the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub api_method: &'static str,
    pub http_method: HttpMethod,
    pub data: Object,
    pub files: Vec<(String, InputFile)>,
}

impl TransportRequest {
    pub fn from_request(request: &dyn TelegramRequest) -> Result<Self, serde_json::Error> {
        Ok(Self {
            api_method: request.api_method(),
            http_method: request.http_method(),
            data: request.data()?,
            files: request.files(),
        })
    }
}

/// Raw HTTP outcome. Non-2xx statuses are still responses: Telegram reports
/// failures inside the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok_json(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }
}

pub type TransportFuture<'a> =
    Pin<Box<dyn Future<Output = Result<TransportResponse, TransportError>> + Send + 'a>>;

/// Executes serialized requests against the Bot API.
pub trait TelegramTransport: Send + Sync {
    fn send<'a>(&'a self, request: TransportRequest) -> TransportFuture<'a>;
}

/// Production transport backed by reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Arc<reqwest::Client>,
    config: ClientConfig,
}

impl ReqwestTransport {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_client(
            reqwest::Client::builder()
                .user_agent(concat!("tgapi/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            config,
        )
    }

    pub fn with_client(client: reqwest::Client, config: ClientConfig) -> Self {
        Self {
            client: Arc::new(client),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, request: &TransportRequest) -> String {
        let endpoint = self.config.endpoint(request.api_method);
        match request.http_method {
            HttpMethod::Get if !request.data.is_empty() => {
                format!("{endpoint}?{}", encode_query(&request.data))
            }
            _ => endpoint,
        }
    }
}

impl TelegramTransport for ReqwestTransport {
    fn send<'a>(&'a self, request: TransportRequest) -> TransportFuture<'a> {
        Box::pin(async move {
            let url = self.url(&request);
            let mut builder = match request.http_method {
                HttpMethod::Get => self.client.get(&url),
                HttpMethod::Post => self.client.post(&url),
            };

            builder = builder.timeout(Duration::from_millis(self.config.timeout_ms()));

            builder = match post_body(&request) {
                None => builder,
                Some(PostBody::Json) => builder.json(&Value::Object(request.data)),
                Some(PostBody::Multipart) => {
                    builder.multipart(multipart_form(request.data, request.files))
                }
            };

            let response = builder.send().await.map_err(|e| {
                // reqwest errors embed the URL, which carries the token.
                let e = e.without_url();
                if e.is_timeout() {
                    TransportError::new(format!("request timeout: {e}"))
                } else if e.is_connect() {
                    TransportError::new(format!("connection failed: {e}"))
                } else {
                    TransportError::new(format!("request failed: {e}"))
                }
            })?;

            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|e| {
                    TransportError::new(format!("failed to read response body: {}", e.without_url()))
                })?;

            Ok(TransportResponse { status, body })
        })
    }
}

/// Text form of a parameter: strings as-is, everything else JSON-encoded.
pub fn form_value(value: &Value) -> String {
    match value {
        Value::String(value) => value.clone(),
        other => other.to_string(),
    }
}

pub fn encode_query(data: &Object) -> String {
    data.iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(&form_value(value))
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PostBody {
    Json,
    Multipart,
}

/// Body encoding for a request. GET requests and POST requests without
/// parameters or uploads carry no body.
fn post_body(request: &TransportRequest) -> Option<PostBody> {
    match request.http_method {
        HttpMethod::Get => None,
        HttpMethod::Post if !request.files.is_empty() => Some(PostBody::Multipart),
        HttpMethod::Post if !request.data.is_empty() => Some(PostBody::Json),
        HttpMethod::Post => None,
    }
}

fn multipart_form(data: Object, files: Vec<(String, InputFile)>) -> reqwest::multipart::Form {
    let form = data
        .iter()
        .fold(reqwest::multipart::Form::new(), |form, (key, value)| {
            form.text(key.clone(), form_value(value))
        });

    files.into_iter().fold(form, |form, (name, file)| {
        let part = reqwest::multipart::Part::bytes(file.content);
        let part = match file.filename {
            Some(filename) => part.file_name(filename),
            None => part.file_name(name.clone()),
        };
        form.part(name, part)
    })
}

/// Offline transport that replays canned responses and records every request.
///
/// Queued responses are consumed in order; once the queue is empty the
/// fallback response (if any) is returned for every further call.
#[derive(Debug, Default)]
pub struct StubTransport {
    queued: Mutex<VecDeque<Result<TransportResponse, TransportError>>>,
    fallback: Option<Result<TransportResponse, TransportError>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl StubTransport {
    pub fn new(response: TransportResponse) -> Self {
        Self {
            fallback: Some(Ok(response)),
            ..Self::default()
        }
    }

    pub fn ok_json(body: impl Into<String>) -> Self {
        Self::new(TransportResponse::ok_json(body))
    }

    pub fn failing(error: TransportError) -> Self {
        Self {
            fallback: Some(Err(error)),
            ..Self::default()
        }
    }

    pub fn with_responses(responses: impl IntoIterator<Item = TransportResponse>) -> Self {
        Self {
            queued: Mutex::new(responses.into_iter().map(Ok).collect()),
            ..Self::default()
        }
    }

    pub fn recorded_requests(&self) -> Vec<TransportRequest> {
        lock(&self.requests).clone()
    }

    fn next_response(&self) -> Result<TransportResponse, TransportError> {
        match lock(&self.queued).pop_front() {
            Some(response) => response,
            None => self
                .fallback
                .clone()
                .unwrap_or_else(|| Err(TransportError::new("no stubbed response left"))),
        }
    }
}

impl TelegramTransport for StubTransport {
    fn send<'a>(&'a self, request: TransportRequest) -> TransportFuture<'a> {
        lock(&self.requests).push(request);
        let response = self.next_response();
        Box::pin(async move { response })
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::methods::{GetChat, GetMe, LogOut, SendMessage, SendPhoto};

    fn object(value: Value) -> Object {
        match value {
            Value::Object(object) => object,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn query_encodes_strings_raw_and_other_values_as_json() {
        let query = encode_query(&object(json!({
            "chat_id": "@my channel",
            "limit": 5,
            "allowed_updates": ["message"],
        })));
        assert_eq!(
            query,
            "allowed_updates=%5B%22message%22%5D&chat_id=%40my%20channel&limit=5"
        );
    }

    #[test]
    fn get_url_carries_query_and_post_url_does_not() {
        let config = ClientConfig::new("42:token").expect("token");
        let transport = ReqwestTransport::new(config);

        let get = TransportRequest::from_request(&GetChat::new(-100_i64)).expect("serializable");
        assert_eq!(
            transport.url(&get),
            "https://api.telegram.org/bot42:token/getChat?chat_id=-100"
        );

        let me = TransportRequest::from_request(&GetMe {}).expect("serializable");
        assert_eq!(transport.url(&me), "https://api.telegram.org/bot42:token/getMe");
    }

    #[test]
    fn from_request_separates_uploads_from_data() {
        let method = SendPhoto::new(7_i64, InputFile::new(b"img".to_vec()));
        let request = TransportRequest::from_request(&method).expect("serializable");

        assert_eq!(request.http_method, HttpMethod::Post);
        assert_eq!(Value::Object(request.data), json!({ "chat_id": 7 }));
        assert_eq!(request.files.len(), 1);
        assert_eq!(request.files[0].0, "photo");
    }

    #[test]
    fn post_body_is_omitted_without_parameters_or_uploads() {
        let body_for = |request: &dyn TelegramRequest| {
            post_body(&TransportRequest::from_request(request).expect("serializable"))
        };

        assert_eq!(body_for(&LogOut {}), None);
        assert_eq!(body_for(&GetChat::new(1_i64)), None);
        assert_eq!(body_for(&SendMessage::new(1_i64, "hi")), Some(PostBody::Json));
        assert_eq!(
            body_for(&SendPhoto::new(1_i64, InputFile::new(b"img".to_vec()))),
            Some(PostBody::Multipart)
        );
    }

    #[tokio::test]
    async fn stub_replays_queue_then_reports_exhaustion() {
        let stub = StubTransport::with_responses([
            TransportResponse::ok_json(r#"{"ok":true,"result":1}"#),
            TransportResponse::new(429, r#"{"ok":false}"#),
        ]);
        let request = TransportRequest::from_request(&GetMe {}).expect("serializable");

        let first = stub.send(request.clone()).await.expect("first response");
        let second = stub.send(request.clone()).await.expect("second response");
        let third = stub.send(request).await.expect_err("queue exhausted");

        assert_eq!(first.status, 200);
        assert_eq!(second.status, 429);
        assert_eq!(third.message(), "no stubbed response left");
        assert_eq!(stub.recorded_requests().len(), 3);
    }
}
