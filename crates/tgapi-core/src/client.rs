use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::envelope::{parse_response, TelegramResult};
use crate::error::{ClientError, ConfigError};
use crate::methods::{GetChat, GetMe, GetUpdates, GetWebhookInfo, SendMessage};
use crate::request::{ChatId, PreparableRequest, PreparedResult, TelegramMethod, TelegramRequest};
use crate::transport::{ReqwestTransport, TelegramTransport, TransportRequest, TransportResponse};
use crate::types::{ChatFullInfo, Message, Update, User, WebhookInfo};

/// Bot API facade: serializes a method, sends it through the transport and
/// parses the envelope.
///
/// A remote `ok: false` comes back as [`TelegramResult::Fail`]; only transport
/// failures and malformed responses are errors.
#[derive(Clone)]
pub struct TelegramBotApi {
    transport: Arc<dyn TelegramTransport>,
}

impl TelegramBotApi {
    pub fn new(transport: Arc<dyn TelegramTransport>) -> Self {
        Self { transport }
    }

    pub fn from_config(config: ClientConfig) -> Self {
        Self::new(Arc::new(ReqwestTransport::new(config)))
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::from_config(ClientConfig::from_env()?))
    }

    /// Sends a method and parses its result into the method's output type.
    pub async fn send<M: TelegramMethod>(
        &self,
        method: &M,
    ) -> Result<TelegramResult<M::Output>, ClientError> {
        let response = self.execute(method).await?;
        let parsed = parse_response(response.status, &response.body, |result| {
            method.prepare_result(result)
        })?;
        log_failure(method.api_method(), response.status, &parsed);
        Ok(parsed)
    }

    /// Sends any request and returns the envelope-checked raw `result`.
    pub async fn send_request(
        &self,
        request: &dyn TelegramRequest,
    ) -> Result<TelegramResult<Value>, ClientError> {
        let response = self.execute(request).await?;
        let parsed = parse_response(response.status, &response.body, |result| Ok(result.clone()))?;
        log_failure(request.api_method(), response.status, &parsed);
        Ok(parsed)
    }

    /// Sends a type-erased method and parses its result with the method's own
    /// parser.
    pub async fn send_prepared(
        &self,
        request: &dyn PreparableRequest,
    ) -> Result<TelegramResult<PreparedResult>, ClientError> {
        let response = self.execute(request.as_request()).await?;
        let parsed = parse_response(response.status, &response.body, |result| {
            request.prepare_erased(result)
        })?;
        log_failure(request.api_method(), response.status, &parsed);
        Ok(parsed)
    }

    pub async fn get_me(&self) -> Result<TelegramResult<User>, ClientError> {
        self.send(&GetMe {}).await
    }

    pub async fn get_updates(
        &self,
        request: &GetUpdates,
    ) -> Result<TelegramResult<Vec<Update>>, ClientError> {
        self.send(request).await
    }

    pub async fn get_webhook_info(&self) -> Result<TelegramResult<WebhookInfo>, ClientError> {
        self.send(&GetWebhookInfo {}).await
    }

    pub async fn get_chat(
        &self,
        chat_id: impl Into<ChatId>,
    ) -> Result<TelegramResult<ChatFullInfo>, ClientError> {
        self.send(&GetChat::new(chat_id)).await
    }

    pub async fn send_message(
        &self,
        chat_id: impl Into<ChatId>,
        text: impl Into<String>,
    ) -> Result<TelegramResult<Message>, ClientError> {
        self.send(&SendMessage::new(chat_id, text)).await
    }

    async fn execute(&self, request: &dyn TelegramRequest) -> Result<TransportResponse, ClientError> {
        let api_method = request.api_method();
        let transport_request = TransportRequest::from_request(request)?;
        debug!(
            api_method,
            http_method = %transport_request.http_method,
            files = transport_request.files.len(),
            "sending request"
        );

        let response = self
            .transport
            .send(transport_request)
            .await
            .inspect_err(|error| warn!(api_method, error = %error, "transport failed"))?;

        debug!(api_method, status = response.status, "received response");
        Ok(response)
    }
}

fn log_failure<T>(api_method: &str, status: u16, result: &TelegramResult<T>) {
    if let Some(fail) = result.fail() {
        warn!(
            api_method,
            status,
            error_code = fail.error_code,
            description = fail.description.as_deref(),
            "telegram reported failure"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::request::HttpMethod;
    use crate::transport::StubTransport;

    #[tokio::test]
    async fn send_parses_typed_result() {
        let stub = Arc::new(StubTransport::ok_json(
            r#"{"ok":true,"result":{"id":7,"is_bot":true,"first_name":"Echo","username":"echo_bot"}}"#,
        ));
        let api = TelegramBotApi::new(stub.clone());

        let me = api.get_me().await.expect("response").success().expect("success");
        assert_eq!(me.username.as_deref(), Some("echo_bot"));

        let requests = stub.recorded_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].api_method, "getMe");
        assert_eq!(requests[0].http_method, HttpMethod::Get);
    }

    #[tokio::test]
    async fn transport_failure_is_an_error() {
        let api = TelegramBotApi::new(Arc::new(StubTransport::failing(TransportError::new(
            "connection failed: refused",
        ))));

        let error = api.get_me().await.expect_err("transport error");
        assert!(matches!(error, ClientError::Transport(_)));
    }

    #[tokio::test]
    async fn send_request_returns_raw_result() {
        let api = TelegramBotApi::new(Arc::new(StubTransport::ok_json(
            r#"{"ok":true,"result":true}"#,
        )));

        let result = api
            .send_request(&GetWebhookInfo {})
            .await
            .expect("response");
        assert_eq!(result, TelegramResult::Success(Value::Bool(true)));
    }

    #[tokio::test]
    async fn send_prepared_parses_with_the_method_parser() {
        let api = TelegramBotApi::new(Arc::new(StubTransport::ok_json(
            r#"{"ok":true,"result":{"id":7,"is_bot":true,"first_name":"Echo"}}"#,
        )));
        let request: Box<dyn PreparableRequest> = Box::new(GetMe {});

        let result = api.send_prepared(request.as_ref()).await.expect("response");

        let me = result.success().and_then(|prepared| prepared.downcast::<User>().ok());
        assert_eq!(me.map(|user| user.id), Some(7));
    }
}
