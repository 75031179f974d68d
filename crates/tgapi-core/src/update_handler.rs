//! Routes an incoming [`Update`] through a user handler and sends the API
//! calls it asks for.

use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};

use serde_json::Value;
use tracing::debug;

use crate::client::TelegramBotApi;
use crate::envelope::TelegramResult;
use crate::error::ClientError;
use crate::request::{PreparableRequest, PreparedResult};
use crate::types::Update;

/// An update plus attributes that middleware-style handlers can attach.
///
/// `with_*` methods return a modified copy and leave the original untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateRequest {
    update: Update,
    attributes: BTreeMap<String, Value>,
}

impl UpdateRequest {
    pub fn new(update: Update) -> Self {
        Self {
            update,
            attributes: BTreeMap::new(),
        }
    }

    pub fn update(&self) -> &Update {
        &self.update
    }

    pub fn attributes(&self) -> &BTreeMap<String, Value> {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    pub fn with_attribute(&self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut new = self.clone();
        new.attributes.insert(name.into(), value.into());
        new
    }

    pub fn without_attribute(&self, name: &str) -> Self {
        let mut new = self.clone();
        new.attributes.remove(name);
        new
    }
}

/// API calls a handler wants made in reply to an update, in order.
#[derive(Default)]
pub struct UpdateResponse {
    requests: Vec<Box<dyn PreparableRequest>>,
}

impl UpdateResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// A response with exactly one request.
    pub fn with_request(request: impl PreparableRequest + 'static) -> Self {
        Self {
            requests: vec![Box::new(request)],
        }
    }

    pub fn with_added_request(mut self, request: impl PreparableRequest + 'static) -> Self {
        self.requests.push(Box::new(request));
        self
    }

    pub fn requests(&self) -> &[Box<dyn PreparableRequest>] {
        &self.requests
    }
}

impl Debug for UpdateResponse {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.requests.iter().map(|request| request.api_method()))
            .finish()
    }
}

pub trait UpdateRequestHandler: Send + Sync {
    fn handle(&self, request: UpdateRequest) -> UpdateResponse;
}

impl<F> UpdateRequestHandler for F
where
    F: Fn(UpdateRequest) -> UpdateResponse + Send + Sync,
{
    fn handle(&self, request: UpdateRequest) -> UpdateResponse {
        self(request)
    }
}

/// The update and the outcome of every request its handler produced.
///
/// Successful results were parsed by their method; downcast them to the
/// method's `Output` type.
#[derive(Debug)]
pub struct UpdateHandleResult {
    pub update: Update,
    pub results: Vec<(&'static str, TelegramResult<PreparedResult>)>,
}

pub struct UpdateHandler<H> {
    api: TelegramBotApi,
    handler: H,
}

impl<H: UpdateRequestHandler> UpdateHandler<H> {
    pub fn new(api: TelegramBotApi, handler: H) -> Self {
        Self { api, handler }
    }

    /// Runs the handler and sends its requests in order.
    ///
    /// A remote `ok: false` is recorded and the next request still goes out.
    /// Transport errors and malformed responses stop the run.
    pub async fn handle(&self, update: Update) -> Result<UpdateHandleResult, ClientError> {
        debug!(
            update_id = update.update_id,
            kind = update.kind(),
            "handling update"
        );

        let response = self.handler.handle(UpdateRequest::new(update.clone()));

        let mut results = Vec::with_capacity(response.requests().len());
        for request in response.requests() {
            let result = self.api.send_prepared(request.as_ref()).await?;
            results.push((request.api_method(), result));
        }

        Ok(UpdateHandleResult { update, results })
    }
}
