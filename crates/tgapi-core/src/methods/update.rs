use serde::Serialize;

use crate::types::{Update, WebhookInfo};
use crate::value::{expect_true, list_of, FromTelegramResult};

/// Long-polls for incoming updates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetUpdates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_updates: Option<Vec<String>>,
}

impl GetUpdates {
    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_timeout(mut self, timeout: i64) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

telegram_method!(GetUpdates, "getUpdates", Get, Vec<Update>, list_of::<Update>);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SetWebhook {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_updates: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_pending_updates: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_token: Option<String>,
}

impl SetWebhook {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

telegram_method!(SetWebhook, "setWebhook", Post, bool, expect_true);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeleteWebhook {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_pending_updates: Option<bool>,
}

telegram_method!(DeleteWebhook, "deleteWebhook", Post, bool, expect_true);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetWebhookInfo {}

telegram_method!(
    GetWebhookInfo,
    "getWebhookInfo",
    Get,
    WebhookInfo,
    WebhookInfo::from_telegram_result
);
