use std::env;
use std::fmt::{Debug, Formatter};

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://api.telegram.org";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Connection settings for [`crate::ReqwestTransport`].
///
/// The token is a secret: it only ever appears inside the request URL and is
/// redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    token: String,
    base_url: String,
    timeout_ms: u64,
}

impl ClientConfig {
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::MissingToken);
        }

        Ok(Self {
            token,
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        })
    }

    /// Reads `TGAPI_BOT_TOKEN` (falling back to `TELEGRAM_BOT_TOKEN`) and an
    /// optional `TGAPI_BASE_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let token = lookup("TGAPI_BOT_TOKEN")
            .or_else(|| lookup("TELEGRAM_BOT_TOKEN"))
            .ok_or(ConfigError::MissingToken)?;

        let config = Self::new(token)?;
        match lookup("TGAPI_BASE_URL") {
            Some(base_url) => config.with_base_url(base_url),
            None => Ok(config),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = base_url.into();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(base_url));
        }

        self.base_url = base_url.trim_end_matches('/').to_owned();
        Ok(self)
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// `<base>/bot<token>/<method>`
    pub fn endpoint(&self, api_method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token, api_method)
    }
}

impl Debug for ClientConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}
