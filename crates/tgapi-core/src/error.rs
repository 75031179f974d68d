use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Polymorphic entity families selected by a discriminator field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantFamily {
    ChatMember,
    ChatBoostSource,
    ReactionType,
    RevenueWithdrawalState,
    TransactionPartner,
    MessageOrigin,
    MenuButton,
}

impl VariantFamily {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ChatMember => "chat member status",
            Self::ChatBoostSource => "chat boost source",
            Self::ReactionType => "reaction type",
            Self::RevenueWithdrawalState => "revenue withdrawal state type",
            Self::TransactionPartner => "transaction partner type",
            Self::MessageOrigin => "message origin type",
            Self::MenuButton => "menu button type",
        }
    }
}

impl Display for VariantFamily {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural errors raised while turning a raw JSON value into an entity.
///
/// Parsing is fail-fast: the first violation aborts the entity and every
/// enclosing entity.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Not found key \"{key}\" in result object.")]
    MissingField { key: String },

    #[error("Invalid type of value for key \"{key}\". Expected type is \"{expected}\", but got \"{actual}\".")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Expected result as {expected}. Got \"{actual}\".")]
    UnexpectedResultType {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Unknown {family}. Got \"{value}\".")]
    UnknownVariant {
        family: VariantFamily,
        value: String,
    },
}

impl ParseError {
    pub fn missing_field(key: impl Into<String>) -> Self {
        Self::MissingField { key: key.into() }
    }

    pub fn type_mismatch(key: impl Into<String>, expected: &'static str, actual: &'static str) -> Self {
        Self::TypeMismatch {
            key: key.into(),
            expected,
            actual,
        }
    }

    pub fn unknown_variant(family: VariantFamily, value: impl Into<String>) -> Self {
        Self::UnknownVariant {
            family,
            value: value.into(),
        }
    }
}

/// Malformed transport envelope.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResponseFormatError {
    #[error("Failed to decode JSON response. Status code: {status}.")]
    InvalidJson { status: u16 },

    #[error("Expected telegram response as array. Got \"{actual}\".")]
    NotAnObject { actual: &'static str },

    #[error("Incorrect \"ok\" field in response. Status code: {status}.")]
    IncorrectOk { status: u16 },

    #[error("Not found \"result\" field in response. Status code: {status}.")]
    MissingResult { status: u16 },
}

/// Anything that prevents a response body from becoming a typed result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResponseError {
    #[error(transparent)]
    Format(#[from] ResponseFormatError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Transport-level failure reported by a [`crate::TelegramTransport`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Invalid client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing bot token: pass --token or set TGAPI_BOT_TOKEN")]
    MissingToken,

    #[error("invalid base url `{0}`: expected an http:// or https:// url")]
    InvalidBaseUrl(String),
}

/// Top-level error type for client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Response(#[from] ResponseError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            Self::Response(ResponseError::Parse(error)) => Some(error),
            _ => None,
        }
    }

    pub fn as_format_error(&self) -> Option<&ResponseFormatError> {
        match self {
            Self::Response(ResponseError::Format(error)) => Some(error),
            _ => None,
        }
    }
}
