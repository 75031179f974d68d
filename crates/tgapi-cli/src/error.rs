use thiserror::Error;
use tgapi_core::types::WebhookError;
use tgapi_core::{ClientError, ConfigError, ResponseError};

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("invalid update: {0}")]
    Webhook(#[from] WebhookError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 2,
            Self::Client(ClientError::Transport(_)) => 10,
            Self::Client(ClientError::Response(ResponseError::Format(_))) => 4,
            Self::Client(ClientError::Response(ResponseError::Parse(_))) => 4,
            Self::Client(ClientError::Serialization(_)) => 4,
            Self::Webhook(_) => 4,
            Self::Serialization(_) => 4,
            Self::Io(_) => 10,
        }
    }
}
