mod get_chat;
mod get_me;
mod get_updates;
mod parse_update;
mod webhook_info;

use serde::Serialize;
use serde_json::Value;
use tgapi_core::{ChatId, ClientConfig, TelegramBotApi, TelegramResult};

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<TelegramResult<Value>, CliError> {
    match &cli.command {
        Command::GetMe => get_me::run(cli).await,
        Command::GetUpdates(args) => get_updates::run(cli, args).await,
        Command::WebhookInfo => webhook_info::run(cli).await,
        Command::GetChat(args) => get_chat::run(cli, args).await,
        Command::ParseUpdate(args) => parse_update::run(args),
    }
}

/// Resolves the client configuration from flags, then the environment.
fn config(cli: &Cli, timeout_ms: u64) -> Result<ClientConfig, CliError> {
    let config = match cli.token.as_deref() {
        Some(token) => ClientConfig::new(token)?,
        None => ClientConfig::from_env()?,
    };
    let config = match cli.base_url.as_deref() {
        Some(base_url) => config.with_base_url(base_url)?,
        None => config,
    };
    Ok(config.with_timeout_ms(timeout_ms))
}

fn api(cli: &Cli) -> Result<TelegramBotApi, CliError> {
    Ok(TelegramBotApi::from_config(config(cli, cli.timeout_ms)?))
}

/// Numeric ids are used as-is; anything else is treated as a username.
fn parse_chat_id(raw: &str) -> ChatId {
    match raw.trim().parse::<i64>() {
        Ok(id) => ChatId::Id(id),
        Err(_) => ChatId::from(raw.trim()),
    }
}

fn to_value<T: Serialize>(result: TelegramResult<T>) -> Result<TelegramResult<Value>, CliError> {
    Ok(match result {
        TelegramResult::Success(value) => TelegramResult::Success(serde_json::to_value(value)?),
        TelegramResult::Fail(fail) => TelegramResult::Fail(fail),
    })
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use serde_json::json;
    use tgapi_core::{ChatId, ConfigError, FailResult, TelegramResult};

    use super::{config, parse_chat_id, to_value};
    use crate::cli::Cli;
    use crate::error::CliError;

    #[test]
    fn chat_ids_parse_as_numbers_or_usernames() {
        assert_eq!(parse_chat_id("-1001234567890"), ChatId::Id(-1_001_234_567_890));
        assert_eq!(parse_chat_id(" 42 "), ChatId::Id(42));
        assert_eq!(parse_chat_id("@telegram"), ChatId::from("@telegram"));
    }

    #[test]
    fn token_flag_and_overrides_build_the_config() {
        let cli = Cli::try_parse_from([
            "tgapi",
            "get-me",
            "--token",
            "123:abc",
            "--base-url",
            "http://localhost:8081/",
            "--timeout-ms",
            "2500",
        ])
        .expect("valid arguments");

        let config = config(&cli, cli.timeout_ms).expect("valid config");

        assert_eq!(config.token(), "123:abc");
        assert_eq!(config.base_url(), "http://localhost:8081");
        assert_eq!(config.timeout_ms(), 2500);
    }

    #[test]
    fn invalid_base_url_is_a_config_error() {
        let cli = Cli::try_parse_from(["tgapi", "get-me", "--token", "1:a", "--base-url", "ftp://x"])
            .expect("valid arguments");

        let error = config(&cli, cli.timeout_ms).expect_err("bad url");

        assert!(matches!(error, CliError::Config(ConfigError::InvalidBaseUrl(_))));
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn blank_token_flag_is_rejected() {
        let cli = Cli::try_parse_from(["tgapi", "get-me", "--token", "  "]).expect("valid arguments");

        let error = config(&cli, cli.timeout_ms).expect_err("blank token");

        assert!(matches!(error, CliError::Config(ConfigError::MissingToken)));
    }

    #[test]
    fn typed_results_convert_to_json() {
        let success = to_value(TelegramResult::Success(vec![1, 2])).expect("serializable");
        assert_eq!(success, TelegramResult::Success(json!([1, 2])));

        let fail = FailResult::new(Some(String::from("Not Found")), Some(404));
        let failed = to_value::<bool>(TelegramResult::Fail(fail.clone())).expect("serializable");
        assert_eq!(failed, TelegramResult::Fail(fail));
    }
}
