use serde_json::Value;
use tgapi_core::methods::GetUpdates;
use tgapi_core::{TelegramBotApi, TelegramResult};

use crate::cli::{Cli, GetUpdatesArgs};
use crate::error::CliError;

/// Extra time granted on top of the long-poll timeout before the HTTP call gives up.
const LONG_POLL_GRACE_MS: u64 = 5_000;

pub async fn run(cli: &Cli, args: &GetUpdatesArgs) -> Result<TelegramResult<Value>, CliError> {
    let request = build_request(args);
    let config = super::config(cli, http_timeout_ms(cli.timeout_ms, args.timeout))?;
    let result = TelegramBotApi::from_config(config).get_updates(&request).await?;
    super::to_value(result)
}

fn build_request(args: &GetUpdatesArgs) -> GetUpdates {
    let mut request = GetUpdates::default();
    if let Some(offset) = args.offset {
        request = request.with_offset(offset);
    }
    if let Some(limit) = args.limit {
        request = request.with_limit(limit);
    }
    if let Some(timeout) = args.timeout {
        request = request.with_timeout(timeout);
    }
    request
}

fn http_timeout_ms(timeout_ms: u64, long_poll_secs: Option<i64>) -> u64 {
    let long_poll_ms = long_poll_secs
        .and_then(|secs| u64::try_from(secs).ok())
        .map(|secs| secs.saturating_mul(1_000).saturating_add(LONG_POLL_GRACE_MS))
        .unwrap_or(0);
    timeout_ms.max(long_poll_ms)
}
