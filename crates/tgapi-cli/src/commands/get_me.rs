use serde_json::Value;
use tgapi_core::TelegramResult;

use crate::cli::Cli;
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<TelegramResult<Value>, CliError> {
    let result = super::api(cli)?.get_me().await?;
    super::to_value(result)
}
