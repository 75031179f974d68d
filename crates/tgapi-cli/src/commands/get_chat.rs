use serde_json::Value;
use tgapi_core::TelegramResult;

use crate::cli::{Cli, GetChatArgs};
use crate::error::CliError;

pub async fn run(cli: &Cli, args: &GetChatArgs) -> Result<TelegramResult<Value>, CliError> {
    let chat_id = super::parse_chat_id(&args.chat_id);
    let result = super::api(cli)?.get_chat(chat_id).await?;
    super::to_value(result)
}
