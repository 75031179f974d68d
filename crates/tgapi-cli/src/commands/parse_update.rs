use std::io::Read;
use std::path::Path;

use serde_json::Value;
use tgapi_core::types::Update;
use tgapi_core::TelegramResult;
use tracing::debug;

use crate::cli::ParseUpdateArgs;
use crate::error::CliError;

pub fn run(args: &ParseUpdateArgs) -> Result<TelegramResult<Value>, CliError> {
    let body = read_body(&args.path)?;
    let update = Update::from_json(&body)?;
    debug!(update_id = update.update_id, kind = update.kind(), "parsed update");
    super::to_value(TelegramResult::Success(update))
}

fn read_body(path: &Path) -> Result<String, CliError> {
    if path.as_os_str() == "-" {
        let mut body = String::new();
        std::io::stdin().read_to_string(&mut body)?;
        return Ok(body);
    }
    Ok(std::fs::read_to_string(path)?)
}
