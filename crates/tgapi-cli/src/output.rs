use serde::Serialize;

use crate::error::CliError;

pub fn render<T: Serialize>(payload: &T, pretty: bool) -> Result<(), CliError> {
    println!("{}", to_json(payload, pretty)?);
    Ok(())
}

pub fn to_json<T: Serialize>(payload: &T, pretty: bool) -> Result<String, CliError> {
    let encoded = if pretty {
        serde_json::to_string_pretty(payload)?
    } else {
        serde_json::to_string(payload)?
    };
    Ok(encoded)
}
