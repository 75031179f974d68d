use serde::Serialize;

use crate::types::StarTransactions;
use crate::value::FromTelegramResult;

/// Lists the bot's Telegram Stars transactions, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetStarTransactions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

telegram_method!(
    GetStarTransactions,
    "getStarTransactions",
    Get,
    StarTransactions,
    StarTransactions::from_telegram_result
);
