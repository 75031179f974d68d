//! CLI argument definitions for tgapi.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `get-me` | Show the bot account behind the token |
//! | `get-updates` | Poll pending updates |
//! | `webhook-info` | Show the current webhook status |
//! | `get-chat` | Show full information about a chat |
//! | `parse-update` | Parse a webhook body offline |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--token` | env | Bot token (`TGAPI_BOT_TOKEN`, then `TELEGRAM_BOT_TOKEN`) |
//! | `--base-url` | `https://api.telegram.org` | Bot API server |
//! | `--timeout-ms` | `10000` | Request timeout in ms |
//! | `--pretty` | `false` | Pretty-print JSON output |
//!
//! # Examples
//!
//! ```bash
//! tgapi get-me --pretty
//! tgapi get-updates --offset 100 --timeout 30
//! tgapi get-chat @telegram
//! tgapi parse-update webhook.json
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tgapi_core::config::DEFAULT_TIMEOUT_MS;

/// tgapi - Telegram Bot API diagnostics
///
/// Calls the Bot API with a bot token and prints typed results as JSON.
/// Remote failures are printed as `{"ok":false,...}` and exit with code 3.
#[derive(Debug, Parser)]
#[command(
    name = "tgapi",
    author,
    version,
    about = "Telegram Bot API diagnostics",
    long_about = "tgapi calls the Telegram Bot API and prints the parsed result as JSON.\n\
\n\
Exit codes:\n\
  0   success\n\
  2   usage or configuration error\n\
  3   Telegram reported a failure\n\
  4   malformed or unexpected response\n\
  10  network or I/O error"
)]
pub struct Cli {
    /// Bot token. Defaults to TGAPI_BOT_TOKEN, then TELEGRAM_BOT_TOKEN.
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Bot API server, e.g. a local `telegram-bot-api` instance.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout budget in milliseconds.
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the bot account behind the token.
    GetMe,

    /// Poll pending updates.
    ///
    /// # Examples
    ///
    ///   tgapi get-updates
    ///   tgapi get-updates --offset 731 --limit 10 --timeout 30
    GetUpdates(GetUpdatesArgs),

    /// Show the current webhook status.
    WebhookInfo,

    /// Show full information about a chat.
    GetChat(GetChatArgs),

    /// Parse a webhook body without calling Telegram.
    ///
    /// # Examples
    ///
    ///   tgapi parse-update update.json
    ///   cat update.json | tgapi parse-update -
    ParseUpdate(ParseUpdateArgs),
}

#[derive(Debug, Args)]
pub struct GetUpdatesArgs {
    /// Identifier of the first update to return.
    #[arg(long, allow_negative_numbers = true)]
    pub offset: Option<i64>,

    /// Maximum number of updates (1-100).
    #[arg(long)]
    pub limit: Option<i64>,

    /// Long polling timeout in seconds.
    #[arg(long)]
    pub timeout: Option<i64>,
}

#[derive(Debug, Args)]
pub struct GetChatArgs {
    /// Numeric chat id or `@channelusername`.
    #[arg(allow_hyphen_values = true)]
    pub chat_id: String,
}

#[derive(Debug, Args)]
pub struct ParseUpdateArgs {
    /// File holding the update JSON, or `-` for stdin.
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_options_apply_after_subcommand() {
        let cli = Cli::try_parse_from(["tgapi", "get-me", "--token", "1:a", "--pretty"])
            .expect("valid arguments");
        assert_eq!(cli.token.as_deref(), Some("1:a"));
        assert!(cli.pretty);
        assert_eq!(cli.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert!(matches!(cli.command, Command::GetMe));
    }

    #[test]
    fn get_chat_accepts_negative_ids() {
        let cli = Cli::try_parse_from(["tgapi", "get-chat", "-1001234567890"])
            .expect("valid arguments");
        let Command::GetChat(args) = cli.command else {
            panic!("expected get-chat");
        };
        assert_eq!(args.chat_id, "-1001234567890");
    }

    #[test]
    fn get_updates_options_are_optional() {
        let cli = Cli::try_parse_from(["tgapi", "get-updates", "--limit", "5"])
            .expect("valid arguments");
        let Command::GetUpdates(args) = cli.command else {
            panic!("expected get-updates");
        };
        assert_eq!(args.limit, Some(5));
        assert_eq!(args.offset, None);
    }

    #[test]
    fn missing_subcommand_is_a_usage_error() {
        assert!(Cli::try_parse_from(["tgapi"]).is_err());
    }
}
