//! # tgapi core
//!
//! Typed client for the Telegram Bot API.
//!
//! ## Overview
//!
//! This crate turns Bot API calls into typed Rust values:
//!
//! - **Value accessors** that read required and optional fields from raw JSON
//! - **Entity parsers** for updates, messages, chats, members, stickers,
//!   payments, boosts and reactions
//! - **Variant factories** that pick the concrete shape of a polymorphic
//!   entity from its discriminator field
//! - **Response envelope parser** separating successes, remote failures and
//!   malformed responses
//! - **Method catalog** describing each remote call and how its result parses
//! - **Update dispatch** routing an incoming update through a handler
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | [`TelegramBotApi`] facade |
//! | [`config`] | Token, base URL and timeout |
//! | [`envelope`] | `{ok, result}` decoding and [`FailResult`] |
//! | [`error`] | Error types |
//! | [`methods`] | One struct per Bot API method |
//! | [`request`] | Request traits, uploads and chat ids |
//! | [`transport`] | Transport trait, reqwest and stub transports |
//! | [`types`] | Telegram entities |
//! | [`update_handler`] | Update dispatch |
//! | [`value`] | Field accessors over raw JSON |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tgapi_core::{ClientConfig, TelegramBotApi, TelegramResult};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = TelegramBotApi::from_config(ClientConfig::new("123:token")?);
//!
//!     match api.get_me().await? {
//!         TelegramResult::Success(me) => println!("running as {}", me.first_name),
//!         TelegramResult::Fail(fail) => eprintln!("rejected: {:?}", fail.description),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────────┐
//! │ UpdateHandler   │────▶│ TelegramBotApi   │
//! └─────────────────┘     └────────┬─────────┘
//!                                  │
//!                                  ▼
//!                         ┌──────────────────┐
//!                         │ Transport        │
//!                         │ (reqwest/stub)   │
//!                         └────────┬─────────┘
//!                                  │ status + body
//!                                  ▼
//!                         ┌──────────────────┐
//!                         │ Envelope parser  │
//!                         └────────┬─────────┘
//!                                  │ result
//!                                  ▼
//!                         ┌──────────────────┐
//!                         │ Entity parsers   │
//!                         └──────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! A remote `ok: false` is a value ([`TelegramResult::Fail`]), not an error.
//! Errors are reserved for things that went wrong locally or on the wire:
//!
//! ```rust
//! use tgapi_core::{ClientError, ResponseError};
//!
//! fn describe(error: &ClientError) -> &'static str {
//!     match error {
//!         ClientError::Transport(_) => "network",
//!         ClientError::Response(ResponseError::Format(_)) => "malformed envelope",
//!         ClientError::Response(ResponseError::Parse(_)) => "unexpected result shape",
//!         ClientError::Serialization(_) => "bad request parameters",
//!     }
//! }
//! ```
//!
//! ## Security
//!
//! - The bot token only appears in request URLs; config `Debug` redacts it
//! - Transport errors are stripped of URLs before they are reported

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod methods;
pub mod request;
pub mod transport;
pub mod types;
pub mod update_handler;
pub mod value;

// Facade and configuration
pub use client::TelegramBotApi;
pub use config::ClientConfig;

// Envelope types
pub use envelope::{parse_response, FailResult, ResponseParameters, TelegramResult};

// Error types
pub use error::{
    ClientError, ConfigError, ParseError, ResponseError, ResponseFormatError, TransportError,
    VariantFamily,
};

// Requests
pub use request::{
    ChatId, HttpMethod, InputFile, InputFileOrString, PreparableRequest, PreparedResult,
    RequestFileCollector, TelegramMethod, TelegramRequest,
};

// Transports
pub use transport::{
    ReqwestTransport, StubTransport, TelegramTransport, TransportRequest, TransportResponse,
};

// Update dispatch
pub use update_handler::{
    UpdateHandleResult, UpdateHandler, UpdateRequest, UpdateRequestHandler, UpdateResponse,
};

// Parsing entry points
pub use value::{FromTelegramResult, Object, True};
