use serde::Serialize;
use serde_json::Value;

use crate::error::VariantFamily;
use crate::value::{
    expect_object, get_boolean_or_none, get_nested_list, get_object, get_object_or_none,
    get_string, get_string_or_none, FromTelegramResult,
};
use crate::ParseError;

/// Inline keyboard attached to a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboardMarkup {
    pub fn new(inline_keyboard: Vec<Vec<InlineKeyboardButton>>) -> Self {
        Self { inline_keyboard }
    }
}

impl FromTelegramResult for InlineKeyboardMarkup {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            inline_keyboard: get_nested_list(raw, "inline_keyboard")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_app: Option<WebAppInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_url: Option<LoginUrl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_inline_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_inline_query_current_chat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay: Option<bool>,
}

impl InlineKeyboardButton {
    fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: None,
            callback_data: None,
            web_app: None,
            login_url: None,
            switch_inline_query: None,
            switch_inline_query_current_chat: None,
            pay: None,
        }
    }

    pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            callback_data: Some(data.into()),
            ..Self::with_text(text)
        }
    }

    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::with_text(text)
        }
    }

    pub fn web_app(text: impl Into<String>, web_app: WebAppInfo) -> Self {
        Self {
            web_app: Some(web_app),
            ..Self::with_text(text)
        }
    }
}

impl FromTelegramResult for InlineKeyboardButton {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            text: get_string(raw, "text")?,
            url: get_string_or_none(raw, "url")?,
            callback_data: get_string_or_none(raw, "callback_data")?,
            web_app: get_object_or_none(raw, "web_app")?,
            login_url: get_object_or_none(raw, "login_url")?,
            switch_inline_query: get_string_or_none(raw, "switch_inline_query")?,
            switch_inline_query_current_chat: get_string_or_none(
                raw,
                "switch_inline_query_current_chat",
            )?,
            pay: get_boolean_or_none(raw, "pay")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebAppInfo {
    pub url: String,
}

impl WebAppInfo {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl FromTelegramResult for WebAppInfo {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            url: get_string(raw, "url")?,
        })
    }
}

/// Parameters for authorizing a user through a button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginUrl {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_write_access: Option<bool>,
}

impl FromTelegramResult for LoginUrl {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            url: get_string(raw, "url")?,
            forward_text: get_string_or_none(raw, "forward_text")?,
            bot_username: get_string_or_none(raw, "bot_username")?,
            request_write_access: get_boolean_or_none(raw, "request_write_access")?,
        })
    }
}

/// The bot's menu button in a private chat, selected by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum MenuButton {
    #[serde(rename = "commands")]
    Commands(MenuButtonCommands),
    #[serde(rename = "web_app")]
    WebApp(MenuButtonWebApp),
    #[serde(rename = "default")]
    Default(MenuButtonDefault),
}

impl MenuButton {
    pub const DISCRIMINATORS: [&'static str; 3] = [
        MenuButtonCommands::TYPE,
        MenuButtonWebApp::TYPE,
        MenuButtonDefault::TYPE,
    ];

    pub fn button_type(&self) -> &'static str {
        match self {
            Self::Commands(_) => MenuButtonCommands::TYPE,
            Self::WebApp(_) => MenuButtonWebApp::TYPE,
            Self::Default(_) => MenuButtonDefault::TYPE,
        }
    }
}

impl FromTelegramResult for MenuButton {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let button_type = get_string(expect_object(value)?, "type")?;
        match button_type.as_str() {
            MenuButtonCommands::TYPE => {
                MenuButtonCommands::from_telegram_result(value).map(Self::Commands)
            }
            MenuButtonWebApp::TYPE => MenuButtonWebApp::from_telegram_result(value).map(Self::WebApp),
            MenuButtonDefault::TYPE => {
                MenuButtonDefault::from_telegram_result(value).map(Self::Default)
            }
            _ => Err(ParseError::unknown_variant(VariantFamily::MenuButton, button_type)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MenuButtonCommands {}

impl MenuButtonCommands {
    pub const TYPE: &'static str = "commands";
}

impl FromTelegramResult for MenuButtonCommands {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        expect_object(value)?;
        Ok(Self {})
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuButtonWebApp {
    pub text: String,
    pub web_app: WebAppInfo,
}

impl MenuButtonWebApp {
    pub const TYPE: &'static str = "web_app";
}

impl FromTelegramResult for MenuButtonWebApp {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            text: get_string(raw, "text")?,
            web_app: get_object(raw, "web_app")?,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MenuButtonDefault {}

impl MenuButtonDefault {
    pub const TYPE: &'static str = "default";
}

impl FromTelegramResult for MenuButtonDefault {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        expect_object(value)?;
        Ok(Self {})
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BotCommand {
    pub command: String,
    pub description: String,
}

impl BotCommand {
    pub fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            description: description.into(),
        }
    }
}

impl FromTelegramResult for BotCommand {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            command: get_string(raw, "command")?,
            description: get_string(raw, "description")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BotName {
    pub name: String,
}

impl FromTelegramResult for BotName {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            name: get_string(raw, "name")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BotDescription {
    pub description: String,
}

impl FromTelegramResult for BotDescription {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            description: get_string(raw, "description")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BotShortDescription {
    pub short_description: String,
}

impl FromTelegramResult for BotShortDescription {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            short_description: get_string(raw, "short_description")?,
        })
    }
}
