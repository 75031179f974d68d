use serde::Serialize;

use crate::types::{BotCommand, BotDescription, BotName, BotShortDescription, MenuButton, User};
use crate::value::{expect_true, list_of, FromTelegramResult};

/// Returns the bot's own user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetMe {}

telegram_method!(GetMe, "getMe", Get, User, User::from_telegram_result);

/// Logs the bot out of the cloud Bot API server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LogOut {}

telegram_method!(LogOut, "logOut", Post, bool, expect_true);

/// Closes the bot instance before moving it between local servers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Close {}

telegram_method!(Close, "close", Post, bool, expect_true);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetMyCommands {
    pub commands: Vec<BotCommand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl SetMyCommands {
    pub fn new(commands: Vec<BotCommand>) -> Self {
        Self {
            commands,
            language_code: None,
        }
    }
}

telegram_method!(SetMyCommands, "setMyCommands", Post, bool, expect_true);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeleteMyCommands {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

telegram_method!(DeleteMyCommands, "deleteMyCommands", Post, bool, expect_true);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetMyCommands {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

telegram_method!(
    GetMyCommands,
    "getMyCommands",
    Get,
    Vec<BotCommand>,
    list_of::<BotCommand>
);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SetMyName {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

telegram_method!(SetMyName, "setMyName", Post, bool, expect_true);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetMyName {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl GetMyName {
    pub fn for_language(language_code: impl Into<String>) -> Self {
        Self {
            language_code: Some(language_code.into()),
        }
    }
}

telegram_method!(GetMyName, "getMyName", Get, BotName, BotName::from_telegram_result);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SetMyDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

telegram_method!(SetMyDescription, "setMyDescription", Post, bool, expect_true);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetMyDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

telegram_method!(
    GetMyDescription,
    "getMyDescription",
    Get,
    BotDescription,
    BotDescription::from_telegram_result
);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SetMyShortDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

telegram_method!(
    SetMyShortDescription,
    "setMyShortDescription",
    Post,
    bool,
    expect_true
);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetMyShortDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

telegram_method!(
    GetMyShortDescription,
    "getMyShortDescription",
    Get,
    BotShortDescription,
    BotShortDescription::from_telegram_result
);

/// Changes the menu button of a private chat, or the default one when
/// `chat_id` is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SetChatMenuButton {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_button: Option<MenuButton>,
}

telegram_method!(SetChatMenuButton, "setChatMenuButton", Post, bool, expect_true);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetChatMenuButton {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<i64>,
}

telegram_method!(
    GetChatMenuButton,
    "getChatMenuButton",
    Get,
    MenuButton,
    MenuButton::from_telegram_result
);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::request::{HttpMethod, TelegramMethod, TelegramRequest};

    #[test]
    fn get_my_name_without_language() {
        let method = GetMyName::default();
        assert_eq!(method.http_method(), HttpMethod::Get);
        assert_eq!(method.api_method(), "getMyName");
        assert!(method.data().expect("serializable").is_empty());
    }

    #[test]
    fn get_my_name_with_language() {
        let data = GetMyName::for_language("ru").data().expect("serializable");
        assert_eq!(serde_json::Value::Object(data), json!({ "language_code": "ru" }));
    }

    #[test]
    fn get_my_name_prepares_bot_name() {
        let name = GetMyName::default()
            .prepare_result(&json!({ "name": "test" }))
            .expect("valid name");
        assert_eq!(name.name, "test");
    }

    #[test]
    fn set_my_commands_posts_command_list() {
        let method = SetMyCommands::new(vec![BotCommand::new("start", "Start the bot")]);
        assert_eq!(method.http_method(), HttpMethod::Post);
        assert_eq!(
            serde_json::Value::Object(method.data().expect("serializable")),
            json!({ "commands": [{ "command": "start", "description": "Start the bot" }] })
        );
        assert_eq!(method.prepare_result(&json!(true)), Ok(true));
    }

    #[test]
    fn get_my_commands_parses_list() {
        let commands = GetMyCommands::default()
            .prepare_result(&json!([{ "command": "help", "description": "Help" }]))
            .expect("valid list");
        assert_eq!(commands, vec![BotCommand::new("help", "Help")]);
    }

    #[test]
    fn set_chat_menu_button_embeds_tagged_button() {
        let method = SetChatMenuButton {
            chat_id: Some(5),
            menu_button: Some(MenuButton::Commands(crate::types::MenuButtonCommands {})),
        };
        assert_eq!(
            serde_json::Value::Object(method.data().expect("serializable")),
            json!({ "chat_id": 5, "menu_button": { "type": "commands" } })
        );
    }
}
