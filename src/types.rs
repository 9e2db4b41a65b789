//! Telegram Bot API wire types.
//!
//! Inbound objects derive `Deserialize` only; outbound-only objects (reply
//! markup) derive `Serialize` only. Optional wire fields are `Option<T>`
//! throughout so that "absent" is never conflated with `false`/zero.

use serde::{Deserialize, Serialize};

/// One inbound event from `getUpdates`: a strictly increasing id plus a
/// oneof payload.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
    pub edited_message: Option<Message>,
    pub channel_post: Option<Message>,
    pub edited_channel_post: Option<Message>,
    pub callback_query: Option<CallbackQuery>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub is_bot: bool,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub language_code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
    /// Chat type: "private", "group", "supergroup", or "channel".
    #[serde(default, rename = "type")]
    pub chat_type: String,
    pub title: Option<String>,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Chat {
    pub fn is_private(&self) -> bool {
        self.chat_type == "private"
    }

    pub fn is_group(&self) -> bool {
        self.chat_type == "group"
    }

    pub fn is_supergroup(&self) -> bool {
        self.chat_type == "supergroup"
    }

    pub fn is_channel(&self) -> bool {
        self.chat_type == "channel"
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub from: Option<User>,
    #[serde(default)]
    pub date: i64,
    pub chat: Chat,
    pub reply_to_message: Option<Box<Message>>,
    pub edit_date: Option<i64>,
    pub text: Option<String>,
    pub entities: Option<Vec<MessageEntity>>,
    pub caption: Option<String>,
    pub new_chat_members: Option<Vec<User>>,
    pub left_chat_member: Option<User>,
    pub new_chat_title: Option<String>,
    pub pinned_message: Option<Box<Message>>,
    pub migrate_to_chat_id: Option<i64>,
    pub migrate_from_chat_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageEntity {
    #[serde(rename = "type")]
    pub kind: String,
    pub offset: i64,
    pub length: i64,
    pub url: Option<String>,
    pub user: Option<User>,
}

impl MessageEntity {
    pub fn is_mention(&self) -> bool {
        self.kind == "mention"
    }

    pub fn is_hashtag(&self) -> bool {
        self.kind == "hashtag"
    }

    pub fn is_bot_command(&self) -> bool {
        self.kind == "bot_command"
    }

    pub fn is_url(&self) -> bool {
        self.kind == "url"
    }

    pub fn is_email(&self) -> bool {
        self.kind == "email"
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub from: User,
    pub message: Option<Message>,
    pub inline_message_id: Option<String>,
    pub chat_instance: Option<String>,
    pub data: Option<String>,
}

/// Error-situation hints attached to a failed response.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ResponseParameters {
    pub migrate_to_chat_id: Option<i64>,
    pub retry_after: Option<u64>,
}

/// The outer response envelope. `result` stays opaque JSON until `ok` is
/// confirmed; only then is it decoded into the caller's expected shape.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
    #[serde(default)]
    pub ok: bool,
    pub result: Option<serde_json::Value>,
    pub error_code: Option<i64>,
    pub description: Option<String>,
    pub parameters: Option<ResponseParameters>,
}

/// Text formatting mode for outbound messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParseMode {
    #[serde(rename = "Markdown")]
    Markdown,
    #[serde(rename = "HTML")]
    Html,
}

/// Keyboard attached to an outbound message.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ReplyMarkup {
    InlineKeyboard(InlineKeyboardMarkup),
    Keyboard(ReplyKeyboardMarkup),
    RemoveKeyboard(ReplyKeyboardRemove),
    ForceReply(ForceReply),
}

#[derive(Debug, Clone, Serialize)]
pub struct ReplyKeyboardMarkup {
    pub keyboard: Vec<Vec<KeyboardButton>>,
    #[serde(skip_serializing_if = "is_false")]
    pub resize_keyboard: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub one_time_keyboard: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub selective: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeyboardButton {
    pub text: String,
    #[serde(skip_serializing_if = "is_false")]
    pub request_contact: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub request_location: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReplyKeyboardRemove {
    pub remove_keyboard: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub selective: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_inline_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_inline_query_current_chat: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForceReply {
    pub force_reply: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub selective: bool,
}

pub(crate) fn is_false(b: &bool) -> bool {
    !*b
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn update_with_callback_query() {
        let json = r#"{
            "update_id": 42,
            "callback_query": {
                "id": "q1",
                "from": {"id": 7, "first_name": "Ann"},
                "chat_instance": "ci",
                "data": "press"
            }
        }"#;
        let update: Update = serde_json::from_str(json).unwrap();
        assert_eq!(update.update_id, 42);
        assert!(update.message.is_none());
        let query = update.callback_query.unwrap();
        assert_eq!(query.id, "q1");
        assert_eq!(query.from.id, 7);
        assert_eq!(query.data.as_deref(), Some("press"));
    }

    #[test]
    fn update_with_message_text() {
        let json = r#"{
            "update_id": 5,
            "message": {
                "message_id": 1,
                "chat": {"id": 100, "type": "private"},
                "text": "/start"
            }
        }"#;
        let update: Update = serde_json::from_str(json).unwrap();
        let msg = update.message.unwrap();
        assert_eq!(msg.text.as_deref(), Some("/start"));
        assert!(msg.chat.is_private());
        assert!(!msg.chat.is_group());
    }

    #[test]
    fn chat_type_defaults_when_missing() {
        let chat: Chat = serde_json::from_str(r#"{"id": 123}"#).unwrap();
        assert_eq!(chat.chat_type, "");
        assert!(!chat.is_group());
        assert!(!chat.is_private());
    }

    #[test]
    fn entity_predicates() {
        let entity: MessageEntity =
            serde_json::from_str(r#"{"type": "bot_command", "offset": 0, "length": 6}"#).unwrap();
        assert!(entity.is_bot_command());
        assert!(!entity.is_mention());
    }

    #[test]
    fn envelope_error_side() {
        let json = r#"{
            "ok": false,
            "error_code": 429,
            "description": "Too Many Requests: retry after 3",
            "parameters": {"retry_after": 3}
        }"#;
        let resp: ApiResponse = serde_json::from_str(json).unwrap();
        assert!(!resp.ok);
        assert_eq!(resp.error_code, Some(429));
        assert_eq!(resp.parameters.unwrap().retry_after, Some(3));
        assert!(resp.result.is_none());
    }

    #[test]
    fn envelope_false_result_is_present_not_absent() {
        // `result: false` and a missing `result` are different things.
        let with: ApiResponse = serde_json::from_str(r#"{"ok":true,"result":false}"#).unwrap();
        assert_eq!(with.result, Some(json!(false)));

        let without: ApiResponse = serde_json::from_str(r#"{"ok":true}"#).unwrap();
        assert!(without.result.is_none());
    }

    #[test]
    fn parse_mode_serialization() {
        assert_eq!(serde_json::to_string(&ParseMode::Markdown).unwrap(), "\"Markdown\"");
        assert_eq!(serde_json::to_string(&ParseMode::Html).unwrap(), "\"HTML\"");
    }

    #[test]
    fn inline_keyboard_serialization_skips_absent_fields() {
        let markup = ReplyMarkup::InlineKeyboard(InlineKeyboardMarkup {
            inline_keyboard: vec![vec![InlineKeyboardButton {
                text: "go".into(),
                url: None,
                callback_data: Some("cb".into()),
                switch_inline_query: None,
                switch_inline_query_current_chat: None,
            }]],
        });
        let value = serde_json::to_value(&markup).unwrap();
        assert_eq!(
            value,
            json!({"inline_keyboard": [[{"text": "go", "callback_data": "cb"}]]})
        );
    }
}
