//! Outbound request payloads and the dual-mode encoding capability.
//!
//! Every Bot API method is a [`Request`]: a serde-serializable body, the
//! method name, and the expected `result` shape. Requests that can carry an
//! uploaded file additionally expose a [`Multipart`] rendition; when a file
//! is actually present, that rendition takes precedence over JSON.

use crate::types::{is_false, InlineKeyboardMarkup, Message, ParseMode, ReplyMarkup, Update, User};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A typed call to one Bot API method.
pub trait Request: Serialize {
    /// API method name, appended to the token-scoped base URL.
    const METHOD: &'static str;

    /// Shape of the envelope's `result` payload on success.
    type Response: DeserializeOwned;

    /// File-attachment rendition of this request. `None` means "encode as
    /// JSON"; requests without upload support keep the default.
    fn multipart(&self) -> Option<Multipart> {
        None
    }
}

/// A multipart/form-data rendition of a request: stringified form fields
/// plus named file parts.
#[derive(Debug, Default)]
pub struct Multipart {
    pub fields: Vec<(&'static str, String)>,
    pub files: Vec<FilePart>,
}

/// One file attachment, written as a form part under its field name with its
/// declared filename.
#[derive(Debug)]
pub struct FilePart {
    pub name: &'static str,
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// A file uploaded from memory.
#[derive(Debug, Clone)]
pub struct InputFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl InputFile {
    pub fn new(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            bytes: bytes.into(),
        }
    }
}

/// `getMe`: identity check, used once at session construction.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct GetMe {}

impl Request for GetMe {
    const METHOD: &'static str = "getMe";
    type Response = User;
}

/// `getUpdates`: list updates past `offset`, waiting up to `timeout` seconds.
///
/// Unset fields are omitted from the body; `timeout: None` means short
/// polling.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetUpdates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

impl Request for GetUpdates {
    const METHOD: &'static str = "getUpdates";
    type Response = Vec<Update>;
}

/// `sendMessage`.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessage {
    pub chat_id: i64,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "is_false")]
    pub disable_web_page_preview: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub disable_notification: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendMessage {
    pub fn new(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
            parse_mode: None,
            disable_web_page_preview: false,
            disable_notification: false,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }
}

impl Request for SendMessage {
    const METHOD: &'static str = "sendMessage";
    type Response = Message;
}

/// `forwardMessage`.
#[derive(Debug, Clone, Serialize)]
pub struct ForwardMessage {
    pub chat_id: i64,
    pub from_chat_id: i64,
    pub message_id: i64,
    #[serde(skip_serializing_if = "is_false")]
    pub disable_notification: bool,
}

impl Request for ForwardMessage {
    const METHOD: &'static str = "forwardMessage";
    type Response = Message;
}

/// `sendPhoto`: either re-send a photo already on Telegram servers by
/// `photo_id`, or upload one via `file` (which switches the request to
/// multipart encoding).
#[derive(Debug, Clone, Serialize)]
pub struct SendPhoto {
    pub chat_id: i64,
    #[serde(rename = "photo", skip_serializing_if = "Option::is_none")]
    pub photo_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub disable_notification: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
    /// Uploaded photo bytes; never serialized as JSON.
    #[serde(skip)]
    pub file: Option<InputFile>,
}

impl SendPhoto {
    /// Re-send by file id.
    pub fn by_id(chat_id: i64, photo_id: impl Into<String>) -> Self {
        Self {
            chat_id,
            photo_id: Some(photo_id.into()),
            caption: None,
            disable_notification: false,
            reply_to_message_id: None,
            file: None,
        }
    }

    /// Upload a new photo.
    pub fn upload(chat_id: i64, file: InputFile) -> Self {
        Self {
            chat_id,
            photo_id: None,
            caption: None,
            disable_notification: false,
            reply_to_message_id: None,
            file: Some(file),
        }
    }
}

impl Request for SendPhoto {
    const METHOD: &'static str = "sendPhoto";
    type Response = Message;

    fn multipart(&self) -> Option<Multipart> {
        let file = self.file.as_ref()?;
        let mut fields = vec![("chat_id", self.chat_id.to_string())];
        if let Some(caption) = &self.caption {
            fields.push(("caption", caption.clone()));
        }
        if self.disable_notification {
            fields.push(("disable_notification", "true".to_string()));
        }
        if let Some(id) = self.reply_to_message_id {
            fields.push(("reply_to_message_id", id.to_string()));
        }
        Some(Multipart {
            fields,
            files: vec![FilePart {
                name: "photo",
                filename: file.filename.clone(),
                bytes: file.bytes.clone(),
            }],
        })
    }
}

/// `editMessageText`. Address the message either by `chat_id` + `message_id`
/// or by `inline_message_id`.
#[derive(Debug, Clone, Serialize)]
pub struct EditMessageText {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_message_id: Option<String>,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "is_false")]
    pub disable_web_page_preview: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl EditMessageText {
    pub fn new(chat_id: i64, message_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id: Some(chat_id),
            message_id: Some(message_id),
            inline_message_id: None,
            text: text.into(),
            parse_mode: None,
            disable_web_page_preview: false,
            reply_markup: None,
        }
    }
}

impl Request for EditMessageText {
    const METHOD: &'static str = "editMessageText";
    type Response = bool;
}

/// `deleteMessage`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DeleteMessage {
    pub chat_id: i64,
    pub message_id: i64,
}

impl Request for DeleteMessage {
    const METHOD: &'static str = "deleteMessage";
    type Response = bool;
}

/// `answerCallbackQuery`.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerCallbackQuery {
    pub callback_query_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub show_alert: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_time: Option<i64>,
}

impl AnswerCallbackQuery {
    pub fn new(callback_query_id: impl Into<String>) -> Self {
        Self {
            callback_query_id: callback_query_id.into(),
            text: None,
            show_alert: false,
            url: None,
            cache_time: None,
        }
    }
}

impl Request for AnswerCallbackQuery {
    const METHOD: &'static str = "answerCallbackQuery";
    type Response = bool;
}
