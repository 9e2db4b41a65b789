use crate::types::ResponseParameters;
use thiserror::Error;

/// Top-level error type for the client.
///
/// Cancellation is deliberately not represented here: the poller observes its
/// cancellation token directly and terminates without reporting an error.
#[derive(Debug, Error)]
pub enum Error {
    /// Request body could not be serialized. Fatal for the call, never
    /// retried automatically.
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// Network-level failure reaching the Bot API.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Malformed response envelope, or a success envelope whose `result`
    /// does not match the expected shape.
    #[error("decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// The API reported a failure (`ok: false`).
    #[error(transparent)]
    Api(#[from] ApiError),

    /// `editMessageText` returned `ok: true` with a `false` result.
    #[error("message not edited")]
    NotEdited,

    /// `deleteMessage` returned `ok: true` with a `false` result.
    #[error("message not deleted")]
    NotDeleted,

    /// `answerCallbackQuery` returned `ok: true` with a `false` result.
    #[error("query not answered")]
    NotAnswered,
}

/// Structured API failure: the remote error code, its human description, and
/// optional retry/migration hints. Callers can branch on [`ApiError::code`]
/// instead of string-matching the description.
#[derive(Debug, Error)]
#[error("api error {code}: {description}")]
pub struct ApiError {
    pub code: i64,
    pub description: String,
    pub parameters: Option<ResponseParameters>,
}

impl ApiError {
    /// Seconds the API asks us to wait before retrying, when rate limited.
    pub fn retry_after(&self) -> Option<u64> {
        self.parameters.as_ref().and_then(|p| p.retry_after)
    }

    /// The chat's new id, when it was migrated to a supergroup.
    pub fn migrate_to_chat_id(&self) -> Option<i64> {
        self.parameters.as_ref().and_then(|p| p.migrate_to_chat_id)
    }
}
