//! Session configuration.

use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://api.telegram.org/bot".to_string()
}

fn default_poll_timeout_secs() -> u64 {
    60
}

fn default_retry_delay_secs() -> u64 {
    5
}

/// Bot session settings. Every field has a default; the secret token is
/// passed separately to [`crate::Bot::connect`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// API base URL; the token is appended verbatim.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Long-poll wait passed to `getUpdates`, in seconds.
    #[serde(default = "default_poll_timeout_secs")]
    pub poll_timeout_secs: u64,

    /// Backoff between failed polls, in seconds.
    #[serde(default = "default_retry_delay_secs")]
    pub retry_delay_secs: u64,

    /// Skip the poller entirely; both update channels close immediately.
    /// For sessions that only issue outbound calls.
    #[serde(default)]
    pub disable_polling: bool,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            poll_timeout_secs: default_poll_timeout_secs(),
            retry_delay_secs: default_retry_delay_secs(),
            disable_polling: false,
        }
    }
}
