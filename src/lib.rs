//! # tgbot
//!
//! Telegram Bot API client: a long-polling update engine plus a typed
//! request/response pipeline.
//!
//! A [`Bot`] session verifies its token with `getMe` at construction, then a
//! background task long-polls `getUpdates` and feeds inbound update batches
//! and poll errors through a pair of bounded channels until the session's
//! cancellation token fires. Outbound calls run on the caller's own task,
//! concurrently with the poller.
//!
//! ```no_run
//! use tgbot::{Bot, BotConfig, SendMessage};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn run() -> Result<(), tgbot::Error> {
//! let cancel = CancellationToken::new();
//! let (bot, mut stream) = Bot::connect("TOKEN", BotConfig::default(), cancel.clone()).await?;
//!
//! while let Some(batch) = stream.updates.recv().await {
//!     for update in batch {
//!         if let Some(msg) = update.message {
//!             bot.send_message(&SendMessage::new(msg.chat.id, "hello")).await?;
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod bot;
pub mod commands;
pub mod config;
pub mod error;
pub mod request;
pub mod types;

mod client;
mod poller;

pub use bot::{Bot, UpdateStream};
pub use config::BotConfig;
pub use error::{ApiError, Error};
pub use request::{
    AnswerCallbackQuery, DeleteMessage, EditMessageText, FilePart, ForwardMessage, GetMe,
    GetUpdates, InputFile, Multipart, Request, SendMessage, SendPhoto,
};
pub use types::{CallbackQuery, Chat, Message, ParseMode, ReplyMarkup, Update, User};
