//! Bot session: construction, identity verification, and outbound calls.

use crate::client::Api;
use crate::config::BotConfig;
use crate::error::Error;
use crate::poller::Poller;
use crate::request::{
    AnswerCallbackQuery, DeleteMessage, EditMessageText, ForwardMessage, GetMe, GetUpdates,
    Request, SendMessage, SendPhoto,
};
use crate::types::{Message, Update, User};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Inbound side of a session: update batches and poll errors.
///
/// Both receivers yield until closed; closure is the only termination signal
/// and happens exactly once, when the poller stops. With polling disabled
/// they are closed from the start.
pub struct UpdateStream {
    pub updates: mpsc::Receiver<Vec<Update>>,
    pub errors: mpsc::Receiver<Error>,
}

/// One authenticated bot session.
///
/// Outbound calls are `&self` and run concurrently with each other and with
/// the background poller; the only mutable state, the poll offset, lives
/// inside the poller task.
pub struct Bot {
    api: Arc<Api>,
    me: User,
}

impl Bot {
    /// Create a session: verify the token with `getMe`, then start the
    /// long-poll loop (unless polling is disabled).
    ///
    /// Construction fails if the identity check fails, so a poller is never
    /// started against invalid credentials. The poller stops when `cancel`
    /// fires.
    pub async fn connect(
        token: &str,
        config: BotConfig,
        cancel: CancellationToken,
    ) -> Result<(Self, UpdateStream), Error> {
        let api = Arc::new(Api::new(&config.api_url, token));

        let me = api.call(&GetMe {}).await?;
        info!(
            username = me.username.as_deref().unwrap_or(""),
            "bot identity verified"
        );

        // Rendezvous-sized channels: a slow consumer stalls the poller,
        // which just delays the next long poll.
        let (updates_tx, updates) = mpsc::channel(1);
        let (errors_tx, errors) = mpsc::channel(1);

        if config.disable_polling {
            info!("polling disabled, update channels closed");
            drop(updates_tx);
            drop(errors_tx);
        } else {
            let poller = Poller {
                api: Arc::clone(&api),
                poll_timeout: Duration::from_secs(config.poll_timeout_secs),
                retry_delay: Duration::from_secs(config.retry_delay_secs),
                cancel,
                updates_tx,
                errors_tx,
            };
            tokio::spawn(poller.run());
        }

        Ok((Self { api, me }, UpdateStream { updates, errors }))
    }

    /// The identity returned by `getMe` at construction.
    pub fn me(&self) -> &User {
        &self.me
    }

    /// The bot's username, when Telegram reports one. Useful for matching
    /// `/command@mention` invocations.
    pub fn username(&self) -> Option<&str> {
        self.me.username.as_deref()
    }

    /// Issue an arbitrary typed call outside the per-endpoint wrappers.
    pub async fn call<R: Request>(&self, req: &R) -> Result<R::Response, Error> {
        self.api.call(req).await
    }

    /// Fetch updates once, outside the background poller.
    pub async fn get_updates(&self, req: &GetUpdates) -> Result<Vec<Update>, Error> {
        self.api.call(req).await
    }

    pub async fn send_message(&self, req: &SendMessage) -> Result<Message, Error> {
        self.api.call(req).await
    }

    pub async fn forward_message(&self, req: &ForwardMessage) -> Result<Message, Error> {
        self.api.call(req).await
    }

    pub async fn send_photo(&self, req: &SendPhoto) -> Result<Message, Error> {
        self.api.call(req).await
    }

    /// Edit a message's text. An `ok: true, result: false` reply means the
    /// API accepted the call but did not edit, surfaced as
    /// [`Error::NotEdited`].
    pub async fn edit_message_text(&self, req: &EditMessageText) -> Result<(), Error> {
        if self.api.call(req).await? {
            Ok(())
        } else {
            Err(Error::NotEdited)
        }
    }

    pub async fn delete_message(&self, req: &DeleteMessage) -> Result<(), Error> {
        if self.api.call(req).await? {
            Ok(())
        } else {
            Err(Error::NotDeleted)
        }
    }

    pub async fn answer_callback_query(&self, req: &AnswerCallbackQuery) -> Result<(), Error> {
        if self.api.call(req).await? {
            Ok(())
        } else {
            Err(Error::NotAnswered)
        }
    }
}
