//! Long-polling update loop.
//!
//! A standing caller of `getUpdates` that advances its offset per batch and
//! republishes results on the session's channels. Every suspension point
//! (the HTTP call, a channel publish, the backoff sleep) races the
//! cancellation token, so cancellation never waits on a slow consumer.

use crate::client::Api;
use crate::error::Error;
use crate::request::GetUpdates;
use crate::types::Update;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Extra wait on top of the long-poll window before the HTTP call itself
/// times out.
const POLL_GRACE: Duration = Duration::from_secs(5);

pub(crate) struct Poller {
    pub api: Arc<Api>,
    pub poll_timeout: Duration,
    pub retry_delay: Duration,
    pub cancel: CancellationToken,
    pub updates_tx: mpsc::Sender<Vec<Update>>,
    pub errors_tx: mpsc::Sender<Error>,
}

impl Poller {
    /// Run until the cancellation token fires or every consumer is gone.
    /// Both output channels close exactly once, when this returns.
    pub async fn run(self) {
        let mut offset: i64 = 0;
        info!("update poller started");

        loop {
            let req = GetUpdates {
                offset: (offset > 0).then_some(offset),
                limit: None,
                timeout: Some(self.poll_timeout.as_secs()),
            };

            let polled = tokio::select! {
                _ = self.cancel.cancelled() => break,
                res = self.api.call_long_poll(&req, self.poll_timeout + POLL_GRACE) => res,
            };

            let batch = match polled {
                Ok(batch) => batch,
                Err(err) => {
                    warn!(error = %err, retry_in = ?self.retry_delay, "poll failed");
                    let published = tokio::select! {
                        _ = self.cancel.cancelled() => break,
                        sent = self.errors_tx.send(err) => sent,
                    };
                    if published.is_err() {
                        info!("error consumer dropped, stopping poller");
                        break;
                    }
                    tokio::select! {
                        _ = self.cancel.cancelled() => break,
                        _ = tokio::time::sleep(self.retry_delay) => {}
                    }
                    continue;
                }
            };

            if batch.is_empty() {
                // Nothing this round; the long poll itself is our pacing.
                continue;
            }

            offset = next_offset(&batch);
            debug!(count = batch.len(), offset, "publishing update batch");

            let published = tokio::select! {
                _ = self.cancel.cancelled() => break,
                sent = self.updates_tx.send(batch) => sent,
            };
            if published.is_err() {
                info!("update consumer dropped, stopping poller");
                break;
            }
        }

        info!("update poller stopped");
        // Dropping self drops both senders, closing the channels.
    }
}

/// The next offset to acknowledge: one past the largest update id in the
/// batch. The API will not redeliver anything at or below the acknowledged
/// id, so advancing by less would duplicate updates and advancing by more
/// would drop them.
fn next_offset(batch: &[Update]) -> i64 {
    batch.iter().map(|u| u.update_id).max().map_or(0, |id| id + 1)
}
