// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Polling loop: fetch command events, route them, send the replies.

use std::future::Future;
use std::time::Duration;

use sb_adapters::{ChatAdapter, ContainerAdapter};
use sb_core::Inbound;
use sb_engine::CommandRouter;
use tracing::{debug, info, warn};

/// Wait after a failed poll before trying again
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(5);

pub struct Poller<C, T> {
    router: CommandRouter<C>,
    chat: T,
    retry_delay: Duration,
}

impl<C: ContainerAdapter, T: ChatAdapter> Poller<C, T> {
    pub fn new(router: CommandRouter<C>, chat: T) -> Self {
        Self { router, chat, retry_delay: DEFAULT_RETRY_DELAY }
    }

    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Poll until `shutdown` resolves.
    ///
    /// Poll failures are logged and retried; nothing here ends the loop
    /// except shutdown.
    pub async fn run(&self, shutdown: impl Future<Output = ()>) {
        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("shutdown requested, stopping poller");
                    return;
                }
                polled = self.chat.poll() => match polled {
                    Ok(batch) => {
                        self.dispatch(batch).await;
                    }
                    Err(e) => {
                        warn!(
                            error = %e,
                            retry_in_ms = self.retry_delay.as_millis() as u64,
                            "poll failed"
                        );
                        tokio::select! {
                            _ = &mut shutdown => {
                                info!("shutdown requested, stopping poller");
                                return;
                            }
                            _ = tokio::time::sleep(self.retry_delay) => {}
                        }
                    }
                },
            }
        }
    }

    /// Handle a batch in arrival order, returning the number of replies sent
    pub async fn dispatch(&self, batch: Vec<Inbound>) -> usize {
        let mut sent = 0;
        for Inbound { chat_id, event } in batch {
            let Some(reply) = self.router.handle(&event).await else {
                continue;
            };
            match self.chat.send(chat_id, &reply).await {
                Ok(()) => sent += 1,
                Err(e) => {
                    warn!(chat_id, command = %event.command, error = %e, "failed to send reply")
                }
            }
        }
        if sent > 0 {
            debug!(sent, "replies sent");
        }
        sent
    }
}

#[cfg(test)]
#[path = "poller_tests.rs"]
mod tests;
