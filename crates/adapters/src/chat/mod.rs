// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Chat transport adapters
//!
//! A `ChatAdapter` delivers command events with the sender's identity and
//! accepts one reply per event. Delivery acknowledgement (update offsets)
//! is internal to the adapter.

mod telegram;

pub use telegram::{TelegramAdapter, TelegramConfig, DEFAULT_API_URL, DEFAULT_POLL_TIMEOUT};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeChatAdapter, SentReply};

use async_trait::async_trait;
use sb_core::{Inbound, Reply};
use thiserror::Error;

/// Errors from chat transport operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    #[error("http error: {0}")]
    Http(String),
    #[error("bot api error {code}: {description}")]
    Api { code: i64, description: String },
    #[error("decode error: {0}")]
    Decode(String),
}

/// Adapter for the chat transport
#[async_trait]
pub trait ChatAdapter: Clone + Send + Sync + 'static {
    /// Wait for the next batch of command events.
    ///
    /// May return an empty batch when the long poll expires.
    async fn poll(&self) -> Result<Vec<Inbound>, ChatError>;

    /// Send a reply to a chat
    async fn send(&self, chat_id: i64, reply: &Reply) -> Result<(), ChatError>;
}
