// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake chat adapter for testing

use super::{ChatAdapter, ChatError};
use async_trait::async_trait;
use parking_lot::Mutex;
use sb_core::{Inbound, Reply};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

/// Recorded outbound reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentReply {
    pub chat_id: i64,
    pub reply: Reply,
}

#[derive(Default)]
struct FakeChatState {
    batches: VecDeque<Result<Vec<Inbound>, ChatError>>,
    sent: Vec<SentReply>,
    send_error: Option<ChatError>,
    polls: usize,
}

/// Fake chat adapter for testing.
///
/// `poll` hands out queued batches in order; once the queue is empty it
/// behaves like an expired long poll (short sleep, empty batch).
#[derive(Clone, Default)]
pub struct FakeChatAdapter {
    inner: Arc<Mutex<FakeChatState>>,
}

impl FakeChatAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a batch for a later `poll`
    pub fn push_batch(&self, batch: Vec<Inbound>) -> &Self {
        self.inner.lock().batches.push_back(Ok(batch));
        self
    }

    /// Queue a failing `poll`
    pub fn push_poll_error(&self, err: ChatError) -> &Self {
        self.inner.lock().batches.push_back(Err(err));
        self
    }

    /// Make every `send` fail
    pub fn fail_send(&self, err: ChatError) -> &Self {
        self.inner.lock().send_error = Some(err);
        self
    }

    /// Replies recorded so far (failed sends are not recorded)
    pub fn sent(&self) -> Vec<SentReply> {
        self.inner.lock().sent.clone()
    }

    pub fn poll_count(&self) -> usize {
        self.inner.lock().polls
    }
}

#[async_trait]
impl ChatAdapter for FakeChatAdapter {
    async fn poll(&self) -> Result<Vec<Inbound>, ChatError> {
        let next = {
            let mut inner = self.inner.lock();
            inner.polls += 1;
            inner.batches.pop_front()
        };
        match next {
            Some(result) => result,
            None => {
                tokio::time::sleep(Duration::from_millis(5)).await;
                Ok(Vec::new())
            }
        }
    }

    async fn send(&self, chat_id: i64, reply: &Reply) -> Result<(), ChatError> {
        let mut inner = self.inner.lock();
        if let Some(err) = inner.send_error.clone() {
            return Err(err);
        }
        inner.sent.push(SentReply { chat_id, reply: reply.clone() });
        Ok(())
    }
}
