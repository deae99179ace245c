// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Telegram Bot API adapter.
//!
//! Uses `getUpdates` long polling for inbound commands and `sendMessage`
//! for replies. The bot token is part of every request URL, so transport
//! errors are logged with the URL stripped.

use super::{ChatAdapter, ChatError};
use async_trait::async_trait;
use sb_core::{CommandEvent, Inbound, Reply};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// How long a `getUpdates` call may wait for new messages
pub const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_secs(30);

/// Added to the long-poll timeout for the HTTP request deadline
const POLL_SLACK: Duration = Duration::from_secs(10);

/// Deadline for non-polling calls
const CALL_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the Bot API
#[derive(Clone)]
pub struct TelegramConfig {
    pub token: String,
    pub api_url: String,
    pub poll_timeout: Duration,
}

impl TelegramConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            api_url: DEFAULT_API_URL.to_string(),
            poll_timeout: DEFAULT_POLL_TIMEOUT,
        }
    }
}

impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("token", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("poll_timeout", &self.poll_timeout)
            .finish()
    }
}

/// Chat adapter backed by the Telegram Bot API
#[derive(Clone)]
pub struct TelegramAdapter {
    client: reqwest::Client,
    /// `{api_url}/bot{token}`
    base_url: String,
    /// Learned from `getMe`; used to accept `/cmd@username`
    username: Option<String>,
    poll_timeout: Duration,
    /// Next update ID to request; acknowledges everything before it
    offset: Arc<AtomicI64>,
}

impl TelegramAdapter {
    /// Build the client and verify the token with `getMe`.
    pub async fn connect(config: TelegramConfig) -> Result<Self, ChatError> {
        let client = reqwest::Client::builder().build().map_err(transport_error)?;
        let mut adapter = Self {
            client,
            base_url: format!("{}/bot{}", config.api_url.trim_end_matches('/'), config.token),
            username: None,
            poll_timeout: config.poll_timeout,
            offset: Arc::new(AtomicI64::new(0)),
        };

        let me: User = adapter.call("getMe", &serde_json::json!({}), CALL_TIMEOUT).await?;
        tracing::info!(bot_id = me.id, username = ?me.username, "connected to telegram");
        adapter.username = me.username;
        Ok(adapter)
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    async fn call<B, T>(&self, method: &str, body: &B, timeout: Duration) -> Result<T, ChatError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let resp = self
            .client
            .post(format!("{}/{}", self.base_url, method))
            .timeout(timeout)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        // The Bot API answers errors with a JSON envelope too
        let status = resp.status();
        let envelope: ApiResponse<T> = resp.json().await.map_err(transport_error)?;
        match envelope {
            ApiResponse { ok: true, result: Some(result), .. } => Ok(result),
            ApiResponse { error_code, description, .. } => Err(ChatError::Api {
                code: error_code.unwrap_or_else(|| i64::from(status.as_u16())),
                description: description.unwrap_or_else(|| "no description".to_string()),
            }),
        }
    }
}

#[async_trait]
impl ChatAdapter for TelegramAdapter {
    async fn poll(&self) -> Result<Vec<Inbound>, ChatError> {
        let offset = self.offset.load(Ordering::Relaxed);
        let request = GetUpdates {
            offset: (offset > 0).then_some(offset),
            timeout: self.poll_timeout.as_secs(),
            allowed_updates: &["message"],
        };
        let updates: Vec<Update> =
            self.call("getUpdates", &request, self.poll_timeout + POLL_SLACK).await?;

        let mut inbound = Vec::new();
        for update in updates {
            self.offset.fetch_max(update.update_id + 1, Ordering::Relaxed);
            if let Some(item) = inbound_from_update(update, self.username.as_deref()) {
                inbound.push(item);
            }
        }
        Ok(inbound)
    }

    async fn send(&self, chat_id: i64, reply: &Reply) -> Result<(), ChatError> {
        let request = SendMessage {
            chat_id,
            text: &reply.text,
            parse_mode: reply.is_markdown().then_some("MarkdownV2"),
        };
        let _: serde_json::Value = self.call("sendMessage", &request, CALL_TIMEOUT).await?;
        tracing::debug!(chat_id, format = %reply.format, "reply sent");
        Ok(())
    }
}

/// Turn one update into a command event, if it carries one
pub(crate) fn inbound_from_update(update: Update, username: Option<&str>) -> Option<Inbound> {
    let message = update.message?;
    let sender = message.from?;
    let text = message.text?;
    let event = CommandEvent::parse(&text, sender.id, username)?;
    Some(Inbound { chat_id: message.chat.id, event })
}

fn transport_error(err: reqwest::Error) -> ChatError {
    let decode = err.is_decode();
    let message = err.without_url().to_string();
    if decode {
        ChatError::Decode(message)
    } else {
        ChatError::Http(message)
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
    error_code: Option<i64>,
}

#[derive(Debug, Serialize)]
struct GetUpdates<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    offset: Option<i64>,
    timeout: u64,
    allowed_updates: &'a [&'a str],
}

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: i64,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parse_mode: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Update {
    update_id: i64,
    message: Option<Message>,
}

#[derive(Debug, Deserialize)]
struct Message {
    chat: Chat,
    from: Option<User>,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Chat {
    id: i64,
}

#[derive(Debug, Deserialize)]
struct User {
    id: i64,
    username: Option<String>,
}

#[cfg(test)]
#[path = "telegram_tests.rs"]
mod tests;
