// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command router
//!
//! Maps an authorized `CommandEvent` to exactly one `Reply`. Events from any
//! other sender are dropped without a reply. The router holds no mutable
//! state, so concurrent calls to `handle` are safe.

use crate::error::{CommandError, Operation};
use sb_adapters::ContainerAdapter;
use sb_core::{markup, Command, CommandEvent, ContainerSummary, Reply};

/// Number of trailing log lines fetched by `/logs`
pub const LOG_TAIL_LINES: usize = 15;

/// Maximum UTF-16 code units of log text in one reply; keeps the whole
/// message under the chat transport's size limit
pub const LOG_TEXT_BUDGET: usize = 3500;

/// Maximum UTF-16 code units of container lines in one `/status` reply
pub const STATUS_TEXT_BUDGET: usize = 3800;

const START_TEXT: &str = "Hi! I'm the bot for managing your stack.\n\
    Available commands:\n\
    /status - state of all containers\n\
    /logs <service_name> - last 15 log lines of a container";

const LOGS_USAGE: &str = "/logs <service_name>";

const NO_CONTAINERS_TEXT: &str = "No containers found.";

/// Authorizes and dispatches chat commands against a container adapter
#[derive(Clone)]
pub struct CommandRouter<C> {
    containers: C,
    allowed_id: i64,
}

impl<C: ContainerAdapter> CommandRouter<C> {
    pub fn new(containers: C, allowed_id: i64) -> Self {
        Self { containers, allowed_id }
    }

    pub fn allowed_id(&self) -> i64 {
        self.allowed_id
    }

    /// Handle one event.
    ///
    /// Returns `None` only for unauthorized senders. Failures never escape;
    /// they become the reply.
    pub async fn handle(&self, event: &CommandEvent) -> Option<Reply> {
        if event.sender_id != self.allowed_id {
            tracing::debug!(
                sender_id = event.sender_id,
                command = %event.command,
                "dropping command from unauthorized sender"
            );
            return None;
        }

        let result = match event.command {
            Command::Start => Ok(Reply::plain(START_TEXT)),
            Command::Status => self.status().await,
            Command::Logs => self.logs(event.first_arg()).await,
        };

        Some(result.unwrap_or_else(|err| {
            match &err {
                CommandError::Runtime { .. } => {
                    tracing::warn!(command = %event.command, error = %err, "command failed")
                }
                _ => tracing::info!(command = %event.command, error = %err, "command rejected"),
            }
            err.user_message()
        }))
    }

    async fn status(&self) -> Result<Reply, CommandError> {
        let containers = self
            .containers
            .list(true)
            .await
            .map_err(|e| CommandError::from_container(Operation::Status, e, None))?;

        if containers.is_empty() {
            return Ok(Reply::plain(NO_CONTAINERS_TEXT));
        }

        let mut text = markup::escape("Container status:");
        text.push_str("\n\n");
        let mut units = markup::utf16_len(&text);
        let mut shown = 0;
        for container in &containers {
            let line = status_line(container);
            let line_units = markup::utf16_len(&line) + 1;
            if units + line_units > STATUS_TEXT_BUDGET {
                break;
            }
            text.push_str(&line);
            text.push('\n');
            units += line_units;
            shown += 1;
        }
        if shown < containers.len() {
            let hidden = containers.len() - shown;
            tracing::debug!(shown, hidden, "status reply truncated");
            text.push_str(&markup::escape(&format!("…and {} more", hidden)));
        }
        Ok(Reply::markdown(text.trim_end()))
    }

    async fn logs(&self, name: Option<&str>) -> Result<Reply, CommandError> {
        let name = name.ok_or(CommandError::Usage { usage: LOGS_USAGE })?;
        let not_found_or = |e| CommandError::from_container(Operation::Logs, e, Some(name));

        let container = self.containers.inspect(name).await.map_err(not_found_or)?;
        let output =
            self.containers.tail_logs(&container.id, LOG_TAIL_LINES).await.map_err(not_found_or)?;

        let output = output.trim_end_matches(['\n', '\r']);
        let body = match markup::truncate_tail(output, LOG_TEXT_BUDGET) {
            "" => "(no output)",
            text => text,
        };

        Ok(Reply::markdown(format!(
            "Last {} log lines for {}:\n\n{}",
            LOG_TAIL_LINES,
            markup::bold(&container.name),
            markup::pre(body, Some(&container.name))
        )))
    }
}

fn status_line(container: &ContainerSummary) -> String {
    let glyph = if container.is_running() { "✅" } else { "❌" };
    format!("{} {}: {}", glyph, markup::bold(&container.name), markup::code(&container.status))
}

#[cfg(test)]
#[path = "router_tests.rs"]
mod tests;
