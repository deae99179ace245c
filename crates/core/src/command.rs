// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Chat commands and the events that carry them.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A command name that the bot does not handle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown command: {0}")]
pub struct UnknownCommand(pub String);

/// Commands understood by the router
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Start,
    Status,
    Logs,
}

impl Command {
    pub const ALL: [Command; 3] = [Command::Start, Command::Status, Command::Logs];

    pub fn name(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Status => "status",
            Command::Logs => "logs",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase();
        Command::ALL
            .into_iter()
            .find(|c| c.name() == norm)
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

/// One inbound command from a chat user.
///
/// Created per message and dropped once the reply (if any) is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEvent {
    pub command: Command,
    pub args: Vec<String>,
    pub sender_id: i64,
}

impl CommandEvent {
    pub fn new(command: Command, sender_id: i64) -> Self {
        Self { command, args: Vec::new(), sender_id }
    }

    /// Append a positional argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Parse message text of the form `/name[@bot] [args...]`.
    ///
    /// Returns `None` for non-command text, unknown commands, and commands
    /// addressed to a different bot. When `bot_username` is `None` any
    /// `@suffix` is accepted.
    pub fn parse(text: &str, sender_id: i64, bot_username: Option<&str>) -> Option<Self> {
        let mut tokens = text.split_whitespace();
        let head = tokens.next()?.strip_prefix('/')?;

        let name = match head.split_once('@') {
            Some((name, target)) => {
                if let Some(own) = bot_username {
                    if !target.eq_ignore_ascii_case(own.trim_start_matches('@')) {
                        return None;
                    }
                }
                name
            }
            None => head,
        };

        let command = name.parse::<Command>().ok()?;
        Some(Self { command, args: tokens.map(str::to_string).collect(), sender_id })
    }

    /// First positional argument, if any
    pub fn first_arg(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}

/// A command event paired with the chat it arrived in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inbound {
    /// Where the reply goes
    pub chat_id: i64,
    pub event: CommandEvent,
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
