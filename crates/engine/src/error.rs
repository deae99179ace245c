// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command failures and their user-facing replies

use sb_adapters::ContainerError;
use sb_core::markup;
use sb_core::Reply;
use std::fmt;
use thiserror::Error;

/// Collaborator operation that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Status,
    Logs,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Status => write!(f, "get container status"),
            Operation::Logs => write!(f, "get logs"),
        }
    }
}

/// Why a command could not produce its normal reply.
///
/// Unauthorized senders are not represented here: they get no reply at all.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("missing argument, usage: {usage}")]
    Usage { usage: &'static str },
    #[error("service not found: {name}")]
    NotFound { name: String },
    #[error("failed to {op}: {source}")]
    Runtime {
        op: Operation,
        #[source]
        source: ContainerError,
    },
}

impl CommandError {
    /// Classify a container failure. Only `NotFound` is kept distinct, and
    /// only when a container was named.
    pub fn from_container(op: Operation, err: ContainerError, name: Option<&str>) -> Self {
        match (err, name) {
            (ContainerError::NotFound(_), Some(name)) => {
                CommandError::NotFound { name: name.to_string() }
            }
            (source, _) => CommandError::Runtime { op, source },
        }
    }

    /// The reply sent to the user for this failure
    pub fn user_message(&self) -> Reply {
        match self {
            CommandError::Usage { usage } => Reply::plain(format!("Usage: {}", usage)),
            CommandError::NotFound { name } => Reply::markdown(format!(
                "Service {} {}",
                markup::code(name),
                markup::escape("not found.")
            )),
            CommandError::Runtime { op, source } => {
                Reply::plain(format!("Failed to {}: {}", op, source))
            }
        }
    }
}
