// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bot lifecycle: configuration and startup.

mod startup;
pub use startup::{check_runtime, startup};

use std::path::PathBuf;
use std::time::Duration;

use sb_adapters::{ChatError, DockerEndpoint, TelegramConfig};
use thiserror::Error;

use crate::env;

/// Bot configuration, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Bot API connection settings (token, base URL, poll timeout)
    pub telegram: TelegramConfig,
    /// The only Telegram user whose commands are answered
    pub allowed_id: i64,
    /// Where the container runtime listens
    pub docker: DockerEndpoint,
    /// Per-request deadline for container runtime calls
    pub docker_timeout: Duration,
    /// Tracing filter directive
    pub log_filter: String,
    /// Directory for the log file; stdout only when `None`
    pub log_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Fails on the first missing or malformed setting.
    pub fn load() -> Result<Self, LifecycleError> {
        let mut telegram = TelegramConfig::new(env::bot_token()?);
        telegram.api_url = env::api_url();
        telegram.poll_timeout = env::poll_timeout()?;

        Ok(Self {
            telegram,
            allowed_id: env::allowed_user_id()?,
            docker: env::docker_endpoint()?,
            docker_timeout: env::docker_timeout()?,
            log_filter: env::log_filter(),
            log_dir: env::log_dir(),
        })
    }
}

/// Errors that stop the bot before it starts serving
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("{0} is not set")]
    MissingEnv(&'static str),

    #[error("{name} is not a valid {expected}: {value}")]
    InvalidEnv { name: &'static str, value: String, expected: &'static str },

    #[error("unsupported DOCKER_HOST: {0} (expected unix:// or tcp://)")]
    UnsupportedDockerHost(String),

    #[error("failed to initialize logging: {0}")]
    Logging(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("telegram error: {0}")]
    Chat(#[from] ChatError),
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
