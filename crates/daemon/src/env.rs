// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the daemon crate.

use std::path::PathBuf;
use std::time::Duration;

use sb_adapters::DockerEndpoint;

use crate::lifecycle::LifecycleError;

/// Bot API token
pub fn bot_token() -> Result<String, LifecycleError> {
    required("TELEGRAM_BOT_TOKEN")
}

/// The only user allowed to issue commands
pub fn allowed_user_id() -> Result<i64, LifecycleError> {
    let value = required("TELEGRAM_USER_ID")?;
    value.trim().parse::<i64>().map_err(|_| LifecycleError::InvalidEnv {
        name: "TELEGRAM_USER_ID",
        value,
        expected: "integer",
    })
}

/// Resolve the Docker endpoint: DOCKER_SOCKET_PATH > DOCKER_HOST > /var/run/docker.sock
pub fn docker_endpoint() -> Result<DockerEndpoint, LifecycleError> {
    if let Some(path) = optional("DOCKER_SOCKET_PATH") {
        return Ok(DockerEndpoint::Unix(PathBuf::from(path)));
    }
    match optional("DOCKER_HOST") {
        Some(host) => DockerEndpoint::from_docker_host(&host)
            .ok_or(LifecycleError::UnsupportedDockerHost(host)),
        None => Ok(DockerEndpoint::default()),
    }
}

/// Per-request Docker API timeout (default 15s)
pub fn docker_timeout() -> Result<Duration, LifecycleError> {
    Ok(parsed::<u64>("STACKBOT_DOCKER_TIMEOUT_MS", "number of milliseconds")?
        .map(Duration::from_millis)
        .unwrap_or(sb_adapters::container::DEFAULT_TIMEOUT))
}

/// Long-poll timeout for getUpdates (default 30s)
pub fn poll_timeout() -> Result<Duration, LifecycleError> {
    Ok(parsed::<u64>("STACKBOT_POLL_TIMEOUT_SECS", "number of seconds")?
        .map(Duration::from_secs)
        .unwrap_or(sb_adapters::chat::DEFAULT_POLL_TIMEOUT))
}

/// Bot API base URL, overridable for a self-hosted Bot API server
pub fn api_url() -> String {
    optional("TELEGRAM_API_URL").unwrap_or_else(|| sb_adapters::chat::DEFAULT_API_URL.to_string())
}

/// Tracing filter: STACKBOT_LOG > RUST_LOG > "info"
pub fn log_filter() -> String {
    optional("STACKBOT_LOG").or_else(|| optional("RUST_LOG")).unwrap_or_else(|| "info".to_string())
}

/// Directory for `stackbot.log`; stdout only when unset
pub fn log_dir() -> Option<PathBuf> {
    optional("STACKBOT_LOG_DIR").map(PathBuf::from)
}

/// Non-empty value of `name`
fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.trim().is_empty())
}

fn required(name: &'static str) -> Result<String, LifecycleError> {
    optional(name).ok_or(LifecycleError::MissingEnv(name))
}

fn parsed<T: std::str::FromStr>(
    name: &'static str,
    expected: &'static str,
) -> Result<Option<T>, LifecycleError> {
    match optional(name) {
        Some(value) => match value.trim().parse::<T>() {
            Ok(parsed) => Ok(Some(parsed)),
            Err(_) => Err(LifecycleError::InvalidEnv { name, value, expected }),
        },
        None => Ok(None),
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
