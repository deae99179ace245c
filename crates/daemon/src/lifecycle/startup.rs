// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bot startup: wire adapters to the router.

use sb_adapters::{ContainerAdapter, DockerAdapter, TelegramAdapter};
use sb_engine::CommandRouter;
use tracing::{info, warn};

use super::{Config, LifecycleError};
use crate::poller::Poller;

/// Poller with the production adapters
pub type BotPoller = Poller<DockerAdapter, TelegramAdapter>;

/// Start the bot.
///
/// An unreachable container runtime is logged but not fatal: every command
/// checks it again and reports failures in the reply. A bad bot token is
/// fatal.
pub async fn startup(config: &Config) -> Result<BotPoller, LifecycleError> {
    let docker = DockerAdapter::new(config.docker.clone()).with_timeout(config.docker_timeout);
    check_runtime(&docker).await;

    let chat = TelegramAdapter::connect(config.telegram.clone()).await?;
    let router = CommandRouter::new(docker, config.allowed_id);

    info!(
        allowed_id = config.allowed_id,
        docker = %config.docker,
        username = ?chat.username(),
        "bot started"
    );
    Ok(Poller::new(router, chat))
}

/// Ping the container runtime, returning whether it answered
pub async fn check_runtime<C: ContainerAdapter>(containers: &C) -> bool {
    match containers.ping().await {
        Ok(()) => {
            info!("container runtime reachable");
            true
        }
        Err(e) => {
            warn!(error = %e, "container runtime not reachable, commands will report failures");
            false
        }
    }
}

#[cfg(test)]
#[path = "startup_tests.rs"]
mod tests;
