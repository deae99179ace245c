// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! stackbot: answer `/start`, `/status` and `/logs` from one Telegram user.

use std::process::ExitCode;

use sb_daemon::{logging, startup, Config};
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("stackbot: {e}");
            return ExitCode::FAILURE;
        }
    };

    let _guards = match logging::init(&config.log_filter, config.log_dir.as_deref()) {
        Ok(guards) => guards,
        Err(e) => {
            eprintln!("stackbot: {e}");
            return ExitCode::FAILURE;
        }
    };

    let poller = match startup(&config).await {
        Ok(poller) => poller,
        Err(e) => {
            error!(error = %e, "startup failed");
            eprintln!("stackbot: {e}");
            return ExitCode::FAILURE;
        }
    };

    poller.run(shutdown_signal()).await;
    info!("bot stopped");
    ExitCode::SUCCESS
}

/// Resolve on Ctrl-C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
