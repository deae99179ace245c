// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing subscriber setup.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use crate::lifecycle::LifecycleError;

/// Log file name inside the configured log directory
pub const LOG_FILE: &str = "stackbot.log";

/// Flushes buffered log lines when dropped; hold until exit
pub struct LogGuards {
    _guards: Vec<WorkerGuard>,
}

/// Install the global subscriber: stdout always, plus `{log_dir}/stackbot.log`
/// when a directory is given.
pub fn init(filter: &str, log_dir: Option<&Path>) -> Result<LogGuards, LifecycleError> {
    let filter = EnvFilter::try_new(filter)
        .map_err(|e| LifecycleError::Logging(format!("invalid filter {filter:?}: {e}")))?;

    let (stdout, stdout_guard) = tracing_appender::non_blocking(std::io::stdout());
    let mut guards = vec![stdout_guard];
    let mut layers = vec![fmt::layer().with_writer(stdout).boxed()];

    if let Some(dir) = log_dir {
        std::fs::create_dir_all(dir)?;
        let appender = tracing_appender::rolling::never(dir, LOG_FILE);
        let (file, file_guard) = tracing_appender::non_blocking(appender);
        guards.push(file_guard);
        layers.push(fmt::layer().with_ansi(false).with_writer(file).boxed());
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(layers)
        .try_init()
        .map_err(|e| LifecycleError::Logging(e.to_string()))?;

    Ok(LogGuards { _guards: guards })
}
