// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Container runtime adapters
//!
//! The `ContainerAdapter` trait is the router's only view of the container
//! engine: list containers, resolve one by name, and read its log tail.
//!
//! # Module layout
//!
//! - [`docker`]: Docker Engine API client (Unix socket or TCP)
//! - [`http`]: minimal HTTP/1.1 exchange shared by both transports

mod docker;
pub(crate) mod http;

pub use docker::{DockerAdapter, DockerEndpoint, DEFAULT_SOCKET, DEFAULT_TIMEOUT};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{ContainerCall, FakeContainerAdapter};

use async_trait::async_trait;
use sb_core::ContainerSummary;
use std::time::Duration;
use thiserror::Error;

/// Errors from container runtime operations.
///
/// Only `NotFound` carries meaning for callers; everything else is reported
/// as a generic failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContainerError {
    #[error("no such container: {0}")]
    NotFound(String),
    #[error("cannot connect to container runtime: {0}")]
    Connect(String),
    #[error("i/o error: {0}")]
    Io(String),
    #[error("request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
    #[error("container runtime returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("malformed response: {0}")]
    Protocol(String),
    #[error("cannot decode response: {0}")]
    Decode(String),
}

/// Adapter for the local container runtime
#[async_trait]
pub trait ContainerAdapter: Clone + Send + Sync + 'static {
    /// List containers; stopped ones only when `include_stopped` is set
    async fn list(&self, include_stopped: bool) -> Result<Vec<ContainerSummary>, ContainerError>;

    /// Resolve a container by name or ID
    async fn inspect(&self, name: &str) -> Result<ContainerSummary, ContainerError>;

    /// Last `lines` lines of the container's stdout and stderr
    async fn tail_logs(&self, id: &str, lines: usize) -> Result<String, ContainerError>;

    /// Check that the runtime answers
    async fn ping(&self) -> Result<(), ContainerError>;
}
