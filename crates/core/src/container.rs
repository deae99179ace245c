// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Container descriptors as reported by the container runtime.

/// Engine state word for a running container
pub const RUNNING: &str = "running";

/// Read-only view of one container.
///
/// Owned by the runtime adapter; the router only formats it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerSummary {
    pub id: String,
    /// Name without the engine's leading `/`
    pub name: String,
    /// Engine state word (`running`, `exited`, `paused`, ...)
    pub status: String,
}

impl ContainerSummary {
    pub fn new(id: impl Into<String>, name: impl Into<String>, status: impl Into<String>) -> Self {
        let name: String = name.into();
        Self {
            id: id.into(),
            name: name.strip_prefix('/').map(str::to_string).unwrap_or(name),
            status: status.into(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == RUNNING
    }
}
