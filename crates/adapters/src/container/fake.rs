// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake container adapter for testing

use super::{ContainerAdapter, ContainerError};
use async_trait::async_trait;
use parking_lot::Mutex;
use sb_core::ContainerSummary;
use std::collections::HashMap;
use std::sync::Arc;

/// Recorded container adapter call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerCall {
    List { include_stopped: bool },
    Inspect { name: String },
    TailLogs { id: String, lines: usize },
    Ping,
}

#[derive(Default)]
struct FakeContainerState {
    containers: Vec<ContainerSummary>,
    logs: HashMap<String, String>,
    list_error: Option<ContainerError>,
    inspect_error: Option<ContainerError>,
    logs_error: Option<ContainerError>,
    ping_error: Option<ContainerError>,
    calls: Vec<ContainerCall>,
}

/// Fake container adapter for testing
#[derive(Clone, Default)]
pub struct FakeContainerAdapter {
    inner: Arc<Mutex<FakeContainerState>>,
}

impl FakeContainerAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a container; its ID is derived from the name
    pub fn add_container(&self, name: &str, status: &str) -> &Self {
        let id = format!("{}-id", name);
        self.inner.lock().containers.push(ContainerSummary::new(id, name, status));
        self
    }

    /// Set the log text returned for the container called `name`
    pub fn set_logs(&self, name: &str, text: &str) -> &Self {
        self.inner.lock().logs.insert(format!("{}-id", name), text.to_string());
        self
    }

    pub fn fail_list(&self, err: ContainerError) -> &Self {
        self.inner.lock().list_error = Some(err);
        self
    }

    pub fn fail_inspect(&self, err: ContainerError) -> &Self {
        self.inner.lock().inspect_error = Some(err);
        self
    }

    pub fn fail_logs(&self, err: ContainerError) -> &Self {
        self.inner.lock().logs_error = Some(err);
        self
    }

    pub fn fail_ping(&self, err: ContainerError) -> &Self {
        self.inner.lock().ping_error = Some(err);
        self
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ContainerCall> {
        self.inner.lock().calls.clone()
    }
}

#[async_trait]
impl ContainerAdapter for FakeContainerAdapter {
    async fn list(&self, include_stopped: bool) -> Result<Vec<ContainerSummary>, ContainerError> {
        let mut inner = self.inner.lock();
        inner.calls.push(ContainerCall::List { include_stopped });
        if let Some(err) = inner.list_error.clone() {
            return Err(err);
        }
        Ok(inner
            .containers
            .iter()
            .filter(|c| include_stopped || c.is_running())
            .cloned()
            .collect())
    }

    async fn inspect(&self, name: &str) -> Result<ContainerSummary, ContainerError> {
        let mut inner = self.inner.lock();
        inner.calls.push(ContainerCall::Inspect { name: name.to_string() });
        if let Some(err) = inner.inspect_error.clone() {
            return Err(err);
        }
        inner
            .containers
            .iter()
            .find(|c| c.name == name || c.id == name)
            .cloned()
            .ok_or_else(|| ContainerError::NotFound(name.to_string()))
    }

    async fn tail_logs(&self, id: &str, lines: usize) -> Result<String, ContainerError> {
        let mut inner = self.inner.lock();
        inner.calls.push(ContainerCall::TailLogs { id: id.to_string(), lines });
        if let Some(err) = inner.logs_error.clone() {
            return Err(err);
        }
        inner.logs.get(id).cloned().ok_or_else(|| ContainerError::NotFound(id.to_string()))
    }

    async fn ping(&self) -> Result<(), ContainerError> {
        let mut inner = self.inner.lock();
        inner.calls.push(ContainerCall::Ping);
        match inner.ping_error.clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
