// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Docker Engine API adapter.
//!
//! Talks to the engine's unversioned REST endpoints over the local Unix
//! socket (or a plain TCP address from `DOCKER_HOST`). Each call opens a
//! fresh connection and is bounded by the adapter's timeout.

use super::http::{self, HttpResponse};
use super::{ContainerAdapter, ContainerError};
use async_trait::async_trait;
use sb_core::ContainerSummary;
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tokio::net::{TcpStream, UnixStream};

/// Socket used when nothing overrides it
pub const DEFAULT_SOCKET: &str = "/var/run/docker.sock";

/// Per-request timeout covering connect, write and read
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Where the Docker engine listens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DockerEndpoint {
    Unix(PathBuf),
    /// `host:port`
    Tcp(String),
}

impl DockerEndpoint {
    /// Parse a `DOCKER_HOST` value (`unix:///path` or `tcp://host:port`).
    ///
    /// Returns `None` for other schemes (ssh, npipe, ...).
    pub fn from_docker_host(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Some(path) = value.strip_prefix("unix://") {
            if path.is_empty() {
                return None;
            }
            return Some(DockerEndpoint::Unix(PathBuf::from(path)));
        }
        if let Some(addr) = value.strip_prefix("tcp://") {
            let addr = addr.trim_end_matches('/');
            if addr.is_empty() {
                return None;
            }
            return Some(DockerEndpoint::Tcp(addr.to_string()));
        }
        None
    }
}

impl Default for DockerEndpoint {
    fn default() -> Self {
        DockerEndpoint::Unix(PathBuf::from(DEFAULT_SOCKET))
    }
}

impl fmt::Display for DockerEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DockerEndpoint::Unix(path) => write!(f, "unix://{}", path.display()),
            DockerEndpoint::Tcp(addr) => write!(f, "tcp://{}", addr),
        }
    }
}

/// Container adapter backed by the Docker Engine API
#[derive(Clone, Debug)]
pub struct DockerAdapter {
    endpoint: DockerEndpoint,
    timeout: Duration,
}

impl Default for DockerAdapter {
    fn default() -> Self {
        Self::new(DockerEndpoint::default())
    }
}

impl DockerAdapter {
    pub fn new(endpoint: DockerEndpoint) -> Self {
        Self { endpoint, timeout: DEFAULT_TIMEOUT }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &DockerEndpoint {
        &self.endpoint
    }

    async fn get(&self, path: &str) -> Result<HttpResponse, ContainerError> {
        let request = http::get_request(path);
        let resp = tokio::time::timeout(self.timeout, self.send(&request))
            .await
            .map_err(|_| ContainerError::Timeout(self.timeout))??;
        tracing::debug!(path, status = resp.status, bytes = resp.body.len(), "docker api call");
        Ok(resp)
    }

    async fn send(&self, request: &str) -> Result<HttpResponse, ContainerError> {
        match &self.endpoint {
            DockerEndpoint::Unix(path) => {
                let stream = UnixStream::connect(path).await.map_err(|e| {
                    ContainerError::Connect(format!("{}: {}", self.endpoint, e))
                })?;
                http::exchange(stream, request).await
            }
            DockerEndpoint::Tcp(addr) => {
                let stream = TcpStream::connect(addr).await.map_err(|e| {
                    ContainerError::Connect(format!("{}: {}", self.endpoint, e))
                })?;
                http::exchange(stream, request).await
            }
        }
    }
}

#[async_trait]
impl ContainerAdapter for DockerAdapter {
    async fn list(&self, include_stopped: bool) -> Result<Vec<ContainerSummary>, ContainerError> {
        let path = format!("/containers/json?all={}", u8::from(include_stopped));
        let resp = self.get(&path).await?;
        if !resp.is_success() {
            return Err(api_error(&resp, None));
        }
        let entries: Vec<ListEntry> = decode_json(&resp)?;
        Ok(entries.into_iter().map(ListEntry::into_summary).collect())
    }

    async fn inspect(&self, name: &str) -> Result<ContainerSummary, ContainerError> {
        if !is_valid_reference(name) {
            return Err(ContainerError::NotFound(name.to_string()));
        }
        let resp = self.get(&format!("/containers/{}/json", name)).await?;
        if !resp.is_success() {
            return Err(api_error(&resp, Some(name)));
        }
        let body: InspectBody = decode_json(&resp)?;
        Ok(ContainerSummary::new(body.id, body.name, body.state.status))
    }

    async fn tail_logs(&self, id: &str, lines: usize) -> Result<String, ContainerError> {
        if !is_valid_reference(id) {
            return Err(ContainerError::NotFound(id.to_string()));
        }
        let path = format!("/containers/{}/logs?stdout=1&stderr=1&tail={}", id, lines);
        let resp = self.get(&path).await?;
        if !resp.is_success() {
            return Err(api_error(&resp, Some(id)));
        }
        Ok(decode_log_body(resp.content_type.as_deref(), &resp.body))
    }

    async fn ping(&self) -> Result<(), ContainerError> {
        let resp = self.get("/_ping").await?;
        if !resp.is_success() {
            return Err(api_error(&resp, None));
        }
        Ok(())
    }
}

/// Entry of `GET /containers/json`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ListEntry {
    id: String,
    #[serde(default)]
    names: Vec<String>,
    #[serde(default)]
    state: String,
}

impl ListEntry {
    fn into_summary(self) -> ContainerSummary {
        let name = match self.names.into_iter().next() {
            Some(name) => name,
            None => self.id.chars().take(12).collect(),
        };
        ContainerSummary::new(self.id, name, self.state)
    }
}

/// Subset of `GET /containers/{id}/json`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct InspectBody {
    id: String,
    name: String,
    state: InspectState,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct InspectState {
    status: String,
}

/// Engine error payload: `{"message": "..."}`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

fn decode_json<T: serde::de::DeserializeOwned>(resp: &HttpResponse) -> Result<T, ContainerError> {
    serde_json::from_slice(&resp.body).map_err(|e| ContainerError::Decode(e.to_string()))
}

/// Map a non-success response. A 404 on a named resource means the
/// container does not exist.
fn api_error(resp: &HttpResponse, name: Option<&str>) -> ContainerError {
    if let (404, Some(name)) = (resp.status, name) {
        return ContainerError::NotFound(name.to_string());
    }
    let message = match serde_json::from_slice::<ErrorBody>(&resp.body) {
        Ok(body) => body.message,
        Err(_) => resp.text().trim().to_string(),
    };
    ContainerError::Api { status: resp.status, message }
}

/// Container names and IDs: `[a-zA-Z0-9][a-zA-Z0-9_.-]*`
fn is_valid_reference(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphanumeric() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}

/// Decode a logs response body into text.
///
/// Containers without a TTY produce a multiplexed stream of frames, each
/// with an 8-byte header `[stream, 0, 0, 0, len_be32]`. TTY containers
/// produce raw bytes. Older engines label both `application/octet-stream`,
/// so the framing is probed when the content type does not say.
pub(crate) fn decode_log_body(content_type: Option<&str>, body: &[u8]) -> String {
    let raw_stream = content_type.is_some_and(|ct| ct.contains("raw-stream"));
    let bytes = if raw_stream { None } else { demux(body) };
    match bytes {
        Some(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        None => String::from_utf8_lossy(body).into_owned(),
    }
}

/// Strip multiplexed-stream frame headers. `None` when `body` is not a
/// well-formed frame sequence.
fn demux(body: &[u8]) -> Option<Vec<u8>> {
    if body.is_empty() {
        return None;
    }
    let mut out = Vec::with_capacity(body.len());
    let mut rest = body;
    while !rest.is_empty() {
        let header = rest.get(..8)?;
        if header[0] > 2 || header[1..4] != [0, 0, 0] {
            return None;
        }
        let len = u32::from_be_bytes([header[4], header[5], header[6], header[7]]) as usize;
        let payload = rest.get(8..8 + len)?;
        out.extend_from_slice(payload);
        rest = &rest[8 + len..];
    }
    Some(out)
}

#[cfg(test)]
#[path = "docker_tests.rs"]
mod tests;
