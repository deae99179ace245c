// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP/1.1 exchange for the container engine API.
//!
//! Requests always carry `Connection: close`. Response bodies are framed by
//! Content-Length, chunked transfer encoding, or connection close, in that
//! order of preference.

use super::ContainerError;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};

/// Upper bound on a response body
pub(crate) const MAX_BODY: usize = 8 * 1024 * 1024;

/// A parsed HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HttpResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

pub(crate) fn get_request(path: &str) -> String {
    format!("GET {} HTTP/1.1\r\nHost: docker\r\nAccept: */*\r\nConnection: close\r\n\r\n", path)
}

/// Write `request` to a connected stream and read one response.
pub(crate) async fn exchange<S>(mut stream: S, request: &str) -> Result<HttpResponse, ContainerError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    stream
        .write_all(request.as_bytes())
        .await
        .map_err(|e| ContainerError::Io(format!("write failed: {}", e)))?;

    let mut reader = BufReader::new(stream);
    read_http_response(&mut reader).await
}

/// Read and parse an HTTP/1.1 response from a buffered stream.
pub(crate) async fn read_http_response<R: AsyncRead + Unpin>(
    reader: &mut BufReader<R>,
) -> Result<HttpResponse, ContainerError> {
    let status = loop {
        let status_line = read_line(reader, "status").await?;
        if status_line.is_empty() {
            return Err(ContainerError::Protocol("connection closed before response".into()));
        }
        let status = parse_status_line(&status_line)?;
        // Skip interim 1xx responses and their headers
        if (100..200).contains(&status) {
            while !read_line(reader, "header").await?.trim_end().is_empty() {}
            continue;
        }
        break status;
    };

    let mut content_length: Option<usize> = None;
    let mut chunked = false;
    let mut content_type = None;
    loop {
        let line = read_line(reader, "header").await?;
        if line == "\r\n" || line == "\n" || line.is_empty() {
            break;
        }
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        match name.trim().to_ascii_lowercase().as_str() {
            "content-length" => {
                content_length = Some(value.parse().map_err(|_| {
                    ContainerError::Protocol(format!("bad content-length: {}", value))
                })?);
            }
            "transfer-encoding" => {
                chunked = value.to_ascii_lowercase().contains("chunked");
            }
            "content-type" => content_type = Some(value.to_string()),
            _ => {}
        }
    }

    let body = if chunked {
        read_chunked(reader).await?
    } else if let Some(len) = content_length {
        if len > MAX_BODY {
            return Err(too_large());
        }
        let mut buf = vec![0u8; len];
        reader
            .read_exact(&mut buf)
            .await
            .map_err(|e| ContainerError::Io(format!("read body failed: {}", e)))?;
        buf
    } else {
        let mut buf = Vec::new();
        reader
            .take(MAX_BODY as u64 + 1)
            .read_to_end(&mut buf)
            .await
            .map_err(|e| ContainerError::Io(format!("read body failed: {}", e)))?;
        if buf.len() > MAX_BODY {
            return Err(too_large());
        }
        buf
    };

    Ok(HttpResponse { status, content_type, body })
}

fn parse_status_line(line: &str) -> Result<u16, ContainerError> {
    let mut parts = line.split_whitespace();
    let version = parts.next().unwrap_or_default();
    let code = parts.next().and_then(|s| s.parse::<u16>().ok());
    match code {
        Some(code) if version.starts_with("HTTP/") => Ok(code),
        _ => Err(ContainerError::Protocol(format!("malformed status line: {}", line.trim()))),
    }
}

async fn read_chunked<R: AsyncRead + Unpin>(
    reader: &mut BufReader<R>,
) -> Result<Vec<u8>, ContainerError> {
    let mut body = Vec::new();
    loop {
        let size_line = read_line(reader, "chunk size").await?;
        if size_line.is_empty() {
            return Err(ContainerError::Protocol("connection closed inside chunked body".into()));
        }
        let size_str = size_line.split(';').next().unwrap_or_default().trim();
        let size = usize::from_str_radix(size_str, 16)
            .map_err(|_| ContainerError::Protocol(format!("bad chunk size: {}", size_str)))?;

        if size == 0 {
            // Trailer section ends with an empty line (or EOF)
            loop {
                let trailer = read_line(reader, "trailer").await?;
                if trailer.trim_end().is_empty() {
                    break;
                }
            }
            return Ok(body);
        }

        let start = body.len();
        let end = start.checked_add(size).filter(|n| *n <= MAX_BODY).ok_or_else(too_large)?;
        body.resize(end, 0);
        reader
            .read_exact(&mut body[start..])
            .await
            .map_err(|e| ContainerError::Io(format!("read chunk failed: {}", e)))?;

        let mut crlf = [0u8; 2];
        reader
            .read_exact(&mut crlf)
            .await
            .map_err(|e| ContainerError::Io(format!("read chunk failed: {}", e)))?;
        if &crlf != b"\r\n" {
            return Err(ContainerError::Protocol("chunk not terminated by CRLF".into()));
        }
    }
}

async fn read_line<R: AsyncRead + Unpin>(
    reader: &mut BufReader<R>,
    what: &str,
) -> Result<String, ContainerError> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .await
        .map_err(|e| ContainerError::Io(format!("read {} failed: {}", what, e)))?;
    Ok(line)
}

fn too_large() -> ContainerError {
    ContainerError::Protocol(format!("response body exceeds {} bytes", MAX_BODY))
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
