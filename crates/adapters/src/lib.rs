// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Adapters for external I/O: the container runtime and the chat transport

pub mod chat;
pub mod container;

pub use chat::{ChatAdapter, ChatError, TelegramAdapter, TelegramConfig};
pub use container::{ContainerAdapter, ContainerError, DockerAdapter, DockerEndpoint};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use chat::{FakeChatAdapter, SentReply};
#[cfg(any(test, feature = "test-support"))]
pub use container::{ContainerCall, FakeContainerAdapter};
