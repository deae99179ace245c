// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sb-core: request-scoped types shared by the stackbot crates

pub mod command;
pub mod container;
pub mod markup;
pub mod reply;

pub use command::{Command, CommandEvent, Inbound, UnknownCommand};
pub use container::ContainerSummary;
pub use reply::{Reply, ReplyFormat};
