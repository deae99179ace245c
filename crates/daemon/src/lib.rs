// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stackbot daemon library
//!
//! Configuration, startup and the polling loop behind the `stackbot` binary.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod env;
pub mod lifecycle;
pub mod logging;
pub mod poller;

pub use lifecycle::{startup, Config, LifecycleError};
pub use poller::Poller;
