// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Command routing: authorization, dispatch and reply formatting

mod error;
mod router;

pub use error::{CommandError, Operation};
pub use router::{CommandRouter, LOG_TAIL_LINES, LOG_TEXT_BUDGET, STATUS_TEXT_BUDGET};
