// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Outbound chat replies.

use std::fmt;

/// How the transport should interpret reply text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyFormat {
    Plain,
    /// Telegram MarkdownV2; see [`crate::markup`]
    Markdown,
}

impl fmt::Display for ReplyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplyFormat::Plain => write!(f, "plain"),
            ReplyFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// A single reply to one command event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub format: ReplyFormat,
}

impl Reply {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), format: ReplyFormat::Plain }
    }

    /// Reply whose text is already valid MarkdownV2
    pub fn markdown(text: impl Into<String>) -> Self {
        Self { text: text.into(), format: ReplyFormat::Markdown }
    }

    pub fn is_markdown(&self) -> bool {
        self.format == ReplyFormat::Markdown
    }
}
