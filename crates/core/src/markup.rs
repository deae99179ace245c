// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Telegram MarkdownV2 builders.
//!
//! Outside of code entities every reserved character must be escaped with a
//! backslash. Inside `code` and `pre` entities only `` ` `` and `\` are
//! escaped.

const RESERVED: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!', '\\',
];

/// Escape free text
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if RESERVED.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Escape text placed inside an inline code span or a code block
pub fn escape_code(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '`' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

pub fn bold(text: &str) -> String {
    format!("*{}*", escape(text))
}

pub fn code(text: &str) -> String {
    format!("`{}`", escape_code(text))
}

/// Fenced code block, optionally labeled.
///
/// The label is reduced to `[A-Za-z0-9_.-]` so it cannot break the fence.
pub fn pre(text: &str, label: Option<&str>) -> String {
    let label: String = label
        .unwrap_or_default()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();
    format!("```{}\n{}\n```", label, escape_code(text))
}

/// Length as the Bot API counts it: UTF-16 code units
pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Keep at most `max_units` UTF-16 code units from the end of `text`.
///
/// When the cut lands mid-line the partial first line is dropped, unless
/// that would leave nothing.
pub fn truncate_tail(text: &str, max_units: usize) -> &str {
    let mut units = 0;
    let mut start = text.len();
    for (i, c) in text.char_indices().rev() {
        units += c.len_utf16();
        if units > max_units {
            break;
        }
        start = i;
    }
    if start == 0 {
        return text;
    }
    let tail = &text[start..];
    match tail.find('\n') {
        Some(nl) if nl + 1 < tail.len() && !text[..start].ends_with('\n') => &tail[nl + 1..],
        _ => tail,
    }
}

#[cfg(test)]
#[path = "markup_tests.rs"]
mod tests;
