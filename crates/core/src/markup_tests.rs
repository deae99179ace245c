// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    plain          = { "web",              "web" },
    underscore     = { "n8n_postgres",     "n8n\\_postgres" },
    dash_and_dot   = { "app-1.local",      "app\\-1\\.local" },
    punctuation    = { "Done!",            "Done\\!" },
    brackets       = { "[a](b)",           "\\[a\\]\\(b\\)" },
    backslash      = { r"a\b",             r"a\\b" },
    empty          = { "",                 "" },
    unicode        = { "✅ ok",            "✅ ok" },
)]
fn escape_cases(input: &str, expected: &str) {
    assert_eq!(escape(input), expected);
}

#[yare::parameterized(
    untouched      = { "a_b-c.d*e",        "a_b-c.d*e" },
    backtick       = { "say `hi`",         "say \\`hi\\`" },
    backslash      = { r"C:\tmp",          r"C:\\tmp" },
)]
fn escape_code_cases(input: &str, expected: &str) {
    assert_eq!(escape_code(input), expected);
}

#[test]
fn bold_and_code_wrap_escaped_text() {
    assert_eq!(bold("my_app"), "*my\\_app*");
    assert_eq!(code("exited"), "`exited`");
}

#[test]
fn pre_block_with_label() {
    assert_eq!(pre("line1\nline2", Some("web")), "```web\nline1\nline2\n```");
}

#[test]
fn pre_block_label_is_sanitized() {
    assert_eq!(pre("x", Some("we b`\n")), "```web\nx\n```");
    assert_eq!(pre("x", None), "```\nx\n```");
}

#[test]
fn truncate_keeps_short_text() {
    assert_eq!(truncate_tail("abc", 3), "abc");
    assert_eq!(truncate_tail("", 0), "");
}

#[test]
fn truncate_drops_partial_line() {
    let text = "first line\nsecond\nthird";
    // last 10 chars are "cond\nthird"; the partial line is dropped
    assert_eq!(truncate_tail(text, 10), "third");
}

#[test]
fn truncate_on_line_boundary_keeps_whole_lines() {
    let text = "aaaa\nbbbb\ncccc";
    assert_eq!(truncate_tail(text, 9), "bbbb\ncccc");
}

#[test]
fn truncate_single_long_line_keeps_tail() {
    assert_eq!(truncate_tail("abcdefgh", 3), "fgh");
}

#[test]
fn truncate_respects_char_boundaries() {
    let text = "ёёёё";
    assert_eq!(truncate_tail(text, 2), "ёё");
}

#[test]
fn truncate_to_zero_is_empty() {
    assert_eq!(truncate_tail("abc", 0), "");
    assert_eq!(truncate_tail("line\n", 0), "");
}

#[test]
fn truncate_counts_utf16_units() {
    // Each emoji is two UTF-16 code units
    let text = "😀😀😀";
    assert_eq!(utf16_len(text), 6);
    assert_eq!(truncate_tail(text, 4), "😀😀");
    assert_eq!(truncate_tail(text, 5), "😀😀");
    assert_eq!(truncate_tail(text, 6), text);
}
