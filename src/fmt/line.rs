//! Single-line rendering plus the two token rewrites sinks need.

use super::ColorToken;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\^([0-9])").expect("Invalid token regex"));

/// Source label printed after the color token.
pub const DEFAULT_TAG: &str = "[MDT]";

/// `"{color}{tag} {message}{reset}"`, no trailing newline.
#[must_use]
pub fn format_line(color: ColorToken, tag: &str, message: &str, reset: ColorToken) -> String {
    let mut line =
        String::with_capacity(color.as_str().len() * 2 + tag.len() + 1 + message.len());
    line.push_str(color.as_str());
    line.push_str(tag);
    line.push(' ');
    line.push_str(message);
    line.push_str(reset.as_str());
    line
}

/// Removes every caret token. File and JSON sinks store plain text.
#[must_use]
pub fn strip_tokens(line: &str) -> String {
    TOKEN_REGEX.replace_all(line, "").into_owned()
}

/// Swaps each caret token for its SGR escape.
#[must_use]
pub fn render_ansi(line: &str) -> String {
    TOKEN_REGEX
        .replace_all(line, |caps: &Captures<'_>| {
            caps[1]
                .bytes()
                .next()
                .and_then(|d| ColorToken::from_digit(d - b'0'))
                .map_or("", ColorToken::ansi)
        })
        .into_owned()
}
