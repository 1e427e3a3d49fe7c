#![no_main]
use libfuzzer_sys::fuzz_target;
use mdt_utils::fmt::{ColorToken, render_ansi, strip_tokens};

fuzz_target!(|data: &str| {
    // Must not panic on any input
    if let Ok(token) = data.parse::<ColorToken>() {
        assert_eq!(token.as_str(), data);
    }
    assert!(strip_tokens(data).len() <= data.len());
    let _ = render_ansi(data);
});
