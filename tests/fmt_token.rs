use mdt_utils::fmt::{ColorToken, DEFAULT_TAG, Palette, format_line, render_ansi, strip_tokens};
use mdt_utils::{Error, Level};

#[test]
fn default_palette_matches_host_scheme() {
    let palette = Palette::default();
    let expected = [
        (Level::Info, "^2"),
        (Level::Warn, "^3"),
        (Level::Error, "^1"),
        (Level::Trace, "^5"),
        (Level::Event, "^6"),
        (Level::Nui, "^4"),
    ];
    for (level, token) in expected {
        assert_eq!(palette.token(level).as_str(), token, "{level}");
    }
    assert_eq!(palette.fallback().as_str(), "^7");
    assert_eq!(palette.reset().as_str(), "^0");
}

#[test]
fn unknown_names_use_fallback() {
    let palette = Palette::new();
    assert_eq!(palette.token_for_name("nui"), ColorToken::BLUE);
    assert_eq!(palette.token_for_name("debug"), ColorToken::WHITE);
    assert_eq!(palette.token_for_name("Info"), ColorToken::WHITE);
    assert_eq!(palette.token_for_name(""), ColorToken::WHITE);
}

#[test]
fn swapped_palette_changes_lookup() {
    let palette = Palette::new()
        .with_level(Level::Info, ColorToken::GREY)
        .with_fallback(ColorToken::DARK_RED)
        .with_reset(ColorToken::WHITE);
    assert_eq!(palette.token(Level::Info).as_str(), "^9");
    assert_eq!(palette.token_for_name("custom").as_str(), "^8");
    assert_eq!(palette.reset().as_str(), "^7");
}

#[test]
fn token_parses_caret_digit_only() {
    assert_eq!("^4".parse::<ColorToken>().unwrap(), ColorToken::BLUE);
    assert_eq!("^0".parse::<ColorToken>().unwrap(), ColorToken::RESET);

    for bad in ["", "^", "4", "^a", "^10", "~1", "^²"] {
        let err = bad.parse::<ColorToken>().unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)), "{bad:?}");
    }
}

#[test]
fn from_digit_rejects_out_of_range() {
    assert_eq!(ColorToken::from_digit(9), Some(ColorToken::GREY));
    assert_eq!(ColorToken::from_digit(10), None);
}

#[test]
fn format_line_shape() {
    let line = format_line(ColorToken::GREEN, DEFAULT_TAG, "hello", ColorToken::RESET);
    assert_eq!(line, "^2[MDT] hello^0");
}

#[test]
fn format_line_keeps_empty_message() {
    let line = format_line(ColorToken::RED, DEFAULT_TAG, "", ColorToken::RESET);
    assert_eq!(line, "^1[MDT] ^0");
}

#[test]
fn strip_removes_every_token() {
    assert_eq!(strip_tokens("^2[MDT] a ^1b^0"), "[MDT] a b");
    assert_eq!(strip_tokens("no tokens ^ here"), "no tokens ^ here");
}

#[test]
fn ansi_translation() {
    assert_eq!(render_ansi("^1x^0"), "\x1b[31mx\x1b[0m");
    assert_eq!(render_ansi("^9"), "\x1b[90m");
    assert_eq!(render_ansi("50^"), "50^");
}
