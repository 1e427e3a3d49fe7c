//! Tests for log level functionality.

use mdt_utils::Level;

#[test]
fn level_display() {
    assert_eq!(Level::Info.to_string(), "info");
    assert_eq!(Level::Warn.to_string(), "warn");
    assert_eq!(Level::Error.to_string(), "error");
    assert_eq!(Level::Trace.to_string(), "trace");
    assert_eq!(Level::Event.to_string(), "event");
    assert_eq!(Level::Nui.to_string(), "nui");
}

#[test]
fn level_from_str() {
    assert_eq!("info".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("WARNING".parse::<Level>().unwrap(), Level::Warn);
    assert_eq!("err".parse::<Level>().unwrap(), Level::Error);
    assert_eq!("Nui".parse::<Level>().unwrap(), Level::Nui);
    assert_eq!("event".parse::<Level>().unwrap(), Level::Event);
}

#[test]
fn level_from_str_invalid() {
    let err = "debug".parse::<Level>().unwrap_err();
    assert_eq!(err.to_string(), "unknown log level: 'debug'");
}

#[test]
fn from_key_is_exact() {
    assert_eq!(Level::from_key("trace"), Some(Level::Trace));
    assert_eq!(Level::from_key("TRACE"), None);
    assert_eq!(Level::from_key("warning"), None);
    assert_eq!(Level::from_key(""), None);
}

#[test]
fn all_round_trips_through_keys() {
    for level in Level::all() {
        assert_eq!(Level::from_key(level.as_str()), Some(level));
    }
}

#[test]
fn level_default() {
    assert_eq!(Level::default(), Level::Info);
}
