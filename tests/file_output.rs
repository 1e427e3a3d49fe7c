use mdt_utils::Logger;
use std::fs;
use tempfile::TempDir;

#[test]
fn file_output_writes_stripped_timestamped_line() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("mdt.log");

    let logger = Logger::builder()
        .file()
        .path(&path)
        .timestamp_format("STAMP")
        .done()
        .build();

    logger.warn("disk ^1almost^0 full");

    let content = fs::read_to_string(path).unwrap();
    assert_eq!(content, "STAMP [MDT] disk almost full\n");
}

#[test]
fn file_output_creates_parent_dirs() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("a").join("b").join("out.log");

    let logger = Logger::builder().file().path(&path).done().build();
    logger.info("x");

    assert!(path.exists());
}

#[test]
fn file_output_appends_multiple_lines() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("multi.log");

    let logger = Logger::builder()
        .context("res")
        .file()
        .path(&path)
        .timestamp_format("")
        .done()
        .build();

    logger.info("one");
    logger.log_named("custom", "two");
    logger.announce("server.lua");

    let content = fs::read_to_string(path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        [
            " [MDT] one",
            " [MDT] two",
            " Started server.lua in resource res",
        ]
    );
}

#[test]
fn unrenderable_timestamp_format_keeps_default() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("x.log");

    let logger = Logger::builder()
        .file()
        .path(&path)
        .timestamp_format("%Q")
        .done()
        .build();

    logger.info("hello");

    let content = fs::read_to_string(path).unwrap();
    let (stamp, rest) = content.split_at(19);
    assert_eq!(rest, " [MDT] hello\n");
    assert_eq!(stamp.as_bytes()[4], b'-');
    assert_eq!(stamp.as_bytes()[13], b':');
}
