use super::LogFormatter;
use crate::log::LogLevel;

#[test]
fn formats_level_without_timestamp() {
    let formatter = LogFormatter::new(false, true);
    assert_eq!(formatter.format(Some(LogLevel::Error), "boom"), "[ERROR] boom");
    assert_eq!(formatter.format(None, "plain"), "plain");
}

#[test]
fn timestamp_prefix_precedes_level() {
    let formatter = LogFormatter::default();
    let line = formatter.format(Some(LogLevel::Info), "ready");
    assert!(line.ends_with(" [INFO] ready"));
    // "YYYY-MM-DD HH:MM:SS.mmm " is 24 characters
    assert_eq!(line.len(), 24 + "[INFO] ready".len());
}
