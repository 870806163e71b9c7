//! End-to-end checks of the logging pipeline through the public API:
//! severity filtering, derived context fields, output routing, the three
//! render formats, caller capture, file sinks, and request logging.

use std::time::Duration;

use retort::{
    field, log_request, BufferSink, Entry, Level, LogConfig, LogFormat, LogSink, Logger,
};
use serde_json::Value;

// ============================================================
// Test Utilities
// ============================================================

/// Builds a logger that writes both streams into one in-memory buffer,
/// with color and caller capture off and a fixed literal timestamp so
/// rendered lines are deterministic.
fn capture(level: Level, format: LogFormat) -> (Logger, BufferSink) {
    let buffer = BufferSink::new();
    let config = LogConfig::new()
        .with_level(level)
        .with_format(format)
        .with_output(LogSink::new(buffer.clone()))
        .with_error_output(LogSink::new(buffer.clone()))
        .with_colorize(false)
        .with_show_caller(false)
        .with_time_format("12:00:00.000");
    (Logger::new(config), buffer)
}

fn parse_line(line: &str) -> Value {
    serde_json::from_str(line).expect("log line is valid JSON")
}

// ============================================================
// Severity Filtering
// ============================================================

/// Entries below the configured level are dropped before rendering.
#[test]
fn test_threshold_suppresses_lower_levels() {
    let (logger, buffer) = capture(Level::Warn, LogFormat::Json);

    logger.debug("too quiet");
    logger.info("still too quiet");
    assert!(buffer.is_empty());

    logger.warn("loud enough");
    assert_eq!(buffer.lines().len(), 1);
}

/// At a Warn threshold, a Debug and an Error call produce exactly one
/// line, tagged ERROR.
#[test]
fn test_warn_threshold_keeps_only_the_error() {
    let (logger, buffer) = capture(Level::Warn, LogFormat::Json);

    logger.debug("dropped");
    logger.error("kept");

    let lines = buffer.lines();
    assert_eq!(lines.len(), 1);
    let record = parse_line(&lines[0]);
    assert_eq!(record["level"], "ERROR");
    assert_eq!(record["message"], "kept");
}

/// Raising the level at runtime silences entries that were previously emitted.
#[test]
fn test_runtime_level_change_applies_to_later_entries() {
    let (logger, buffer) = capture(Level::Debug, LogFormat::Json);

    logger.debug("first");
    logger.set_level(Level::Error);
    logger.debug("second");
    logger.error("third");

    let lines = buffer.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(parse_line(&lines[0])["message"], "first");
    assert_eq!(parse_line(&lines[1])["message"], "third");
}

// ============================================================
// Rendered Formats
// ============================================================

/// The plain text format lays out timestamp, padded level, message, and
/// brace-wrapped fields on a single line.
#[test]
fn test_text_format_line_layout() {
    let (logger, buffer) = capture(Level::Info, LogFormat::Text);

    logger.info(Entry::from("login").field("user", "ada"));

    assert_eq!(buffer.contents(), "12:00:00.000 INFO  login {user=ada}\n");
}

/// The JSON format emits one object per line with the fixed key set.
#[test]
fn test_json_format_object_shape() {
    let (logger, buffer) = capture(Level::Info, LogFormat::Json);

    logger.info(Entry::from("login").field("user", "ada").field("attempts", 3));

    let record = parse_line(&buffer.lines()[0]);
    assert_eq!(record["timestamp"], "12:00:00.000");
    assert_eq!(record["level"], "INFO");
    assert_eq!(record["message"], "login");
    assert_eq!(record["fields"]["user"], "ada");
    assert_eq!(record["fields"]["attempts"], 3);
    assert!(record.get("caller").is_none());
}

/// The pretty format keeps the short timestamp and wraps each field in
/// its own parenthesised group.
#[test]
fn test_pretty_format_line_layout() {
    let (logger, buffer) = capture(Level::Info, LogFormat::Pretty);

    logger.info(Entry::from("login").field("user", "ada"));

    assert_eq!(buffer.contents(), "12:00:00.000  INFO   login (user=ada)\n");
}

/// Switching the format at runtime affects only subsequent entries.
#[test]
fn test_runtime_format_change() {
    let (logger, buffer) = capture(Level::Info, LogFormat::Text);

    logger.info("plain");
    logger.set_format(LogFormat::Json);
    logger.info("structured");

    let lines = buffer.lines();
    assert_eq!(lines[0], "12:00:00.000 INFO  plain");
    assert_eq!(parse_line(&lines[1])["message"], "structured");
}

// ============================================================
// Context Fields
// ============================================================

/// A derived logger stamps its persistent fields on every entry while the
/// parent stays untouched.
#[test]
fn test_derived_logger_carries_fields() {
    let (logger, buffer) = capture(Level::Info, LogFormat::Json);
    let scoped = logger.with_field("service", "api");

    scoped.info(Entry::from("boot").field("port", 8080));
    let record = parse_line(&buffer.lines()[0]);
    assert_eq!(record["fields"]["service"], "api");
    assert_eq!(record["fields"]["port"], 8080);

    buffer.clear();
    logger.info("plain");
    let record = parse_line(&buffer.lines()[0]);
    assert!(record.get("fields").is_none(), "parent gained no fields");
}

/// Batch field attachment and call-site overrides of persistent keys.
#[test]
fn test_fields_merge_and_override() {
    let (logger, buffer) = capture(Level::Info, LogFormat::Json);
    let scoped = logger.with_fields([field("region", "eu"), field("shard", 1)]);

    scoped.info(Entry::from("rebalance").field("shard", 2));

    let record = parse_line(&buffer.lines()[0]);
    assert_eq!(record["fields"]["region"], "eu");
    assert_eq!(record["fields"]["shard"], 2);
}

// ============================================================
// Output Routing
// ============================================================

/// Error and fatal entries go to the error stream, everything else to the
/// regular one.
#[test]
fn test_error_entries_route_to_error_stream() {
    let out = BufferSink::new();
    let err = BufferSink::new();
    let config = LogConfig::new()
        .with_level(Level::Debug)
        .with_format(LogFormat::Json)
        .with_output(LogSink::new(out.clone()))
        .with_error_output(LogSink::new(err.clone()))
        .with_colorize(false)
        .with_show_caller(false)
        .with_time_format("12:00:00.000");
    let logger = Logger::new(config);

    logger.info("routine");
    logger.warn("suspicious");
    logger.error("broken");

    let out_lines = out.lines();
    assert_eq!(out_lines.len(), 2);
    assert_eq!(parse_line(&out_lines[1])["level"], "WARN");
    let err_lines = err.lines();
    assert_eq!(err_lines.len(), 1);
    assert_eq!(parse_line(&err_lines[0])["message"], "broken");
}

// ============================================================
// Caller Capture
// ============================================================

/// With caller capture on, the record names the file and line of the
/// logging call site.
#[test]
fn test_caller_names_call_site() {
    let buffer = BufferSink::new();
    let config = LogConfig::new()
        .with_level(Level::Info)
        .with_format(LogFormat::Json)
        .with_output(LogSink::new(buffer.clone()))
        .with_colorize(false)
        .with_show_caller(true)
        .with_time_format("12:00:00.000");
    let logger = Logger::new(config);

    logger.info("where am I");

    let record = parse_line(&buffer.lines()[0]);
    let caller = record["caller"].as_str().expect("caller recorded");
    assert!(
        caller.starts_with("logger_output.rs:"),
        "unexpected caller {caller}"
    );
}

// ============================================================
// File Sinks
// ============================================================

/// A file sink appends rendered lines and flushes them per entry.
#[test]
fn test_file_sink_appends_lines() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("app.log");

    let config = LogConfig::new()
        .with_level(Level::Info)
        .with_format(LogFormat::Text)
        .with_output(LogSink::file(&path).expect("open log file"))
        .with_colorize(false)
        .with_show_caller(false)
        .with_time_format("12:00:00.000");
    let logger = Logger::new(config);

    logger.info("first entry");
    logger.info("second entry");

    let written = std::fs::read_to_string(&path).expect("read log file");
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "12:00:00.000 INFO  first entry");
    assert_eq!(lines[1], "12:00:00.000 INFO  second entry");
}

// ============================================================
// Request Logging
// ============================================================

/// Request summaries carry the method, path, status, and duration, and
/// pick their severity from the status class.
#[test]
fn test_log_request_fields_and_severity() {
    let (logger, buffer) = capture(Level::Debug, LogFormat::Json);

    log_request(&logger, "GET", "/users", 200, Duration::from_millis(12));
    log_request(&logger, "GET", "/missing", 404, Duration::from_millis(3));
    log_request(&logger, "POST", "/users", 500, Duration::from_millis(48));

    let lines = buffer.lines();
    assert_eq!(lines.len(), 3);

    let ok = parse_line(&lines[0]);
    assert_eq!(ok["level"], "INFO");
    assert_eq!(ok["message"], "request completed");
    assert_eq!(ok["fields"]["method"], "GET");
    assert_eq!(ok["fields"]["path"], "/users");
    assert_eq!(ok["fields"]["status"], 200);
    assert_eq!(ok["fields"]["duration_ms"], 12);

    assert_eq!(parse_line(&lines[1])["level"], "WARN");
    assert_eq!(parse_line(&lines[2])["level"], "ERROR");
}
