//! # Log Formats
//!
//! Renders one resolved entry as one output line. Three modes: plain
//! text, single-line JSON, and a compact pretty mode for terminals.

use std::fmt;
use std::io::Write;

use chrono::Local;
use serde::Serialize;
use serde_json::{Map, Value};
use termcolor::{Ansi, Color, ColorSpec, WriteColor};

use crate::logger::entry::Field;
use crate::logger::level::Level;

const GRAY: Color = Color::Ansi256(8);
const LIGHT_BLUE: Color = Color::Ansi256(12);
const ORANGE: Color = Color::Ansi256(208);

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `<timestamp> <LEVEL> [<caller>] <message> {k=v, k=v}`
    Text,
    /// One JSON object per line with `timestamp`, `level`, `message`,
    /// `caller` (omitted if absent) and nested `fields`.
    Json,
    /// Compact terminal format with `(k=v)` groups and a short time token.
    Pretty,
}

impl LogFormat {
    /// Returns the lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Text => "text",
            LogFormat::Json => "json",
            LogFormat::Pretty => "pretty",
        }
    }

    /// Parse a format name, case-insensitively.
    ///
    /// Unrecognized names fall back to [`LogFormat::Pretty`], the
    /// configuration default.
    pub fn parse(s: &str) -> LogFormat {
        match s.to_lowercase().as_str() {
            "text" => LogFormat::Text,
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fully-resolved entry, ready for rendering.
pub(crate) struct Record<'a> {
    pub timestamp: &'a str,
    pub level: Level,
    pub message: &'a str,
    pub caller: Option<&'a str>,
    pub fields: &'a [Field],
    pub colorize: bool,
}

/// Render `record` as one line, trailing newline included.
pub(crate) fn render(format: LogFormat, record: &Record<'_>) -> Vec<u8> {
    match format {
        LogFormat::Text => render_text(record),
        LogFormat::Json => render_json(record),
        LogFormat::Pretty => render_pretty(record),
    }
}

fn render_text(record: &Record<'_>) -> Vec<u8> {
    let mut buf = Vec::with_capacity(128);

    buf.extend_from_slice(record.timestamp.as_bytes());
    buf.push(b' ');

    let level = format!("{:<5}", record.level.as_str());
    push_colored(&mut buf, record.colorize, level_color(record.level), &level);
    buf.push(b' ');

    if let Some(caller) = record.caller {
        buf.push(b'[');
        buf.extend_from_slice(caller.as_bytes());
        buf.extend_from_slice(b"] ");
    }

    buf.extend_from_slice(record.message.as_bytes());

    if !record.fields.is_empty() {
        buf.extend_from_slice(b" {");
        for (i, field) in record.fields.iter().enumerate() {
            if i > 0 {
                buf.extend_from_slice(b", ");
            }
            buf.extend_from_slice(field.key.as_bytes());
            buf.push(b'=');
            buf.extend_from_slice(value_text(&field.value).as_bytes());
        }
        buf.push(b'}');
    }

    buf.push(b'\n');
    buf
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    timestamp: &'a str,
    level: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    caller: Option<&'a str>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    fields: Map<String, Value>,
}

fn render_json(record: &Record<'_>) -> Vec<u8> {
    let mut fields = Map::new();
    for field in record.fields {
        fields.insert(field.key.clone(), field.value.clone());
    }

    let line = JsonRecord {
        timestamp: record.timestamp,
        level: record.level.as_str(),
        message: record.message,
        caller: record.caller,
        fields,
    };

    let mut buf = serde_json::to_vec(&line).unwrap_or_default();
    if buf.is_empty() {
        return buf;
    }
    buf.push(b'\n');
    buf
}

fn render_pretty(record: &Record<'_>) -> Vec<u8> {
    let mut buf = Vec::with_capacity(128);
    let colorize = record.colorize;
    let accent = level_color(record.level);

    push_colored(&mut buf, colorize, GRAY, short_time(record.timestamp));
    buf.extend_from_slice(b"  ");

    let level = format!("{:<5}", record.level.as_str());
    push_colored(&mut buf, colorize, accent, &level);
    buf.extend_from_slice(b"  ");

    buf.extend_from_slice(record.message.as_bytes());

    if !record.fields.is_empty() {
        if !record.message.is_empty() {
            buf.push(b' ');
        }
        for field in record.fields {
            push_colored(&mut buf, colorize, accent, "(");
            buf.extend_from_slice(field.key.as_bytes());
            push_colored(&mut buf, colorize, LIGHT_BLUE, "=");
            buf.extend_from_slice(value_text(&field.value).as_bytes());
            push_colored(&mut buf, colorize, accent, ") ");
        }
    }

    if let Some(caller) = record.caller {
        buf.push(b' ');
        push_colored(&mut buf, colorize, ORANGE, &format!("[{}]", caller));
    }

    while buf.last() == Some(&b' ') {
        buf.pop();
    }
    buf.push(b'\n');
    buf
}

fn push_colored(buf: &mut Vec<u8>, colorize: bool, color: Color, text: &str) {
    if !colorize {
        buf.extend_from_slice(text.as_bytes());
        return;
    }
    let mut ansi = Ansi::new(buf);
    let _ = ansi.set_color(ColorSpec::new().set_fg(Some(color)));
    let _ = ansi.write_all(text.as_bytes());
    let _ = ansi.reset();
}

fn level_color(level: Level) -> Color {
    match level {
        Level::Debug => Color::Cyan,
        Level::Info => Color::Green,
        Level::Warn => Color::Yellow,
        Level::Error => Color::Red,
        Level::Fatal => Color::Magenta,
    }
}

/// Field values print bare: strings without quotes, everything else in
/// its JSON form.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Reduce a `date time` timestamp to a 12-character time token for the
/// pretty format; anything unexpected passes through unchanged.
fn short_time(timestamp: &str) -> &str {
    if timestamp.len() > 18 {
        if let Some((_, time)) = timestamp.split_once(' ') {
            if time.len() > 12 && time.is_char_boundary(12) {
                return &time[..12];
            }
            return time;
        }
    }
    timestamp
}

/// Render the current local time with a chrono format string. An invalid
/// format degrades to RFC 3339 instead of failing the log call.
pub(crate) fn format_timestamp(format: &str) -> String {
    use std::fmt::Write as _;

    let now = Local::now();
    let mut out = String::new();
    if write!(out, "{}", now.format(format)).is_err() {
        return now.to_rfc3339();
    }
    out
}
