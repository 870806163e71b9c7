//! # Log Entries
//!
//! The per-call structure: a message plus optional fields and an optional
//! caller override, built with chained methods. Plain `&str` messages
//! convert directly, so `logger.info("ready")` needs no ceremony.

use std::fmt;
use std::panic::Location;

use serde_json::Value;

/// One key/value pair attached to a log entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Field name.
    pub key: String,
    /// Field value.
    pub value: Value,
}

/// Shorthand [`Field`] constructor.
pub fn field(key: impl Into<String>, value: impl Into<Value>) -> Field {
    Field {
        key: key.into(),
        value: value.into(),
    }
}

/// Source location attached to a log entry, displayed as `file:line` with
/// the file reduced to its basename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    file: &'static str,
    line: u32,
}

impl Caller {
    /// Create a caller locator; pairs with the `file!()` and `line!()`
    /// macros.
    pub fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    pub(crate) fn from_location(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }

    /// The full path as captured.
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// 1-based line number.
    pub fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let basename = self.file.rsplit(['/', '\\']).next().unwrap_or(self.file);
        write!(f, "{}:{}", basename, self.line)
    }
}

/// A single log call: message, call-site fields, optional caller override.
#[derive(Debug, Clone, Default)]
pub struct Entry {
    pub(crate) message: String,
    pub(crate) fields: Vec<Field>,
    pub(crate) caller: Option<Caller>,
}

impl Entry {
    /// Entry with a message and no fields.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            fields: Vec::new(),
            caller: None,
        }
    }

    /// Append one field.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push(field(key, value));
        self
    }

    /// Append several fields.
    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Override the reported call site.
    ///
    /// Useful in logging wrappers that cannot be annotated with
    /// `#[track_caller]`. Only honored while caller capture is enabled in
    /// the configuration.
    pub fn caller(mut self, file: &'static str, line: u32) -> Self {
        self.caller = Some(Caller::new(file, line));
        self
    }
}

impl From<&str> for Entry {
    fn from(message: &str) -> Self {
        Entry::new(message)
    }
}

impl From<String> for Entry {
    fn from(message: String) -> Self {
        Entry::new(message)
    }
}

/// Merge persistent fields with call-site fields.
///
/// Persistent fields keep their insertion order; a call-site field whose
/// key already exists overrides the value in place, new keys append at
/// the end.
pub(crate) fn merge_fields(base: &[Field], extra: Vec<Field>) -> Vec<Field> {
    let mut merged = base.to_vec();
    for field in extra {
        match merged.iter().position(|existing| existing.key == field.key) {
            Some(i) => merged[i].value = field.value,
            None => merged.push(field),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_caller_displays_basename() {
        assert_eq!(Caller::new("src/api/users.rs", 42).to_string(), "users.rs:42");
        assert_eq!(Caller::new("main.rs", 7).to_string(), "main.rs:7");
    }

    #[test]
    fn test_entry_builder() {
        let entry = Entry::new("slow query")
            .field("elapsed_ms", 105)
            .field("table", "users");

        assert_eq!(entry.message, "slow query");
        assert_eq!(entry.fields.len(), 2);
        assert_eq!(entry.fields[0], field("elapsed_ms", 105));
        assert_eq!(entry.fields[1], field("table", "users"));
    }

    #[test]
    fn test_entry_from_str() {
        let entry = Entry::from("ready");
        assert_eq!(entry.message, "ready");
        assert!(entry.fields.is_empty());
        assert!(entry.caller.is_none());
    }

    #[test]
    fn test_merge_keeps_persistent_order() {
        let base = vec![field("service", "api"), field("region", "eu")];
        let merged = merge_fields(&base, vec![field("request_id", "a1")]);

        let keys: Vec<&str> = merged.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, ["service", "region", "request_id"]);
    }

    #[test]
    fn test_merge_overrides_in_place() {
        let base = vec![field("service", "api"), field("region", "eu")];
        let merged = merge_fields(&base, vec![field("region", "us")]);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[1], field("region", "us"));
    }

    #[test]
    fn test_field_values_accept_any_json() {
        let entry = Entry::new("mixed")
            .field("count", 3)
            .field("ratio", 0.5)
            .field("tags", json!(["a", "b"]));

        assert_eq!(entry.fields[2].value, json!(["a", "b"]));
    }
}
