//! # Structured Logging
//!
//! A leveled, field-tagged logger with pluggable sinks:
//! - [`Level`] threshold filtering that short-circuits before any
//!   formatting work
//! - persistent fields with copy-on-derive ([`Logger::with_field`]) for
//!   request-scoped child loggers
//! - [`LogFormat::Text`], [`LogFormat::Json`] and [`LogFormat::Pretty`]
//!   output
//! - Error and Fatal entries routed to a dedicated error sink
//! - automatic call-site capture via `#[track_caller]`
//!
//! # Usage
//!
//! ```ignore
//! use retort::logger::{Entry, LogConfig, Logger};
//!
//! let logger = Logger::new(LogConfig::from_env());
//! logger.info("server started");
//!
//! let request_logger = logger.with_field("request_id", "a1b2");
//! request_logger.warn(Entry::new("slow query").field("elapsed_ms", 105));
//! ```

mod config;
mod entry;
mod format;
mod level;
mod sink;

pub use config::{LogConfig, DEFAULT_TIME_FORMAT};
pub use entry::{field, Caller, Entry, Field};
pub use format::LogFormat;
pub use level::Level;
pub use sink::{BufferSink, LogSink};

use std::panic::Location;
use std::process;
use std::sync::Mutex;
use std::time::Duration;

use serde_json::Value;

use crate::logger::entry::merge_fields;
use crate::logger::format::{format_timestamp, render, Record};

/// A structured, thread-safe logger.
///
/// Cheap to share behind an `Arc`. [`with_field`](Logger::with_field)
/// derives an independent child logger carrying extra persistent fields;
/// parent and child keep writing through the same sink handles, and the
/// per-sink lock keeps their lines from interleaving.
#[derive(Debug)]
pub struct Logger {
    config: Mutex<LogConfig>,
    fields: Vec<Field>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogConfig::default())
    }
}

impl Logger {
    /// Create a logger from a configuration.
    pub fn new(config: LogConfig) -> Self {
        Self {
            config: Mutex::new(config),
            fields: Vec::new(),
        }
    }

    /// Create a logger configured from the environment (see
    /// [`LogConfig::from_env`]).
    pub fn from_env() -> Self {
        Self::new(LogConfig::from_env())
    }

    /// Derive a new logger with one additional persistent field.
    ///
    /// The original logger is untouched; the derived one carries a merged
    /// copy of the fields and a snapshot of the current configuration.
    pub fn with_field(&self, key: impl Into<String>, value: impl Into<Value>) -> Logger {
        self.with_fields([field(key, value)])
    }

    /// Derive a new logger with several additional persistent fields.
    pub fn with_fields(&self, fields: impl IntoIterator<Item = Field>) -> Logger {
        let config = self.config.lock().unwrap().clone();
        Logger {
            config: Mutex::new(config),
            fields: merge_fields(&self.fields, fields.into_iter().collect()),
        }
    }

    /// The persistent fields attached to every entry.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Change the minimum level.
    pub fn set_level(&self, level: Level) {
        self.config.lock().unwrap().level = level;
    }

    /// Change the output format.
    pub fn set_format(&self, format: LogFormat) {
        self.config.lock().unwrap().format = format;
    }

    /// The current minimum level.
    pub fn level(&self) -> Level {
        self.config.lock().unwrap().level
    }

    /// The current output format.
    pub fn format(&self) -> LogFormat {
        self.config.lock().unwrap().format
    }

    /// Log at Debug level.
    #[track_caller]
    pub fn debug(&self, entry: impl Into<Entry>) {
        self.log(Level::Debug, entry);
    }

    /// Log at Info level.
    #[track_caller]
    pub fn info(&self, entry: impl Into<Entry>) {
        self.log(Level::Info, entry);
    }

    /// Log at Warn level.
    #[track_caller]
    pub fn warn(&self, entry: impl Into<Entry>) {
        self.log(Level::Warn, entry);
    }

    /// Log at Error level.
    #[track_caller]
    pub fn error(&self, entry: impl Into<Entry>) {
        self.log(Level::Error, entry);
    }

    /// Log at Fatal level and exit the process with status 1.
    #[track_caller]
    pub fn fatal(&self, entry: impl Into<Entry>) -> ! {
        self.log(Level::Fatal, entry);
        process::exit(1)
    }

    /// Log at an explicit level.
    #[track_caller]
    pub fn log(&self, level: Level, entry: impl Into<Entry>) {
        let call_site = Caller::from_location(Location::caller());
        self.write(level, entry.into(), call_site);
    }

    fn write(&self, level: Level, entry: Entry, call_site: Caller) {
        let (format, colorize, show_caller, time_format, sink) = {
            let config = self.config.lock().unwrap();
            if level < config.level {
                return;
            }
            let sink = if level >= Level::Error {
                config
                    .error_output
                    .clone()
                    .unwrap_or_else(|| config.output.clone())
            } else {
                config.output.clone()
            };
            (
                config.format,
                config.colorize,
                config.show_caller,
                config.time_format.clone(),
                sink,
            )
        };

        let fields = merge_fields(&self.fields, entry.fields);
        let caller = if show_caller {
            Some(entry.caller.unwrap_or(call_site))
        } else {
            None
        };
        let caller_text = caller.map(|c| c.to_string());
        let timestamp = format_timestamp(&time_format);

        let line = render(
            format,
            &Record {
                timestamp: &timestamp,
                level,
                message: &entry.message,
                caller: caller_text.as_deref(),
                fields: &fields,
                colorize,
            },
        );
        sink.write_line(&line);

        if level == Level::Fatal {
            process::exit(1);
        }
    }
}

/// Log the outcome of one handled request through `logger`.
///
/// Severity follows the status code: 5xx logs at Error, 4xx at Warn,
/// everything else at Info. The entry carries `method`, `path`, `status`
/// and `duration_ms` fields.
#[track_caller]
pub fn log_request(logger: &Logger, method: &str, path: &str, status: u16, elapsed: Duration) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
    let entry = Entry::new("request completed")
        .field("method", method)
        .field("path", path)
        .field("status", status)
        .field("duration_ms", duration_ms);

    if status >= 500 {
        logger.error(entry);
    } else if status >= 400 {
        logger.warn(entry);
    } else {
        logger.info(entry);
    }
}
