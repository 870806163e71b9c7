//! # Logger Configuration

use std::env;

use crate::logger::format::LogFormat;
use crate::logger::level::Level;
use crate::logger::sink::LogSink;

/// Timestamp layout used unless overridden: date, time, milliseconds.
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Logger configuration.
///
/// Construct with [`LogConfig::default`] or [`LogConfig::from_env`] and
/// adjust through the `with_*` builders; fields are public for direct
/// assembly.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Minimum level that produces output.
    pub level: Level,
    /// Output format.
    pub format: LogFormat,
    /// Primary sink.
    pub output: LogSink,
    /// Sink for Error and Fatal entries; falls back to `output` when
    /// `None`.
    pub error_output: Option<LogSink>,
    /// Wrap level tokens (and pretty-mode accents) in ANSI colors.
    pub colorize: bool,
    /// Capture and print the call site.
    pub show_caller: bool,
    /// chrono format string for timestamps. An invalid format degrades to
    /// RFC 3339 output instead of failing the log call.
    pub time_format: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::Info,
            format: LogFormat::Pretty,
            output: LogSink::stdout(),
            error_output: Some(LogSink::stderr()),
            colorize: should_colorize(),
            show_caller: true,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl LogConfig {
    /// Alias for [`LogConfig::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults adjusted from the environment: `LOG_LEVEL` and
    /// `LOG_FORMAT` are parsed leniently when present.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(level) = env::var("LOG_LEVEL") {
            config.level = Level::parse(&level);
        }
        if let Ok(format) = env::var("LOG_FORMAT") {
            config.format = LogFormat::parse(&format);
        }
        config
    }

    /// Set the minimum level.
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Set the output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the primary sink.
    pub fn with_output(mut self, output: LogSink) -> Self {
        self.output = output;
        self
    }

    /// Route Error and Fatal entries to a dedicated sink.
    pub fn with_error_output(mut self, error_output: LogSink) -> Self {
        self.error_output = Some(error_output);
        self
    }

    /// Enable or disable colorized output.
    pub fn with_colorize(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    /// Enable or disable call-site capture.
    pub fn with_show_caller(mut self, show_caller: bool) -> Self {
        self.show_caller = show_caller;
        self
    }

    /// Set the chrono timestamp format.
    pub fn with_time_format(mut self, time_format: impl Into<String>) -> Self {
        self.time_format = time_format.into();
        self
    }
}

/// Color by default only on an interactive terminal, and never when the
/// `NO_COLOR` convention is in effect.
fn should_colorize() -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}
