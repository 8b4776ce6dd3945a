//! Logging setup for the aiux binary.
//!
//! Logs go to stderr so stdout carries only the completion lines. The level
//! comes from the `-v`/`-q` flags unless `RUST_LOG` is set.

use tracing_subscriber::{fmt, EnvFilter};

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    /// Info level (default)
    #[default]
    Info,
    Warn,
}

impl LogLevel {
    fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
        }
    }
}

impl From<u8> for LogLevel {
    /// Convert verbosity count to log level.
    /// 0 = Info, 1 = Debug, 2+ = Trace
    fn from(verbosity: u8) -> Self {
        match verbosity {
            0 => LogLevel::Info,
            1 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

/// Configuration for the logging subscriber.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    /// The log level to use
    pub level: LogLevel,
}

impl LoggingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Create a configuration from the command-line flags.
    ///
    /// `quiet` wins over `verbosity` and keeps warnings and errors only.
    pub fn from_flags(verbosity: u8, quiet: bool) -> Self {
        let level = if quiet {
            LogLevel::Warn
        } else {
            LogLevel::from(verbosity)
        };
        Self::default().with_level(level)
    }

    fn env_filter(&self) -> EnvFilter {
        if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(self.level.as_directive())
        }
    }
}

/// Install the global subscriber. Call once, at startup.
///
/// # Examples
///
/// ```no_run
/// use aiux::logging::{init_logging, LoggingConfig, LogLevel};
///
/// init_logging(LoggingConfig::new().with_level(LogLevel::Debug));
/// ```
pub fn init_logging(config: LoggingConfig) {
    fmt::Subscriber::builder()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stderr)
        .init();
}
