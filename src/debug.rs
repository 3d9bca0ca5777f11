//! Logging bridge for emoji-forge.
//!
//! Every crate in the workspace logs through the `log` facade. This module
//! installs the one logger that prints those records to stderr, so skipped
//! and degraded registry lines show up on the console of whoever runs the
//! generator.
//!
//! Level precedence: `--log-level` flag, then `RUST_LOG`, then the config
//! file's `log_level`.

use std::io::Write;
use std::sync::OnceLock;

use log::{LevelFilter, Log, Metadata, Record};
use serde::{Deserialize, Serialize};

/// Log verbosity as it appears in the config file and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No logging
    Off,
    /// Errors only
    Error,
    /// Warnings and errors (every skipped registry line)
    Warn,
    /// Progress messages
    #[default]
    Info,
    /// Debug messages
    Debug,
    /// Most verbose
    Trace,
}

impl LogLevel {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }

    /// Parse a `RUST_LOG`-style level name. Module filters are not supported;
    /// only a bare level is recognised.
    pub fn from_env_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "off" => Some(LogLevel::Off),
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Pick the effective level from the three sources, highest precedence first.
pub fn resolve_log_level(
    cli_level: Option<LogLevel>,
    env_value: Option<&str>,
    config_level: LogLevel,
) -> LogLevel {
    cli_level
        .or_else(|| env_value.and_then(LogLevel::from_env_value))
        .unwrap_or(config_level)
}

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;
static INSTALLED: OnceLock<()> = OnceLock::new();

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(
            stderr,
            "[{}] [{:<5}] [{}] {}",
            timestamp,
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Install the stderr logger and set the maximum level.
///
/// Safe to call more than once; later calls only adjust the level.
pub fn init_log_bridge(level: LogLevel) {
    INSTALLED.get_or_init(|| {
        if log::set_logger(&LOGGER).is_err() {
            eprintln!("emoji-forge: another logger is already installed");
        }
    });
    log::set_max_level(level.to_level_filter());
}
