//! Logging setup for the binary

use tracing_subscriber::EnvFilter;

/// Log levels for controlling verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Normal execution, no verbose flag
    Normal = 0,
    /// Info level, one verbose flag (-v)
    Info = 1,
    /// Debug level, two verbose flags (-v -v)
    Debug = 2,
}

impl LogLevel {
    pub fn from_verbosity(verbosity: u8) -> Self {
        match verbosity {
            0 => LogLevel::Normal,
            1 => LogLevel::Info,
            _ => LogLevel::Debug,
        }
    }

    /// Default filter directive when `RUST_LOG` is not set
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Normal => "warn,s3_json_store=info",
            LogLevel::Info => "warn,s3_json_store=debug",
            LogLevel::Debug => "info,s3_json_store=debug,aws_sdk_s3=debug,aws_config=debug",
        }
    }
}

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over `verbosity`. Calling this twice is a no-op.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(LogLevel::from_verbosity(verbosity).directive()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
