//! Logging setup.
//!
//! Log events go to standard output, filtered by the level from the settings.
use serde::Deserialize;
use std::{fmt, sync::Once};
use tracing::{info, level_filters::LevelFilter};

static INIT: Once = Once::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        };

        f.write_str(level)
    }
}

/// Install the stdout subscriber. Only the first call has any effect.
pub fn setup(log_level: LogLevel) {
    let filter = level_filter(log_level);

    if filter == LevelFilter::OFF {
        return;
    }

    INIT.call_once(|| {
        tracing_subscriber::fmt().with_max_level(filter).init();
        info!("Logging initialized");
    });
}

fn level_filter(log_level: LogLevel) -> LevelFilter {
    match log_level {
        LogLevel::Off => LevelFilter::OFF,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Trace => LevelFilter::TRACE,
    }
}
