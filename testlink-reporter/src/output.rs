// Copyright (c) The testlink-junit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Where log lines go: the [`LogSink`] abstraction and `tracing` setup.

use crate::errors::LogInitError;
use std::{fmt, sync::Once};
use tracing::{Level, debug, error, info, level_filters::LevelFilter, trace, warn};
use tracing_subscriber::{
    Layer, filter::Targets, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Environment variable holding the diagnostic log filter, in `tracing_subscriber` `Targets`
/// syntax, e.g. `info,testlink_reporter=debug`.
pub const LOG_ENV: &str = "TESTLINK_LOG";

static INIT_LOGGER: Once = Once::new();

/// Installs a stderr subscriber filtered by [`LOG_ENV`], defaulting to `info`.
///
/// Only the first call installs anything. If the host has already installed a global subscriber,
/// that subscriber is kept.
pub fn init_logging() -> Result<(), LogInitError> {
    let level_str = std::env::var_os(LOG_ENV).unwrap_or_default();
    let level_str = level_str
        .into_string()
        .map_err(|_| LogInitError::NotUnicode { var: LOG_ENV })?;
    let targets = parse_targets(&level_str)?;

    INIT_LOGGER.call_once(|| {
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_filter(targets);

        // Fails only if a global subscriber already exists.
        let _ = tracing_subscriber::registry().with(layer).try_init();
    });
    Ok(())
}

fn parse_targets(level_str: &str) -> Result<Targets, LogInitError> {
    // If the level string is empty, use the standard level filter instead.
    if level_str.is_empty() {
        Ok(Targets::new().with_default(LevelFilter::INFO))
    } else {
        level_str.parse().map_err(|error| LogInitError::Parse {
            input: level_str.to_owned(),
            error,
        })
    }
}

/// Receives the human-readable lines written by
/// [`LoggingRunListener`](crate::reporter::LoggingRunListener).
pub trait LogSink: Send + Sync {
    /// Writes a single line at the given level.
    fn log(&self, level: Level, message: fmt::Arguments<'_>);

    /// Writes a line at info level.
    fn info(&self, message: fmt::Arguments<'_>) {
        self.log(Level::INFO, message);
    }

    /// Writes a line at warn level.
    fn warn(&self, message: fmt::Arguments<'_>) {
        self.log(Level::WARN, message);
    }

    /// Writes a line at error level.
    fn error(&self, message: fmt::Arguments<'_>) {
        self.log(Level::ERROR, message);
    }
}

/// A [`LogSink`] that emits `tracing` events tagged with a `logger` field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TracingSink {
    logger_name: String,
}

impl TracingSink {
    /// Creates a sink whose events carry `logger = logger_name`.
    pub fn new(logger_name: impl Into<String>) -> Self {
        Self {
            logger_name: logger_name.into(),
        }
    }

    /// The logger name attached to each event.
    pub fn logger_name(&self) -> &str {
        &self.logger_name
    }
}

impl LogSink for TracingSink {
    fn log(&self, level: Level, message: fmt::Arguments<'_>) {
        let logger = self.logger_name.as_str();
        match level {
            Level::ERROR => error!(logger, "{message}"),
            Level::WARN => warn!(logger, "{message}"),
            Level::INFO => info!(logger, "{message}"),
            Level::DEBUG => debug!(logger, "{message}"),
            _ => trace!(logger, "{message}"),
        }
    }
}
