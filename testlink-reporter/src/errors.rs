// Copyright (c) The testlink-junit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors produced by the TestLink reporter.

use camino::Utf8PathBuf;
use std::{io, str::FromStr};
use testlink_xml::SerializeError;
use thiserror::Error;
use tracing_subscriber::filter::Targets;

/// A test carries a [`TestLink`](crate::description::TestLink) marker, but neither of its IDs
/// is set.
///
/// This is a configuration error in the test suite. It is returned from the lifecycle callback
/// that first classifies the test, and no record is produced for that test.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("must set either internal_id or external_id on '{display_name}'")]
pub struct InvalidTestLinkError {
    display_name: String,
}

impl InvalidTestLinkError {
    pub(crate) fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
        }
    }

    /// The display name of the misconfigured test.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

/// An error that occurred while parsing the base address of a TestLink instance.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidBaseUrlError {
    /// The address could not be parsed.
    #[error("invalid TestLink base URL `{input}`")]
    Parse {
        /// The address as given.
        input: String,

        /// The underlying parse error.
        #[source]
        error: url::ParseError,
    },

    /// The address parsed, but relative paths cannot be resolved against it.
    #[error("TestLink base URL `{input}` cannot be a base for relative links")]
    CannotBeABase {
        /// The address as given.
        input: String,
    },
}

/// An error that occurred while writing out TestLink results.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WriteResultsError {
    /// An error occurred while creating the results file or its parent directory.
    #[error("error creating `{file}`")]
    Fs {
        /// The file or directory being created.
        file: Utf8PathBuf,

        /// The underlying I/O error.
        #[source]
        error: io::Error,
    },

    /// An error occurred while serializing results into a file.
    #[error("error writing TestLink results to `{file}`")]
    File {
        /// The results file.
        file: Utf8PathBuf,

        /// The underlying serialization error.
        #[source]
        error: SerializeError,
    },

    /// An error occurred while serializing results into a caller-provided writer.
    #[error("error writing TestLink results")]
    Writer(#[source] SerializeError),
}

/// An error that occurred while reading reporter configuration from the environment.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("environment variable `{name}` is not valid UTF-8")]
pub struct ConfigError {
    name: &'static str,
}

impl ConfigError {
    pub(crate) fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// The name of the offending environment variable.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// An error that occurred while setting up diagnostic logging.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LogInitError {
    /// The log filter was not valid UTF-8.
    #[error("{var} is not valid UTF-8")]
    NotUnicode {
        /// The environment variable the filter was read from.
        var: &'static str,
    },

    /// The log filter could not be parsed.
    #[error("unable to parse log filter `{input}`")]
    Parse {
        /// The filter as given.
        input: String,

        /// The underlying parse error.
        #[source]
        error: <Targets as FromStr>::Err,
    },
}
