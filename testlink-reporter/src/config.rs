// Copyright (c) The testlink-junit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reporter configuration read from the environment.

use crate::{
    errors::{ConfigError, InvalidBaseUrlError},
    link::LinkResolver,
};
use camino::Utf8PathBuf;
use std::env::{self, VarError};

/// Environment variable naming the tester recorded in results.
pub const TESTER_ENV: &str = "TESTLINK_TESTER";

/// Environment variable naming the XML results file.
pub const RESULTS_ENV: &str = "TESTLINK_RESULTS";

/// Environment variable naming the logger used by the logging listener.
pub const LOGGER_NAME_ENV: &str = "TESTLINK_LOGGERNAME";

/// Environment variable holding the base address of the TestLink instance.
pub const BASE_URL_ENV: &str = "TESTLINK_URI";

/// Default location of the XML results file.
pub const DEFAULT_RESULTS_PATH: &str = "target/testlink.xml";

/// Default logger name.
pub const DEFAULT_LOGGER_NAME: &str = "TESTLINK";

/// Tester recorded when nobody can be identified.
pub const UNKNOWN_TESTER: &str = "UNKNOWN";

/// Settings shared by the XML and logging listeners.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReporterConfig {
    /// Who ran the tests.
    pub tester: String,

    /// Where [`XmlRunListener`](crate::reporter::XmlRunListener) writes results.
    pub results_path: Utf8PathBuf,

    /// The `logger` field attached to log lines.
    pub logger_name: String,

    /// Base address for deep links. `None` disables links.
    pub base_url: Option<String>,
}

impl ReporterConfig {
    /// Reads configuration from the process environment.
    ///
    /// The tester falls back to `USER`, then `USERNAME`, then [`UNKNOWN_TESTER`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| match env::var(name) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::new(name)),
        })
    }

    /// Reads configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(mut lookup: F) -> Result<Self, ConfigError>
    where
        F: FnMut(&'static str) -> Result<Option<String>, ConfigError>,
    {
        let mut tester = None;
        for name in [TESTER_ENV, "USER", "USERNAME"] {
            if let Some(value) = lookup(name)?.filter(|value| !value.is_empty()) {
                tester = Some(value);
                break;
            }
        }

        let results_path = lookup(RESULTS_ENV)?
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_RESULTS_PATH.to_owned());
        let logger_name = lookup(LOGGER_NAME_ENV)?
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_LOGGER_NAME.to_owned());
        let base_url = lookup(BASE_URL_ENV)?.filter(|value| !value.is_empty());

        Ok(Self {
            tester: tester.unwrap_or_else(|| UNKNOWN_TESTER.to_owned()),
            results_path: results_path.into(),
            logger_name,
            base_url,
        })
    }

    /// Builds a link resolver from [`Self::base_url`], if set.
    pub fn link_resolver(&self) -> Result<Option<LinkResolver>, InvalidBaseUrlError> {
        self.base_url.as_deref().map(LinkResolver::new).transpose()
    }
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            tester: UNKNOWN_TESTER.to_owned(),
            results_path: DEFAULT_RESULTS_PATH.into(),
            logger_name: DEFAULT_LOGGER_NAME.to_owned(),
            base_url: None,
        }
    }
}
