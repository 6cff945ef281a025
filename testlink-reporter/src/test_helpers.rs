// Copyright (c) The testlink-junit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    description::{TestDescription, TestLink},
    output::LogSink,
};
use parking_lot::Mutex;
use std::{fmt, sync::Arc};
use tracing::Level;

/// A test in the `Sut` suite marked with an external ID.
pub(crate) fn external(id: &str, method_name: &str) -> TestDescription {
    TestDescription::new(method_name)
        .with_suite("Sut")
        .with_test_link(TestLink::external(id))
}

/// A test in the `Sut` suite marked with an internal ID.
pub(crate) fn internal(id: u64, method_name: &str) -> TestDescription {
    TestDescription::new(method_name)
        .with_suite("Sut")
        .with_test_link(TestLink::internal(id))
}

/// Captures lines in memory. Clones share the same buffer.
#[derive(Clone, Debug, Default)]
pub(crate) struct RecordingSink {
    lines: Arc<Mutex<Vec<(Level, String)>>>,
}

impl RecordingSink {
    pub(crate) fn lines(&self) -> Vec<(Level, String)> {
        self.lines.lock().clone()
    }
}

impl LogSink for RecordingSink {
    fn log(&self, level: Level, message: fmt::Arguments<'_>) {
        self.lines.lock().push((level, message.to_string()));
    }
}
