// Copyright (c) The testlink-junit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A fixture suite and a driver that calls a listener the way a JUnit-style runner does.

use parking_lot::Mutex;
use std::{fmt, io, sync::Arc};
use testlink_reporter::{
    description::{TestDescription, TestFailure, TestLink},
    errors::InvalidTestLinkError,
    output::LogSink,
    reporter::{ReportStrategy, TestLinkListener},
};
use tracing::Level;

pub static SUITE_NAME: &str = "Sut";

/// What a fixture test does when run.
#[derive(Clone, Debug)]
pub enum Behavior {
    Pass,
    Fail { message: Option<&'static str> },
    AssumptionFailure { message: &'static str },
    Ignore,
}

#[derive(Clone, Debug)]
pub struct FixtureTest {
    pub description: TestDescription,
    pub behavior: Behavior,
}

impl FixtureTest {
    fn new(method_name: &str, test_link: Option<TestLink>, behavior: Behavior) -> Self {
        let mut description = TestDescription::new(method_name).with_suite(SUITE_NAME);
        if let Some(test_link) = test_link {
            description = description.with_test_link(test_link);
        }
        Self {
            description,
            behavior,
        }
    }

    fn ignored(mut self, reason: &str) -> Self {
        self.description = self.description.with_ignore_reason(reason);
        self
    }

    pub fn trace(&self) -> String {
        format!(
            "thread '{}' panicked at tests/sut.rs:1:1",
            self.description.method_name()
        )
    }

    /// Drives `listener` through this test's lifecycle.
    ///
    /// Ignored tests only get `test_ignored`, without a preceding `test_started`.
    pub fn run<S: ReportStrategy>(
        &self,
        listener: &TestLinkListener<S>,
    ) -> Result<(), InvalidTestLinkError> {
        let description = &self.description;
        match &self.behavior {
            Behavior::Ignore => return listener.test_ignored(description),
            Behavior::Pass => listener.test_started(description)?,
            Behavior::Fail { message } => {
                listener.test_started(description)?;
                let mut failure = TestFailure::new(description.clone(), self.trace());
                if let Some(message) = message {
                    failure = failure.with_message(*message);
                }
                listener.test_failure(&failure)?;
            }
            Behavior::AssumptionFailure { message } => {
                listener.test_started(description)?;
                let failure =
                    TestFailure::new(description.clone(), self.trace()).with_message(*message);
                listener.test_assumption_failure(&failure)?;
            }
        }
        listener.test_finished(description)
    }
}

/// Seven marked tests and four unmarked ones, in run order.
pub fn sut_tests() -> Vec<FixtureTest> {
    vec![
        FixtureTest::new(
            "testSuccessExternal",
            Some(TestLink::external("T1")),
            Behavior::Pass,
        ),
        FixtureTest::new(
            "testSuccessInternal",
            Some(TestLink::internal(4)),
            Behavior::Pass,
        ),
        FixtureTest::new(
            "testFailed",
            Some(TestLink::external("T2")),
            Behavior::Fail {
                message: Some("Failed"),
            },
        ),
        FixtureTest::new(
            "testFailedWithOutMessage",
            Some(TestLink::external("T2_WITHOUT_MESSAGE")),
            Behavior::Fail { message: None },
        ),
        FixtureTest::new(
            "testSuccessInternal2",
            Some(TestLink::internal(5)),
            Behavior::Pass,
        ),
        FixtureTest::new(
            "testIgnore",
            Some(TestLink::external("T3")),
            Behavior::Ignore,
        )
        .ignored("Does not run."),
        FixtureTest::new(
            "testFailingAssumption",
            Some(TestLink::external("ASSUMPTION_FAILED")),
            Behavior::AssumptionFailure {
                message: "got: <0>, expected: is <1>",
            },
        ),
        FixtureTest::new(
            "testFailingAssumptionWithoutTestLinkAnnotation",
            None,
            Behavior::AssumptionFailure {
                message: "Could not connect to server",
            },
        ),
        FixtureTest::new("testNoTestLinkAnnotationSuccess", None, Behavior::Pass),
        FixtureTest::new(
            "testNoTestLinkAnnotationFailure",
            None,
            Behavior::Fail { message: None },
        ),
        FixtureTest::new("testNoTestLinkAnnotationIgnore", None, Behavior::Ignore),
    ]
}

/// Number of marked tests in [`sut_tests`].
pub const MARKED_TESTS: usize = 7;

/// Runs every fixture test against `listener`.
pub fn run_suite<S: ReportStrategy>(
    listener: &TestLinkListener<S>,
) -> Result<(), InvalidTestLinkError> {
    for test in sut_tests() {
        test.run(listener)?;
    }
    Ok(())
}

/// Captures lines in memory. Clones share the same buffer.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    lines: Arc<Mutex<Vec<(Level, String)>>>,
}

impl RecordingSink {
    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.lock().clone()
    }
}

impl LogSink for RecordingSink {
    fn log(&self, level: Level, message: fmt::Arguments<'_>) {
        self.lines.lock().push((level, message.to_string()));
    }
}

/// An in-memory writer for `tracing_subscriber::fmt`. Clones share the same buffer.
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }
}

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
