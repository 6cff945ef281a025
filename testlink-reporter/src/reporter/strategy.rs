// Copyright (c) The testlink-junit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    description::{TestDescription, TestFailure},
    errors::InvalidTestLinkError,
};
use std::fmt;
use testlink_xml::ExecutionStatus;

/// How a test case ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TestOutcome {
    /// The test passed.
    Passed,

    /// The test was ignored or one of its assumptions failed.
    Blocked,

    /// The test failed.
    Failed,
}

impl TestOutcome {
    /// The upper-case word used in notes and log lines.
    pub fn word(self) -> &'static str {
        match self {
            TestOutcome::Passed => "PASSED",
            TestOutcome::Blocked => "BLOCKED",
            TestOutcome::Failed => "FAILED",
        }
    }

    /// The status written into the results document.
    pub fn execution_status(self) -> ExecutionStatus {
        match self {
            TestOutcome::Passed => ExecutionStatus::Passed,
            TestOutcome::Blocked => ExecutionStatus::Blocked,
            TestOutcome::Failed => ExecutionStatus::Failed,
        }
    }

    /// Describes this outcome for `subject`, e.g. `'foo(Bar)' FAILED because 'boom'.`
    ///
    /// `reason` is ignored for [`TestOutcome::Passed`].
    pub(crate) fn describe(self, subject: &str, reason: &str) -> String {
        match self {
            TestOutcome::Passed => format!("{subject} PASSED."),
            TestOutcome::Blocked | TestOutcome::Failed => {
                format!("{subject} {} because '{reason}'.", self.word())
            }
        }
    }
}

impl fmt::Display for TestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

/// Where the test case currently running on a thread stands.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum CaseState {
    #[default]
    NotStarted,
    Started,
    Finished(TestOutcome),
}

impl CaseState {
    /// Moves a started case to `Finished(outcome)`.
    ///
    /// Returns false, leaving the state untouched, if the case is not running: the first
    /// terminal event wins.
    pub(crate) fn finish(&mut self, outcome: TestOutcome) -> bool {
        match self {
            CaseState::Started => {
                *self = CaseState::Finished(outcome);
                true
            }
            CaseState::NotStarted | CaseState::Finished(_) => false,
        }
    }
}

/// Reacts to the lifecycle of a single marked test.
///
/// Callbacks for one test case arrive on one thread, in the order the host runner produces them.
/// Implementations must tolerate concurrent test cases on other threads.
pub trait ReportStrategy: Send + Sync {
    /// A test is about to run.
    fn on_new_test_case(&self, description: &TestDescription) -> Result<(), InvalidTestLinkError>;

    /// A test was skipped without being started.
    fn on_ignored(&self, description: &TestDescription) -> Result<(), InvalidTestLinkError>;

    /// One of the test's assumptions did not hold.
    fn on_assumption_failed(&self, failure: &TestFailure) -> Result<(), InvalidTestLinkError>;

    /// The test failed.
    fn on_failed(&self, failure: &TestFailure) -> Result<(), InvalidTestLinkError>;

    /// The test is done. It passed unless another outcome was already reported.
    fn on_finished(&self, description: &TestDescription) -> Result<(), InvalidTestLinkError>;
}

/// A strategy that does nothing, used for tests without a marker.
#[derive(Copy, Clone, Debug, Default)]
pub struct InertStrategy;

impl ReportStrategy for InertStrategy {
    fn on_new_test_case(&self, _: &TestDescription) -> Result<(), InvalidTestLinkError> {
        Ok(())
    }

    fn on_ignored(&self, _: &TestDescription) -> Result<(), InvalidTestLinkError> {
        Ok(())
    }

    fn on_assumption_failed(&self, _: &TestFailure) -> Result<(), InvalidTestLinkError> {
        Ok(())
    }

    fn on_failed(&self, _: &TestFailure) -> Result<(), InvalidTestLinkError> {
        Ok(())
    }

    fn on_finished(&self, _: &TestDescription) -> Result<(), InvalidTestLinkError> {
        Ok(())
    }
}
