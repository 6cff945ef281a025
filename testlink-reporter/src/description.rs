// Copyright (c) The testlink-junit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! What the host test runner tells the reporter about each test.
//!
//! A [`TestDescription`] optionally carries a [`TestLink`] marker. The marker is plain data
//! attached when the test is registered; resolving it into a [`TestCaseId`] is a pure function
//! over that data.

use crate::errors::InvalidTestLinkError;
use testlink_xml::TestCaseId;

/// Sentinel for an unset [`TestLink::external_id`].
pub const NOT_AVAILABLE: &str = "NOT_AVAILABLE";

/// Marks a test whose result should be reported to TestLink.
///
/// Exactly one of the two IDs must be set to a non-default value:
///
/// * `internal_id` defaults to 0, meaning absent.
/// * `external_id` defaults to [`NOT_AVAILABLE`], meaning absent.
///
/// If both are set, the external ID wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestLink {
    /// TestLink's internal database ID, or 0.
    pub internal_id: u64,

    /// The external ID (e.g. `PROJECT-1`), or [`NOT_AVAILABLE`].
    pub external_id: String,
}

impl TestLink {
    /// A marker carrying an external ID.
    pub fn external(external_id: impl Into<String>) -> Self {
        Self {
            external_id: external_id.into(),
            ..Self::default()
        }
    }

    /// A marker carrying an internal ID.
    pub fn internal(internal_id: u64) -> Self {
        Self {
            internal_id,
            ..Self::default()
        }
    }

    /// Returns the ID this marker designates, or `None` if neither ID is set.
    pub fn id(&self) -> Option<TestCaseId> {
        if self.external_id != NOT_AVAILABLE {
            Some(TestCaseId::External(self.external_id.clone()))
        } else if self.internal_id != 0 {
            Some(TestCaseId::Internal(self.internal_id))
        } else {
            None
        }
    }
}

impl Default for TestLink {
    fn default() -> Self {
        Self {
            internal_id: 0,
            external_id: NOT_AVAILABLE.to_owned(),
        }
    }
}

/// Describes a single test, as handed to lifecycle callbacks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestDescription {
    method_name: String,
    suite_name: Option<String>,
    test_link: Option<TestLink>,
    ignore_reason: Option<String>,
}

impl TestDescription {
    /// Creates a description for the given test method, without a marker.
    pub fn new(method_name: impl Into<String>) -> Self {
        Self {
            method_name: method_name.into(),
            suite_name: None,
            test_link: None,
            ignore_reason: None,
        }
    }

    /// Sets the suite (for JUnit, the class) this test belongs to.
    pub fn with_suite(mut self, suite_name: impl Into<String>) -> Self {
        self.suite_name = Some(suite_name.into());
        self
    }

    /// Attaches a TestLink marker.
    pub fn with_test_link(mut self, test_link: TestLink) -> Self {
        self.test_link = Some(test_link);
        self
    }

    /// Records why this test is ignored.
    pub fn with_ignore_reason(mut self, reason: impl Into<String>) -> Self {
        self.ignore_reason = Some(reason.into());
        self
    }

    /// The name of the test method.
    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    /// The suite name, if any.
    pub fn suite_name(&self) -> Option<&str> {
        self.suite_name.as_deref()
    }

    /// The name used in notes and log lines: `method(suite)`, or just `method`.
    pub fn display_name(&self) -> String {
        match &self.suite_name {
            Some(suite_name) => format!("{}({})", self.method_name, suite_name),
            None => self.method_name.clone(),
        }
    }

    /// The TestLink marker, if any.
    pub fn test_link(&self) -> Option<&TestLink> {
        self.test_link.as_ref()
    }

    /// Returns true if this test carries a marker, whether or not it is valid.
    pub fn has_test_link(&self) -> bool {
        self.test_link.is_some()
    }

    /// The reason this test is ignored, if one was given.
    pub fn ignore_reason(&self) -> Option<&str> {
        self.ignore_reason.as_deref()
    }

    /// Resolves the TestLink ID of this test.
    ///
    /// Returns an error naming the test if the marker is missing or carries no ID.
    pub fn test_link_id(&self) -> Result<TestCaseId, InvalidTestLinkError> {
        self.test_link
            .as_ref()
            .and_then(TestLink::id)
            .ok_or_else(|| InvalidTestLinkError::new(self.display_name()))
    }
}

/// A failed test or a failed assumption.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestFailure {
    description: TestDescription,
    message: Option<String>,
    trace: String,
}

impl TestFailure {
    /// Creates a failure for the given test, with the given stack trace or output.
    pub fn new(description: TestDescription, trace: impl Into<String>) -> Self {
        Self {
            description,
            message: None,
            trace: trace.into(),
        }
    }

    /// Sets the failure message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// The test that failed.
    pub fn description(&self) -> &TestDescription {
        &self.description
    }

    /// The failure message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The stack trace or output.
    pub fn trace(&self) -> &str {
        &self.trace
    }

    /// The message if there is one, otherwise the trace.
    pub fn message_or_trace(&self) -> &str {
        self.message.as_deref().unwrap_or(&self.trace)
    }
}
