// Copyright (c) The testlink-junit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{SerializeError, serialize::serialize_results};
use std::{borrow::Cow, fmt, io};

/// The root element of a TestLink results document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Results {
    /// The test cases in this document, in the order they were added.
    pub testcases: Vec<TestCase>,
}

impl Results {
    /// Creates a new, empty `Results`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a test case to the end of this document.
    pub fn add_test_case(&mut self, testcase: TestCase) -> &mut Self {
        self.testcases.push(testcase);
        self
    }

    /// Adds several test cases to the end of this document.
    pub fn add_test_cases(&mut self, testcases: impl IntoIterator<Item = TestCase>) -> &mut Self {
        self.testcases.extend(testcases);
        self
    }

    /// Returns the number of test cases carrying the given status.
    pub fn count_status(&self, status: ExecutionStatus) -> usize {
        self.testcases
            .iter()
            .filter(|testcase| testcase.result == Some(status))
            .count()
    }

    /// Serialize these results to the given writer.
    pub fn serialize(&self, writer: impl io::Write) -> Result<(), SerializeError> {
        Ok(serialize_results(self, writer)?)
    }

    /// Serialize these results to a string.
    pub fn to_string(&self) -> Result<String, SerializeError> {
        let mut buf: Vec<u8> = vec![];
        self.serialize(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }
}

/// Identifies a test case within TestLink.
///
/// Serialized as the single attribute of a `<testcase>` element.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TestCaseId {
    /// The external ID, usually `<project prefix>-<number>`. Serialized as `external_id`.
    External(String),

    /// TestLink's internal database ID. Serialized as `id`.
    Internal(u64),
}

impl TestCaseId {
    /// The name of the attribute this ID is serialized as.
    pub fn attribute_name(&self) -> &'static str {
        match self {
            TestCaseId::External(_) => "external_id",
            TestCaseId::Internal(_) => "id",
        }
    }

    /// The attribute value.
    pub fn value(&self) -> Cow<'_, str> {
        match self {
            TestCaseId::External(id) => Cow::Borrowed(id),
            TestCaseId::Internal(id) => Cow::Owned(id.to_string()),
        }
    }
}

impl fmt::Display for TestCaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}='{}'", self.attribute_name(), self.value())
    }
}

/// The execution status TestLink understands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ExecutionStatus {
    /// The test passed.
    Passed,

    /// The test could not be executed: it was ignored, or one of its assumptions failed.
    Blocked,

    /// The test failed.
    Failed,
}

impl ExecutionStatus {
    /// The one-letter token written into `<result>`.
    pub fn token(self) -> &'static str {
        match self {
            ExecutionStatus::Passed => "p",
            ExecutionStatus::Blocked => "b",
            ExecutionStatus::Failed => "f",
        }
    }
}

/// A single `<testcase>` element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
    /// The TestLink ID of this test case.
    pub id: TestCaseId,

    /// The name of the person or account that executed the test.
    pub tester: String,

    /// When the test started, already formatted as `yyyy-MM-dd HH:mm:ss`.
    pub timestamp: String,

    /// The execution status, if the test has finished.
    pub result: Option<ExecutionStatus>,

    /// Human-readable notes explaining the result.
    pub notes: Option<String>,
}

impl TestCase {
    /// Creates a new, unfinished test case.
    pub fn new(id: TestCaseId, tester: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            id,
            tester: tester.into(),
            timestamp: timestamp.into(),
            result: None,
            notes: None,
        }
    }

    /// Sets the result along with the notes explaining it.
    pub fn set_result(&mut self, status: ExecutionStatus, notes: impl Into<String>) -> &mut Self {
        self.result = Some(status);
        self.notes = Some(notes.into());
        self
    }

    /// Returns true if every element TestLink requires is present and non-empty.
    pub fn is_complete(&self) -> bool {
        !self.tester.is_empty()
            && !self.timestamp.is_empty()
            && self.result.is_some()
            && self.notes.as_deref().is_some_and(|notes| !notes.is_empty())
    }
}
