// Copyright (c) The testlink-junit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

#![warn(missing_docs)]

//! Data model and serializer for [TestLink](https://testlink.org) result XML.
//!
//! The format is the one TestLink's "import results" feature reads: a `<results>` root holding one
//! `<testcase>` per executed test, each identified by either an `external_id` or an internal `id`.
//!
//! ```
//! use testlink_xml::{ExecutionStatus, Results, TestCase, TestCaseId};
//!
//! let mut results = Results::new();
//! let mut testcase = TestCase::new(
//!     TestCaseId::External("PROJECT-1".to_owned()),
//!     "donald",
//!     "2012-01-02 03:04:05",
//! );
//! testcase.set_result(ExecutionStatus::Passed, "'testExternalId' PASSED.");
//! results.add_test_case(testcase);
//!
//! let xml = results.to_string().expect("serializing results succeeds");
//! assert!(xml.contains(r#"<testcase external_id="PROJECT-1">"#));
//! ```

mod errors;
mod report;
mod serialize;

pub use errors::*;
pub use report::*;
