// Copyright (c) The testlink-junit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

#![warn(missing_docs)]

//! Reports the results of marked tests to [TestLink](https://testlink.org).
//!
//! A host test runner drives a listener through the lifecycle of each test. Tests carrying a
//! [`TestLink`](description::TestLink) marker are reported. Everything else is ignored.
//!
//! * [`XmlRunListener`](reporter::XmlRunListener) builds a results document that TestLink can
//!   import.
//! * [`LoggingRunListener`](reporter::LoggingRunListener) writes one line per transition,
//!   optionally with a link to the test case in TestLink.
//!
//! ```
//! use testlink_reporter::{
//!     description::{TestDescription, TestFailure, TestLink},
//!     reporter::XmlRunListener,
//! };
//!
//! let listener = XmlRunListener::new("donald");
//! let description = TestDescription::new("testFailed")
//!     .with_suite("Sut")
//!     .with_test_link(TestLink::external("PROJECT-2"));
//!
//! listener.test_started(&description)?;
//! listener.test_failure(&TestFailure::new(description.clone(), "").with_message("Failed"))?;
//! listener.test_finished(&description)?;
//!
//! let mut xml = Vec::new();
//! listener.write_results(&mut xml)?;
//! let xml = String::from_utf8(xml)?;
//! assert!(xml.contains("<result>f</result>"));
//! assert!(xml.contains("<notes>'testFailed(Sut)' FAILED because 'Failed'.</notes>"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod description;
pub mod errors;
pub mod link;
pub mod output;
pub mod reporter;
#[cfg(test)]
mod test_helpers;
