// Copyright (c) The testlink-junit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Aggregation of marked tests into a TestLink results document.

use super::{
    context::ThreadScoped,
    listener::TestLinkListener,
    strategy::{CaseState, ReportStrategy, TestOutcome},
};
use crate::{
    config::ReporterConfig,
    description::{TestDescription, TestFailure},
    errors::{InvalidTestLinkError, WriteResultsError},
};
use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, Local, TimeZone};
use parking_lot::Mutex;
use std::{
    fmt,
    fs::File,
    io::{self, BufWriter, Write},
    sync::{Arc, OnceLock},
};
use testlink_xml::{Results, TestCase, TestCaseId};
use tracing::debug;

/// Formats a start time the way TestLink expects: `yyyy-MM-dd HH:mm:ss`.
pub fn format_timestamp<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    time.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[derive(Debug)]
struct Verdict {
    outcome: TestOutcome,
    notes: String,
}

/// A record in the document. Everything except the verdict is fixed at creation.
#[derive(Debug)]
struct PendingTestCase {
    id: TestCaseId,
    tester: String,
    timestamp: String,
    verdict: OnceLock<Verdict>,
}

impl PendingTestCase {
    fn to_test_case(&self) -> TestCase {
        let mut testcase = TestCase::new(self.id.clone(), &self.tester, &self.timestamp);
        if let Some(verdict) = self.verdict.get() {
            testcase.set_result(verdict.outcome.execution_status(), &verdict.notes);
        }
        testcase
    }
}

#[derive(Debug, Default)]
struct CurrentCase {
    state: CaseState,
    record: Option<Arc<PendingTestCase>>,
}

/// Builds a TestLink results document out of lifecycle events.
///
/// Each marked test gets one record, appended in start order. Records are completed in place
/// by their own thread once an outcome is known.
#[derive(Debug)]
pub struct XmlStrategy {
    tester: String,
    destination: Option<Utf8PathBuf>,
    records: Mutex<Vec<Arc<PendingTestCase>>>,
    current: ThreadScoped<CurrentCase>,
}

impl XmlStrategy {
    /// Creates a strategy recording `tester` as the executor of every test.
    pub fn new(tester: impl Into<String>) -> Self {
        Self {
            tester: tester.into(),
            destination: None,
            records: Mutex::new(Vec::new()),
            current: ThreadScoped::new(),
        }
    }

    /// Sets the file results are written to at the end of the run.
    pub fn with_destination(mut self, destination: impl Into<Utf8PathBuf>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    /// The tester recorded in every test case.
    pub fn tester(&self) -> &str {
        &self.tester
    }

    /// The file results are written to at the end of the run, if any.
    pub fn destination(&self) -> Option<&Utf8Path> {
        self.destination.as_deref()
    }

    /// A snapshot of the document. Tests still running have no result or notes.
    pub fn results(&self) -> Results {
        let records = self.records.lock();
        let mut results = Results::new();
        results.add_test_cases(records.iter().map(|record| record.to_test_case()));
        results
    }

    fn finish_current(&self, outcome: TestOutcome, notes: impl FnOnce() -> String) {
        let record = self.current.with(|current| {
            if current.state.finish(outcome) {
                current.record.clone()
            } else {
                None
            }
        });

        match record {
            Some(record) => {
                let verdict = Verdict {
                    outcome,
                    notes: notes(),
                };
                if record.verdict.set(verdict).is_err() {
                    debug!(id = %record.id, %outcome, "test case already has a verdict");
                }
            }
            None => debug!(%outcome, "no running test case on this thread, ignoring"),
        }
    }
}

impl ReportStrategy for XmlStrategy {
    fn on_new_test_case(&self, description: &TestDescription) -> Result<(), InvalidTestLinkError> {
        // Forget the previous test on this thread before anything can fail.
        self.current.replace(CurrentCase::default());

        let id = description.test_link_id()?;
        let record = Arc::new(PendingTestCase {
            id,
            tester: self.tester.clone(),
            timestamp: format_timestamp(&Local::now()),
            verdict: OnceLock::new(),
        });
        self.records.lock().push(Arc::clone(&record));
        debug!(id = %record.id, "added test case");

        self.current.replace(CurrentCase {
            state: CaseState::Started,
            record: Some(record),
        });
        Ok(())
    }

    fn on_ignored(&self, description: &TestDescription) -> Result<(), InvalidTestLinkError> {
        self.on_new_test_case(description)?;
        self.finish_current(TestOutcome::Blocked, || {
            let subject = format!("'{}'", description.display_name());
            TestOutcome::Blocked.describe(&subject, description.ignore_reason().unwrap_or(""))
        });
        Ok(())
    }

    fn on_assumption_failed(&self, failure: &TestFailure) -> Result<(), InvalidTestLinkError> {
        self.finish_current(TestOutcome::Blocked, || failure_notes(TestOutcome::Blocked, failure));
        Ok(())
    }

    fn on_failed(&self, failure: &TestFailure) -> Result<(), InvalidTestLinkError> {
        self.finish_current(TestOutcome::Failed, || failure_notes(TestOutcome::Failed, failure));
        Ok(())
    }

    fn on_finished(&self, description: &TestDescription) -> Result<(), InvalidTestLinkError> {
        self.finish_current(TestOutcome::Passed, || {
            TestOutcome::Passed.describe(&format!("'{}'", description.display_name()), "")
        });
        Ok(())
    }
}

fn failure_notes(outcome: TestOutcome, failure: &TestFailure) -> String {
    let subject = format!("'{}'", failure.description().display_name());
    outcome.describe(&subject, failure.message_or_trace())
}

/// A listener that writes TestLink XML.
pub type XmlRunListener = TestLinkListener<XmlStrategy>;

impl TestLinkListener<XmlStrategy> {
    /// Creates a listener recording `tester` as the executor of every test.
    pub fn new(tester: impl Into<String>) -> Self {
        Self::with_strategy(XmlStrategy::new(tester))
    }

    /// Creates a listener that writes to the configured results path at the end of the run.
    pub fn from_config(config: &ReporterConfig) -> Self {
        Self::with_strategy(
            XmlStrategy::new(&config.tester).with_destination(config.results_path.clone()),
        )
    }

    /// A snapshot of the document.
    pub fn results(&self) -> Results {
        self.strategy().results()
    }

    /// Writes the document to `writer`.
    pub fn write_results(&self, writer: impl Write) -> Result<(), WriteResultsError> {
        self.results()
            .serialize(writer)
            .map_err(WriteResultsError::Writer)
    }

    /// Writes the document to `path`, creating parent directories as needed.
    pub fn write_results_to_path(&self, path: &Utf8Path) -> Result<(), WriteResultsError> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|error| WriteResultsError::Fs {
                file: parent.to_owned(),
                error,
            })?;
        }

        let fs_error = |error: io::Error| WriteResultsError::Fs {
            file: path.to_owned(),
            error,
        };
        let file = File::create(path).map_err(fs_error)?;
        let mut writer = BufWriter::new(file);
        self.results()
            .serialize(&mut writer)
            .map_err(|error| WriteResultsError::File {
                file: path.to_owned(),
                error,
            })?;
        writer.flush().map_err(fs_error)?;

        debug!(%path, "wrote TestLink results");
        Ok(())
    }

    /// Writes the document to the destination set through [`Self::from_config`].
    ///
    /// Does nothing if no destination was set.
    pub fn test_run_finished(&self) -> Result<(), WriteResultsError> {
        match self.strategy().destination() {
            Some(destination) => self.write_results_to_path(destination),
            None => {
                debug!("no results destination configured, not writing");
                Ok(())
            }
        }
    }
}
