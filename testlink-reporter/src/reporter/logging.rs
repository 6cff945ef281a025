// Copyright (c) The testlink-junit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reporting marked tests as log lines.

use super::{
    context::ThreadScoped,
    listener::TestLinkListener,
    strategy::{CaseState, ReportStrategy, TestOutcome},
};
use crate::{
    config::ReporterConfig,
    description::{TestDescription, TestFailure},
    errors::{InvalidBaseUrlError, InvalidTestLinkError},
    link::LinkResolver,
    output::{LogSink, TracingSink},
};
use debug_ignore::DebugIgnore;
use tracing::{Level, debug};

/// Writes one line per test case transition to a [`LogSink`].
///
/// With a [`LinkResolver`], the start of each test case is followed by a link to its page in
/// TestLink.
#[derive(Debug)]
pub struct LogStrategy {
    sink: DebugIgnore<Box<dyn LogSink>>,
    links: Option<LinkResolver>,
    state: ThreadScoped<CaseState>,
}

impl LogStrategy {
    /// Creates a strategy writing to `sink`.
    pub fn new(sink: impl LogSink + 'static, links: Option<LinkResolver>) -> Self {
        Self {
            sink: DebugIgnore(Box::new(sink)),
            links,
            state: ThreadScoped::new(),
        }
    }

    /// The link resolver, if links are enabled.
    pub fn links(&self) -> Option<&LinkResolver> {
        self.links.as_ref()
    }

    fn finish(
        &self,
        description: &TestDescription,
        outcome: TestOutcome,
        reason: &str,
    ) -> Result<(), InvalidTestLinkError> {
        if !self.state.with(|state| state.finish(outcome)) {
            debug!(%outcome, "no running test case on this thread, ignoring");
            return Ok(());
        }

        let id = description.test_link_id()?;
        let subject = format!("END Testcase '{id}' '{}'", description.display_name());
        let line = outcome.describe(&subject, reason);
        let level = match outcome {
            TestOutcome::Passed => Level::INFO,
            TestOutcome::Blocked => Level::WARN,
            TestOutcome::Failed => Level::ERROR,
        };
        self.sink.log(level, format_args!("{line}"));
        Ok(())
    }
}

impl ReportStrategy for LogStrategy {
    fn on_new_test_case(&self, description: &TestDescription) -> Result<(), InvalidTestLinkError> {
        self.state.replace(CaseState::NotStarted);

        let id = description.test_link_id()?;
        self.sink.info(format_args!(
            "START Testcase '{id}' '{}'.",
            description.display_name()
        ));
        if let Some(links) = &self.links {
            self.sink
                .info(format_args!("START Testcase '{id}' '{}'.", links.resolve(&id)));
        }

        self.state.replace(CaseState::Started);
        Ok(())
    }

    fn on_ignored(&self, description: &TestDescription) -> Result<(), InvalidTestLinkError> {
        self.on_new_test_case(description)?;
        self.finish(
            description,
            TestOutcome::Blocked,
            description.ignore_reason().unwrap_or(""),
        )
    }

    fn on_assumption_failed(&self, failure: &TestFailure) -> Result<(), InvalidTestLinkError> {
        self.finish(
            failure.description(),
            TestOutcome::Blocked,
            failure.message_or_trace(),
        )
    }

    fn on_failed(&self, failure: &TestFailure) -> Result<(), InvalidTestLinkError> {
        self.finish(
            failure.description(),
            TestOutcome::Failed,
            failure.message_or_trace(),
        )
    }

    fn on_finished(&self, description: &TestDescription) -> Result<(), InvalidTestLinkError> {
        self.finish(description, TestOutcome::Passed, "")
    }
}

/// A listener that writes log lines.
pub type LoggingRunListener = TestLinkListener<LogStrategy>;

impl TestLinkListener<LogStrategy> {
    /// Creates a listener writing to `sink`, with deep links if `links` is set.
    pub fn new(sink: impl LogSink + 'static, links: Option<LinkResolver>) -> Self {
        Self::with_strategy(LogStrategy::new(sink, links))
    }

    /// Creates a listener emitting `tracing` events under the configured logger name.
    pub fn from_config(config: &ReporterConfig) -> Result<Self, InvalidBaseUrlError> {
        let links = config.link_resolver()?;
        Ok(Self::new(TracingSink::new(&config.logger_name), links))
    }
}
