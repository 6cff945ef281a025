// Copyright (c) The testlink-junit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::strategy::{InertStrategy, ReportStrategy};
use crate::{
    description::{TestDescription, TestFailure},
    errors::InvalidTestLinkError,
};

static INERT: InertStrategy = InertStrategy;

/// Receives lifecycle callbacks from the host test runner.
///
/// Callbacks for tests carrying a [`TestLink`](crate::description::TestLink) marker are routed
/// to the active strategy `S`. All other tests are ignored. The choice is made afresh on every
/// callback.
#[derive(Debug)]
pub struct TestLinkListener<S> {
    strategy: S,
}

impl<S: ReportStrategy> TestLinkListener<S> {
    /// Creates a listener routing marked tests to `strategy`.
    pub fn with_strategy(strategy: S) -> Self {
        Self { strategy }
    }

    /// The active strategy.
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Consumes the listener, returning the active strategy.
    pub fn into_strategy(self) -> S {
        self.strategy
    }

    fn select(&self, description: &TestDescription) -> &dyn ReportStrategy {
        if description.has_test_link() {
            &self.strategy
        } else {
            &INERT
        }
    }

    /// Called when a test is about to run.
    pub fn test_started(&self, description: &TestDescription) -> Result<(), InvalidTestLinkError> {
        self.select(description).on_new_test_case(description)
    }

    /// Called when a test is skipped. No [`Self::test_started`] precedes this.
    pub fn test_ignored(&self, description: &TestDescription) -> Result<(), InvalidTestLinkError> {
        self.select(description).on_ignored(description)
    }

    /// Called when a test fails.
    pub fn test_failure(&self, failure: &TestFailure) -> Result<(), InvalidTestLinkError> {
        self.select(failure.description()).on_failed(failure)
    }

    /// Called when one of a test's assumptions does not hold.
    pub fn test_assumption_failure(
        &self,
        failure: &TestFailure,
    ) -> Result<(), InvalidTestLinkError> {
        self.select(failure.description())
            .on_assumption_failed(failure)
    }

    /// Called when a test is done, whatever its outcome.
    pub fn test_finished(&self, description: &TestDescription) -> Result<(), InvalidTestLinkError> {
        self.select(description).on_finished(description)
    }
}
