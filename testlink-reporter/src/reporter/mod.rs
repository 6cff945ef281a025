// Copyright (c) The testlink-junit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Listeners and the strategies behind them.
//!
//! A [`TestLinkListener`] receives callbacks from the host test runner and hands those for
//! marked tests to its [`ReportStrategy`]:
//!
//! * [`XmlStrategy`] aggregates a TestLink results document ([`XmlRunListener`]).
//! * [`LogStrategy`] writes log lines ([`LoggingRunListener`]).

mod context;
mod listener;
mod logging;
mod strategy;
mod xml;

pub use listener::*;
pub use logging::*;
pub use strategy::*;
pub use xml::*;
