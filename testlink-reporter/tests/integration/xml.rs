// Copyright (c) The testlink-junit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::fixtures::{MARKED_TESTS, run_suite};
use camino_tempfile::Utf8TempDir;
use indoc::indoc;
use pretty_assertions::assert_eq;
use testlink_reporter::{
    config::ReporterConfig,
    description::{TestDescription, TestLink},
    reporter::XmlRunListener,
};
use testlink_xml::{ExecutionStatus, Results};

static SUT_RESULTS: &str = indoc! {r#"
    <?xml version="1.0" encoding="UTF-8"?>
    <results>
      <testcase external_id="T1">
        <tester>donald</tester>
        <timestamp>1970-01-01 00:00:00</timestamp>
        <result>p</result>
        <notes>'testSuccessExternal(Sut)' PASSED.</notes>
      </testcase>
      <testcase id="4">
        <tester>donald</tester>
        <timestamp>1970-01-01 00:00:00</timestamp>
        <result>p</result>
        <notes>'testSuccessInternal(Sut)' PASSED.</notes>
      </testcase>
      <testcase external_id="T2">
        <tester>donald</tester>
        <timestamp>1970-01-01 00:00:00</timestamp>
        <result>f</result>
        <notes>'testFailed(Sut)' FAILED because 'Failed'.</notes>
      </testcase>
      <testcase external_id="T2_WITHOUT_MESSAGE">
        <tester>donald</tester>
        <timestamp>1970-01-01 00:00:00</timestamp>
        <result>f</result>
        <notes>'testFailedWithOutMessage(Sut)' FAILED because 'thread 'testFailedWithOutMessage' panicked at tests/sut.rs:1:1'.</notes>
      </testcase>
      <testcase id="5">
        <tester>donald</tester>
        <timestamp>1970-01-01 00:00:00</timestamp>
        <result>p</result>
        <notes>'testSuccessInternal2(Sut)' PASSED.</notes>
      </testcase>
      <testcase external_id="T3">
        <tester>donald</tester>
        <timestamp>1970-01-01 00:00:00</timestamp>
        <result>b</result>
        <notes>'testIgnore(Sut)' BLOCKED because 'Does not run.'.</notes>
      </testcase>
      <testcase external_id="ASSUMPTION_FAILED">
        <tester>donald</tester>
        <timestamp>1970-01-01 00:00:00</timestamp>
        <result>b</result>
        <notes>'testFailingAssumption(Sut)' BLOCKED because 'got: &lt;0&gt;, expected: is &lt;1&gt;'.</notes>
      </testcase>
    </results>
"#};

/// Pins every timestamp so documents can be compared verbatim.
fn pin_timestamps(mut results: Results) -> Results {
    for testcase in &mut results.testcases {
        assert_eq!(
            testcase.timestamp.len(),
            "yyyy-MM-dd HH:mm:ss".len(),
            "timestamp {:?} has the expected shape",
            testcase.timestamp
        );
        testcase.timestamp = "1970-01-01 00:00:00".to_owned();
    }
    results
}

#[test]
fn sut_document() {
    let listener = XmlRunListener::new("donald");
    run_suite(&listener).expect("fixture markers are valid");

    let results = listener.results();
    assert_eq!(results.testcases.len(), MARKED_TESTS);
    assert!(
        results.testcases.iter().all(|testcase| testcase.is_complete()),
        "every record is complete after the run"
    );

    let xml = pin_timestamps(results)
        .to_string()
        .expect("serializing results succeeds");
    assert_eq!(xml, SUT_RESULTS);
}

#[test]
fn in_progress_record() {
    let listener = XmlRunListener::new("donald");
    let description = TestDescription::new("testSuccessExternal")
        .with_suite("Sut")
        .with_test_link(TestLink::external("T1"));
    listener
        .test_started(&description)
        .expect("marker is valid");

    let results = listener.results();
    assert_eq!(results.testcases.len(), 1);
    let testcase = &results.testcases[0];
    assert_eq!(testcase.tester, "donald");
    assert_eq!(testcase.result, None);
    assert_eq!(testcase.notes, None);
}

#[test]
fn invalid_marker() {
    let listener = XmlRunListener::new("donald");
    run_suite(&listener).expect("fixture markers are valid");

    let invalid = TestDescription::new("testNeitherId")
        .with_suite("Sut")
        .with_test_link(TestLink::default());
    let error = listener
        .test_started(&invalid)
        .expect_err("marker without IDs is rejected");
    assert_eq!(
        error.to_string(),
        "must set either internal_id or external_id on 'testNeitherId(Sut)'"
    );
    let error = listener
        .test_ignored(&invalid)
        .expect_err("ignored tests are resolved too");
    assert_eq!(error.display_name(), "testNeitherId(Sut)");

    let results = listener.results();
    assert_eq!(results.testcases.len(), MARKED_TESTS, "no record was added");
    assert_eq!(results.count_status(ExecutionStatus::Passed), 3);
    assert_eq!(results.count_status(ExecutionStatus::Failed), 2);
    assert_eq!(results.count_status(ExecutionStatus::Blocked), 2);
}

#[test]
fn write_results_to_path() {
    let listener = XmlRunListener::new("donald");
    run_suite(&listener).expect("fixture markers are valid");

    let temp_dir = Utf8TempDir::new().expect("created temp dir");
    let path = temp_dir.path().join("nested/target/testlink.xml");
    listener
        .write_results_to_path(&path)
        .expect("parent directories are created");

    let written = std::fs::read_to_string(&path).expect("results file exists");
    let expected = listener
        .results()
        .to_string()
        .expect("serializing results succeeds");
    assert_eq!(written, expected);
}

#[test]
fn test_run_finished_writes_configured_path() {
    let temp_dir = Utf8TempDir::new().expect("created temp dir");
    let config = ReporterConfig {
        tester: "daisy".to_owned(),
        results_path: temp_dir.path().join("testlink.xml"),
        ..ReporterConfig::default()
    };

    let listener = XmlRunListener::from_config(&config);
    run_suite(&listener).expect("fixture markers are valid");
    listener.test_run_finished().expect("results written");

    let written =
        std::fs::read_to_string(&config.results_path).expect("results file exists");
    assert_eq!(written.matches("<tester>daisy</tester>").count(), MARKED_TESTS);
}

#[test]
fn test_run_finished_without_destination() {
    let listener = XmlRunListener::new("donald");
    run_suite(&listener).expect("fixture markers are valid");
    listener
        .test_run_finished()
        .expect("nothing to write is not an error");
}
