// Copyright (c) The testlink-junit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Serialize `Results`.

use crate::{Results, TestCase};
use quick_xml::{
    Writer,
    escape::partial_escape,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};
use std::{borrow::Cow, io};

static RESULTS_TAG: &str = "results";
static TESTCASE_TAG: &str = "testcase";
static TESTER_TAG: &str = "tester";
static TIMESTAMP_TAG: &str = "timestamp";
static RESULT_TAG: &str = "result";
static NOTES_TAG: &str = "notes";

pub(crate) fn serialize_results(
    results: &Results,
    writer: impl io::Write,
) -> quick_xml::Result<()> {
    let mut writer = Writer::new_with_indent(writer, b' ', 2);

    let decl = BytesDecl::new("1.0", Some("UTF-8"), None);
    writer.write_event(Event::Decl(decl))?;

    serialize_start_tag(RESULTS_TAG, &mut writer)?;
    for testcase in &results.testcases {
        serialize_testcase(testcase, &mut writer)?;
    }
    serialize_end_tag(RESULTS_TAG, &mut writer)?;

    // Add a trailing newline.
    writer.write_indent()
}

fn serialize_testcase(
    testcase: &TestCase,
    writer: &mut Writer<impl io::Write>,
) -> quick_xml::Result<()> {
    // Use the destructuring syntax to ensure that all fields are handled.
    let TestCase {
        id,
        tester,
        timestamp,
        result,
        notes,
    } = testcase;

    let mut testcase_tag = BytesStart::new(TESTCASE_TAG);
    let id_value = id.value();
    testcase_tag.push_attribute((id.attribute_name(), sanitize(&id_value).as_ref()));
    writer.write_event(Event::Start(testcase_tag))?;

    // TestLink expects the children in exactly this order.
    serialize_text_element(TESTER_TAG, tester, writer)?;
    serialize_text_element(TIMESTAMP_TAG, timestamp, writer)?;
    if let Some(result) = result {
        serialize_text_element(RESULT_TAG, result.token(), writer)?;
    }
    if let Some(notes) = notes {
        serialize_text_element(NOTES_TAG, notes, writer)?;
    }

    serialize_end_tag(TESTCASE_TAG, writer)
}

fn serialize_text_element(
    tag_name: &'static str,
    text: &str,
    writer: &mut Writer<impl io::Write>,
) -> quick_xml::Result<()> {
    serialize_start_tag(tag_name, writer)?;
    // Quotes are legal in text content, and notes are full of them.
    let text = sanitize(text);
    writer.write_event(Event::Text(BytesText::from_escaped(partial_escape(&text))))?;
    serialize_end_tag(tag_name, writer)
}

fn serialize_start_tag(
    tag_name: &'static str,
    writer: &mut Writer<impl io::Write>,
) -> quick_xml::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag_name)))
}

fn serialize_end_tag(
    tag_name: &'static str,
    writer: &mut Writer<impl io::Write>,
) -> quick_xml::Result<()> {
    writer.write_event(Event::End(BytesEnd::new(tag_name)))
}

/// Removes ANSI escape sequences, then any character XML 1.0 does not allow.
pub(crate) fn sanitize(text: &str) -> Cow<'_, str> {
    if !text.chars().any(is_illegal_xml_char) {
        return Cow::Borrowed(text);
    }
    let stripped = strip_ansi_escapes::strip_str(text);
    Cow::Owned(stripped.replace(is_illegal_xml_char, ""))
}

fn is_illegal_xml_char(c: char) -> bool {
    matches!(
        c,
        '\x00'..='\x08' | '\x0b' | '\x0c' | '\x0e'..='\x1f' | '\u{fffe}' | '\u{ffff}'
    )
}
