// Copyright (c) The testlink-junit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deep links into a TestLink instance.

use crate::errors::InvalidBaseUrlError;
use testlink_xml::TestCaseId;
use url::Url;

/// Resolves links to test case pages in a TestLink instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkResolver {
    base: Url,
}

impl LinkResolver {
    /// Creates a resolver for the TestLink instance at `base`, without `index.php`, e.g.
    /// `http://testlink.sourceforge.net/demo/`.
    ///
    /// A trailing slash is added when missing.
    pub fn new(base: &str) -> Result<Self, InvalidBaseUrlError> {
        let mut url = Url::parse(base).map_err(|error| InvalidBaseUrlError::Parse {
            input: base.to_owned(),
            error,
        })?;
        if url.cannot_be_a_base() {
            return Err(InvalidBaseUrlError::CannotBeABase {
                input: base.to_owned(),
            });
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(Self { base: url })
    }

    /// The normalized base address.
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Returns the link for the given test case.
    ///
    /// * Internal IDs link to the print view of the latest version, e.g.
    ///   `<base>lib/testcases/tcPrint.php?testcase_id=2750`.
    /// * External IDs link to the read-only archive view, e.g.
    ///   `<base>lib/testcases/archiveData.php?targetTestCase=SM-1&edit=testcase&allowedit=0`.
    ///
    /// IDs are inserted as-is except for characters a URL query cannot carry literally, which
    /// are percent-encoded: `SM 1#x` becomes `SM%201%23x`.
    pub fn resolve(&self, id: &TestCaseId) -> Url {
        let (page, query) = match id {
            TestCaseId::Internal(id) => ("tcPrint.php", format!("testcase_id={id}")),
            TestCaseId::External(id) => (
                "archiveData.php",
                format!("targetTestCase={id}&edit=testcase&allowedit=0"),
            ),
        };

        let mut url = self.base.clone();
        // Cannot fail: the constructor rejects bases that cannot carry paths.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["lib", "testcases", page]);
        }
        url.set_query(Some(&query));
        url.set_fragment(None);
        url
    }
}
