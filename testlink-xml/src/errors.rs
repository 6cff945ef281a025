// Copyright (c) The testlink-junit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// An error that occurs while serializing [`Results`](crate::Results).
///
/// Returned by [`Results::serialize`](crate::Results::serialize) and
/// [`Results::to_string`](crate::Results::to_string).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SerializeError {
    /// The XML writer failed, usually because the underlying writer did.
    #[error("error serializing TestLink results")]
    Xml(#[from] quick_xml::Error),

    /// The serialized document was not valid UTF-8.
    #[error("serialized TestLink results are not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}
